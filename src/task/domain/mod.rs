//! Domain model for project tasks.
//!
//! Task records mirror the remote project API: enumerated status, priority,
//! and difficulty values (each of which may be unset), milestone and tag
//! references, assignees, and the four schedule dates.

mod error;
mod ids;
mod labels;
mod milestone;
mod task;

pub use error::TaskDomainError;
pub use ids::{MilestoneId, ProjectId, TagId, TaskId, UserId};
pub use labels::{DifficultyLevel, TaskLabel, TaskPriority, TaskStatus};
pub use milestone::{Milestone, MilestoneRef, MilestoneState};
pub use task::{Assignee, Attachment, AuditStamp, DateField, TagRef, Task};

pub(crate) use labels::optional_label;
