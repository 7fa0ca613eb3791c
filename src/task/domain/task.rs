//! Task record and the value objects it embeds.

use super::{
    DifficultyLevel, MilestoneRef, ProjectId, TagId, TaskId, TaskPriority, TaskStatus, UserId,
    optional_label,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Person responsible for a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignee {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact e-mail address.
    #[serde(default)]
    pub email: String,
}

impl Assignee {
    /// Creates an assignee with a fresh user identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Tag reference embedded in a task record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagRef {
    /// Tag identifier.
    pub id: TagId,
    /// Tag display name.
    #[serde(default)]
    pub name: String,
}

/// Actor and instant of a create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    /// User who performed the change.
    pub actor: UserId,
    /// When the change happened.
    pub at: DateTime<Utc>,
}

/// File attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name.
    pub name: String,
    /// Download location.
    pub url: String,
}

/// The four schedule dates carried by a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    /// Planned start.
    EstimatedStart,
    /// Planned end.
    EstimatedEnd,
    /// Recorded start.
    ActualStart,
    /// Recorded end.
    ActualEnd,
}

impl DateField {
    /// All date fields in schedule order.
    pub const ALL: [Self; 4] = [
        Self::EstimatedStart,
        Self::EstimatedEnd,
        Self::ActualStart,
        Self::ActualEnd,
    ];
}

/// A unit of work within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default, with = "optional_label")]
    status: Option<TaskStatus>,
    #[serde(default, with = "optional_label")]
    priority: Option<TaskPriority>,
    #[serde(default, with = "optional_label")]
    difficulty_level: Option<DifficultyLevel>,
    #[serde(default)]
    color: String,
    #[serde(default)]
    milestone: Option<MilestoneRef>,
    #[serde(default)]
    tags: Vec<TagRef>,
    #[serde(default)]
    persons_in_charge: Vec<Assignee>,
    #[serde(default)]
    estimated_start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    estimated_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    actual_start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    actual_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    created: Option<AuditStamp>,
    #[serde(default)]
    updated: Option<AuditStamp>,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

impl Task {
    /// Creates a task with a fresh identifier and every optional field unset.
    #[must_use]
    pub fn new(project_id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            project_id,
            name: name.into(),
            description: String::new(),
            category: String::new(),
            status: None,
            priority: None,
            difficulty_level: None,
            color: String::new(),
            milestone: None,
            tags: Vec::new(),
            persons_in_charge: Vec::new(),
            estimated_start_date: None,
            estimated_end_date: None,
            actual_start_date: None,
            actual_end_date: None,
            created: None,
            updated: None,
            attachments: Vec::new(),
        }
    }

    /// Replaces the task identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Moves the task to another project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = project_id;
        self
    }

    /// Renames the task.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the difficulty level.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty_level = Some(difficulty);
        self
    }

    /// Sets the colour tag.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Links the task to a milestone.
    #[must_use]
    pub fn with_milestone(mut self, milestone: MilestoneRef) -> Self {
        self.milestone = Some(milestone);
        self
    }

    /// Sets the tag references.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = TagRef>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the persons in charge.
    #[must_use]
    pub fn with_persons_in_charge(mut self, people: impl IntoIterator<Item = Assignee>) -> Self {
        self.persons_in_charge = people.into_iter().collect();
        self
    }

    /// Sets one schedule date.
    #[must_use]
    pub fn with_date(mut self, field: DateField, value: DateTime<Utc>) -> Self {
        match field {
            DateField::EstimatedStart => self.estimated_start_date = Some(value),
            DateField::EstimatedEnd => self.estimated_end_date = Some(value),
            DateField::ActualStart => self.actual_start_date = Some(value),
            DateField::ActualEnd => self.actual_end_date = Some(value),
        }
        self
    }

    /// Records who created the task and when.
    #[must_use]
    pub const fn with_created(mut self, stamp: AuditStamp) -> Self {
        self.created = Some(stamp);
        self
    }

    /// Records who last updated the task and when.
    #[must_use]
    pub const fn with_updated(mut self, stamp: AuditStamp) -> Self {
        self.updated = Some(stamp);
        self
    }

    /// Sets the attachment list.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the workflow status, if set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the difficulty level, if set.
    #[must_use]
    pub const fn difficulty(&self) -> Option<DifficultyLevel> {
        self.difficulty_level
    }

    /// Returns the colour tag; empty when unset.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the milestone reference, if any.
    #[must_use]
    pub const fn milestone(&self) -> Option<&MilestoneRef> {
        self.milestone.as_ref()
    }

    /// Returns the milestone title, or the empty string.
    #[must_use]
    pub fn milestone_title(&self) -> &str {
        self.milestone.as_ref().map_or("", |milestone| &milestone.title)
    }

    /// Returns the tag references.
    #[must_use]
    pub fn tags(&self) -> &[TagRef] {
        &self.tags
    }

    /// Returns the persons in charge.
    #[must_use]
    pub fn persons_in_charge(&self) -> &[Assignee] {
        &self.persons_in_charge
    }

    /// Returns one schedule date, if present.
    #[must_use]
    pub const fn date(&self, field: DateField) -> Option<DateTime<Utc>> {
        match field {
            DateField::EstimatedStart => self.estimated_start_date,
            DateField::EstimatedEnd => self.estimated_end_date,
            DateField::ActualStart => self.actual_start_date,
            DateField::ActualEnd => self.actual_end_date,
        }
    }

    /// Returns the creation stamp, if known.
    #[must_use]
    pub const fn created(&self) -> Option<&AuditStamp> {
        self.created.as_ref()
    }

    /// Returns the latest update stamp, if known.
    #[must_use]
    pub const fn updated(&self) -> Option<&AuditStamp> {
        self.updated.as_ref()
    }

    /// Returns the attachments.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns `true` when the user is among the persons in charge.
    #[must_use]
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.persons_in_charge.iter().any(|person| person.id == user)
    }

    /// Returns the date used to decide whether the task is overdue.
    ///
    /// The estimated end wins; the actual end is used when no estimate
    /// exists.
    #[must_use]
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.estimated_end_date.or(self.actual_end_date)
    }
}
