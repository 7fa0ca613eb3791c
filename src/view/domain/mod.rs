//! Domain types consumed and produced by the view pipeline.

mod criteria;
mod error;
mod groups;
mod labels;
mod quadrant;
mod sort;

pub use criteria::{DateRange, DateRangeFilter, FilterContext, FilterCriteria, InclusionMap};
pub use error::ParseSortKeyError;
pub use groups::{MilestoneGroup, MilestoneGroups, StatusColumn, StatusColumns};
pub use labels::{CanonicalLabels, LabelCatalog, TranslatedLabels};
pub use quadrant::{Quadrant, QuadrantBuckets};
pub use sort::{SortDirection, SortKey, SortSpec};
