//! Filter criteria snapshot and evaluation context.

use super::{CanonicalLabels, LabelCatalog};
use crate::task::domain::{
    DateField, DifficultyLevel, MilestoneId, TagId, TaskLabel, TaskPriority, TaskStatus, UserId,
};
use chrono::{DateTime, Utc};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::SerializeMap,
};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Per-bucket inclusion flags for one enumerated task field.
///
/// A bucket is either a value of the enumeration or `None` for "unset".
/// Buckets without an entry are included, so the empty map filters nothing.
/// Serialised as a JSON object keyed by wire label, with `""` for unset.
#[derive(Clone, PartialEq, Eq)]
pub struct InclusionMap<T: TaskLabel> {
    entries: BTreeMap<Option<T>, bool>,
}

impl<T: TaskLabel> InclusionMap<T> {
    /// Creates a map that includes every bucket.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets the inclusion flag for a bucket.
    #[must_use]
    pub fn with(mut self, bucket: Option<T>, included: bool) -> Self {
        self.set(bucket, included);
        self
    }

    /// Sets the inclusion flag for a bucket in place.
    pub fn set(&mut self, bucket: Option<T>, included: bool) {
        self.entries.insert(bucket, included);
    }

    /// Returns `true` when tasks in the bucket pass the filter.
    #[must_use]
    pub fn includes(&self, bucket: Option<T>) -> bool {
        self.entries.get(&bucket).copied().unwrap_or(true)
    }

    /// Returns `true` when at least one bucket is excluded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.entries.values().any(|included| !included)
    }

    /// Iterates over the excluded buckets.
    pub fn excluded(&self) -> impl Iterator<Item = Option<T>> + '_ {
        self.entries
            .iter()
            .filter(|(_, included)| !**included)
            .map(|(bucket, _)| *bucket)
    }
}

impl<T: TaskLabel> Default for InclusionMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaskLabel> fmt::Debug for InclusionMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(bucket, included)| (bucket_label(*bucket), included)),
            )
            .finish()
    }
}

fn bucket_label<T: TaskLabel>(bucket: Option<T>) -> &'static str {
    bucket.map_or("", T::as_str)
}

impl<T: TaskLabel> Serialize for InclusionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (bucket, included) in &self.entries {
            map.serialize_entry(bucket_label(*bucket), included)?;
        }
        map.end()
    }
}

impl<'de, T: TaskLabel> Deserialize<'de> for InclusionMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        let mut entries = BTreeMap::new();
        for (label, included) in raw {
            let bucket = if label.trim().is_empty() {
                None
            } else {
                Some(T::parse(&label).map_err(D::Error::custom)?)
            };
            entries.insert(bucket, included);
        }
        Ok(Self { entries })
    }
}

/// Inclusive bounds applied to one schedule date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest accepted instant.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// Latest accepted instant.
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Creates a range with both bounds.
    #[must_use]
    pub const fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Returns `true` when either bound is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Returns `true` when the date lies within the bounds.
    ///
    /// An absent date never satisfies an active range.
    #[must_use]
    pub fn contains(&self, date: Option<DateTime<Utc>>) -> bool {
        let Some(value) = date else {
            return !self.is_active();
        };
        self.from.is_none_or(|from| value >= from) && self.to.is_none_or(|to| value <= to)
    }
}

/// Independent bounds for each of the four schedule dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateRangeFilter {
    /// Bounds on the estimated start date.
    pub estimated_start: DateRange,
    /// Bounds on the estimated end date.
    pub estimated_end: DateRange,
    /// Bounds on the actual start date.
    pub actual_start: DateRange,
    /// Bounds on the actual end date.
    pub actual_end: DateRange,
}

impl DateRangeFilter {
    /// Returns the range for one date field.
    #[must_use]
    pub const fn range(&self, field: DateField) -> &DateRange {
        match field {
            DateField::EstimatedStart => &self.estimated_start,
            DateField::EstimatedEnd => &self.estimated_end,
            DateField::ActualStart => &self.actual_start,
            DateField::ActualEnd => &self.actual_end,
        }
    }

    /// Sets the range for one date field.
    #[must_use]
    pub const fn with_range(mut self, field: DateField, range: DateRange) -> Self {
        match field {
            DateField::EstimatedStart => self.estimated_start = range,
            DateField::EstimatedEnd => self.estimated_end = range,
            DateField::ActualStart => self.actual_start = range,
            DateField::ActualEnd => self.actual_end = range,
        }
        self
    }

    /// Iterates over the fields whose range is active.
    pub fn active_bounds(&self) -> impl Iterator<Item = (DateField, &DateRange)> + '_ {
        DateField::ALL
            .into_iter()
            .map(move |field| (field, self.range(field)))
            .filter(|(_, range)| range.is_active())
    }

    /// Returns `true` when any bound is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_bounds().next().is_some()
    }
}

/// Snapshot of the filters a user has chosen for a task view.
///
/// The default value filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Status buckets to show.
    pub status: InclusionMap<TaskStatus>,
    /// Priority buckets to show.
    pub priority: InclusionMap<TaskPriority>,
    /// Difficulty buckets to show.
    pub difficulty: InclusionMap<DifficultyLevel>,
    /// Colour the task's colour tag must contain.
    pub color: Option<String>,
    /// Show only tasks assigned to the current user.
    pub mine_only: bool,
    /// Show only open tasks whose due date has passed.
    pub overdue_only: bool,
    /// Show only tasks linked to this milestone.
    pub milestone: Option<MilestoneId>,
    /// Show only tasks assigned to at least one of these users.
    pub team_members: BTreeSet<UserId>,
    /// Show only tasks carrying at least one of these tags.
    pub tags: BTreeSet<TagId>,
    /// Free-text search term.
    pub search: String,
    /// Schedule date bounds.
    pub dates: DateRangeFilter,
}

impl FilterCriteria {
    /// Returns the colour filter when one is selected.
    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.color
            .as_deref()
            .map(str::trim)
            .filter(|color| !color.is_empty())
    }

    /// Returns the trimmed search term when one is entered.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|term| !term.is_empty())
    }

    /// Returns `true` when at least one predicate would reject a task.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
            || self.priority.is_active()
            || self.difficulty.is_active()
            || self.selected_color().is_some()
            || self.mine_only
            || self.overdue_only
            || self.milestone.is_some()
            || !self.team_members.is_empty()
            || !self.tags.is_empty()
            || self.search_term().is_some()
            || self.dates.is_active()
    }
}

/// Facts about the viewer that filtering depends on.
#[derive(Clone, Copy)]
pub struct FilterContext<'a> {
    current_user: Option<UserId>,
    now: DateTime<Utc>,
    labels: &'a dyn LabelCatalog,
}

impl<'a> FilterContext<'a> {
    /// Creates a context for an anonymous viewer using canonical labels.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            current_user: None,
            now,
            labels: &CanonicalLabels,
        }
    }

    /// Sets the viewing user.
    #[must_use]
    pub const fn with_current_user(mut self, user: UserId) -> Self {
        self.current_user = Some(user);
        self
    }

    /// Sets the label catalogue used by free-text search.
    #[must_use]
    pub const fn with_labels(mut self, labels: &'a dyn LabelCatalog) -> Self {
        self.labels = labels;
        self
    }

    /// Returns the viewing user, if known.
    #[must_use]
    pub const fn current_user(&self) -> Option<UserId> {
        self.current_user
    }

    /// Returns the instant overdue checks compare against.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Returns the label catalogue.
    #[must_use]
    pub const fn labels(&self) -> &'a dyn LabelCatalog {
        self.labels
    }
}

impl fmt::Debug for FilterContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterContext")
            .field("current_user", &self.current_user)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}
