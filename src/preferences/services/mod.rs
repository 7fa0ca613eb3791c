//! Application services for preference persistence.

mod preferences;

pub use preferences::PreferenceService;
