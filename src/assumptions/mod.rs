//! Commission assumptions: the duration multiplier table and its loader

mod multiplier;
pub mod loader;

pub use multiplier::{DurationMultipliers, DEFAULT_DURATION_MULTIPLIERS};
pub use loader::{load_duration_multipliers, load_duration_multipliers_from_reader};

use std::path::Path;

impl DurationMultipliers {
    /// Load an alternate table from a CSV file
    pub fn from_csv_path(path: &Path) -> crate::Result<Self> {
        load_duration_multipliers(path)
    }
}
