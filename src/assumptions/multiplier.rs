//! Duration multiplier table

use std::collections::BTreeMap;
use log::warn;

/// Multiplier by deal duration in years. Durations not listed pay 0.0.
pub const DEFAULT_DURATION_MULTIPLIERS: [(i64, f64); 3] = [
    (3, 0.20), // 20% uplift
    (4, 0.30), // 30% uplift
    (5, 0.50), // 50% uplift
];

/// Immutable duration -> multiplier lookup with a zero default
#[derive(Debug, Clone, PartialEq)]
pub struct DurationMultipliers {
    multipliers: BTreeMap<i64, f64>,
}

impl DurationMultipliers {
    /// Build from (duration, multiplier) pairs. Later pairs win on duplicates;
    /// the CSV loader rejects duplicates before getting here.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        Self {
            multipliers: pairs.into_iter().collect(),
        }
    }

    /// Multiplier for a duration, 0.0 when the duration is not in the table
    pub fn get(&self, duration: i64) -> f64 {
        self.multipliers.get(&duration).copied().unwrap_or(0.0)
    }

    /// Whether the duration has an explicit entry
    pub fn contains(&self, duration: i64) -> bool {
        self.multipliers.contains_key(&duration)
    }

    /// Durations from `selectable` that fall through to the zero default
    pub fn unpaid_durations(&self, selectable: &[i64]) -> Vec<i64> {
        selectable
            .iter()
            .copied()
            .filter(|d| !self.contains(*d))
            .collect()
    }

    /// Log a warning for each selectable duration that would pay nothing
    pub fn warn_unpaid(&self, selectable: &[i64]) {
        for duration in self.unpaid_durations(selectable) {
            warn!(
                "Deal duration {} year(s) is selectable but has no multiplier; commission will be zero",
                duration
            );
        }
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl Default for DurationMultipliers {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_DURATION_MULTIPLIERS)
    }
}
