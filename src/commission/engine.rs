//! Core commission calculation
//!
//! commission = deal_size × (yearly_bonus / yearly_target) × duration_multiplier
//!
//! The calculation is pure: no state is kept between calls, and the
//! multiplier table is never mutated once the engine is built.

use log::debug;

use crate::assumptions::{DurationMultipliers, DEFAULT_DURATION_MULTIPLIERS};
use crate::deal::CommissionRequest;
use crate::error::{CommissionError, Result};
use super::result::CommissionResult;

/// Multiplier for a deal duration from the built-in table.
/// Any duration without an entry (including 1 and 2) returns 0.0.
pub fn lookup_duration_multiplier(duration: i64) -> f64 {
    DEFAULT_DURATION_MULTIPLIERS
        .iter()
        .find(|(d, _)| *d == duration)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(0.0)
}

/// Calculate commission with the built-in multiplier table.
///
/// Returns [`CommissionError::ZeroTarget`] instead of dividing by a zero
/// yearly target. No other input is checked.
pub fn calculate_commission(
    deal_size: f64,
    deal_duration: i64,
    yearly_target: f64,
    yearly_bonus: f64,
) -> Result<CommissionResult> {
    let request = CommissionRequest::new(deal_size, deal_duration, yearly_target, yearly_bonus);
    evaluate(&request, lookup_duration_multiplier)
}

/// Commission engine over a fixed multiplier table
#[derive(Debug, Clone, Default)]
pub struct CommissionEngine {
    multipliers: DurationMultipliers,
}

impl CommissionEngine {
    /// Engine using the built-in multiplier table
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using an alternate multiplier table
    pub fn with_multipliers(multipliers: DurationMultipliers) -> Self {
        Self { multipliers }
    }

    /// Multiplier for a deal duration, 0.0 when the table has no entry
    pub fn lookup_duration_multiplier(&self, duration: i64) -> f64 {
        self.multipliers.get(duration)
    }

    /// Run the calculation for one request
    pub fn calculate(&self, request: &CommissionRequest) -> Result<CommissionResult> {
        evaluate(request, |duration| self.multipliers.get(duration))
    }
}

fn evaluate<F>(request: &CommissionRequest, multiplier_for: F) -> Result<CommissionResult>
where
    F: Fn(i64) -> f64,
{
    if request.yearly_target == 0.0 {
        return Err(CommissionError::ZeroTarget);
    }

    let base_rate = request.yearly_bonus / request.yearly_target;
    let duration_multiplier = multiplier_for(request.deal_duration);
    let commission = request.deal_size * base_rate * duration_multiplier;

    debug!(
        "deal_size={} duration={} base_rate={} multiplier={} commission={}",
        request.deal_size, request.deal_duration, base_rate, duration_multiplier, commission
    );

    Ok(CommissionResult {
        base_rate,
        duration_multiplier,
        commission,
    })
}
