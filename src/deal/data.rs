//! Commission request matching the calculator form fields

use crate::error::{CommissionError, Result};

/// Deal durations (years) offered by the form
pub const SELECTABLE_DURATIONS: [i64; 5] = [1, 2, 3, 4, 5];

/// Form defaults
pub const DEFAULT_DEAL_SIZE: f64 = 100_000.0;
pub const DEFAULT_DEAL_DURATION: i64 = 3;
pub const DEFAULT_YEARLY_TARGET: f64 = 1_000_000.0;
pub const DEFAULT_YEARLY_BONUS: f64 = 100_000.0;

/// Inputs for a single commission calculation
///
/// Money fields are in currency units, `deal_duration` in years.
/// The engine accepts any values; [`CommissionRequest::validate`] applies
/// the form rules for callers that take raw user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionRequest {
    pub deal_size: f64,
    pub deal_duration: i64,
    pub yearly_target: f64,
    pub yearly_bonus: f64,
}

impl CommissionRequest {
    pub fn new(deal_size: f64, deal_duration: i64, yearly_target: f64, yearly_bonus: f64) -> Self {
        Self {
            deal_size,
            deal_duration,
            yearly_target,
            yearly_bonus,
        }
    }

    /// Check the form rules: money values finite and non-negative,
    /// duration one of the selectable years, yearly target non-zero
    pub fn validate(&self) -> Result<()> {
        check_amount("deal_size", self.deal_size)?;
        check_amount("yearly_target", self.yearly_target)?;
        check_amount("yearly_bonus", self.yearly_bonus)?;

        if !SELECTABLE_DURATIONS.contains(&self.deal_duration) {
            return Err(CommissionError::invalid(
                "deal_duration",
                format!(
                    "{} years is not selectable (expected 1 to 5)",
                    self.deal_duration
                ),
            ));
        }

        if self.yearly_target == 0.0 {
            return Err(CommissionError::ZeroTarget);
        }

        Ok(())
    }
}

impl Default for CommissionRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_DEAL_SIZE,
            DEFAULT_DEAL_DURATION,
            DEFAULT_YEARLY_TARGET,
            DEFAULT_YEARLY_BONUS,
        )
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CommissionError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CommissionError::invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_form() {
        let request = CommissionRequest::default();
        assert_eq!(request.deal_size, 100_000.0);
        assert_eq!(request.deal_duration, 3);
        assert_eq!(request.yearly_target, 1_000_000.0);
        assert_eq!(request.yearly_bonus, 100_000.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_target() {
        let request = CommissionRequest::new(100_000.0, 4, 0.0, 100_000.0);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CommissionError::ZeroTarget));
        assert_eq!(err.to_string(), "Yearly target cannot be zero!");
    }

    #[test]
    fn test_validate_negative_amounts() {
        let request = CommissionRequest::new(-1.0, 3, 1_000_000.0, 100_000.0);
        match request.validate() {
            Err(CommissionError::InvalidInput { field, .. }) => assert_eq!(field, "deal_size"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        let request = CommissionRequest::new(1.0, 3, 1_000_000.0, -5.0);
        match request.validate() {
            Err(CommissionError::InvalidInput { field, .. }) => assert_eq!(field, "yearly_bonus"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_finite() {
        let request = CommissionRequest::new(1.0, 3, f64::NAN, 100_000.0);
        assert!(matches!(
            request.validate(),
            Err(CommissionError::InvalidInput { field: "yearly_target", .. })
        ));
    }

    #[test]
    fn test_validate_duration_outside_form() {
        for duration in [0, 6, -3] {
            let request = CommissionRequest::new(1.0, duration, 1_000_000.0, 100_000.0);
            assert!(matches!(
                request.validate(),
                Err(CommissionError::InvalidInput { field: "deal_duration", .. })
            ));
        }

        // 1 and 2 are selectable even though they pay nothing
        for duration in [1, 2] {
            let request = CommissionRequest::new(1.0, duration, 1_000_000.0, 100_000.0);
            assert!(request.validate().is_ok());
        }
    }
}
