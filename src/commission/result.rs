//! Commission result and its calculation breakdown

use crate::deal::CommissionRequest;
use crate::display::{format_currency, format_percent, format_whole_amount};
use crate::error::{CommissionError, Result};

/// Output of a single calculation. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionResult {
    /// yearly_bonus / yearly_target
    pub base_rate: f64,
    pub duration_multiplier: f64,
    /// deal_size × base_rate × duration_multiplier
    pub commission: f64,
}

impl CommissionResult {
    /// Reject results that overflowed to inf or NaN. The engine does not
    /// check this itself, so callers showing a result go through here.
    pub fn ensure_finite(self) -> Result<Self> {
        if !self.base_rate.is_finite() {
            return Err(CommissionError::NonFiniteResult { field: "base_rate" });
        }
        if !self.commission.is_finite() {
            return Err(CommissionError::NonFiniteResult { field: "commission" });
        }
        Ok(self)
    }

    /// Base rate rendered as a percentage, e.g. `10.00%`
    pub fn base_rate_display(&self) -> String {
        format_percent(self.base_rate)
    }

    /// Duration multiplier rendered as a percentage, e.g. `20.00%`
    pub fn duration_multiplier_display(&self) -> String {
        format_percent(self.duration_multiplier)
    }

    /// Commission rendered as a currency amount, e.g. `£2,000.00`
    pub fn commission_display(&self, currency_symbol: &str) -> String {
        format_currency(currency_symbol, self.commission)
    }

    /// The three breakdown lines: formula, substituted values, result
    pub fn breakdown(&self, request: &CommissionRequest, currency_symbol: &str) -> Vec<String> {
        vec![
            "Commission = Deal Size × Base Rate × Duration Multiplier".to_string(),
            format!(
                "Commission = {} × {} × {}",
                format_whole_amount(currency_symbol, request.deal_size),
                self.base_rate_display(),
                self.duration_multiplier_display(),
            ),
            format!("Commission = {}", self.commission_display(currency_symbol)),
        ]
    }
}
