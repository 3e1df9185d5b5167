//! Commission Calculator - base rate, duration multiplier and commission for a deal
//!
//! This library provides:
//! - The pure commission calculation and its duration multiplier lookup
//! - Form-level validation of caller input
//! - Loading an alternate multiplier table from CSV
//! - Display formatting and the calculation breakdown
//! - JSON request handling for the hosted calculator

pub mod deal;
pub mod assumptions;
pub mod commission;
pub mod display;
pub mod api;
pub mod error;

// Re-export commonly used types
pub use deal::CommissionRequest;
pub use assumptions::DurationMultipliers;
pub use commission::{
    CommissionEngine, CommissionResult, calculate_commission, lookup_duration_multiplier,
};
pub use error::{CommissionError, Result};
