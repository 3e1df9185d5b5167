//! Commission engine: base rate, duration multiplier and final commission

mod engine;
mod result;

pub use engine::{CommissionEngine, calculate_commission, lookup_duration_multiplier};
pub use result::CommissionResult;
