//! Deal inputs supplied by the caller and the form rules that guard them

mod data;

pub use data::{
    CommissionRequest, SELECTABLE_DURATIONS, DEFAULT_DEAL_SIZE, DEFAULT_DEAL_DURATION,
    DEFAULT_YEARLY_TARGET, DEFAULT_YEARLY_BONUS,
};
