//! Error types shared by the engine, the assumption loader and the callers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommissionError {
    /// The base rate divides by the yearly target, so zero is rejected up front
    #[error("Yearly target cannot be zero!")]
    ZeroTarget,

    /// Inputs were valid but the arithmetic overflowed
    #[error("Inputs are too extreme to calculate: {field} is not a finite number")]
    NonFiniteResult { field: &'static str },

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommissionError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommissionError>;
