//! Error types for input validation and scenario loading
//!
//! The calculation engine itself never fails; errors only arise at the edges
//! (user-supplied inputs, files, serialization).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unsupported first mortgage term: {0} years (expected 7, 10 or 25)")]
    UnsupportedTerm(u32),

    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
