//! Error types shared by the evaluator, ladder and request builders.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpreadError {
    /// Input the calculation cannot be run on (non-positive premium or budget, etc).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Value outside the bounds the input form accepts.
    #[error("{field} out of range: {value} (allowed {bounds})")]
    OutOfRange {
        field: &'static str,
        value: String,
        bounds: String,
    },
}

impl SpreadError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SpreadError>;
