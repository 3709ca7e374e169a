//! Core error types for the FundLens chart library.
//!
//! The chart core has no I/O of its own; the only failures it reports are
//! malformed caller input (bad props, negative values) and the occasional
//! formatting failure while serializing a frame.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the chart library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to render chart: {0}")]
    Render(String),
}

/// Validation errors for chart props and segment data.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Render(err.to_string())
    }
}
