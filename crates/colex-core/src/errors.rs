//! Cross-cutting error types for colex.
//!
//! Component-specific errors (e.g., `CorrelationError`, `ProjectionError`) are
//! defined in their respective crates.

use thiserror::Error;

/// Errors raised when validating upstream data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (shape, range, invariants).
    #[error("Validation error: {0}")]
    Validation(String),
}
