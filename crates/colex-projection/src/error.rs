//! Projection error types for colex-projection.

/// Errors from projecting embeddings into 2D.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// Fewer than two vectors; a layout is undefined.
    #[error("insufficient data: {points} point(s), at least 2 required")]
    InsufficientData { points: usize },

    /// A language's embedding has a different dimension than the rest.
    #[error("embedding dimension mismatch for {language}: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        language: String,
    },

    /// An embedding contains NaN or an infinite component.
    #[error("non-finite embedding component for {language}")]
    NonFiniteInput { language: String },
}
