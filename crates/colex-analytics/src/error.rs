//! Analytics error types for colex-analytics.

/// Errors from running a comparison through the analytics pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// A result or chain provider failed. Propagated unchanged; the pipeline
    /// never retries.
    #[error("upstream provider unavailable: {0}")]
    Upstream(#[source] anyhow::Error),

    /// Recording into the correlation dataset failed.
    #[error("correlation error: {0}")]
    Correlation(#[from] colex_correlation::CorrelationError),
}
