//! Correlation error types for colex-correlation.

/// Errors from reading or writing the persisted correlation dataset.
#[derive(Debug, thiserror::Error)]
pub enum CorrelationError {
    /// Filesystem error from the JSON file store.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted dataset could not be (de)serialized.
    #[error("dataset serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid store configuration.
    #[error("configuration error: {0}")]
    Config(#[from] colex_config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_convert_into_matching_variants() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert!(matches!(CorrelationError::from(io), CorrelationError::Io(_)));

        let json = serde_json::from_str::<Vec<f64>>("[null]").unwrap_err();
        let err = CorrelationError::from(json);
        assert!(matches!(err, CorrelationError::Serialization(_)));
        assert!(err.to_string().starts_with("dataset serialization error"));
    }
}
