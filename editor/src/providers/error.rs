//! Error types for provider operations.

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error type for provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Underlying storage I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted profile could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category() {
        let err = ProviderError::configuration("missing path");
        assert_eq!(err.to_string(), "Configuration error: missing path");

        let err = ProviderError::not_found("profile");
        assert_eq!(err.to_string(), "Not found: profile");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ProviderError = io.into();
        assert!(matches!(err, ProviderError::Io(_)));
    }
}
