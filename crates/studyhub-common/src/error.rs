//! Error types for StudyHub

use thiserror::Error;

/// Result type alias for StudyHub operations
pub type Result<T> = std::result::Result<T, StudyHubError>;

/// Main error type for StudyHub
#[derive(Error, Debug)]
pub enum StudyHubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudyHubError::ResourceNotFound("r42".to_string());
        assert_eq!(err.to_string(), "Resource not found: r42");

        let err = StudyHubError::Config("missing session path".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: StudyHubError = io.into();
        assert!(matches!(err, StudyHubError::Io(_)));
    }
}
