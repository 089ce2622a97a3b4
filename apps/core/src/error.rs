use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// None of these reach the person typing into the assistant: the counselor
/// recovers every remote failure locally. They surface only at the edges
/// (configuration loading, transcript export) and in the remote adapter itself.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., an out-of-range temperature).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., a missing API key or unreadable secrets file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a failed call to the remote generation service.
    #[error("Remote generation failed: {0}")]
    Remote(String),

    /// The remote service answered, but with nothing usable.
    #[error("Remote generation returned an empty response")]
    EmptyResponse,
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Remote(format!("HTTP error: {}", err))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(err: dotenv::Error) -> Self {
        AppError::Config(format!("Secrets file error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_validation() {
        let config = crate::models::ModelConfig {
            max_tokens: 0,
            ..Default::default()
        };
        let err: AppError = validator::Validate::validate(&config).unwrap_err().into();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("max_tokens")),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_io_error_display() {
        let err = AppError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
