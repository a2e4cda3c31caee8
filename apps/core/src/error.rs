use std::io;
use thiserror::Error;

/// Application-wide error type for the probe and its configuration.
///
/// The classifier itself never fails; it normalizes bad input to `Absent`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unknown environment values).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_clone_keeps_kind() {
        let err = AppError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        match err.clone() {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::Config("bad mode".into()).to_string(),
            "Configuration error: bad mode"
        );
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(AppError::from(json_err).to_string().starts_with("Validation error: JSON error"));
    }
}
