//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A conversion request was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rendering a response failed.
    #[error("Output error: {0}")]
    Output(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::Config(_) => 3,
            Self::Output(_) => 1,
        }
    }

    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Output(_) => "OUTPUT_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::InvalidInput(String::new()).exit_code(), 2);
        assert_eq!(AppError::Config(String::new()).exit_code(), 3);
        assert_eq!(AppError::Output(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::InvalidInput(String::new()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(AppError::Output(String::new()).error_code(), "OUTPUT_ERROR");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::InvalidInput("msg".into()).to_string(),
            "Invalid input: msg"
        );
        assert_eq!(
            AppError::Output("msg".into()).to_string(),
            "Output error: msg"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::Message("bad".into()).into();
        assert!(matches!(err, AppError::Config(ref msg) if msg == "bad"));
    }
}
