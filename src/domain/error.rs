use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    ParseError(String),
    TransformError(String),
    ValidationError(String),
    ConfigError(String),
    IoError(String),
}

impl AppError {
    /// Whether the failure was caused by the submitted input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::ParseError(_) | AppError::TransformError(_) | AppError::ValidationError(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::TransformError(msg) => write!(f, "Transform error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            AppError::IoError(err.to_string())
        } else {
            AppError::ParseError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
