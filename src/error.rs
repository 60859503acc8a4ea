use std::io;
use thiserror::Error;

/// Error type for metric conversion
#[derive(Error, Debug)]
pub enum ConvError {
    /// No definition in the registry matches the requested metric kind
    #[error("{kind} metrics configuration not found")]
    ConfigNotFound { kind: String },

    /// The formula could not be parsed, evaluated, or did not yield a number
    #[error("Formula error in '{formula}': {reason}")]
    Formula { formula: String, reason: String },

    #[error("Invalid memory string: {0}")]
    InvalidMemoryString(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for metric conversion
pub type Result<T> = std::result::Result<T, ConvError>;

impl ConvError {
    /// Create a config-not-found error for a metric kind
    pub fn config_not_found<S: Into<String>>(kind: S) -> Self {
        ConvError::ConfigNotFound { kind: kind.into() }
    }

    /// Create a formula error carrying the offending formula
    pub fn formula<F: Into<String>, R: Into<String>>(formula: F, reason: R) -> Self {
        ConvError::Formula {
            formula: formula.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_memory_string<S: Into<String>>(msg: S) -> Self {
        ConvError::InvalidMemoryString(msg.into())
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, ConvError::Formula { .. })
    }

    pub fn is_config_not_found(&self) -> bool {
        matches!(self, ConvError::ConfigNotFound { .. })
    }
}
