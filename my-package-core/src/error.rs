//! Error types for my-package

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Name of the environment variable holding the API credential
pub const API_KEY_VAR: &str = "API_KEY";

/// Machine-readable error code carried in every structured error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A required environment variable is absent or empty
    EnvMissing,
    /// The requested item does not exist
    NotFound,
    /// The remote source reported a failure
    ApiError,
    /// Arguments were syntactically valid but semantically rejected
    InvalidInput,
    /// Configuration file or environment overrides are unusable
    ConfigError,
    /// Anything else
    InternalError,
}

impl ErrorKind {
    /// Wire representation of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EnvMissing => "ENV_MISSING",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::ApiError => "API_ERROR",
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::ConfigError => "CONFIG_ERROR",
            ErrorKind::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for item operations
#[derive(Error, Debug)]
pub enum ItemError {
    /// Required environment variable not set
    #[error("Missing required environment variable: {0}")]
    EnvMissing(String),

    /// Item lookup miss
    #[error("Item {0} not found")]
    NotFound(String),

    /// Failure reported by the item source
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for item operations
pub type Result<T> = std::result::Result<T, ItemError>;

impl ItemError {
    /// Missing `API_KEY`
    pub fn missing_api_key() -> Self {
        ItemError::EnvMissing(API_KEY_VAR.to_string())
    }

    /// Source failure with an HTTP-like status, rendered as `HTTP <status>`
    pub fn http_status(status: u16) -> Self {
        ItemError::Api {
            message: format!("HTTP {}", status),
            status: Some(status),
        }
    }

    /// The structured error code for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ItemError::EnvMissing(_) => ErrorKind::EnvMissing,
            ItemError::NotFound(_) => ErrorKind::NotFound,
            ItemError::Api { .. } => ErrorKind::ApiError,
            ItemError::InvalidInput(_) => ErrorKind::InvalidInput,
            ItemError::Other(_) => ErrorKind::InternalError,
        }
    }

    /// Context attached to the structured error, if any
    pub fn details(&self) -> Option<Map<String, Value>> {
        let mut details = Map::new();
        match self {
            ItemError::EnvMissing(variable) => {
                details.insert("variable".to_string(), Value::String(variable.clone()));
            }
            ItemError::NotFound(id) => {
                details.insert("id".to_string(), Value::String(id.clone()));
            }
            ItemError::Api {
                status: Some(status),
                ..
            } => {
                details.insert("status".to_string(), Value::from(*status));
            }
            _ => return None,
        }
        Some(details)
    }
}
