//! Output payload models
//!
//! Success payloads are emitted as-is; failures are wrapped in
//! [`ErrorResponse`] so that consumers can tell the two apart by the
//! presence of the top-level `error` key.

use crate::error::{ErrorKind, ItemError};
use crate::types::Item;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of the `list` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Items returned by the source
    pub items: Vec<Item>,
    /// Always `items.len()`
    pub count: usize,
    /// The filter the caller supplied, `null` when none was given
    pub filter: Option<String>,
}

impl ListResponse {
    /// Build the payload; `count` is derived from `items`
    pub fn new(items: Vec<Item>, filter: Option<String>) -> Self {
        Self {
            count: items.len(),
            items,
            filter,
        }
    }
}

/// Payload of the `get` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    pub item: Option<Item>,
}

/// Body of a structured error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub code: ErrorKind,
    /// Human-readable message
    pub message: String,
    /// Optional context mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

/// Structured error payload: `{"error": {"code", "message", "details"}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    /// Create an error payload from its parts
    pub fn new(
        code: ErrorKind,
        message: impl Into<String>,
        details: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
                details,
            },
        }
    }
}

impl From<&ItemError> for ErrorResponse {
    fn from(err: &ItemError) -> Self {
        Self::new(err.kind(), err.to_string(), err.details())
    }
}
