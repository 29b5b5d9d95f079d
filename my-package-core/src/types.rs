//! Core types and data structures for my-package

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A domain entity returned by the item source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque identifier, unique within a source
    pub id: String,
    /// Display name
    pub name: String,
    /// ISO-8601 creation timestamp
    pub created_at: String,
}

impl Item {
    /// Create an item stamped with the current time
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: now_iso8601(),
        }
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// API key used to authenticate against the item source.
///
/// The secret never appears in `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key. Empty keys are rejected.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// The raw key, for building requests
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_camel_case() {
        let item = Item {
            id: "1".to_string(),
            name: "Example Item 1".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Example Item 1");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_timestamp_is_iso8601_utc() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_credential_is_redacted() {
        let credential = Credential::new("sk-secret").unwrap();
        assert_eq!(credential.expose(), "sk-secret");
        assert_eq!(format!("{:?}", credential), "Credential(****)");
        assert!(!format!("{}", credential).contains("secret"));
    }

    #[test]
    fn test_empty_credential_rejected() {
        assert!(Credential::new("").is_none());
    }
}
