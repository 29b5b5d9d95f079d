//! Item source abstraction
//!
//! [`ItemSource`] is the seam where a real API client plugs in. The bundled
//! [`StubSource`] answers from hard-coded data and never fails.

use crate::error::Result;
use crate::types::{Credential, Item};
use async_trait::async_trait;

/// Default number of items returned by `list`
pub const DEFAULT_LIMIT: usize = 20;

/// A remote collection of items
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch at most `limit` items, optionally narrowed by `filter`
    async fn fetch_items(
        &self,
        credential: &Credential,
        filter: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Item>>;

    /// Look up a single item by id, `None` when it does not exist
    async fn fetch_item(&self, credential: &Credential, id: &str) -> Result<Option<Item>>;
}

/// In-memory placeholder source.
///
/// Ignores the credential and the filter. The two lookups are not kept
/// consistent: `fetch_items` knows ids `1` and `2`, `fetch_item` only `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSource;

impl StubSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ItemSource for StubSource {
    async fn fetch_items(
        &self,
        _credential: &Credential,
        _filter: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Item>> {
        let mut items = vec![
            Item::new("1", "Example Item 1"),
            Item::new("2", "Example Item 2"),
        ];
        items.truncate(limit);
        Ok(items)
    }

    async fn fetch_item(&self, _credential: &Credential, id: &str) -> Result<Option<Item>> {
        if id == "1" {
            return Ok(Some(Item::new("1", "Example Item 1")));
        }
        Ok(None)
    }
}
