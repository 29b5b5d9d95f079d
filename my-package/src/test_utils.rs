//! Test utilities for CLI testing
//!
//! Item sources that record how they were called or fail on demand.

use async_trait::async_trait;
use my_package_core::{Credential, Item, ItemError, ItemSource, StubSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Arguments of the most recent `fetch_items` call
#[derive(Debug, Clone, Default)]
struct ListCall {
    filter: Option<String>,
    limit: usize,
}

/// Delegates to [`StubSource`] and records every call
#[derive(Debug, Default)]
pub struct RecordingSource {
    calls: AtomicUsize,
    last_list: Mutex<Option<ListCall>>,
}

impl RecordingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of source calls
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Filter passed to the last `fetch_items` call
    pub fn last_filter(&self) -> Option<String> {
        self.last_list
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|call| call.filter.clone())
    }

    /// Limit passed to the last `fetch_items` call
    pub fn last_limit(&self) -> Option<usize> {
        self.last_list.lock().unwrap().as_ref().map(|call| call.limit)
    }
}

#[async_trait]
impl ItemSource for RecordingSource {
    async fn fetch_items(
        &self,
        credential: &Credential,
        filter: Option<&str>,
        limit: usize,
    ) -> my_package_core::Result<Vec<Item>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_list.lock().unwrap() = Some(ListCall {
            filter: filter.map(str::to_string),
            limit,
        });
        StubSource.fetch_items(credential, filter, limit).await
    }

    async fn fetch_item(
        &self,
        credential: &Credential,
        id: &str,
    ) -> my_package_core::Result<Option<Item>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StubSource.fetch_item(credential, id).await
    }
}

/// Fails every call with an `API_ERROR` carrying `status`
#[derive(Debug, Clone, Copy)]
pub struct FailingSource {
    status: u16,
}

impl FailingSource {
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

#[async_trait]
impl ItemSource for FailingSource {
    async fn fetch_items(
        &self,
        _credential: &Credential,
        _filter: Option<&str>,
        _limit: usize,
    ) -> my_package_core::Result<Vec<Item>> {
        Err(ItemError::http_status(self.status))
    }

    async fn fetch_item(
        &self,
        _credential: &Credential,
        _id: &str,
    ) -> my_package_core::Result<Option<Item>> {
        Err(ItemError::http_status(self.status))
    }
}
