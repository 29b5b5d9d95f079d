//! my-package Core Library
//!
//! Shared types, payload models, errors and the item source abstraction.
//! This crate is used by the CLI and by any real source implementation.

pub mod api;
pub mod error;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::*;
pub use source::{ItemSource, StubSource, DEFAULT_LIMIT};
pub use types::*;
