//! my-package CLI Library
//!
//! Scaffold for a command-line tool with two example commands, `list` and
//! `get`, backed by a placeholder item source.
//!
//! # Public API
//!
//! Configuration is resolved once through [`config::ConfigBuilder`] and the
//! resulting [`config::CliConfig`] is passed to the command handlers along
//! with any [`my_package_core::ItemSource`] implementation.
//!
//! ```no_run
//! use my_package::cli::{with_error_handling, handle_list};
//! use my_package::config::CliConfig;
//! use my_package_core::StubSource;
//!
//! # async fn example() {
//! let config = CliConfig::builder().with_env_overrides().build();
//! let mut stdout = std::io::stdout();
//! let code = with_error_handling(
//!     config.output_format,
//!     &mut std::io::stderr(),
//!     handle_list(&StubSource, &config, None, Some(5), &mut stdout),
//! )
//! .await;
//! std::process::exit(code.into());
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// Configuration types for the CLI tool.
pub mod config;

/// CLI-level error type and exit code mapping.
pub mod error;

pub mod exitcode;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;
