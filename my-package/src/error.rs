//! CLI-level errors (wraps item errors)

use my_package_core::api::ErrorResponse;
use my_package_core::{ErrorKind, ItemError};
use thiserror::Error;

use crate::exitcode;

/// Top-level error type; every command failure ends up here.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Item(#[from] ItemError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// The structured error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            CliError::Item(e) => e.kind(),
            CliError::Config(_) => ErrorKind::ConfigError,
            CliError::Io(_) => ErrorKind::InternalError,
            CliError::Other(e) => match e.downcast_ref::<ItemError>() {
                Some(item) => item.kind(),
                None => ErrorKind::InternalError,
            },
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::EnvMissing | ErrorKind::ConfigError => exitcode::CONFIG,
            ErrorKind::InvalidInput => exitcode::USAGE,
            ErrorKind::ApiError => exitcode::UNAVAILABLE,
            ErrorKind::NotFound | ErrorKind::InternalError => exitcode::FAILURE,
        }
    }

    /// Structured payload for this error
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            CliError::Item(e) => ErrorResponse::from(e),
            CliError::Other(e) => match e.downcast_ref::<ItemError>() {
                Some(item) => ErrorResponse::from(item),
                None => ErrorResponse::new(self.kind(), format!("{:#}", e), None),
            },
            _ => ErrorResponse::new(self.kind(), self.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::from(ItemError::missing_api_key()).exit_code(),
            exitcode::CONFIG
        );
        assert_eq!(
            CliError::from(ItemError::NotFound("9".into())).exit_code(),
            exitcode::FAILURE
        );
        assert_eq!(
            CliError::from(ItemError::http_status(502)).exit_code(),
            exitcode::UNAVAILABLE
        );
        assert_eq!(
            CliError::from(ItemError::InvalidInput("bad".into())).exit_code(),
            exitcode::USAGE
        );
        assert_eq!(
            CliError::Config("bad file".into()).exit_code(),
            exitcode::CONFIG
        );
    }

    #[test]
    fn test_anyhow_wrapping_item_error_keeps_kind() {
        let err: CliError = anyhow::Error::new(ItemError::NotFound("7".into())).into();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let response = err.to_response();
        assert_eq!(response.error.code, ErrorKind::NotFound);
        assert_eq!(response.error.message, "Item 7 not found");
        assert!(response.error.details.is_some());
    }

    #[test]
    fn test_untyped_error_is_internal() {
        let err: CliError = anyhow::anyhow!("something broke").into();
        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert_eq!(err.exit_code(), exitcode::FAILURE);
        assert_eq!(err.to_response().error.message, "something broke");
    }

    #[test]
    fn test_config_error_response() {
        let response = CliError::Config("unreadable".into()).to_response();
        assert_eq!(response.error.code, ErrorKind::ConfigError);
        assert_eq!(response.error.message, "Configuration error: unreadable");
        assert!(response.error.details.is_none());
    }
}
