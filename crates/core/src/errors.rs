//! Core error types for the Pocketbank ledger.
//!
//! Every failure a ledger operation can report is an expected, recoverable
//! condition. Adapters (HTTP, CLI) map these to user-facing messages.

use thiserror::Error;

use crate::pockets::PocketError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Pocket(#[from] PocketError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns the pocket error if this is one of the ledger rejections.
    pub fn as_pocket_error(&self) -> Option<&PocketError> {
        match self {
            Error::Pocket(e) => Some(e),
            _ => None,
        }
    }
}

/// Validation errors for configuration parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unknown time zone: {0}")]
    TimeZone(String),
}
