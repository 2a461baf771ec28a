use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections of pocket ledger operations.
///
/// A rejected operation never leaves a partial write behind; the caller may
/// retry after fixing the violated precondition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PocketError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Pocket '{0}' not found")]
    PocketNotFound(String),

    #[error("Pocket '{pocket_id}' cannot be used while daily pocket mode is active")]
    ModeRestricted {
        pocket_id: String,
        daily_pocket_id: Option<String>,
    },

    #[error("Pocket '{0}' is locked")]
    PocketLocked(String),

    #[error("Insufficient funds in pocket '{pocket_id}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        pocket_id: String,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Pocket '{pocket_id}' cannot be unlocked below its target ({balance} < {target})")]
    LockDenied {
        pocket_id: String,
        balance: Decimal,
        target: Decimal,
    },
}

impl PocketError {
    /// Stable machine-readable code for adapters.
    pub fn kind(&self) -> &'static str {
        match self {
            PocketError::InvalidArgument(_) => "INVALID_ARGUMENT",
            PocketError::PocketNotFound(_) => "POCKET_NOT_FOUND",
            PocketError::ModeRestricted { .. } => "MODE_RESTRICTED",
            PocketError::PocketLocked(_) => "POCKET_LOCKED",
            PocketError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            PocketError::LockDenied { .. } => "LOCK_DENIED",
        }
    }
}
