//! PocketBank Core - Domain entities, services, and traits.
//!
//! This crate contains the pocket ledger: balances, locks, targets, daily
//! goals and streaks, daily pocket mode, and the money movements built on top
//! of them. It holds all state in memory and has no storage or transport
//! dependencies.

pub mod constants;
pub mod errors;
pub mod events;
pub mod pockets;
pub mod settings;
pub mod transfers;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
