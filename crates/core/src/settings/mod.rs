//! Ledger settings - currency, calendar timezone and streak policy.

mod settings_model;

pub use settings_model::{LedgerSettings, StreakPolicy};
