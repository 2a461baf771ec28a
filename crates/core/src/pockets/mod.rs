//! Pockets module - domain models, ledger, service and traits.

mod pockets_errors;
mod pockets_ledger;
mod pockets_model;
mod pockets_seed;
mod pockets_service;
mod pockets_traits;


pub use pockets_errors::PocketError;
pub use pockets_ledger::{LedgerTime, PocketLedger};
pub use pockets_model::{
    validate_amount, validate_name, ActivityKind, DailyPocketMode, Movement, MovementReceipt,
    Pocket, PocketActivity, PocketSummary,
};
pub use pockets_seed::{demo_pockets, EMERGENCY_POCKET_ID, MAIN_POCKET_ID, SAVINGS_POCKET_ID};
pub use pockets_service::PocketService;
pub use pockets_traits::PocketServiceTrait;
