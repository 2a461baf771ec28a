//! Pocket service trait.
//!
//! The contract view-layer collaborators use to read pockets and request
//! transitions. Every write returns the updated state or a typed rejection.

use rust_decimal::Decimal;

use super::pockets_model::{
    DailyPocketMode, Movement, MovementReceipt, Pocket, PocketActivity, PocketSummary,
};
use crate::errors::Result;

pub trait PocketServiceTrait: Send + Sync {
    /// Lists pockets in creation order.
    fn list_pockets(&self) -> Result<Vec<Pocket>>;

    /// Retrieves a pocket, `None` when the id is unknown.
    fn get_pocket(&self, pocket_id: &str) -> Result<Option<Pocket>>;

    /// Creates an empty pocket and returns its id.
    fn create_pocket(&self, name: &str) -> Result<String>;

    fn rename_pocket(&self, pocket_id: &str, name: &str) -> Result<Pocket>;

    fn deposit(&self, pocket_id: &str, amount: Decimal) -> Result<Pocket>;

    fn spend(&self, pocket_id: &str, amount: Decimal) -> Result<Pocket>;

    /// Credits a pocket through the full deposit transition, recording `movement`.
    fn credit(&self, pocket_id: &str, amount: Decimal, movement: Movement)
        -> Result<MovementReceipt>;

    /// Debits a pocket under the lock and funds checks, recording `movement`.
    fn debit(&self, pocket_id: &str, amount: Decimal, movement: Movement)
        -> Result<MovementReceipt>;

    fn set_target(&self, pocket_id: &str, target: Decimal, lock_on_target: bool)
        -> Result<Pocket>;

    fn toggle_lock(&self, pocket_id: &str) -> Result<Pocket>;

    fn set_daily_goal(&self, pocket_id: &str, goal: Decimal) -> Result<Pocket>;

    fn toggle_daily_goal(&self, pocket_id: &str) -> Result<Pocket>;

    fn share_pocket(&self, pocket_id: &str, recipient: &str) -> Result<Pocket>;

    fn daily_pocket_mode(&self) -> Result<DailyPocketMode>;

    /// Selects the daily pocket and turns the mode on.
    fn set_daily_pocket(&self, pocket_id: &str) -> Result<DailyPocketMode>;

    /// Flips the mode; turning it off clears the selection.
    fn toggle_daily_pocket_mode(&self) -> Result<DailyPocketMode>;

    fn total_balance(&self) -> Result<Decimal>;

    fn summary(&self) -> Result<PocketSummary>;

    /// Journal entries, newest first.
    fn list_activities(&self, pocket_id: Option<&str>) -> Result<Vec<PocketActivity>>;
}
