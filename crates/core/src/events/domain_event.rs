//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pockets::ActivityKind;

/// Domain events emitted by the pocket service after successful mutations.
///
/// These events represent facts about ledger changes. Runtime adapters
/// translate them into notifications (toasts, logs, push messages).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A pocket was created.
    PocketCreated { pocket_id: String, name: String },

    /// Non-balance fields changed (name, target, lock, goal, sharing).
    PocketUpdated { pocket_id: String },

    /// A credit or debit was applied.
    BalanceChanged {
        pocket_id: String,
        kind: ActivityKind,
        amount: Decimal,
        balance: Decimal,
    },

    /// A deposit reached the pocket's target and locked it.
    PocketAutoLocked { pocket_id: String, target: Decimal },

    /// The daily goal was reached for the day.
    DailyGoalReached { pocket_id: String, streak: u32 },

    /// Daily pocket mode was switched or re-targeted.
    DailyPocketModeChanged {
        enabled: bool,
        daily_pocket_id: Option<String>,
    },
}

impl DomainEvent {
    /// Creates a PocketCreated event.
    pub fn pocket_created(pocket_id: String, name: String) -> Self {
        Self::PocketCreated { pocket_id, name }
    }

    /// Creates a PocketUpdated event.
    pub fn pocket_updated(pocket_id: String) -> Self {
        Self::PocketUpdated { pocket_id }
    }

    /// Creates a BalanceChanged event.
    pub fn balance_changed(
        pocket_id: String,
        kind: ActivityKind,
        amount: Decimal,
        balance: Decimal,
    ) -> Self {
        Self::BalanceChanged {
            pocket_id,
            kind,
            amount,
            balance,
        }
    }

    /// Creates a PocketAutoLocked event.
    pub fn pocket_auto_locked(pocket_id: String, target: Decimal) -> Self {
        Self::PocketAutoLocked { pocket_id, target }
    }

    /// Creates a DailyGoalReached event.
    pub fn daily_goal_reached(pocket_id: String, streak: u32) -> Self {
        Self::DailyGoalReached { pocket_id, streak }
    }

    /// Creates a DailyPocketModeChanged event.
    pub fn daily_pocket_mode_changed(enabled: bool, daily_pocket_id: Option<String>) -> Self {
        Self::DailyPocketModeChanged {
            enabled,
            daily_pocket_id,
        }
    }
}
