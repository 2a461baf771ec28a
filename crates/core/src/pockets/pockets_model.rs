//! Pocket domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PocketError;
use crate::constants::{AMOUNT_PRECISION, MAX_POCKET_BALANCE};

/// A named sub-account holding a balance, independently lockable and goal-trackable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pocket {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    pub is_locked: bool,
    /// Recipients the pocket was shared with, in the order they were added.
    pub shared_with: Vec<String>,
    pub target: Option<Decimal>,
    pub lock_on_target: bool,
    pub daily_goal_enabled: bool,
    pub daily_goal: Option<Decimal>,
    pub daily_goal_progress: Decimal,
    pub streak: u32,
    pub last_deposit_date: Option<NaiveDate>,
    /// Last calendar day on which the daily goal was reached.
    #[serde(default)]
    pub last_goal_met_date: Option<NaiveDate>,
    /// Incremented on every successful mutation.
    #[serde(default)]
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pocket {
    /// A fresh pocket: zero balance, unlocked, no target, daily goal disabled.
    pub fn new(id: String, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            balance: Decimal::ZERO,
            is_locked: false,
            shared_with: Vec::new(),
            target: None,
            lock_on_target: false,
            daily_goal_enabled: false,
            daily_goal: None,
            daily_goal_progress: Decimal::ZERO,
            streak: 0,
            last_deposit_date: None,
            last_goal_met_date: None,
            version: 0,
            created_at,
            updated_at: created_at,
        }
    }

    /// True when a target is set and the balance has reached it.
    pub fn target_reached(&self) -> bool {
        self.target.is_some_and(|target| self.balance >= target)
    }

    /// Unlocking is refused while a target is set and not yet reached.
    pub fn can_unlock(&self) -> bool {
        self.target.map_or(true, |target| self.balance >= target)
    }

    /// Checks the record-level invariants of a pocket loaded from outside the ledger.
    pub fn validate(&self) -> Result<(), PocketError> {
        if self.id.trim().is_empty() {
            return Err(PocketError::InvalidArgument(
                "Pocket id cannot be empty".to_string(),
            ));
        }
        validate_name(&self.name)?;
        if self.balance < Decimal::ZERO {
            return Err(PocketError::InvalidArgument(format!(
                "Pocket '{}' has a negative balance",
                self.id
            )));
        }
        if self.balance > max_balance() {
            return Err(PocketError::InvalidArgument(format!(
                "Pocket '{}' balance exceeds {}",
                self.id, MAX_POCKET_BALANCE
            )));
        }
        if let Some(target) = self.target {
            validate_amount("target", target)?;
        }
        if let Some(goal) = self.daily_goal {
            validate_amount("daily goal", goal)?;
            if self.daily_goal_progress > goal {
                return Err(PocketError::InvalidArgument(format!(
                    "Pocket '{}' daily goal progress exceeds its goal",
                    self.id
                )));
            }
        } else if self.daily_goal_enabled {
            return Err(PocketError::InvalidArgument(format!(
                "Pocket '{}' has daily goal tracking enabled without a goal",
                self.id
            )));
        }
        if self.daily_goal_progress < Decimal::ZERO {
            return Err(PocketError::InvalidArgument(format!(
                "Pocket '{}' has negative daily goal progress",
                self.id
            )));
        }
        Ok(())
    }
}

/// Trims a pocket name and rejects blank ones.
pub fn validate_name(name: &str) -> Result<String, PocketError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PocketError::InvalidArgument(
            "Pocket name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Amounts must be strictly positive, at most `MAX_POCKET_BALANCE`, with at
/// most two decimal places.
pub fn validate_amount(field: &str, amount: Decimal) -> Result<Decimal, PocketError> {
    if amount <= Decimal::ZERO {
        return Err(PocketError::InvalidArgument(format!(
            "{} must be greater than zero, got {}",
            field, amount
        )));
    }
    if amount > max_balance() {
        return Err(PocketError::InvalidArgument(format!(
            "{} cannot exceed {}, got {}",
            field, MAX_POCKET_BALANCE, amount
        )));
    }
    let normalized = amount.normalize();
    if normalized.scale() > AMOUNT_PRECISION {
        return Err(PocketError::InvalidArgument(format!(
            "{} cannot have more than {} decimal places, got {}",
            field, AMOUNT_PRECISION, amount
        )));
    }
    Ok(normalized)
}

pub(crate) fn max_balance() -> Decimal {
    Decimal::from(MAX_POCKET_BALANCE)
}

/// Process-wide restriction of balance mutations to one pocket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPocketMode {
    pub is_daily_pocket_mode: bool,
    pub daily_pocket_id: Option<String>,
}

impl DailyPocketMode {
    /// Whether a balance mutation on `pocket_id` is allowed.
    ///
    /// With the mode on and no pocket selected, nothing is allowed.
    pub fn allows(&self, pocket_id: &str) -> bool {
        !self.is_daily_pocket_mode || self.daily_pocket_id.as_deref() == Some(pocket_id)
    }
}

/// Kind of balance movement recorded in the activity journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Deposit,
    Spend,
    TopUp,
    Transfer,
    BillPayment,
    Withdrawal,
}

impl ActivityKind {
    /// Credits increase the balance, everything else reduces it.
    pub fn is_credit(&self) -> bool {
        matches!(self, ActivityKind::Deposit | ActivityKind::TopUp)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Deposit => "DEPOSIT",
            ActivityKind::Spend => "SPEND",
            ActivityKind::TopUp => "TOP_UP",
            ActivityKind::Transfer => "TRANSFER",
            ActivityKind::BillPayment => "BILL_PAYMENT",
            ActivityKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

/// Describes why a balance moves; attached to the journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub kind: ActivityKind,
    pub counterparty: Option<String>,
    pub reference: Option<String>,
}

impl Movement {
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            kind,
            counterparty: None,
            reference: None,
        }
    }

    pub fn deposit() -> Self {
        Self::new(ActivityKind::Deposit)
    }

    pub fn spend() -> Self {
        Self::new(ActivityKind::Spend)
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// One successful balance change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PocketActivity {
    pub id: String,
    pub pocket_id: String,
    pub kind: ActivityKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub counterparty: Option<String>,
    pub reference: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Result of a credit or debit: the updated pocket and its journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovementReceipt {
    pub pocket: Pocket,
    pub activity: PocketActivity,
}

/// Dashboard totals across all pockets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PocketSummary {
    pub pocket_count: usize,
    pub locked_count: usize,
    pub total_balance: Decimal,
    pub currency: String,
}
