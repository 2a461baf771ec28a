//! In-memory pocket ledger.
//!
//! The ledger owns every pocket and performs all balance-affecting transitions.
//! Each operation works on a copy of the affected pocket and writes it back only
//! once every check has passed, so a rejected operation leaves no trace.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::pockets_model::{
    max_balance, validate_amount, validate_name, DailyPocketMode, Movement, MovementReceipt,
    Pocket, PocketActivity,
};
use super::PocketError;
use crate::events::DomainEvent;
use crate::settings::StreakPolicy;
use crate::utils::time_utils::is_next_day;

type LedgerResult<T> = std::result::Result<T, PocketError>;

/// Point in time at which a ledger operation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerTime {
    pub at: DateTime<Utc>,
    /// Calendar day of `at` in the ledger timezone.
    pub day: NaiveDate,
}

impl LedgerTime {
    pub fn new(at: DateTime<Utc>, day: NaiveDate) -> Self {
        Self { at, day }
    }
}

#[derive(Debug, Default)]
pub struct PocketLedger {
    pockets: Vec<Pocket>,
    index: HashMap<String, usize>,
    mode: DailyPocketMode,
    activities: Vec<PocketActivity>,
    streak_policy: StreakPolicy,
    pending_events: Vec<DomainEvent>,
}

impl PocketLedger {
    pub fn new(streak_policy: StreakPolicy) -> Self {
        Self {
            streak_policy,
            ..Self::default()
        }
    }

    /// Builds a ledger from existing pockets, keeping their order.
    pub fn with_pockets(streak_policy: StreakPolicy, pockets: Vec<Pocket>) -> LedgerResult<Self> {
        let mut ledger = Self::new(streak_policy);
        for pocket in pockets {
            pocket.validate()?;
            if ledger.index.contains_key(&pocket.id) {
                return Err(PocketError::InvalidArgument(format!(
                    "Duplicate pocket id '{}'",
                    pocket.id
                )));
            }
            ledger.insert(pocket);
        }
        Ok(ledger)
    }

    // ── reads ───────────────────────────────────────────────────────────

    /// All pockets in creation order.
    pub fn list(&self) -> &[Pocket] {
        &self.pockets
    }

    pub fn get(&self, pocket_id: &str) -> Option<&Pocket> {
        self.index.get(pocket_id).map(|&i| &self.pockets[i])
    }

    pub fn daily_pocket_mode(&self) -> &DailyPocketMode {
        &self.mode
    }

    /// Cannot overflow: every balance is capped at `MAX_POCKET_BALANCE`.
    pub fn total_balance(&self) -> Decimal {
        self.pockets.iter().map(|p| p.balance).sum()
    }

    /// Journal entries, newest first, optionally for one pocket.
    pub fn activities(&self, pocket_id: Option<&str>) -> LedgerResult<Vec<PocketActivity>> {
        if let Some(id) = pocket_id {
            self.require(id)?;
        }
        Ok(self
            .activities
            .iter()
            .rev()
            .filter(|a| pocket_id.map_or(true, |id| a.pocket_id == id))
            .cloned()
            .collect())
    }

    /// Takes the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ── pocket lifecycle ────────────────────────────────────────────────

    pub fn create_pocket(&mut self, name: &str, time: LedgerTime) -> LedgerResult<Pocket> {
        let name = validate_name(name)?;
        let id = Uuid::new_v4().to_string();
        let pocket = Pocket::new(id, name, time.at);
        debug!("Created pocket {} ({})", pocket.id, pocket.name);
        self.pending_events.push(DomainEvent::pocket_created(
            pocket.id.clone(),
            pocket.name.clone(),
        ));
        self.insert(pocket.clone());
        Ok(pocket)
    }

    pub fn rename_pocket(
        &mut self,
        pocket_id: &str,
        name: &str,
        time: LedgerTime,
    ) -> LedgerResult<Pocket> {
        let name = validate_name(name)?;
        let mut next = self.require(pocket_id)?.clone();
        next.name = name;
        Ok(self.commit_update(next, time))
    }

    // ── balance transitions ─────────────────────────────────────────────

    /// Deposits `amount` into a pocket.
    pub fn deposit(
        &mut self,
        pocket_id: &str,
        amount: Decimal,
        time: LedgerTime,
    ) -> LedgerResult<Pocket> {
        self.credit(pocket_id, amount, Movement::deposit(), time)
            .map(|receipt| receipt.pocket)
    }

    /// Spends `amount` from a pocket.
    pub fn spend(
        &mut self,
        pocket_id: &str,
        amount: Decimal,
        time: LedgerTime,
    ) -> LedgerResult<Pocket> {
        self.debit(pocket_id, amount, Movement::spend(), time)
            .map(|receipt| receipt.pocket)
    }

    /// Applies the full deposit transition: balance, auto-lock, then daily goal.
    pub fn credit(
        &mut self,
        pocket_id: &str,
        amount: Decimal,
        movement: Movement,
        time: LedgerTime,
    ) -> LedgerResult<MovementReceipt> {
        if !movement.kind.is_credit() {
            return Err(PocketError::InvalidArgument(format!(
                "{} is not a credit",
                movement.kind.as_str()
            )));
        }
        let amount = validate_amount("Amount", amount)?;
        let current = self.require(pocket_id)?;
        self.check_mode(pocket_id)?;

        let mut next = current.clone();
        next.balance = next
            .balance
            .checked_add(amount)
            .filter(|balance| *balance <= max_balance())
            .ok_or_else(|| {
                PocketError::InvalidArgument(format!(
                    "Deposit of {} would take pocket '{}' over the maximum balance",
                    amount, pocket_id
                ))
            })?;

        let mut auto_locked = None;
        if next.lock_on_target && next.target_reached() {
            if !next.is_locked {
                auto_locked = next.target;
            }
            next.is_locked = true;
        }

        let goal_reached = self.track_daily_goal(&mut next, amount, time.day);

        let receipt = self.commit_movement(next, amount, movement, time);
        let pocket = &receipt.pocket;
        if let Some(target) = auto_locked {
            info!("Pocket {} reached its target {} and was locked", pocket.id, target);
            self.pending_events
                .push(DomainEvent::pocket_auto_locked(pocket.id.clone(), target));
        }
        if goal_reached {
            info!(
                "Pocket {} reached its daily goal, streak is now {}",
                pocket.id, pocket.streak
            );
            self.pending_events
                .push(DomainEvent::daily_goal_reached(pocket.id.clone(), pocket.streak));
        }
        Ok(receipt)
    }

    /// Applies a balance reduction: send, bill payment, withdrawal or plain spend.
    pub fn debit(
        &mut self,
        pocket_id: &str,
        amount: Decimal,
        movement: Movement,
        time: LedgerTime,
    ) -> LedgerResult<MovementReceipt> {
        if movement.kind.is_credit() {
            return Err(PocketError::InvalidArgument(format!(
                "{} is not a debit",
                movement.kind.as_str()
            )));
        }
        let amount = validate_amount("Amount", amount)?;
        let current = self.require(pocket_id)?;
        self.check_mode(pocket_id)?;
        if current.is_locked {
            return Err(PocketError::PocketLocked(pocket_id.to_string()));
        }
        if amount > current.balance {
            return Err(PocketError::InsufficientFunds {
                pocket_id: pocket_id.to_string(),
                balance: current.balance,
                requested: amount,
            });
        }

        let mut next = current.clone();
        next.balance -= amount;
        Ok(self.commit_movement(next, amount, movement, time))
    }

    // ── targets and locks ───────────────────────────────────────────────

    /// Sets the target and lock-on-target flag. Never locks by itself.
    pub fn set_target(
        &mut self,
        pocket_id: &str,
        target: Decimal,
        lock_on_target: bool,
        time: LedgerTime,
    ) -> LedgerResult<Pocket> {
        let target = validate_amount("Target", target)?;
        let mut next = self.require(pocket_id)?.clone();
        next.target = Some(target);
        next.lock_on_target = lock_on_target;
        Ok(self.commit_update(next, time))
    }

    pub fn toggle_lock(&mut self, pocket_id: &str, time: LedgerTime) -> LedgerResult<Pocket> {
        let current = self.require(pocket_id)?;
        if current.is_locked && !current.can_unlock() {
            if let Some(target) = current.target {
                return Err(PocketError::LockDenied {
                    pocket_id: pocket_id.to_string(),
                    balance: current.balance,
                    target,
                });
            }
        }
        let mut next = current.clone();
        next.is_locked = !next.is_locked;
        Ok(self.commit_update(next, time))
    }

    // ── daily goal ──────────────────────────────────────────────────────

    pub fn set_daily_goal(
        &mut self,
        pocket_id: &str,
        goal: Decimal,
        time: LedgerTime,
    ) -> LedgerResult<Pocket> {
        let goal = validate_amount("Daily goal", goal)?;
        let mut next = self.require(pocket_id)?.clone();
        next.daily_goal = Some(goal);
        next.daily_goal_progress = Decimal::ZERO;
        next.daily_goal_enabled = true;
        Ok(self.commit_update(next, time))
    }

    /// Flips goal tracking. Streak and progress restart from zero either way.
    pub fn toggle_daily_goal(&mut self, pocket_id: &str, time: LedgerTime) -> LedgerResult<Pocket> {
        let current = self.require(pocket_id)?;
        if !current.daily_goal_enabled && current.daily_goal.is_none() {
            return Err(PocketError::InvalidArgument(
                "Set a daily goal amount before enabling daily goal tracking".to_string(),
            ));
        }
        let mut next = current.clone();
        next.daily_goal_enabled = !next.daily_goal_enabled;
        next.streak = 0;
        next.daily_goal_progress = Decimal::ZERO;
        next.last_goal_met_date = None;
        Ok(self.commit_update(next, time))
    }

    // ── sharing ─────────────────────────────────────────────────────────

    pub fn share_pocket(
        &mut self,
        pocket_id: &str,
        recipient: &str,
        time: LedgerTime,
    ) -> LedgerResult<Pocket> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(PocketError::InvalidArgument(
                "Recipient cannot be empty".to_string(),
            ));
        }
        let mut next = self.require(pocket_id)?.clone();
        next.shared_with.push(recipient.to_string());
        Ok(self.commit_update(next, time))
    }

    // ── daily pocket mode ───────────────────────────────────────────────

    pub fn set_daily_pocket(&mut self, pocket_id: &str) -> LedgerResult<DailyPocketMode> {
        self.require(pocket_id)?;
        self.mode = DailyPocketMode {
            is_daily_pocket_mode: true,
            daily_pocket_id: Some(pocket_id.to_string()),
        };
        self.push_mode_event();
        Ok(self.mode.clone())
    }

    pub fn toggle_daily_pocket_mode(&mut self) -> DailyPocketMode {
        self.mode.is_daily_pocket_mode = !self.mode.is_daily_pocket_mode;
        if !self.mode.is_daily_pocket_mode {
            self.mode.daily_pocket_id = None;
        }
        self.push_mode_event();
        self.mode.clone()
    }

    // ── internals ───────────────────────────────────────────────────────

    fn insert(&mut self, pocket: Pocket) {
        self.index.insert(pocket.id.clone(), self.pockets.len());
        self.pockets.push(pocket);
    }

    fn require(&self, pocket_id: &str) -> LedgerResult<&Pocket> {
        self.get(pocket_id)
            .ok_or_else(|| PocketError::PocketNotFound(pocket_id.to_string()))
    }

    fn check_mode(&self, pocket_id: &str) -> LedgerResult<()> {
        if self.mode.allows(pocket_id) {
            Ok(())
        } else {
            Err(PocketError::ModeRestricted {
                pocket_id: pocket_id.to_string(),
                daily_pocket_id: self.mode.daily_pocket_id.clone(),
            })
        }
    }

    /// Updates the daily goal fields for a deposit of `amount` on `today`.
    ///
    /// The streak counts once per day, on the deposit whose cumulative progress
    /// first reaches the goal, tracked by `last_goal_met_date`.
    ///
    /// Returns true when this deposit reached the goal for the day.
    fn track_daily_goal(&self, pocket: &mut Pocket, amount: Decimal, today: NaiveDate) -> bool {
        if !pocket.daily_goal_enabled {
            return false;
        }
        let Some(goal) = pocket.daily_goal else {
            return false;
        };

        if pocket.last_deposit_date != Some(today) {
            pocket.daily_goal_progress = Decimal::ZERO;
            if self.streak_policy == StreakPolicy::ResetOnMissedDay {
                let kept = pocket
                    .last_goal_met_date
                    .is_some_and(|met| met == today || is_next_day(met, today));
                if !kept && pocket.streak > 0 {
                    debug!("Pocket {} missed a day, streak reset", pocket.id);
                    pocket.streak = 0;
                }
            }
        }

        let before = pocket.daily_goal_progress;
        pocket.daily_goal_progress = before.checked_add(amount).unwrap_or(goal).min(goal);
        pocket.last_deposit_date = Some(today);

        let reached = before < goal && pocket.daily_goal_progress >= goal;
        if reached && pocket.last_goal_met_date != Some(today) {
            pocket.streak += 1;
            pocket.last_goal_met_date = Some(today);
            return true;
        }
        false
    }

    fn commit_movement(
        &mut self,
        next: Pocket,
        amount: Decimal,
        movement: Movement,
        time: LedgerTime,
    ) -> MovementReceipt {
        let pocket = self.replace(next, time);
        let activity = PocketActivity {
            id: Uuid::now_v7().to_string(),
            pocket_id: pocket.id.clone(),
            kind: movement.kind,
            amount,
            balance_after: pocket.balance,
            counterparty: movement.counterparty,
            reference: movement.reference,
            occurred_at: time.at,
        };
        debug!(
            "{} of {} on pocket {}, balance now {}",
            activity.kind.as_str(),
            amount,
            pocket.id,
            pocket.balance
        );
        // Unbounded for the process lifetime; state is in-memory only.
        self.activities.push(activity.clone());
        self.pending_events.push(DomainEvent::balance_changed(
            pocket.id.clone(),
            activity.kind,
            amount,
            pocket.balance,
        ));
        MovementReceipt { pocket, activity }
    }

    fn commit_update(&mut self, next: Pocket, time: LedgerTime) -> Pocket {
        let pocket = self.replace(next, time);
        debug!("Updated pocket {}", pocket.id);
        self.pending_events
            .push(DomainEvent::pocket_updated(pocket.id.clone()));
        pocket
    }

    fn replace(&mut self, mut next: Pocket, time: LedgerTime) -> Pocket {
        next.version += 1;
        next.updated_at = time.at;
        let slot = self.index[&next.id];
        self.pockets[slot] = next.clone();
        next
    }

    fn push_mode_event(&mut self) {
        debug!(
            "Daily pocket mode {} ({:?})",
            if self.mode.is_daily_pocket_mode { "on" } else { "off" },
            self.mode.daily_pocket_id
        );
        self.pending_events
            .push(DomainEvent::daily_pocket_mode_changed(
                self.mode.is_daily_pocket_mode,
                self.mode.daily_pocket_id.clone(),
            ));
    }
}
