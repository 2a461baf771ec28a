use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use super::pockets_ledger::{LedgerTime, PocketLedger};
use super::pockets_model::{
    DailyPocketMode, Movement, MovementReceipt, Pocket, PocketActivity, PocketSummary,
};
use super::pockets_traits::PocketServiceTrait;
use crate::errors::{Error, Result};
use crate::events::DomainEventSink;
use crate::settings::LedgerSettings;
use crate::utils::time_utils::{Clock, SystemClock};

/// Service owning the pocket ledger.
///
/// All writes go through a single write lock so each transition is applied
/// as one atomic step, even when several clients share the service.
pub struct PocketService {
    ledger: RwLock<PocketLedger>,
    settings: LedgerSettings,
    clock: Arc<dyn Clock>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PocketService {
    /// Creates an empty ledger using the wall clock in the configured timezone.
    pub fn new(settings: LedgerSettings, event_sink: Arc<dyn DomainEventSink>) -> Self {
        let clock = Arc::new(SystemClock::new(settings.timezone));
        Self::with_clock(settings, clock, event_sink)
    }

    pub fn with_clock(
        settings: LedgerSettings,
        clock: Arc<dyn Clock>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            ledger: RwLock::new(PocketLedger::new(settings.streak_policy)),
            settings,
            clock,
            event_sink,
        }
    }

    /// Replaces the ledger content with previously created pockets.
    ///
    /// Activity history and daily pocket mode start empty.
    pub fn restore(&self, pockets: Vec<Pocket>) -> Result<()> {
        let ledger = PocketLedger::with_pockets(self.settings.streak_policy, pockets)?;
        let count = ledger.list().len();
        let mut guard = self
            .ledger
            .write()
            .map_err(|_| Error::Unexpected("pocket ledger lock poisoned".to_string()))?;
        *guard = ledger;
        debug!("Restored {} pockets", count);
        Ok(())
    }

    pub fn settings(&self) -> &LedgerSettings {
        &self.settings
    }

    fn now(&self) -> LedgerTime {
        LedgerTime::new(self.clock.now(), self.clock.today())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PocketLedger>> {
        self.ledger
            .read()
            .map_err(|_| Error::Unexpected("pocket ledger lock poisoned".to_string()))
    }

    /// Runs one ledger transition under the write lock and emits its events
    /// once the lock is released.
    fn write<T>(
        &self,
        operation: &str,
        apply: impl FnOnce(&mut PocketLedger, LedgerTime) -> std::result::Result<T, super::PocketError>,
    ) -> Result<T> {
        let time = self.now();
        let (result, events) = {
            let mut ledger = self
                .ledger
                .write()
                .map_err(|_| Error::Unexpected("pocket ledger lock poisoned".to_string()))?;
            let result = apply(&mut *ledger, time);
            (result, ledger.drain_events())
        };

        match result {
            Ok(value) => {
                self.event_sink.emit_batch(events);
                Ok(value)
            }
            Err(e) => {
                warn!("{} rejected: {}", operation, e);
                Err(e.into())
            }
        }
    }
}

impl PocketServiceTrait for PocketService {
    fn list_pockets(&self) -> Result<Vec<Pocket>> {
        Ok(self.read()?.list().to_vec())
    }

    fn get_pocket(&self, pocket_id: &str) -> Result<Option<Pocket>> {
        Ok(self.read()?.get(pocket_id).cloned())
    }

    fn create_pocket(&self, name: &str) -> Result<String> {
        self.write("create_pocket", |ledger, time| {
            ledger.create_pocket(name, time).map(|p| p.id)
        })
    }

    fn rename_pocket(&self, pocket_id: &str, name: &str) -> Result<Pocket> {
        self.write("rename_pocket", |ledger, time| {
            ledger.rename_pocket(pocket_id, name, time)
        })
    }

    fn deposit(&self, pocket_id: &str, amount: Decimal) -> Result<Pocket> {
        self.write("deposit", |ledger, time| {
            ledger.deposit(pocket_id, amount, time)
        })
    }

    fn spend(&self, pocket_id: &str, amount: Decimal) -> Result<Pocket> {
        self.write("spend", |ledger, time| ledger.spend(pocket_id, amount, time))
    }

    fn credit(
        &self,
        pocket_id: &str,
        amount: Decimal,
        movement: Movement,
    ) -> Result<MovementReceipt> {
        self.write("credit", |ledger, time| {
            ledger.credit(pocket_id, amount, movement, time)
        })
    }

    fn debit(
        &self,
        pocket_id: &str,
        amount: Decimal,
        movement: Movement,
    ) -> Result<MovementReceipt> {
        self.write("debit", |ledger, time| {
            ledger.debit(pocket_id, amount, movement, time)
        })
    }

    fn set_target(
        &self,
        pocket_id: &str,
        target: Decimal,
        lock_on_target: bool,
    ) -> Result<Pocket> {
        self.write("set_target", |ledger, time| {
            ledger.set_target(pocket_id, target, lock_on_target, time)
        })
    }

    fn toggle_lock(&self, pocket_id: &str) -> Result<Pocket> {
        self.write("toggle_lock", |ledger, time| {
            ledger.toggle_lock(pocket_id, time)
        })
    }

    fn set_daily_goal(&self, pocket_id: &str, goal: Decimal) -> Result<Pocket> {
        self.write("set_daily_goal", |ledger, time| {
            ledger.set_daily_goal(pocket_id, goal, time)
        })
    }

    fn toggle_daily_goal(&self, pocket_id: &str) -> Result<Pocket> {
        self.write("toggle_daily_goal", |ledger, time| {
            ledger.toggle_daily_goal(pocket_id, time)
        })
    }

    fn share_pocket(&self, pocket_id: &str, recipient: &str) -> Result<Pocket> {
        self.write("share_pocket", |ledger, time| {
            ledger.share_pocket(pocket_id, recipient, time)
        })
    }

    fn daily_pocket_mode(&self) -> Result<DailyPocketMode> {
        Ok(self.read()?.daily_pocket_mode().clone())
    }

    fn set_daily_pocket(&self, pocket_id: &str) -> Result<DailyPocketMode> {
        self.write("set_daily_pocket", |ledger, _| {
            ledger.set_daily_pocket(pocket_id)
        })
    }

    fn toggle_daily_pocket_mode(&self) -> Result<DailyPocketMode> {
        self.write("toggle_daily_pocket_mode", |ledger, _| {
            Ok(ledger.toggle_daily_pocket_mode())
        })
    }

    fn total_balance(&self) -> Result<Decimal> {
        Ok(self.read()?.total_balance())
    }

    fn summary(&self) -> Result<PocketSummary> {
        let ledger = self.read()?;
        Ok(PocketSummary {
            pocket_count: ledger.list().len(),
            locked_count: ledger.list().iter().filter(|p| p.is_locked).count(),
            total_balance: ledger.total_balance(),
            currency: self.settings.currency.clone(),
        })
    }

    fn list_activities(&self, pocket_id: Option<&str>) -> Result<Vec<PocketActivity>> {
        Ok(self.read()?.activities(pocket_id)?)
    }
}
