//! Tracing-backed domain event sink.

use pocketbank_core::events::{DomainEvent, DomainEventSink};

/// Domain event sink for the web server runtime.
///
/// Emits one structured log record per event under the `pocketbank::events`
/// target.
#[derive(Clone, Default)]
pub struct TracingDomainEventSink;

impl TracingDomainEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl DomainEventSink for TracingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match &event {
            DomainEvent::PocketCreated { pocket_id, name } => {
                tracing::info!(target: "pocketbank::events", %pocket_id, %name, "pocket created");
            }
            DomainEvent::PocketUpdated { pocket_id } => {
                tracing::debug!(target: "pocketbank::events", %pocket_id, "pocket updated");
            }
            DomainEvent::BalanceChanged {
                pocket_id,
                kind,
                amount,
                balance,
            } => {
                tracing::info!(
                    target: "pocketbank::events",
                    %pocket_id,
                    kind = kind.as_str(),
                    %amount,
                    %balance,
                    "balance changed"
                );
            }
            DomainEvent::PocketAutoLocked { pocket_id, target } => {
                tracing::info!(target: "pocketbank::events", %pocket_id, %target, "pocket locked on target");
            }
            DomainEvent::DailyGoalReached { pocket_id, streak } => {
                tracing::info!(target: "pocketbank::events", %pocket_id, streak, "daily goal reached");
            }
            DomainEvent::DailyPocketModeChanged {
                enabled,
                daily_pocket_id,
            } => {
                tracing::info!(
                    target: "pocketbank::events",
                    enabled,
                    daily_pocket_id = daily_pocket_id.as_deref().unwrap_or("-"),
                    "daily pocket mode changed"
                );
            }
        }
    }
}
