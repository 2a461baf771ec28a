use std::sync::Arc;

use crate::{config::Config, domain_events::TracingDomainEventSink};
use chrono::Utc;
use pocketbank_core::{
    events::DomainEventSink,
    pockets::{demo_pockets, PocketService, PocketServiceTrait},
    settings::LedgerSettings,
    transfers::{TransferService, TransferServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub pocket_service: Arc<dyn PocketServiceTrait>,
    pub transfer_service: Arc<dyn TransferServiceTrait>,
    pub settings: LedgerSettings,
}

pub fn init_tracing() {
    let log_format = std::env::var("PB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let event_sink: Arc<dyn DomainEventSink> = Arc::new(TracingDomainEventSink::new());
    let pocket_service = Arc::new(PocketService::new(config.ledger.clone(), event_sink));

    if config.seed_demo {
        let pockets = demo_pockets(Utc::now());
        tracing::info!("Seeding {} demo pockets", pockets.len());
        pocket_service.restore(pockets)?;
    }

    tracing::info!(
        "Ledger ready: currency {}, timezone {}, streak policy {}",
        config.ledger.currency,
        config.ledger.timezone,
        config.ledger.streak_policy.as_str()
    );

    let transfer_service = Arc::new(TransferService::new(pocket_service.clone()));

    Ok(Arc::new(AppState {
        pocket_service,
        transfer_service,
        settings: config.ledger.clone(),
    }))
}
