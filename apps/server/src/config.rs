use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use pocketbank_core::settings::LedgerSettings;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub ledger: LedgerSettings,
    /// Load the demo pockets at startup.
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("PB_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid PB_LISTEN_ADDR")?;
        let cors_allow = env_or("PB_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = parse_timeout_ms(&env_or("PB_REQUEST_TIMEOUT_MS", "30000"))
            .context("Invalid PB_REQUEST_TIMEOUT_MS")?;
        let ledger = LedgerSettings::from_parts(
            std::env::var("PB_CURRENCY").ok().as_deref(),
            std::env::var("PB_TIMEZONE").ok().as_deref(),
            std::env::var("PB_STREAK_POLICY").ok().as_deref(),
        )
        .context("Invalid ledger settings")?;
        let seed_demo = parse_flag(&env_or("PB_SEED_DEMO", "true"));
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            ledger,
            seed_demo,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_timeout_ms(value: &str) -> anyhow::Result<Duration> {
    let ms: u64 = value.trim().parse()?;
    anyhow::ensure!(ms > 0, "timeout must be greater than zero");
    Ok(Duration::from_millis(ms))
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
