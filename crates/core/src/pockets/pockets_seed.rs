//! Demo pockets shown on first launch.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use super::Pocket;

pub const MAIN_POCKET_ID: &str = "main";
pub const SAVINGS_POCKET_ID: &str = "savings";
pub const EMERGENCY_POCKET_ID: &str = "emergency";

/// Main Account, Savings (shared, locks on target) and a locked Emergency Fund.
pub fn demo_pockets(created_at: DateTime<Utc>) -> Vec<Pocket> {
    let mut main = Pocket::new(
        MAIN_POCKET_ID.to_string(),
        "Main Account".to_string(),
        created_at,
    );
    main.balance = dec!(250000);

    let mut savings = Pocket::new(
        SAVINGS_POCKET_ID.to_string(),
        "Savings".to_string(),
        created_at,
    );
    savings.balance = dec!(175000);
    savings.shared_with = vec!["Alice".to_string()];
    savings.target = Some(dec!(100000));
    savings.lock_on_target = true;

    let mut emergency = Pocket::new(
        EMERGENCY_POCKET_ID.to_string(),
        "Emergency Fund".to_string(),
        created_at,
    );
    emergency.balance = dec!(50000);
    emergency.is_locked = true;
    emergency.target = Some(dec!(100000));

    vec![main, savings, emergency]
}
