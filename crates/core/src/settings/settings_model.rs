//! Ledger settings models.

use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY;
use crate::errors::{Error, Result};
use crate::utils::time_utils::{parse_timezone, DEFAULT_LEDGER_TZ};

/// What happens to a streak when a day passes without the daily goal being met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreakPolicy {
    /// The next deposit after a missed day zeroes the streak before it is evaluated.
    #[default]
    ResetOnMissedDay,
    /// Streaks only reset when daily goal tracking is toggled.
    ToggleOnly,
}

impl StreakPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakPolicy::ResetOnMissedDay => "reset-on-missed-day",
            StreakPolicy::ToggleOnly => "toggle-only",
        }
    }
}

impl FromStr for StreakPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "reset-on-missed-day" => Ok(StreakPolicy::ResetOnMissedDay),
            "toggle-only" => Ok(StreakPolicy::ToggleOnly),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown streak policy '{}'",
                other
            ))),
        }
    }
}

/// Settings shared by every pocket in a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSettings {
    pub currency: String,
    pub timezone: Tz,
    pub streak_policy: StreakPolicy,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            timezone: DEFAULT_LEDGER_TZ,
            streak_policy: StreakPolicy::default(),
        }
    }
}

impl LedgerSettings {
    /// Builds settings from raw string values, falling back to defaults for `None`.
    pub fn from_parts(
        currency: Option<&str>,
        timezone: Option<&str>,
        streak_policy: Option<&str>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let currency = match currency.map(str::trim) {
            Some(c) if c.len() == 3 && c.chars().all(|ch| ch.is_ascii_alphabetic()) => {
                c.to_ascii_uppercase()
            }
            Some(c) => {
                return Err(Error::InvalidConfigValue(format!(
                    "currency must be a 3-letter code, got '{}'",
                    c
                )))
            }
            None => defaults.currency,
        };
        let timezone = match timezone {
            Some(tz) => parse_timezone(tz)?,
            None => defaults.timezone,
        };
        let streak_policy = match streak_policy {
            Some(p) => p.parse()?,
            None => defaults.streak_policy,
        };

        Ok(Self {
            currency,
            timezone,
            streak_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LedgerSettings::default();
        assert_eq!(settings.currency, "THB");
        assert_eq!(settings.timezone, chrono_tz::Asia::Bangkok);
        assert_eq!(settings.streak_policy, StreakPolicy::ResetOnMissedDay);
    }

    #[test]
    fn test_from_parts() {
        let settings =
            LedgerSettings::from_parts(Some("usd"), Some("Europe/Paris"), Some("TOGGLE_ONLY"))
                .unwrap();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.timezone, chrono_tz::Europe::Paris);
        assert_eq!(settings.streak_policy, StreakPolicy::ToggleOnly);
    }

    #[test]
    fn test_from_parts_rejects_bad_values() {
        assert!(LedgerSettings::from_parts(Some("BAHT"), None, None).is_err());
        assert!(LedgerSettings::from_parts(None, Some("Nowhere/City"), None).is_err());
        assert!(LedgerSettings::from_parts(None, None, Some("sometimes")).is_err());
    }

    #[test]
    fn test_streak_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&StreakPolicy::ResetOnMissedDay).unwrap(),
            "\"RESET_ON_MISSED_DAY\""
        );
        assert_eq!(
            "reset-on-missed-day".parse::<StreakPolicy>().unwrap(),
            StreakPolicy::ResetOnMissedDay
        );
    }
}
