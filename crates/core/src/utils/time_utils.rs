use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::{Result, ValidationError};

/// Default timezone for deciding the calendar day of a deposit.
pub const DEFAULT_LEDGER_TZ: Tz = chrono_tz::Asia::Bangkok;

/// Converts a UTC instant to the ledger's calendar date in the given timezone.
pub fn ledger_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Parses an IANA timezone name such as `Asia/Bangkok`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ValidationError::TimeZone(name.to_string()).into())
}

/// Returns true when `later` is the calendar day right after `earlier`.
pub fn is_next_day(earlier: NaiveDate, later: NaiveDate) -> bool {
    earlier.succ_opt() == Some(later)
}

/// Source of the current time for the ledger.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of `now()` in the ledger timezone.
    fn today(&self) -> NaiveDate;
}

/// Wall clock in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_TZ)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        ledger_date_from_utc(Utc::now(), self.tz)
    }
}

/// Clock pinned to an instant that only moves when advanced, for tests.
#[derive(Debug)]
pub struct FixedClock {
    instant: std::sync::RwLock<DateTime<Utc>>,
    tz: Tz,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            instant: std::sync::RwLock::new(instant),
            tz,
        }
    }

    /// Clock at noon UTC on the given date, in UTC.
    pub fn at_date(date: NaiveDate) -> Self {
        let instant = date
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now);
        Self::new(instant, chrono_tz::UTC)
    }

    /// Moves the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        if let Ok(mut guard) = self.instant.write() {
            *guard += chrono::Duration::days(days);
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    fn today(&self) -> NaiveDate {
        ledger_date_from_utc(self.now(), self.tz)
    }
}
