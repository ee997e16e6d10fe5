//! Time sources.
//!
//! The rule engine needs the server-local calendar day (for the same-day
//! rule) and a UTC creation timestamp. Both come through [`Clock`] so tests
//! can pin them.

use std::sync::Mutex;

use chrono::{DateTime, Local, NaiveDate, Utc};

/// A source of "today" and "now".
pub trait Clock: Send + Sync {
    /// The current server-local calendar day.
    fn today(&self) -> NaiveDate;

    /// The current instant, used as a record creation timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
///
/// `now` never returns an instant earlier than one it returned before, so
/// creation timestamps follow submission order even if the system clock
/// steps backwards.
#[derive(Debug)]
pub struct SystemClock {
    last_issued: Mutex<DateTime<Utc>>,
}

impl SystemClock {
    /// Creates a wall clock.
    pub fn new() -> Self {
        Self {
            last_issued: Mutex::new(DateTime::<Utc>::MIN_UTC),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        let mut last = self
            .last_issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let now = Utc::now().max(*last);
        *last = now;
        now
    }
}

/// A clock pinned to a fixed day and instant.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use leave_tracker::clock::{Clock, FixedClock};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
/// let clock = FixedClock::new(today, Utc.with_ymd_and_hms(2025, 3, 9, 9, 0, 0).unwrap());
/// assert_eq!(clock.today(), today);
/// ```
#[derive(Debug)]
pub struct FixedClock {
    today: NaiveDate,
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports the given day and instant.
    pub fn new(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self { today, now }
    }

    /// Creates a clock for the given day at midnight UTC.
    pub fn on(today: NaiveDate) -> Self {
        Self::new(today, today.and_time(chrono::NaiveTime::default()).and_utc())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
