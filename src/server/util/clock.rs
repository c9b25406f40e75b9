//! Source of "today" for bookings and the dashboard.
//!
//! The calendar day is always taken from the server's local wall clock at
//! request time, never from the request. Handlers reach it through `AppState`
//! so tests can pin the date.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Current calendar day in the server's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the server's local time zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a single day.
#[cfg(test)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
