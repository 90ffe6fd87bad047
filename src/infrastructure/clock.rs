//! Clock adapters

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::application::ports::outbound::ClockPort;

/// Wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for harnesses and tests.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Midnight UTC on the given date.
    pub fn on_date(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += Duration::days(days);
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_by_days() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let clock = FixedClock::on_date(date);
        assert_eq!(clock.today(), date);
        clock.advance_days(2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }
}
