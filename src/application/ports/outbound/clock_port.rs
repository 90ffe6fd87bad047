use chrono::{DateTime, NaiveDate, Utc};

/// Time source for claim-day arithmetic and listing timestamps.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
