//! Clock port - Interface for time operations.

use chrono::{DateTime, NaiveDate, Utc};

/// Port for getting the current time.
pub trait Clock: Send + Sync {
    /// Get the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Get the current calendar date, used to derive ages.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
