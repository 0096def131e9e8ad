use chrono::{DateTime, Local, NaiveDate, Utc};

use tally_core::Clock;

/// Real-time clock. Dates are taken in the local time zone, since they are
/// shown to the user as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
