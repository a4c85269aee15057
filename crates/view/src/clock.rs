use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of the current wall-clock moment for slot generation.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock and converts it to the clinic's local time.
#[derive(Debug, Clone, Copy)]
pub struct ClinicClock {
    timezone: Tz,
}

impl ClinicClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Clock for ClinicClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

/// Always reports the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
