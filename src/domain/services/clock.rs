use chrono::{DateTime, Utc};

/// Source of the current time, injected so the age rule is testable.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
