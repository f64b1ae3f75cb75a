use chrono::{DateTime, Utc};

use crate::domain::services::clock::Clock;

#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
