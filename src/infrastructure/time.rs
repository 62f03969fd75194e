use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock in UTC; stamps `created_at` and anchors the admin date filters.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
