// tests/support/mocks/time.rs
use blogdesk::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic "now" shared by the suite: mid-day, mid-month, mid-year.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at `base` and advances one second per reading, so records created
/// in sequence get distinct `created_at` values.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }

    /// Moves the clock to an absolute instant; later readings step from there.
    pub fn set(&self, at: DateTime<Utc>) {
        let offset = (at - self.base).num_seconds();
        self.ticks.store(offset, Ordering::SeqCst);
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}
