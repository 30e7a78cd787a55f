//! Deterministic clock for store and drag-session tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

/// Every read returns the previous instant plus one second. Clones share the
/// counter, so a test can keep one while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct StepClock {
    ticks: Arc<AtomicI64>,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn at(tick: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap() + Duration::seconds(tick)
    }

    /// The instant handed out by the most recent read.
    pub fn last(&self) -> DateTime<Utc> {
        Self::at(self.ticks.load(Ordering::SeqCst) - 1)
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::at(self.ticks.fetch_add(1, Ordering::SeqCst))
    }
}
