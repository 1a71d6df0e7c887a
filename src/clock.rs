//! Clock abstraction for relative-time formatting.

use chrono::{DateTime, Utc};

/// A source of "now" for relative-time computation.
///
/// Production code uses [`SystemClock`]; tests inject a [`FixedClock`] to
/// make relative output deterministic.
pub trait Clock {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The ambient system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
