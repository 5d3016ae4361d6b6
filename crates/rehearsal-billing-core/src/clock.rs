//! Time sources

use std::fmt;

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Production code injects [`SystemClock`]; tests inject [`FixedClock`].
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current wall-clock instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
