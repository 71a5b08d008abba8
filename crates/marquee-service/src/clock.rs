//! Wall-clock abstraction for purchase timestamps.
//!
//! Timestamps are formatted strings, not instants. The format is part of
//! the persisted ticket layout and of cancellation matching, so two tickets
//! bought in the same second carry equal timestamps.

use chrono::Local;

/// Source of purchase timestamps.
pub trait Clock: Send + Sync {
    /// The current local time, formatted as `dd/mm/yyyy hh:mm:ss`.
    fn now(&self) -> String;
}

/// [`Clock`] backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
    }
}

/// [`Clock`] pinned to one instant (primarily for testing).
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: String,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub fn new(instant: impl Into<String>) -> Self {
        Self {
            instant: instant.into(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.instant.clone()
    }
}
