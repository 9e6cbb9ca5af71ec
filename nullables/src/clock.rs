//! Nullable logical clock: deterministic host sequence for testing.

use kudos_types::LogicalTime;
use std::cell::Cell;

/// A deterministic stand-in for the host's monotonic sequence counter.
///
/// The value only moves when you tell it to.
pub struct NullSequence {
    current: Cell<u64>,
}

impl NullSequence {
    pub fn new(initial: u64) -> Self {
        Self {
            current: Cell::new(initial),
        }
    }

    /// Get the current logical time.
    pub fn now(&self) -> LogicalTime {
        LogicalTime::new(self.current.get())
    }

    /// Advance by `ticks`.
    pub fn advance(&self, ticks: u64) {
        self.current.set(self.current.get() + ticks);
    }

    /// Return the current time, then advance by one tick.
    pub fn tick(&self) -> LogicalTime {
        let now = self.now();
        self.advance(1);
        now
    }

    pub fn set(&self, value: u64) {
        self.current.set(value);
    }
}

impl Default for NullSequence {
    fn default() -> Self {
        Self::new(0)
    }
}
