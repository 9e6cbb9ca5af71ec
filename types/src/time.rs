//! Logical timestamp supplied by the host.
//!
//! The ledger never reads a wall clock. The host passes its own monotonic
//! sequence value (a block height or similar) into every submission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value of the host's monotonic logical clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogicalTime(u64);

impl LogicalTime {
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LogicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
