//! Sequential contribution identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::KudosError;

/// Identifier of a contribution record.
///
/// Ids are handed out sequentially starting at [`ContributionId::FIRST`].
/// The raw value `0` never names a record; it stands for "nothing assigned
/// yet" in the ledger counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContributionId(u64);

impl ContributionId {
    pub const FIRST: Self = Self(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The id that follows `last`, where `last == 0` means no id was issued yet.
    pub fn next_after(last: u64) -> Result<Self, KudosError> {
        last.checked_add(1).map(Self).ok_or(KudosError::IdExhausted)
    }

    /// Big-endian key bytes; keeps LMDB iteration in id order.
    pub fn to_key(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub fn from_key(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }
}

impl fmt::Display for ContributionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ContributionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
