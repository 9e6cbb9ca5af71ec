//! Contributor profile storage trait.

use crate::StoreError;
use kudos_types::{Identity, Score, Tier};
use serde::{Deserialize, Serialize};

/// Aggregated per-identity profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorProfile {
    pub identity: Identity,
    /// Sum of the scores of this contributor's verified records.
    pub total_score: Score,
    /// Number of records submitted, verified or not.
    pub contribution_count: u64,
    /// Tier as of the last refresh; may lag behind `total_score`.
    pub tier: Tier,
    pub is_active: bool,
}

impl ContributorProfile {
    /// Profile created by a contributor's first submission.
    pub fn first_submission(identity: Identity) -> Self {
        Self {
            identity,
            total_score: Score::ZERO,
            contribution_count: 1,
            tier: Tier::Bronze,
            is_active: true,
        }
    }
}

/// Trait for contributor profile storage operations.
pub trait ContributorStore {
    fn get_profile(&self, identity: &Identity) -> Result<ContributorProfile, StoreError>;
    fn profile_count(&self) -> Result<u64, StoreError>;
    fn iter_profiles(&self) -> Result<Vec<ContributorProfile>, StoreError>;

    /// Like [`get_profile`](Self::get_profile) but maps a missing key to `None`.
    fn find_profile(&self, identity: &Identity) -> Result<Option<ContributorProfile>, StoreError> {
        match self.get_profile(identity) {
            Ok(profile) => Ok(Some(profile)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
