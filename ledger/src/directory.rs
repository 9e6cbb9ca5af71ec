//! Per-contributor aggregated profiles.

use kudos_store::{ContributorProfile, ContributorStore, WriteBatch};
use kudos_types::{Identity, Score, Tier};

use crate::tier::TierClassifier;
use crate::LedgerError;

/// View over the contributor table.
///
/// Profile reads check the caller's batch first, so several updates to one
/// profile within an operation compose.
pub struct ContributorDirectory<'a, S> {
    store: &'a S,
}

impl<'a, S: ContributorStore> ContributorDirectory<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Committed profile, or `ProfileNotFound`.
    pub fn get(&self, identity: &Identity) -> Result<ContributorProfile, LedgerError> {
        self.store
            .find_profile(identity)?
            .ok_or_else(|| LedgerError::ProfileNotFound(identity.clone()))
    }

    fn current(
        &self,
        batch: &WriteBatch,
        identity: &Identity,
    ) -> Result<Option<ContributorProfile>, LedgerError> {
        if let Some(staged) = batch.staged_profile(identity) {
            return Ok(Some(staged.clone()));
        }
        Ok(self.store.find_profile(identity)?)
    }

    fn require(
        &self,
        batch: &WriteBatch,
        identity: &Identity,
    ) -> Result<ContributorProfile, LedgerError> {
        self.current(batch, identity)?
            .ok_or_else(|| LedgerError::ProfileNotFound(identity.clone()))
    }

    /// Record one more submission by `contributor`, creating the profile on
    /// first use. Score and tier are left untouched.
    pub fn upsert_on_submission(
        &self,
        batch: &mut WriteBatch,
        contributor: &Identity,
    ) -> Result<ContributorProfile, LedgerError> {
        let profile = match self.current(batch, contributor)? {
            Some(mut profile) => {
                profile.contribution_count += 1;
                profile.is_active = true;
                profile
            }
            None => ContributorProfile::first_submission(contributor.clone()),
        };
        batch.put_profile(profile.clone());
        Ok(profile)
    }

    /// Add `amount` to the contributor's total. The tier is not recomputed.
    pub fn add_score(
        &self,
        batch: &mut WriteBatch,
        contributor: &Identity,
        amount: Score,
    ) -> Result<ContributorProfile, LedgerError> {
        let mut profile = self.require(batch, contributor)?;
        profile.total_score = profile
            .total_score
            .checked_add(amount)
            .ok_or_else(|| LedgerError::ScoreOverflow(contributor.clone()))?;
        batch.put_profile(profile.clone());
        Ok(profile)
    }

    /// Recompute the tier from the current total.
    ///
    /// Returns the previous tier alongside the updated profile.
    pub fn refresh_tier(
        &self,
        batch: &mut WriteBatch,
        contributor: &Identity,
    ) -> Result<(Tier, ContributorProfile), LedgerError> {
        let mut profile = self.require(batch, contributor)?;
        let previous = profile.tier;
        profile.tier = TierClassifier::classify(profile.total_score);
        batch.put_profile(profile.clone());
        Ok((previous, profile))
    }
}
