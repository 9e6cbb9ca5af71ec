//! Admin-gated, write-once verification of contributions.

use kudos_store::{
    ContributionRecord, ContributionStore, ContributorProfile, ContributorStore, MetaStore,
    WriteBatch,
};
use kudos_types::{ContributionId, Identity, Score};

use crate::admin::AdminRegistry;
use crate::contributions::ContributionLedger;
use crate::directory::ContributorDirectory;
use crate::LedgerError;

/// Result of a successful verification, as staged in the batch.
#[derive(Clone, Debug)]
pub struct Verification {
    pub record: ContributionRecord,
    pub profile: ContributorProfile,
}

/// Orchestrates verification: existence, admin rights, write-once, then the
/// record and score updates.
#[derive(Default)]
pub struct VerificationEngine;

impl VerificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Verify contribution `id` with `score` on behalf of `caller`.
    ///
    /// Checks run in a fixed order: the record must exist
    /// (`ContributionNotFound`), the caller must be an admin
    /// (`NotAuthorized`), the record must not be verified yet
    /// (`AlreadyVerified`). Only then are the record and the contributor's
    /// total staged. The contributor's tier is left alone.
    ///
    /// Admins may verify their own contributions.
    pub fn verify<S>(
        &self,
        registry: &AdminRegistry,
        store: &S,
        batch: &mut WriteBatch,
        caller: &Identity,
        id: ContributionId,
        score: Score,
    ) -> Result<Verification, LedgerError>
    where
        S: ContributionStore + ContributorStore + MetaStore,
    {
        let contributions = ContributionLedger::new(store);
        let record = contributions.get(id)?;

        registry.authorize_admin(caller)?;

        let record = contributions.mark_verified(batch, record, score)?;
        let profile =
            ContributorDirectory::new(store).add_score(batch, &record.contributor, score)?;

        Ok(Verification { record, profile })
    }
}
