//! The ledger facade: the operations exposed to the host's caller layer.
//!
//! Mutating operations take `&mut self`: the host invokes them one at a
//! time, and each one either commits all of its writes or none. Reads take
//! `&self`.

use kudos_store::{
    AdminStore, ContributionRecord, ContributionStore, ContributorProfile, ContributorStore,
    LedgerStore, WriteBatch,
};
use kudos_types::{ContributionId, Details, Identity, LogicalTime, Score, Tier};

use crate::admin::AdminRegistry;
use crate::audit::{audit, AuditReport};
use crate::contributions::ContributionLedger;
use crate::directory::ContributorDirectory;
use crate::event::{EventBus, LedgerEvent};
use crate::verification::VerificationEngine;
use crate::LedgerError;

/// Summary statistics for the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub contributions: u64,
    pub verified: u64,
    pub contributors: u64,
    pub admins: u64,
}

/// Contribution ledger over a [`LedgerStore`] backend.
pub struct KudosLedger<S> {
    store: S,
    verifier: VerificationEngine,
    events: EventBus,
}

impl<S: LedgerStore> KudosLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            verifier: VerificationEngine::new(),
            events: EventBus::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Register a listener for events of committed operations.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    fn commit(&self, batch: WriteBatch, events: &[LedgerEvent]) -> Result<(), LedgerError> {
        self.store.commit(batch)?;
        for event in events {
            self.events.emit(event);
        }
        Ok(())
    }

    // ── Access control ──────────────────────────────────────────────────

    /// Make `caller` the owner and first admin. One-time.
    pub fn initialize(&mut self, caller: &Identity) -> Result<(), LedgerError> {
        let mut registry = AdminRegistry::load(&self.store)?;
        let mut batch = WriteBatch::new();
        if let Err(e) = registry.initialize(caller, &mut batch) {
            tracing::warn!(caller = %caller, error = %e, "initialize rejected");
            return Err(e);
        }
        self.commit(
            batch,
            &[LedgerEvent::Initialized {
                owner: caller.clone(),
            }],
        )?;
        tracing::info!(owner = %caller, "registry initialized");
        Ok(())
    }

    /// Owner-only: grant admin rights to `identity`. Idempotent.
    pub fn add_admin(&mut self, caller: &Identity, identity: &Identity) -> Result<(), LedgerError> {
        let mut registry = AdminRegistry::load(&self.store)?;
        let mut batch = WriteBatch::new();
        let added = match registry.add_admin(caller, identity, &mut batch) {
            Ok(added) => added,
            Err(e) => {
                tracing::warn!(caller = %caller, admin = %identity, error = %e, "add_admin rejected");
                return Err(e);
            }
        };
        if !added {
            tracing::debug!(admin = %identity, "already an admin");
            return Ok(());
        }
        self.commit(
            batch,
            &[LedgerEvent::AdminAdded {
                admin: identity.clone(),
                by: caller.clone(),
            }],
        )?;
        tracing::info!(admin = %identity, by = %caller, "admin added");
        Ok(())
    }

    /// Whether `identity` may verify. Never fails: a storage error is logged
    /// and reported as `false`.
    pub fn is_admin(&self, identity: &Identity) -> bool {
        match self.store.is_admin(identity) {
            Ok(is_admin) => is_admin,
            Err(e) => {
                tracing::warn!(identity = %identity, error = %e, "admin lookup failed");
                false
            }
        }
    }

    pub fn owner(&self) -> Result<Option<Identity>, LedgerError> {
        Ok(self.store.get_owner()?)
    }

    pub fn admins(&self) -> Result<Vec<Identity>, LedgerError> {
        Ok(self.store.iter_admins()?)
    }

    // ── Contributions ───────────────────────────────────────────────────

    /// Record a contribution by `caller` at host time `now`.
    ///
    /// Returns the new id: 1 for the first submission, then consecutive.
    pub fn submit(
        &mut self,
        caller: &Identity,
        details: impl Into<String>,
        now: LogicalTime,
    ) -> Result<ContributionId, LedgerError> {
        let details = Details::new(details)?;
        let mut batch = WriteBatch::new();
        let record =
            ContributionLedger::new(&self.store).append(&mut batch, caller, details, now)?;
        let profile =
            ContributorDirectory::new(&self.store).upsert_on_submission(&mut batch, caller)?;

        self.commit(
            batch,
            &[LedgerEvent::ContributionSubmitted {
                id: record.id,
                contributor: caller.clone(),
                created_at: now,
            }],
        )?;
        tracing::info!(
            id = %record.id,
            contributor = %caller,
            created_at = now.value(),
            contributions = profile.contribution_count,
            "contribution submitted"
        );
        Ok(record.id)
    }

    /// Admin-only, write-once: assign `score` to contribution `id` and credit
    /// it to the contributor's total.
    pub fn verify(
        &mut self,
        caller: &Identity,
        id: ContributionId,
        score: impl Into<Score>,
    ) -> Result<(), LedgerError> {
        let score = score.into();
        let registry = AdminRegistry::load(&self.store)?;
        let mut batch = WriteBatch::new();
        let outcome = match self
            .verifier
            .verify(&registry, &self.store, &mut batch, caller, id, score)
        {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(id = %id, caller = %caller, error = %e, "verification rejected");
                return Err(e);
            }
        };

        self.commit(
            batch,
            &[LedgerEvent::ContributionVerified {
                id,
                contributor: outcome.record.contributor.clone(),
                verifier: caller.clone(),
                score,
                total_score: outcome.profile.total_score,
            }],
        )?;
        tracing::info!(
            id = %id,
            verifier = %caller,
            contributor = %outcome.record.contributor,
            score = score.points(),
            total = outcome.profile.total_score.points(),
            "contribution verified"
        );
        Ok(())
    }

    pub fn get_contribution(&self, id: ContributionId) -> Result<ContributionRecord, LedgerError> {
        ContributionLedger::new(&self.store).get(id)
    }

    /// Records submitted by `contributor`, in id order.
    pub fn contributions_by(
        &self,
        contributor: &Identity,
    ) -> Result<Vec<ContributionRecord>, LedgerError> {
        ContributionLedger::new(&self.store).by_contributor(contributor)
    }

    pub fn contribution_count(&self) -> Result<u64, LedgerError> {
        Ok(self.store.contribution_count()?)
    }

    /// The most recently issued id, if any.
    pub fn last_contribution_id(&self) -> Result<Option<ContributionId>, LedgerError> {
        let last = ContributionLedger::new(&self.store).last_id(&WriteBatch::new())?;
        Ok((last > 0).then(|| ContributionId::new(last)))
    }

    // ── Profiles and tiers ──────────────────────────────────────────────

    /// Admin-only: recompute `contributor`'s tier from its current total.
    ///
    /// Safe to repeat; with no score change in between the result is the same.
    pub fn refresh_tier(
        &mut self,
        caller: &Identity,
        contributor: &Identity,
    ) -> Result<Tier, LedgerError> {
        let registry = AdminRegistry::load(&self.store)?;
        if let Err(e) = registry.authorize_admin(caller) {
            tracing::warn!(caller = %caller, contributor = %contributor, "tier refresh rejected");
            return Err(e);
        }

        let mut batch = WriteBatch::new();
        let (previous, profile) =
            ContributorDirectory::new(&self.store).refresh_tier(&mut batch, contributor)?;

        self.commit(
            batch,
            &[LedgerEvent::TierRefreshed {
                contributor: contributor.clone(),
                previous,
                current: profile.tier,
            }],
        )?;
        if previous != profile.tier {
            tracing::info!(
                contributor = %contributor,
                from = %previous,
                to = %profile.tier,
                total = profile.total_score.points(),
                "tier changed"
            );
        } else {
            tracing::debug!(contributor = %contributor, tier = %profile.tier, "tier unchanged");
        }
        Ok(profile.tier)
    }

    pub fn get_profile(&self, identity: &Identity) -> Result<ContributorProfile, LedgerError> {
        ContributorDirectory::new(&self.store).get(identity)
    }

    /// Stored tier of `identity`; stale until the next refresh.
    pub fn get_tier(&self, identity: &Identity) -> Result<Tier, LedgerError> {
        Ok(self.get_profile(identity)?.tier)
    }

    // ── Reporting ───────────────────────────────────────────────────────

    pub fn summary(&self) -> Result<LedgerSummary, LedgerError> {
        Ok(LedgerSummary {
            contributions: self.store.contribution_count()?,
            verified: self.store.verified_contribution_count()?,
            contributors: self.store.profile_count()?,
            admins: self.store.admin_count()?,
        })
    }

    /// Re-check the stored state against the ledger invariants.
    pub fn audit(&self) -> Result<AuditReport, LedgerError> {
        let report = audit(&self.store)?;
        if !report.is_healthy() {
            tracing::error!(violations = report.violations.len(), "ledger audit failed");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_nullables::{NullSequence, NullStore};
    use std::sync::{Arc, Mutex};

    fn id(s: &str) -> Identity {
        Identity::new(s)
    }

    fn ledger() -> KudosLedger<NullStore> {
        let mut ledger = KudosLedger::new(NullStore::new());
        ledger.initialize(&id("root")).unwrap();
        ledger
    }

    #[test]
    fn submit_creates_record_and_profile() {
        let mut ledger = ledger();
        let clock = NullSequence::new(40);
        let first = ledger.submit(&id("x"), "bug fix", clock.tick()).unwrap();
        assert_eq!(first, ContributionId::FIRST);

        let record = ledger.get_contribution(first).unwrap();
        assert_eq!(record.contributor, id("x"));
        assert_eq!(record.created_at, LogicalTime::new(40));
        assert_eq!(record.details.as_str(), "bug fix");

        let profile = ledger.get_profile(&id("x")).unwrap();
        assert_eq!(profile.contribution_count, 1);
        assert_eq!(profile.total_score, Score::ZERO);
        assert_eq!(profile.tier, Tier::Bronze);
        assert!(profile.is_active);
    }

    #[test]
    fn oversized_details_are_rejected_without_side_effects() {
        let mut ledger = ledger();
        let err = ledger
            .submit(&id("x"), "z".repeat(257), LogicalTime::new(1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert_eq!(ledger.contribution_count().unwrap(), 0);
        assert_eq!(ledger.last_contribution_id().unwrap(), None);
    }

    #[test]
    fn owner_is_an_admin_after_initialize() {
        let ledger = ledger();
        assert!(ledger.is_admin(&id("root")));
        assert!(!ledger.is_admin(&id("x")));
        assert_eq!(ledger.owner().unwrap(), Some(id("root")));
    }

    #[test]
    fn initialize_is_one_time() {
        let mut ledger = ledger();
        let err = ledger.initialize(&id("mallory")).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyInitialized(_)));
        assert_eq!(ledger.owner().unwrap(), Some(id("root")));
        assert!(!ledger.is_admin(&id("mallory")));
    }

    #[test]
    fn add_admin_is_idempotent() {
        let mut ledger = ledger();
        ledger.add_admin(&id("root"), &id("alice")).unwrap();
        ledger.add_admin(&id("root"), &id("alice")).unwrap();
        assert_eq!(ledger.admins().unwrap(), vec![id("alice"), id("root")]);
    }

    #[test]
    fn refresh_tier_requires_admin() {
        let mut ledger = ledger();
        ledger.submit(&id("x"), "docs", LogicalTime::new(1)).unwrap();
        let err = ledger.refresh_tier(&id("x"), &id("x")).unwrap_err();
        assert!(matches!(err, LedgerError::NotAuthorized(_)));
    }

    #[test]
    fn get_tier_of_unknown_is_not_found() {
        let ledger = ledger();
        assert!(ledger.get_tier(&id("nobody")).unwrap_err().is_not_found());
    }

    #[test]
    fn events_follow_successful_commits_only() {
        let mut ledger = KudosLedger::new(NullStore::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        ledger.subscribe(Box::new(move |e: &LedgerEvent| sink.lock().unwrap().push(e.clone())));

        ledger.initialize(&id("root")).unwrap();
        let first = ledger.submit(&id("x"), "a", LogicalTime::new(3)).unwrap();
        assert!(ledger.verify(&id("x"), first, 5u64).is_err());
        ledger.verify(&id("root"), first, 5u64).unwrap();

        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            LedgerEvent::ContributionSubmitted {
                id: first,
                contributor: id("x"),
                created_at: LogicalTime::new(3),
            }
        );
        assert!(matches!(
            events[2],
            LedgerEvent::ContributionVerified { total_score, .. } if total_score == Score::new(5)
        ));
    }

    #[test]
    fn summary_counts_tables() {
        let mut ledger = ledger();
        ledger.add_admin(&id("root"), &id("alice")).unwrap();
        let a = ledger.submit(&id("x"), "a", LogicalTime::new(1)).unwrap();
        ledger.submit(&id("y"), "b", LogicalTime::new(2)).unwrap();
        ledger.verify(&id("alice"), a, 10u64).unwrap();
        assert_eq!(
            ledger.summary().unwrap(),
            LedgerSummary {
                contributions: 2,
                verified: 1,
                contributors: 2,
                admins: 2,
            }
        );
    }
}
