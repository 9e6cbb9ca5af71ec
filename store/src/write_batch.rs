//! Staged writes for a single ledger operation.
//!
//! A batch is plain data: building one never touches the backend. Backends
//! apply it inside one transaction in [`crate::LedgerStore::commit`]. A batch
//! that is dropped instead of committed has no effect.

use kudos_types::{ContributionId, Identity};

use crate::contribution::ContributionRecord;
use crate::contributor::ContributorProfile;

#[derive(Clone, Debug, Default)]
pub struct WriteBatch {
    owner: Option<Identity>,
    admins: Vec<Identity>,
    contributions: Vec<ContributionRecord>,
    profiles: Vec<ContributorProfile>,
    last_contribution_id: Option<ContributionId>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Admin table ─────────────────────────────────────────────────────

    pub fn set_owner(&mut self, owner: Identity) {
        self.owner = Some(owner);
    }

    pub fn put_admin(&mut self, identity: Identity) {
        if !self.admins.contains(&identity) {
            self.admins.push(identity);
        }
    }

    // ── Contributions ───────────────────────────────────────────────────

    /// Stage a record; a later put for the same id replaces the earlier one.
    pub fn put_contribution(&mut self, record: ContributionRecord) {
        self.contributions.retain(|r| r.id != record.id);
        self.contributions.push(record);
    }

    pub fn set_last_contribution_id(&mut self, id: ContributionId) {
        self.last_contribution_id = Some(id);
    }

    // ── Profiles ────────────────────────────────────────────────────────

    /// Stage a profile; a later put for the same identity replaces the earlier one.
    pub fn put_profile(&mut self, profile: ContributorProfile) {
        self.profiles.retain(|p| p.identity != profile.identity);
        self.profiles.push(profile);
    }

    /// A profile staged earlier in this batch.
    pub fn staged_profile(&self, identity: &Identity) -> Option<&ContributorProfile> {
        self.profiles.iter().find(|p| &p.identity == identity)
    }

    // ── Accessors used by backends ──────────────────────────────────────

    pub fn owner(&self) -> Option<&Identity> {
        self.owner.as_ref()
    }

    pub fn admins(&self) -> &[Identity] {
        &self.admins
    }

    pub fn contributions(&self) -> &[ContributionRecord] {
        &self.contributions
    }

    pub fn profiles(&self) -> &[ContributorProfile] {
        &self.profiles
    }

    pub fn last_contribution_id(&self) -> Option<ContributionId> {
        self.last_contribution_id
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
            && self.admins.is_empty()
            && self.contributions.is_empty()
            && self.profiles.is_empty()
            && self.last_contribution_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_types::{Details, LogicalTime, Score};

    fn record(id: u64) -> ContributionRecord {
        ContributionRecord::submitted(
            ContributionId::new(id),
            Identity::new("alice"),
            LogicalTime::new(7),
            Details::new("docs").unwrap(),
        )
    }

    #[test]
    fn new_batch_is_empty() {
        assert!(WriteBatch::new().is_empty());
    }

    #[test]
    fn restaging_a_record_replaces_it() {
        let mut batch = WriteBatch::new();
        batch.put_contribution(record(1));
        batch.put_contribution(record(1).into_verified(Score::new(10)));
        assert_eq!(batch.contributions().len(), 1);
        assert!(batch.contributions()[0].verified);
    }

    #[test]
    fn duplicate_admins_are_collapsed() {
        let mut batch = WriteBatch::new();
        batch.put_admin(Identity::new("root"));
        batch.put_admin(Identity::new("root"));
        assert_eq!(batch.admins().len(), 1);
    }

    #[test]
    fn staged_profile_lookup() {
        let mut batch = WriteBatch::new();
        let alice = Identity::new("alice");
        batch.put_profile(ContributorProfile::first_submission(alice.clone()));
        assert_eq!(batch.staged_profile(&alice).unwrap().contribution_count, 1);
        assert!(batch.staged_profile(&Identity::new("bob")).is_none());
    }
}
