//! Nullable store: thread-safe in-memory storage for testing.

use kudos_store::admin::AdminStore;
use kudos_store::contribution::{ContributionRecord, ContributionStore};
use kudos_store::contributor::{ContributorProfile, ContributorStore};
use kudos_store::meta::{MetaStore, LAST_CONTRIBUTION_ID_KEY};
use kudos_store::{LedgerStore, StoreError, WriteBatch};
use kudos_types::{ContributionId, Identity};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    owner: Option<Identity>,
    admins: BTreeSet<Identity>,
    contributions: BTreeMap<u64, ContributionRecord>,
    profiles: HashMap<Identity, ContributorProfile>,
    meta: HashMap<String, Vec<u8>>,
}

/// An in-memory ledger store for testing.
///
/// All tables sit behind one mutex, so a batch commit is atomic with respect
/// to every reader. [`NullStore::fail_next_commit`] makes the next commit
/// return an error without applying anything.
pub struct NullStore {
    tables: Mutex<Tables>,
    fail_next_commit: AtomicBool,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            fail_next_commit: AtomicBool::new(false),
        }
    }

    /// Make the next [`LedgerStore::commit`] fail with a backend error.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    /// Overwrite a record directly, bypassing the ledger. Used by tests that
    /// need to simulate a corrupted store.
    pub fn force_contribution(&self, record: ContributionRecord) {
        self.tables()
            .contributions
            .insert(record.id.raw(), record);
    }

    /// Overwrite a profile directly, bypassing the ledger.
    pub fn force_profile(&self, profile: ContributorProfile) {
        self.tables()
            .profiles
            .insert(profile.identity.clone(), profile);
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminStore for NullStore {
    fn get_owner(&self) -> Result<Option<Identity>, StoreError> {
        Ok(self.tables().owner.clone())
    }

    fn is_admin(&self, identity: &Identity) -> Result<bool, StoreError> {
        Ok(self.tables().admins.contains(identity))
    }

    fn iter_admins(&self) -> Result<Vec<Identity>, StoreError> {
        Ok(self.tables().admins.iter().cloned().collect())
    }
}

impl ContributionStore for NullStore {
    fn get_contribution(&self, id: &ContributionId) -> Result<ContributionRecord, StoreError> {
        self.tables()
            .contributions
            .get(&id.raw())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("contribution {}", id)))
    }

    fn contribution_count(&self) -> Result<u64, StoreError> {
        Ok(self.tables().contributions.len() as u64)
    }

    fn iter_contributions(&self) -> Result<Vec<ContributionRecord>, StoreError> {
        Ok(self.tables().contributions.values().cloned().collect())
    }
}

impl ContributorStore for NullStore {
    fn get_profile(&self, identity: &Identity) -> Result<ContributorProfile, StoreError> {
        self.tables()
            .profiles
            .get(identity)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("profile {}", identity)))
    }

    fn profile_count(&self) -> Result<u64, StoreError> {
        Ok(self.tables().profiles.len() as u64)
    }

    fn iter_profiles(&self) -> Result<Vec<ContributorProfile>, StoreError> {
        let mut profiles: Vec<_> = self.tables().profiles.values().cloned().collect();
        profiles.sort_by(|a, b| a.identity.cmp(&b.identity));
        Ok(profiles)
    }
}

impl MetaStore for NullStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.tables().meta.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.tables()
            .meta
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("meta key '{}'", key)))
    }
}

impl LedgerStore for NullStore {
    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Backend("injected commit failure".into()));
        }

        let mut tables = self.tables();
        if let Some(owner) = batch.owner() {
            tables.owner = Some(owner.clone());
        }
        for admin in batch.admins() {
            tables.admins.insert(admin.clone());
        }
        for record in batch.contributions() {
            tables.contributions.insert(record.id.raw(), record.clone());
        }
        for profile in batch.profiles() {
            tables
                .profiles
                .insert(profile.identity.clone(), profile.clone());
        }
        if let Some(id) = batch.last_contribution_id() {
            tables
                .meta
                .insert(LAST_CONTRIBUTION_ID_KEY.to_string(), id.to_key().to_vec());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_types::{Details, LogicalTime};

    fn alice() -> Identity {
        Identity::new("alice")
    }

    fn record(id: u64) -> ContributionRecord {
        ContributionRecord::submitted(
            ContributionId::new(id),
            alice(),
            LogicalTime::new(1),
            Details::new("fix typo").unwrap(),
        )
    }

    #[test]
    fn commit_applies_every_table() {
        let store = NullStore::new();
        let mut batch = WriteBatch::new();
        batch.set_owner(alice());
        batch.put_admin(alice());
        batch.put_contribution(record(1));
        batch.put_profile(ContributorProfile::first_submission(alice()));
        batch.set_last_contribution_id(ContributionId::new(1));
        store.commit(batch).unwrap();

        assert_eq!(store.get_owner().unwrap(), Some(alice()));
        assert!(store.is_admin(&alice()).unwrap());
        assert_eq!(store.get_contribution(&ContributionId::new(1)).unwrap(), record(1));
        assert_eq!(store.get_profile(&alice()).unwrap().contribution_count, 1);
        assert_eq!(store.last_contribution_id().unwrap(), 1);
    }

    #[test]
    fn failed_commit_applies_nothing() {
        let store = NullStore::new();
        let mut batch = WriteBatch::new();
        batch.put_contribution(record(1));
        batch.set_last_contribution_id(ContributionId::new(1));
        store.fail_next_commit();
        assert!(store.commit(batch.clone()).is_err());
        assert_eq!(store.contribution_count().unwrap(), 0);
        assert_eq!(store.last_contribution_id().unwrap(), 0);

        // Failure is one-shot.
        store.commit(batch).unwrap();
        assert_eq!(store.contribution_count().unwrap(), 1);
    }

    #[test]
    fn missing_keys_are_not_found() {
        let store = NullStore::new();
        assert!(matches!(
            store.get_contribution(&ContributionId::new(9)),
            Err(StoreError::NotFound(_))
        ));
        assert!(store.find_profile(&alice()).unwrap().is_none());
        assert!(!store.is_admin(&alice()).unwrap());
        assert_eq!(store.get_owner().unwrap(), None);
    }

    #[test]
    fn contributions_iterate_in_id_order() {
        let store = NullStore::new();
        for id in [3, 1, 2] {
            store.force_contribution(record(id));
        }
        let ids: Vec<u64> = store
            .iter_contributions()
            .unwrap()
            .iter()
            .map(|r| r.id.raw())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn schema_version_defaults_to_zero() {
        let store = NullStore::new();
        assert_eq!(store.get_schema_version().unwrap(), 0);
        store.set_schema_version(1).unwrap();
        assert_eq!(store.get_schema_version().unwrap(), 1);
    }
}
