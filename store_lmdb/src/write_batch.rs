//! Batch commit: applies a [`WriteBatch`] inside a single LMDB write
//! transaction.
//!
//! If any put fails the transaction is dropped without commit and LMDB
//! rolls every staged write back.

use kudos_store::meta::LAST_CONTRIBUTION_ID_KEY;
use kudos_store::{LedgerStore, StoreError, WriteBatch};

use crate::admin::OWNER_KEY;
use crate::key::identity_key;
use crate::{LmdbEnvironment, LmdbError};

impl LmdbEnvironment {
    fn apply(&self, batch: &WriteBatch) -> Result<(), LmdbError> {
        let mut wtxn = self.env().write_txn()?;

        if let Some(owner) = batch.owner() {
            self.meta_db.put(&mut wtxn, OWNER_KEY, owner.as_bytes())?;
        }
        for admin in batch.admins() {
            self.admins_db
                .put(&mut wtxn, &identity_key(admin), admin.as_bytes())?;
        }
        for record in batch.contributions() {
            let bytes = bincode::serialize(record)?;
            self.contributions_db
                .put(&mut wtxn, &record.id.to_key(), &bytes)?;
        }
        for profile in batch.profiles() {
            let bytes = bincode::serialize(profile)?;
            self.contributors_db
                .put(&mut wtxn, &identity_key(&profile.identity), &bytes)?;
        }
        if let Some(id) = batch.last_contribution_id() {
            self.meta_db
                .put(&mut wtxn, LAST_CONTRIBUTION_ID_KEY.as_bytes(), &id.to_key())?;
        }

        wtxn.commit()?;
        Ok(())
    }
}

impl LedgerStore for LmdbEnvironment {
    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }
        self.apply(&batch).map_err(|e| {
            tracing::error!(error = %e, "batch commit failed, transaction rolled back");
            StoreError::from(e)
        })
    }
}
