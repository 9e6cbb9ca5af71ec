//! LMDB implementation of AdminStore.
//!
//! The owner lives in the meta table under [`OWNER_KEY`] as raw identity
//! bytes. Admins are stored in the `admins` database keyed by
//! [`identity_key`] with the identity bytes as the value.

use kudos_store::admin::AdminStore;
use kudos_store::StoreError;
use kudos_types::Identity;

use crate::key::{identity_from_bytes, identity_key};
use crate::{LmdbEnvironment, LmdbError};

pub(crate) const OWNER_KEY: &[u8] = b"owner";

impl AdminStore for LmdbEnvironment {
    fn get_owner(&self) -> Result<Option<Identity>, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let owner = self
            .meta_db
            .get(&rtxn, OWNER_KEY)
            .map_err(LmdbError::from)?
            .map(identity_from_bytes)
            .transpose()?;
        Ok(owner)
    }

    fn is_admin(&self, identity: &Identity) -> Result<bool, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let found = self
            .admins_db
            .get(&rtxn, &identity_key(identity))
            .map_err(LmdbError::from)?;
        Ok(found.is_some())
    }

    fn iter_admins(&self) -> Result<Vec<Identity>, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let mut admins = Vec::new();
        for result in self.admins_db.iter(&rtxn).map_err(LmdbError::from)? {
            let (_key, val) = result.map_err(LmdbError::from)?;
            admins.push(identity_from_bytes(val)?);
        }
        // Key order is digest order.
        admins.sort();
        Ok(admins)
    }

    fn admin_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        Ok(self.admins_db.len(&rtxn).map_err(LmdbError::from)?)
    }
}
