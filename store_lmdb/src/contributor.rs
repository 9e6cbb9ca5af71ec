//! LMDB implementation of ContributorStore.
//!
//! Profiles are keyed by [`identity_key`]; the profile value carries the
//! full identity.

use kudos_store::contributor::{ContributorProfile, ContributorStore};
use kudos_store::StoreError;
use kudos_types::Identity;

use crate::key::identity_key;
use crate::{LmdbEnvironment, LmdbError};

impl ContributorStore for LmdbEnvironment {
    fn get_profile(&self, identity: &Identity) -> Result<ContributorProfile, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let bytes = self
            .contributors_db
            .get(&rtxn, &identity_key(identity))
            .map_err(LmdbError::from)?
            .ok_or_else(|| LmdbError::NotFound(format!("profile {}", identity)))?;
        let profile = bincode::deserialize(bytes).map_err(LmdbError::from)?;
        Ok(profile)
    }

    fn profile_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        Ok(self.contributors_db.len(&rtxn).map_err(LmdbError::from)?)
    }

    fn iter_profiles(&self) -> Result<Vec<ContributorProfile>, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let mut profiles = Vec::new();
        for result in self.contributors_db.iter(&rtxn).map_err(LmdbError::from)? {
            let (_key, val) = result.map_err(LmdbError::from)?;
            profiles.push(bincode::deserialize::<ContributorProfile>(val).map_err(LmdbError::from)?);
        }
        profiles.sort_by(|a, b| a.identity.cmp(&b.identity));
        Ok(profiles)
    }
}
