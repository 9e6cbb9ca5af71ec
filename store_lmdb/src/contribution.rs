//! LMDB implementation of ContributionStore.
//!
//! Keys are big-endian ids, so a plain cursor walk yields records in id order.

use kudos_store::contribution::{ContributionRecord, ContributionStore};
use kudos_store::StoreError;
use kudos_types::ContributionId;

use crate::{LmdbEnvironment, LmdbError};

impl ContributionStore for LmdbEnvironment {
    fn get_contribution(&self, id: &ContributionId) -> Result<ContributionRecord, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let bytes = self
            .contributions_db
            .get(&rtxn, &id.to_key())
            .map_err(LmdbError::from)?
            .ok_or_else(|| LmdbError::NotFound(format!("contribution {}", id)))?;
        let record = bincode::deserialize(bytes).map_err(LmdbError::from)?;
        Ok(record)
    }

    fn contribution_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        Ok(self.contributions_db.len(&rtxn).map_err(LmdbError::from)?)
    }

    fn iter_contributions(&self) -> Result<Vec<ContributionRecord>, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let mut records = Vec::new();
        for result in self.contributions_db.iter(&rtxn).map_err(LmdbError::from)? {
            let (_key, val) = result.map_err(LmdbError::from)?;
            records.push(bincode::deserialize(val).map_err(LmdbError::from)?);
        }
        Ok(records)
    }
}
