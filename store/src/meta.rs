//! Metadata storage trait.

use crate::StoreError;
use kudos_types::ContributionId;

/// Meta key holding the schema version (4 bytes, little-endian).
pub const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Meta key holding the last issued contribution id (8 bytes, big-endian).
pub const LAST_CONTRIBUTION_ID_KEY: &str = "last_contribution_id";

/// Trait for storing ledger metadata (schema version, id counter).
///
/// A generic key-value table for bookkeeping that doesn't belong in any
/// domain-specific store.
pub trait MetaStore {
    /// Store a metadata value.
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value.
    fn get_meta(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Get the current database schema version; 0 for a fresh database.
    fn get_schema_version(&self) -> Result<u32, StoreError> {
        match self.get_meta(SCHEMA_VERSION_KEY) {
            Ok(bytes) => {
                let arr: [u8; 4] = bytes.as_slice().try_into().map_err(|_| {
                    StoreError::Corruption("schema_version has unexpected byte length".into())
                })?;
                Ok(u32::from_le_bytes(arr))
            }
            Err(StoreError::NotFound(_)) => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Set the database schema version.
    fn set_schema_version(&self, version: u32) -> Result<(), StoreError> {
        self.put_meta(SCHEMA_VERSION_KEY, &version.to_le_bytes())
    }

    /// Raw value of the last issued contribution id; 0 when none was issued.
    fn last_contribution_id(&self) -> Result<u64, StoreError> {
        match self.get_meta(LAST_CONTRIBUTION_ID_KEY) {
            Ok(bytes) => {
                let arr: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    StoreError::Corruption("last_contribution_id has unexpected byte length".into())
                })?;
                Ok(ContributionId::from_key(arr).raw())
            }
            Err(StoreError::NotFound(_)) => Ok(0),
            Err(e) => Err(e),
        }
    }
}
