//! LMDB environment setup.

use std::path::Path;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use crate::LmdbError;

/// Database names that make up a Kudos LMDB environment.
pub const DATABASES: &[&str] = &["admins", "contributions", "contributors", "meta"];

/// Wraps the LMDB environment and all database handles.
///
/// Layout:
/// - `admins`: [`identity_key`](crate::identity_key) → identity bytes
/// - `contributions`: big-endian id → bincode [`ContributionRecord`](kudos_store::ContributionRecord)
/// - `contributors`: [`identity_key`](crate::identity_key) → bincode [`ContributorProfile`](kudos_store::ContributorProfile)
/// - `meta`: owner, id counter, schema version
pub struct LmdbEnvironment {
    env: Env,
    pub(crate) admins_db: Database<Bytes, Bytes>,
    pub(crate) contributions_db: Database<Bytes, Bytes>,
    pub(crate) contributors_db: Database<Bytes, Bytes>,
    pub(crate) meta_db: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    ///
    /// The directory is created if missing. `max_dbs` must be at least the
    /// number of entries in [`DATABASES`].
    pub fn open(path: &Path, max_dbs: u32, map_size: usize) -> Result<Self, LmdbError> {
        if (max_dbs as usize) < DATABASES.len() {
            return Err(LmdbError::Heed(format!(
                "max_dbs {} is below the {} databases the ledger needs",
                max_dbs,
                DATABASES.len()
            )));
        }
        std::fs::create_dir_all(path)?;

        // SAFETY: the environment is opened once per process for this path
        // and the memory map is never accessed outside heed's API.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(max_dbs)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let admins_db = env.create_database(&mut wtxn, Some("admins"))?;
        let contributions_db = env.create_database(&mut wtxn, Some("contributions"))?;
        let contributors_db = env.create_database(&mut wtxn, Some("contributors"))?;
        let meta_db = env.create_database(&mut wtxn, Some("meta"))?;
        wtxn.commit()?;

        tracing::info!(path = %path.display(), map_size, "opened LMDB environment");

        Ok(Self {
            env,
            admins_db,
            contributions_db,
            contributors_db,
            meta_db,
        })
    }

    pub(crate) fn env(&self) -> &Env {
        &self.env
    }

    /// Flush the memory map to disk.
    pub fn force_sync(&self) -> Result<(), LmdbError> {
        self.env.force_sync()?;
        Ok(())
    }
}
