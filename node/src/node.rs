use kudos_ledger::KudosLedger;
use kudos_store_lmdb::{LmdbEnvironment, Migrator};

use crate::{NodeConfig, NodeError};

/// A contribution ledger backed by an LMDB environment on disk.
pub struct LedgerNode {
    config: NodeConfig,
    schema_version: u32,
    ledger: KudosLedger<LmdbEnvironment>,
}

impl LedgerNode {
    /// Open (or create) the ledger under `config.data_dir`.
    ///
    /// Creates the directory if needed, opens the LMDB environment, and runs
    /// any pending schema migrations before the ledger is handed out.
    pub fn open(config: &NodeConfig) -> Result<Self, NodeError> {
        let map_size = config.map_size_bytes()?;
        std::fs::create_dir_all(&config.data_dir)?;

        let env = LmdbEnvironment::open(&config.data_dir, config.max_dbs, map_size)?;
        let schema_version = Migrator::run(&env)?;

        tracing::info!(
            data_dir = %config.data_dir.display(),
            schema_version,
            "ledger node ready"
        );

        Ok(Self {
            config: config.clone(),
            schema_version,
            ledger: KudosLedger::new(env),
        })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn ledger(&self) -> &KudosLedger<LmdbEnvironment> {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut KudosLedger<LmdbEnvironment> {
        &mut self.ledger
    }

    /// Flush LMDB buffers to disk.
    pub fn sync(&self) -> Result<(), NodeError> {
        self.ledger.store().force_sync()?;
        Ok(())
    }

    /// Sync and release the environment.
    pub fn close(self) -> Result<(), NodeError> {
        self.sync()?;
        tracing::info!(data_dir = %self.config.data_dir.display(), "ledger node closed");
        Ok(())
    }
}
