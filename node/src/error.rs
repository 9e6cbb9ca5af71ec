use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("ledger error: {0}")]
    Ledger(#[from] kudos_ledger::LedgerError),

    #[error("storage error: {0}")]
    Storage(#[from] kudos_store_lmdb::LmdbError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
