//! Abstract storage traits for the Kudos contribution ledger.
//!
//! Every storage backend (LMDB, in-memory for testing) implements these
//! traits. The rest of the codebase depends only on the traits.
//!
//! Reads go straight to the backend. Writes are never applied piecemeal:
//! an operation stages everything it wants to change in a [`WriteBatch`] and
//! hands it to [`LedgerStore::commit`], which applies the whole batch or
//! nothing.

pub mod admin;
pub mod contribution;
pub mod contributor;
pub mod error;
pub mod meta;
pub mod write_batch;

pub use admin::AdminStore;
pub use contribution::{ContributionRecord, ContributionStore};
pub use contributor::{ContributorProfile, ContributorStore};
pub use error::StoreError;
pub use meta::MetaStore;
pub use write_batch::WriteBatch;

/// A complete ledger backend: every table plus atomic batch commit.
pub trait LedgerStore: AdminStore + ContributionStore + ContributorStore + MetaStore {
    /// Apply every staged write in `batch` atomically.
    ///
    /// On error nothing from the batch is visible to subsequent reads.
    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;
}
