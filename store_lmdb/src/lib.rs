//! LMDB storage backend for the Kudos contribution ledger.
//!
//! Implements all storage traits from `kudos-store` using the `heed` LMDB bindings.
//! Each logical table maps to one LMDB database within a single environment.

pub mod admin;
pub mod contribution;
pub mod contributor;
pub mod environment;
pub mod error;
pub mod key;
pub mod meta;
pub mod migration;
pub mod write_batch;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use key::{identity_key, IDENTITY_KEY_LEN};
pub use migration::{Migrator, CURRENT_SCHEMA_VERSION};
