//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies of the ledger (the host's logical clock and its
//! durable store) are abstracted away. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem
//!
//! Usage: swap the LMDB backend for [`NullStore`] in tests.

pub mod clock;
pub mod store;

pub use clock::NullSequence;
pub use store::NullStore;
