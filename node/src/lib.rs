//! Kudos node: wires the contribution ledger to its host.
//!
//! Loads a [`NodeConfig`], sets up structured logging, opens the LMDB
//! environment under the configured data directory, brings its schema up to
//! date, and hands out a ready [`KudosLedger`](kudos_ledger::KudosLedger).

pub mod config;
pub mod error;
pub mod logging;
pub mod node;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use node::LedgerNode;
