//! Fundamental types for the Kudos contribution ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! identities, contribution ids, scores, logical timestamps, detail text and tiers.

pub mod details;
pub mod error;
pub mod id;
pub mod identity;
pub mod score;
pub mod tier;
pub mod time;

pub use details::{Details, MAX_DETAILS_LEN};
pub use error::KudosError;
pub use id::ContributionId;
pub use identity::Identity;
pub use score::Score;
pub use tier::Tier;
pub use time::LogicalTime;
