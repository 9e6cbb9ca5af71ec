//! Contribution ledger core.
//!
//! Contributors submit contributions; a small set of admins verifies each one
//! exactly once, assigning it a score. Scores accumulate per contributor, and
//! an explicit refresh maps the accumulated score to a recognition tier.
//!
//! Every mutating operation stages its writes in a
//! [`WriteBatch`](kudos_store::WriteBatch) and commits them in one go once all
//! preconditions have passed, so a failed operation leaves no trace.

pub mod admin;
pub mod audit;
pub mod contributions;
pub mod directory;
pub mod error;
pub mod event;
pub mod ledger;
pub mod tier;
pub mod verification;

pub use admin::AdminRegistry;
pub use audit::{audit, AuditReport, Violation};
pub use contributions::ContributionLedger;
pub use directory::ContributorDirectory;
pub use error::LedgerError;
pub use event::{EventBus, LedgerEvent};
pub use ledger::{KudosLedger, LedgerSummary};
pub use tier::TierClassifier;
pub use verification::{Verification, VerificationEngine};
