//! Contribution storage trait.

use crate::StoreError;
use kudos_types::{ContributionId, Details, Identity, LogicalTime, Score};
use serde::{Deserialize, Serialize};

/// A single submitted contribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub id: ContributionId,
    pub contributor: Identity,
    /// Host logical time at submission.
    pub created_at: LogicalTime,
    pub details: Details,
    /// Zero until verified; immutable afterwards.
    pub score: Score,
    pub verified: bool,
}

impl ContributionRecord {
    /// A freshly submitted, unverified record.
    pub fn submitted(
        id: ContributionId,
        contributor: Identity,
        created_at: LogicalTime,
        details: Details,
    ) -> Self {
        Self {
            id,
            contributor,
            created_at,
            details,
            score: Score::ZERO,
            verified: false,
        }
    }

    /// The verified form of this record carrying `score`.
    pub fn into_verified(self, score: Score) -> Self {
        Self {
            score,
            verified: true,
            ..self
        }
    }
}

/// Trait for contribution storage operations.
pub trait ContributionStore {
    fn get_contribution(&self, id: &ContributionId) -> Result<ContributionRecord, StoreError>;
    fn contribution_count(&self) -> Result<u64, StoreError>;

    /// All records in ascending id order.
    fn iter_contributions(&self) -> Result<Vec<ContributionRecord>, StoreError>;

    /// Records submitted by `contributor`, ascending id order.
    fn iter_contributions_by(
        &self,
        contributor: &Identity,
    ) -> Result<Vec<ContributionRecord>, StoreError> {
        Ok(self
            .iter_contributions()?
            .into_iter()
            .filter(|r| &r.contributor == contributor)
            .collect())
    }

    /// Count verified records without keeping them around.
    fn verified_contribution_count(&self) -> Result<u64, StoreError> {
        Ok(self
            .iter_contributions()?
            .iter()
            .filter(|r| r.verified)
            .count() as u64)
    }
}
