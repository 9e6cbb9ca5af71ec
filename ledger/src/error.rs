use kudos_types::{ContributionId, Identity, KudosError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("caller {0} is not the owner")]
    NotOwner(Identity),

    #[error("caller {0} is not an admin")]
    NotAuthorized(Identity),

    #[error("contribution {0} not found")]
    ContributionNotFound(ContributionId),

    #[error("no profile for contributor {0}")]
    ProfileNotFound(Identity),

    #[error("contribution {0} is already verified")]
    AlreadyVerified(ContributionId),

    #[error("registry already initialized with owner {0}")]
    AlreadyInitialized(Identity),

    #[error("total score of {0} would overflow")]
    ScoreOverflow(Identity),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] KudosError),

    #[error("storage error: {0}")]
    Storage(#[from] kudos_store::StoreError),
}

impl LedgerError {
    /// Whether this error reports a missing contribution or profile.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ContributionNotFound(_) | Self::ProfileNotFound(_)
        )
    }
}
