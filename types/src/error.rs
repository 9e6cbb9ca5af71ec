//! Errors raised while constructing core values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KudosError {
    #[error("details too long: {len} characters, maximum is {max}")]
    DetailsTooLong { len: usize, max: usize },

    #[error("contribution id space exhausted")]
    IdExhausted,

    #[error("invalid tier: {0}")]
    InvalidTier(String),
}
