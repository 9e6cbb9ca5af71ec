//! Bounded free-text description of a contribution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::KudosError;

/// Maximum length of contribution details, in characters.
pub const MAX_DETAILS_LEN: usize = 256;

/// Contribution details, at most [`MAX_DETAILS_LEN`] characters.
///
/// Length is measured in Unicode scalar values, not bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Details(String);

impl Details {
    pub fn new(text: impl Into<String>) -> Result<Self, KudosError> {
        let text = text.into();
        let len = text.chars().count();
        if len > MAX_DETAILS_LEN {
            return Err(KudosError::DetailsTooLong {
                len,
                max: MAX_DETAILS_LEN,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Details {
    type Error = KudosError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
