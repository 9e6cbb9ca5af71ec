//! Fixed-width LMDB keys for identity-keyed tables.
//!
//! Identities are opaque strings of any length, including empty, while LMDB
//! keys must be non-empty and at most 511 bytes. The `admins` and
//! `contributors` databases are therefore keyed by the Blake2b-256 digest of
//! the identity; the identity itself is kept in the stored value.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use kudos_types::Identity;

use crate::LmdbError;

type Blake2b256 = Blake2b<U32>;

/// Width of every identity key.
pub const IDENTITY_KEY_LEN: usize = 32;

/// The database key for `identity`.
pub fn identity_key(identity: &Identity) -> [u8; IDENTITY_KEY_LEN] {
    let mut hasher = Blake2b256::new();
    hasher.update(identity.as_bytes());
    let result = hasher.finalize();
    let mut output = [0u8; IDENTITY_KEY_LEN];
    output.copy_from_slice(&result);
    output
}

/// Decode an identity stored as raw UTF-8 in a value.
pub(crate) fn identity_from_bytes(bytes: &[u8]) -> Result<Identity, LmdbError> {
    let s = std::str::from_utf8(bytes).map_err(|e| LmdbError::Serialization(e.to_string()))?;
    Ok(Identity::new(s))
}
