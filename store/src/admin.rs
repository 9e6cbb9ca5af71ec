//! Owner and admin storage trait.

use crate::StoreError;
use kudos_types::Identity;

/// Trait for the access-control table: one owner plus a set of admins.
pub trait AdminStore {
    /// The owner recorded at initialization, if any.
    fn get_owner(&self) -> Result<Option<Identity>, StoreError>;

    /// Whether `identity` is in the admin set.
    fn is_admin(&self, identity: &Identity) -> Result<bool, StoreError>;

    /// All admin identities, in key order.
    fn iter_admins(&self) -> Result<Vec<Identity>, StoreError>;

    fn admin_count(&self) -> Result<u64, StoreError> {
        self.iter_admins().map(|v| v.len() as u64)
    }
}
