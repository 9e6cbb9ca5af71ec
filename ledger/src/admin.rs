//! Owner/admin access control.
//!
//! The registry is a plain value loaded from the store and passed to every
//! check that needs it, so authorization is a pure function of
//! `(registry, caller)`.

use std::collections::BTreeSet;

use kudos_store::{AdminStore, WriteBatch};
use kudos_types::Identity;

use crate::LedgerError;

/// The owner identity plus the set of identities allowed to verify.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminRegistry {
    owner: Option<Identity>,
    admins: BTreeSet<Identity>,
}

impl AdminRegistry {
    /// Read the current owner and admin set from `store`.
    pub fn load(store: &impl AdminStore) -> Result<Self, LedgerError> {
        Ok(Self {
            owner: store.get_owner()?,
            admins: store.iter_admins()?.into_iter().collect(),
        })
    }

    pub fn owner(&self) -> Option<&Identity> {
        self.owner.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.owner.is_some()
    }

    /// Pure lookup; unknown identities are simply not admins.
    pub fn is_admin(&self, identity: &Identity) -> bool {
        self.admins.contains(identity)
    }

    pub fn admins(&self) -> impl Iterator<Item = &Identity> {
        self.admins.iter()
    }

    /// Fails with `NotOwner` unless `caller` is the owner.
    pub fn authorize_owner(&self, caller: &Identity) -> Result<(), LedgerError> {
        match &self.owner {
            Some(owner) if owner == caller => Ok(()),
            _ => Err(LedgerError::NotOwner(caller.clone())),
        }
    }

    /// Fails with `NotAuthorized` unless `caller` is an admin.
    pub fn authorize_admin(&self, caller: &Identity) -> Result<(), LedgerError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(LedgerError::NotAuthorized(caller.clone()))
        }
    }

    /// Make `caller` the owner and its first admin.
    ///
    /// One-time: once an owner exists every further call fails with
    /// `AlreadyInitialized`, whoever the caller is.
    pub fn initialize(
        &mut self,
        caller: &Identity,
        batch: &mut WriteBatch,
    ) -> Result<(), LedgerError> {
        if let Some(owner) = &self.owner {
            return Err(LedgerError::AlreadyInitialized(owner.clone()));
        }
        self.owner = Some(caller.clone());
        self.admins.insert(caller.clone());
        batch.set_owner(caller.clone());
        batch.put_admin(caller.clone());
        Ok(())
    }

    /// Owner-only insertion of `identity` into the admin set.
    ///
    /// Returns `false` when `identity` already was an admin, in which case
    /// nothing is staged.
    pub fn add_admin(
        &mut self,
        caller: &Identity,
        identity: &Identity,
        batch: &mut WriteBatch,
    ) -> Result<bool, LedgerError> {
        self.authorize_owner(caller)?;
        if !self.admins.insert(identity.clone()) {
            return Ok(false);
        }
        batch.put_admin(identity.clone());
        Ok(true)
    }
}
