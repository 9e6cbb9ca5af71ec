//! Append-only contribution records.

use kudos_store::{ContributionRecord, ContributionStore, MetaStore, StoreError, WriteBatch};
use kudos_types::{ContributionId, Details, Identity, LogicalTime, Score};

use crate::LedgerError;

/// View over the contribution table and its id counter.
///
/// Reads go to the store; writes are staged in the caller's batch.
pub struct ContributionLedger<'a, S> {
    store: &'a S,
}

impl<'a, S: ContributionStore + MetaStore> ContributionLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Fetch a record, or `ContributionNotFound`.
    pub fn get(&self, id: ContributionId) -> Result<ContributionRecord, LedgerError> {
        match self.store.get_contribution(&id) {
            Ok(record) => Ok(record),
            Err(StoreError::NotFound(_)) => Err(LedgerError::ContributionNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Last id handed out, staged writes included; 0 when none.
    pub fn last_id(&self, batch: &WriteBatch) -> Result<u64, LedgerError> {
        match batch.last_contribution_id() {
            Some(id) => Ok(id.raw()),
            None => Ok(self.store.last_contribution_id()?),
        }
    }

    /// Stage a new unverified record under the next sequential id.
    ///
    /// No deduplication: identical details from the same contributor get a
    /// fresh id each time.
    pub fn append(
        &self,
        batch: &mut WriteBatch,
        contributor: &Identity,
        details: Details,
        now: LogicalTime,
    ) -> Result<ContributionRecord, LedgerError> {
        let id = ContributionId::next_after(self.last_id(batch)?)?;
        let record = ContributionRecord::submitted(id, contributor.clone(), now, details);
        batch.put_contribution(record.clone());
        batch.set_last_contribution_id(id);
        Ok(record)
    }

    /// Stage the one-way transition of `record` to verified with `score`.
    pub fn mark_verified(
        &self,
        batch: &mut WriteBatch,
        record: ContributionRecord,
        score: Score,
    ) -> Result<ContributionRecord, LedgerError> {
        if record.verified {
            return Err(LedgerError::AlreadyVerified(record.id));
        }
        let verified = record.into_verified(score);
        batch.put_contribution(verified.clone());
        Ok(verified)
    }

    /// Records submitted by `contributor`, in id order.
    pub fn by_contributor(
        &self,
        contributor: &Identity,
    ) -> Result<Vec<ContributionRecord>, LedgerError> {
        Ok(self.store.iter_contributions_by(contributor)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_nullables::NullStore;
    use kudos_store::LedgerStore;

    fn details(s: &str) -> Details {
        Details::new(s).unwrap()
    }

    #[test]
    fn first_id_is_one() {
        let store = NullStore::new();
        let ledger = ContributionLedger::new(&store);
        let mut batch = WriteBatch::new();
        let record = ledger
            .append(&mut batch, &Identity::new("alice"), details("x"), LogicalTime::new(5))
            .unwrap();
        assert_eq!(record.id, ContributionId::FIRST);
        assert_eq!(record.created_at, LogicalTime::new(5));
        assert_eq!(record.score, Score::ZERO);
        assert!(!record.verified);
    }

    #[test]
    fn ids_continue_from_committed_counter() {
        let store = NullStore::new();
        let ledger = ContributionLedger::new(&store);
        let alice = Identity::new("alice");

        let mut batch = WriteBatch::new();
        ledger
            .append(&mut batch, &alice, details("a"), LogicalTime::new(1))
            .unwrap();
        store.commit(batch).unwrap();

        let mut batch = WriteBatch::new();
        let second = ledger
            .append(&mut batch, &alice, details("b"), LogicalTime::new(2))
            .unwrap();
        assert_eq!(second.id.raw(), 2);
    }

    #[test]
    fn appends_within_one_batch_stay_sequential() {
        let store = NullStore::new();
        let ledger = ContributionLedger::new(&store);
        let alice = Identity::new("alice");
        let mut batch = WriteBatch::new();
        let a = ledger
            .append(&mut batch, &alice, details("a"), LogicalTime::new(1))
            .unwrap();
        let b = ledger
            .append(&mut batch, &alice, details("a"), LogicalTime::new(1))
            .unwrap();
        assert_eq!((a.id.raw(), b.id.raw()), (1, 2));
        assert_eq!(batch.last_contribution_id(), Some(ContributionId::new(2)));
    }

    #[test]
    fn get_missing_is_contribution_not_found() {
        let store = NullStore::new();
        let ledger = ContributionLedger::new(&store);
        let err = ledger.get(ContributionId::new(3)).unwrap_err();
        assert!(matches!(err, LedgerError::ContributionNotFound(id) if id.raw() == 3));
    }

    #[test]
    fn mark_verified_is_one_way() {
        let store = NullStore::new();
        let ledger = ContributionLedger::new(&store);
        let record = ContributionRecord::submitted(
            ContributionId::FIRST,
            Identity::new("alice"),
            LogicalTime::new(1),
            details("a"),
        );
        let mut batch = WriteBatch::new();
        let verified = ledger
            .mark_verified(&mut batch, record, Score::new(20))
            .unwrap();
        assert!(verified.verified);
        assert_eq!(verified.score, Score::new(20));

        let err = ledger
            .mark_verified(&mut WriteBatch::new(), verified, Score::new(99))
            .unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyVerified(_)));
    }
}
