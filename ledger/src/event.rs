//! Events emitted after a ledger operation commits.

use kudos_types::{ContributionId, Identity, LogicalTime, Score, Tier};

/// Ledger-level events that observers can subscribe to via the [`EventBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    /// The registry got its owner.
    Initialized { owner: Identity },
    /// A new identity joined the admin set.
    AdminAdded { admin: Identity, by: Identity },
    /// A contribution was recorded.
    ContributionSubmitted {
        id: ContributionId,
        contributor: Identity,
        created_at: LogicalTime,
    },
    /// A contribution was verified and its score credited.
    ContributionVerified {
        id: ContributionId,
        contributor: Identity,
        verifier: Identity,
        score: Score,
        total_score: Score,
    },
    /// A contributor's tier was recomputed.
    TierRefreshed {
        contributor: Identity,
        previous: Tier,
        current: Tier,
    },
}

/// Synchronous fan-out event bus for ledger events.
///
/// Listeners run inline on the committing thread; keep handlers fast.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&LedgerEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &LedgerEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
