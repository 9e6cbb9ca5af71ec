//! Read-only invariant audit over stored ledger state.
//!
//! Recomputes every contributor aggregate from the contribution records and
//! compares it with what the directory holds. Violations are collected into
//! the report rather than returned as errors; only storage failures abort.

use std::collections::{BTreeMap, HashMap};

use kudos_store::{ContributionStore, ContributorStore, MetaStore};
use kudos_types::{ContributionId, Identity, Score};

use crate::LedgerError;

/// A broken ledger invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Ids are not exactly `1..=n`.
    IdGap {
        expected: ContributionId,
        found: ContributionId,
    },
    /// The stored counter disagrees with the highest record id.
    CounterMismatch { counter: u64, highest: u64 },
    /// An unverified record carries a non-zero score.
    UnverifiedScore { id: ContributionId, score: Score },
    /// A record's contributor has no profile.
    MissingProfile { contributor: Identity },
    /// A profile exists without any record behind it.
    OrphanProfile { contributor: Identity },
    /// `total_score` differs from the sum of verified scores.
    ScoreMismatch {
        contributor: Identity,
        stored: Score,
        expected: Option<Score>,
    },
    /// `contribution_count` differs from the number of records.
    CountMismatch {
        contributor: Identity,
        stored: u64,
        expected: u64,
    },
}

/// Summary of an audit run.
#[derive(Clone, Debug, Default)]
pub struct AuditReport {
    pub contributions_checked: u64,
    pub profiles_checked: u64,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    /// Returns `true` if no violations were detected.
    pub fn is_healthy(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Default)]
struct Expected {
    count: u64,
    verified: Vec<Score>,
}

/// Audit the invariants of the stored ledger.
pub fn audit<S>(store: &S) -> Result<AuditReport, LedgerError>
where
    S: ContributionStore + ContributorStore + MetaStore,
{
    let mut report = AuditReport::default();
    let mut expected: BTreeMap<Identity, Expected> = BTreeMap::new();

    let records = store.iter_contributions()?;
    let mut highest = 0u64;
    for (index, record) in records.iter().enumerate() {
        report.contributions_checked += 1;
        let want = ContributionId::new(index as u64 + 1);
        if record.id != want {
            report.violations.push(Violation::IdGap {
                expected: want,
                found: record.id,
            });
        }
        highest = highest.max(record.id.raw());
        if !record.verified && !record.score.is_zero() {
            report.violations.push(Violation::UnverifiedScore {
                id: record.id,
                score: record.score,
            });
        }
        let entry = expected.entry(record.contributor.clone()).or_default();
        entry.count += 1;
        if record.verified {
            entry.verified.push(record.score);
        }
    }

    let counter = store.last_contribution_id()?;
    if counter != highest {
        report
            .violations
            .push(Violation::CounterMismatch { counter, highest });
    }

    let profiles: HashMap<Identity, _> = store
        .iter_profiles()?
        .into_iter()
        .map(|p| (p.identity.clone(), p))
        .collect();
    report.profiles_checked = profiles.len() as u64;

    for (contributor, want) in &expected {
        let Some(profile) = profiles.get(contributor) else {
            report.violations.push(Violation::MissingProfile {
                contributor: contributor.clone(),
            });
            continue;
        };
        let sum = Score::checked_sum(&want.verified);
        if sum != Some(profile.total_score) {
            report.violations.push(Violation::ScoreMismatch {
                contributor: contributor.clone(),
                stored: profile.total_score,
                expected: sum,
            });
        }
        if profile.contribution_count != want.count {
            report.violations.push(Violation::CountMismatch {
                contributor: contributor.clone(),
                stored: profile.contribution_count,
                expected: want.count,
            });
        }
    }

    let mut orphans: Vec<&Identity> = profiles
        .keys()
        .filter(|identity| !expected.contains_key(*identity))
        .collect();
    orphans.sort();
    for contributor in orphans {
        report.violations.push(Violation::OrphanProfile {
            contributor: contributor.clone(),
        });
    }

    Ok(report)
}
