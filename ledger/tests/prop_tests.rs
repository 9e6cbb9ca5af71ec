use proptest::prelude::*;

use kudos_ledger::{KudosLedger, TierClassifier};
use kudos_nullables::NullStore;
use kudos_types::{Identity, LogicalTime, Score, Tier};

fn initialized() -> KudosLedger<NullStore> {
    let mut ledger = KudosLedger::new(NullStore::new());
    ledger.initialize(&Identity::new("owner")).unwrap();
    ledger
}

proptest! {
    /// Returned ids are exactly 1..=n in call order, whoever submits.
    #[test]
    fn ids_are_gap_free(submitters in prop::collection::vec(0u8..5, 1..40)) {
        let mut ledger = initialized();
        for (i, who) in submitters.iter().enumerate() {
            let cid = ledger
                .submit(&Identity::new(format!("c{who}")), "x", LogicalTime::new(i as u64))
                .unwrap();
            prop_assert_eq!(cid.raw(), i as u64 + 1);
        }
    }

    /// A higher score never maps to a lower tier.
    #[test]
    fn classification_is_monotonic(a in 0u64..2_000, b in 0u64..2_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            TierClassifier::classify(Score::new(lo)) <= TierClassifier::classify(Score::new(hi))
        );
    }

    /// Verification order does not change the final total, and the total is
    /// the plain sum of the awarded scores.
    #[test]
    fn totals_are_order_independent(
        scores in prop::collection::vec(0u64..1_000, 1..12),
        seed in any::<u64>(),
    ) {
        let owner = Identity::new("owner");
        let who = Identity::new("A");

        let mut ledger = initialized();
        let ids: Vec<_> = scores
            .iter()
            .map(|_| ledger.submit(&who, "x", LogicalTime::new(0)).unwrap())
            .collect();

        // Deterministic shuffle driven by the seed.
        let mut order: Vec<usize> = (0..ids.len()).collect();
        let mut state = seed;
        for i in (1..order.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            order.swap(i, (state >> 33) as usize % (i + 1));
        }
        for i in order {
            ledger.verify(&owner, ids[i], scores[i]).unwrap();
        }

        let profile = ledger.get_profile(&who).unwrap();
        prop_assert_eq!(profile.total_score, Score::new(scores.iter().sum()));
        prop_assert_eq!(profile.contribution_count, scores.len() as u64);
        prop_assert!(ledger.audit().unwrap().is_healthy());
    }

    /// Refresh lands on the classifier's tier and repeating it changes nothing.
    #[test]
    fn refresh_matches_classifier(score in 0u64..1_000) {
        let owner = Identity::new("owner");
        let who = Identity::new("A");
        let mut ledger = initialized();
        let cid = ledger.submit(&who, "x", LogicalTime::new(0)).unwrap();
        ledger.verify(&owner, cid, score).unwrap();

        let first = ledger.refresh_tier(&owner, &who).unwrap();
        let second = ledger.refresh_tier(&owner, &who).unwrap();
        prop_assert_eq!(first, TierClassifier::classify(Score::new(score)));
        prop_assert_eq!(first, second);
        prop_assert!(first >= Tier::Bronze);
    }
}
