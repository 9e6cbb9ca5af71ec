//! Score → tier mapping.

use kudos_types::{Score, Tier};

/// Lowest score that earns [`Tier::Silver`].
pub const SILVER_THRESHOLD: Score = Score::new(100);
/// Lowest score that earns [`Tier::Gold`].
pub const GOLD_THRESHOLD: Score = Score::new(250);
/// Lowest score that earns [`Tier::Platinum`].
pub const PLATINUM_THRESHOLD: Score = Score::new(500);

/// Maps an accumulated score to a tier. Lower bounds are inclusive.
pub struct TierClassifier;

impl TierClassifier {
    pub fn classify(score: Score) -> Tier {
        Tier::ALL
            .into_iter()
            .rev()
            .find(|tier| score >= Self::threshold(*tier))
            .unwrap_or(Tier::Bronze)
    }

    /// The lowest score that classifies as `tier`.
    pub fn threshold(tier: Tier) -> Score {
        match tier {
            Tier::Bronze => Score::ZERO,
            Tier::Silver => SILVER_THRESHOLD,
            Tier::Gold => GOLD_THRESHOLD,
            Tier::Platinum => PLATINUM_THRESHOLD,
        }
    }
}
