//! Signed dot-product compatibility scoring.

use dramwise_core::{LikedSet, PreferenceWeights, ScoreTable, Scorer, SignProfile, SignProfiles};

/// Scores a profile as `Σ sign × weight` over all attributes.
///
/// An attribute adds to the score when the candidate sits on the preferred
/// side of the mean and subtracts otherwise, scaled by the preference's
/// confidence. No normalisation is applied.
///
/// # Examples
/// ```
/// use dramwise_core::{AttributeSet, PreferenceWeights, Scorer, Sign, SignProfile};
/// use dramwise_scorer::SignedDotScorer;
///
/// # fn main() -> Result<(), dramwise_core::AttributeSetError> {
/// let weights = PreferenceWeights::new(AttributeSet::new(["X", "Y"])?, vec![1.0, -0.5]);
/// let profile = SignProfile::new(vec![Sign::Positive, Sign::Positive]);
/// assert_eq!(SignedDotScorer.score(&profile, &weights), 0.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SignedDotScorer;

impl Scorer for SignedDotScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a weighted sum of unit signs"
    )]
    fn score(&self, profile: &SignProfile, weights: &PreferenceWeights) -> f64 {
        profile
            .signs()
            .iter()
            .zip(weights.as_slice())
            .fold(0.0, |acc, (sign, weight)| acc + sign.as_f64() * weight)
    }
}

/// Score every profiled distillery that is not in `liked`.
#[must_use]
pub fn score_candidates<S>(
    scorer: &S,
    profiles: &SignProfiles,
    liked: &LikedSet,
    weights: &PreferenceWeights,
) -> ScoreTable
where
    S: Scorer + ?Sized,
{
    ScoreTable::new(
        profiles
            .iter()
            .filter(|(name, _)| !liked.contains(name))
            .map(|(name, profile)| (name.to_owned(), scorer.score(profile, weights)))
            .collect(),
    )
}
