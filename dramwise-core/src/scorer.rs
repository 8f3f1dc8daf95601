//! Score candidate distilleries against inferred preferences.
//!
//! The [`Scorer`] trait assigns a compatibility score to a
//! [`SignProfile`](crate::SignProfile) given a user's
//! [`PreferenceWeights`](crate::PreferenceWeights). Scores are collected into
//! a [`ScoreTable`] and ranked for display.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::{PreferenceWeights, Ranked, SignProfile};

/// Calculate a compatibility score for a candidate profile.
///
/// Higher scores indicate a better match. Implementations must be
/// thread-safe (`Send` + `Sync`) and deterministic: the same profile and
/// weights always yield the same score. Scores are raw ranking keys, not
/// percentages, and may be negative.
///
/// # Examples
///
/// ```rust
/// use dramwise_core::{AttributeSet, PreferenceWeights, Scorer, Sign, SignProfile};
///
/// struct CountPositives;
///
/// impl Scorer for CountPositives {
///     fn score(&self, profile: &SignProfile, _weights: &PreferenceWeights) -> f64 {
///         let positives = profile.signs().iter().filter(|s| **s == Sign::Positive).count();
///         f64::from(u32::try_from(positives).unwrap_or(u32::MAX))
///     }
/// }
///
/// let attributes = AttributeSet::new(["X", "Y"]).unwrap();
/// let weights = PreferenceWeights::new(attributes, vec![0.0, 0.0]);
/// let profile = SignProfile::new(vec![Sign::Positive, Sign::Negative]);
/// assert_eq!(CountPositives.score(&profile, &weights), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `profile` according to `weights`.
    fn score(&self, profile: &SignProfile, weights: &PreferenceWeights) -> f64;
}

/// Compatibility scores keyed by candidate distillery.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    scores: BTreeMap<String, f64>,
}

impl ScoreTable {
    /// Wrap a pre-computed map of scores.
    #[must_use]
    pub const fn new(scores: BTreeMap<String, f64>) -> Self {
        Self { scores }
    }

    /// Score for `distillery`, if it was a candidate.
    #[must_use]
    pub fn get(&self, distillery: &str) -> Option<f64> {
        self.scores.get(distillery).copied()
    }

    /// Number of scored candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether no candidates were scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(distillery, score)` pairs in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, f64)> {
        self.scores
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
    }

    /// The `limit` best candidates, by descending score.
    ///
    /// Equal scores are ordered by ascending distillery name. Fewer than
    /// `limit` entries are returned when the table is smaller.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<Ranked> {
        let mut entries: Vec<Ranked> = self
            .iter()
            .map(|(name, score)| Ranked::new(name, score))
            .collect();
        entries.sort_by(|left, right| {
            right
                .weight
                .partial_cmp(&left.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| left.name.cmp(&right.name))
        });
        entries.truncate(limit);
        entries
    }
}
