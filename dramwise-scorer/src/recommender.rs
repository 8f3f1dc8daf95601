//! The recommendation pipeline: validate, profile, infer, score, rank.

use dramwise_core::{Dataset, LikedSet, RecommendConfig, RecommendError, Recommendations, Scorer};
use log::debug;

use crate::preference::check_likes;
use crate::{SignedDotScorer, compute_profiles, infer_preferences, score_candidates};

/// Runs the full pipeline with a configurable result size and scorer.
///
/// The recommender holds no state between runs; identical inputs always
/// produce identical output.
#[derive(Debug, Clone)]
pub struct Recommender<S = SignedDotScorer> {
    config: RecommendConfig,
    scorer: S,
}

impl Recommender {
    /// Recommender using [`SignedDotScorer`].
    #[must_use]
    pub const fn new(config: RecommendConfig) -> Self {
        Self::with_scorer(config, SignedDotScorer)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommendConfig::default())
    }
}

impl<S: Scorer> Recommender<S> {
    /// Recommender using a custom scorer.
    #[must_use]
    pub const fn with_scorer(config: RecommendConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> RecommendConfig {
        self.config
    }

    /// Rank preferences and recommend distilleries similar to `liked`.
    ///
    /// Validation completes before any computation: the liked set must
    /// hold at least two names, all of them keys of `dataset`.
    ///
    /// # Errors
    /// Returns [`RecommendError::InsufficientLikes`] or
    /// [`RecommendError::UnknownDistillery`] when `liked` is invalid.
    pub fn recommend(
        &self,
        dataset: &Dataset,
        liked: &LikedSet,
    ) -> Result<Recommendations, RecommendError> {
        check_likes(liked, |name| dataset.contains(name))?;

        let profiles = compute_profiles(dataset);
        let weights = infer_preferences(&profiles, liked)?;
        let scores = score_candidates(&self.scorer, &profiles, liked, &weights);
        debug!(
            "scored {} candidates, keeping at most {}",
            scores.len(),
            self.config.limit
        );

        Ok(Recommendations {
            preferences: weights.ranked(),
            recommendations: scores.top(self.config.limit),
        })
    }
}

/// Recommend with the default configuration of eight results.
///
/// # Errors
/// See [`Recommender::recommend`].
///
/// # Examples
/// ```
/// use dramwise_core::test_support::{worked_example, worked_example_likes};
/// use dramwise_scorer::recommend;
///
/// # fn main() -> Result<(), dramwise_core::RecommendError> {
/// let output = recommend(&worked_example(), &worked_example_likes())?;
/// let names: Vec<_> = output.recommendations.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["C", "D"]);
/// # Ok(())
/// # }
/// ```
pub fn recommend(dataset: &Dataset, liked: &LikedSet) -> Result<Recommendations, RecommendError> {
    Recommender::new(RecommendConfig::default()).recommend(dataset, liked)
}
