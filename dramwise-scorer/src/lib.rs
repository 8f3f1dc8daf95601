//! Flavour-profile scoring for the dramwise recommender.
//!
//! The pipeline runs as explicit passes over immutable intermediates:
//! - **Profiling** computes each attribute's population mean and reduces every
//!   distillery to a sign profile: `+1` at or above the mean, `-1` below it.
//! - **Preference inference** turns the liked distilleries' signs into one
//!   weight per attribute, `mean / (sample variance + 1)`, so attributes the
//!   liked whiskies disagree on carry less weight.
//! - **Scoring** takes the signed dot product of each remaining distillery's
//!   profile with the weights and ranks the results.
//!
//! # Examples
//!
//! ```
//! use dramwise_core::{LikedSet, RecommendConfig};
//! use dramwise_core::test_support::sample_whiskies;
//! use dramwise_scorer::Recommender;
//!
//! # fn main() -> Result<(), dramwise_core::RecommendError> {
//! let liked: LikedSet = ["Ardbeg", "Lagavulin"].into_iter().collect();
//! let recommender = Recommender::new(RecommendConfig::with_limit(3));
//! let output = recommender.recommend(&sample_whiskies(), &liked)?;
//! assert_eq!(output.recommendations.len(), 3);
//! assert_eq!(output.preferences.len(), 12);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod preference;
mod profile;
mod recommender;
mod scoring;

pub use preference::{VARIANCE_DAMPING, damped_mean, infer_preferences};
pub use profile::{compute_means, compute_profiles};
pub use recommender::{Recommender, recommend};
pub use scoring::{SignedDotScorer, score_candidates};
