//! Preference inference from the liked distilleries' sign profiles.
//!
//! Each attribute's weight is the mean of the liked signs divided by their
//! sample variance plus one. Unanimous attributes keep a weight of `±1`;
//! disagreement shrinks the weight towards zero.

use dramwise_core::{
    LikedSet, MIN_LIKED, PreferenceWeights, RecommendError, Sign, SignProfile, SignProfiles,
};
use log::debug;

/// Added to the sample variance before dividing.
pub const VARIANCE_DAMPING: f64 = 1.0;

/// Infer per-attribute preference weights from the profiles of `liked`.
///
/// # Errors
/// Returns [`RecommendError::InsufficientLikes`] when fewer than
/// [`MIN_LIKED`] distilleries are liked, or fewer than [`MIN_LIKED`] of
/// them carry a sign for some attribute, and
/// [`RecommendError::UnknownDistillery`] when a liked name has no profile.
///
/// # Examples
/// ```
/// use dramwise_core::test_support::{worked_example, worked_example_likes};
/// use dramwise_scorer::{compute_profiles, infer_preferences};
///
/// # fn main() -> Result<(), dramwise_core::RecommendError> {
/// let profiles = compute_profiles(&worked_example());
/// let weights = infer_preferences(&profiles, &worked_example_likes())?;
/// assert_eq!(weights.as_slice(), &[0.0, 0.0]);
/// # Ok(())
/// # }
/// ```
pub fn infer_preferences(
    profiles: &SignProfiles,
    liked: &LikedSet,
) -> Result<PreferenceWeights, RecommendError> {
    check_likes(liked, |name| profiles.get(name).is_some())?;
    let liked_profiles: Vec<&SignProfile> =
        liked.iter().filter_map(|name| profiles.get(name)).collect();

    let weights = (0..profiles.attributes().len())
        .map(|index| {
            let votes: Vec<Sign> = liked_profiles
                .iter()
                .filter_map(|profile| profile.get(index))
                .collect();
            damped_mean(&votes).ok_or(RecommendError::InsufficientLikes {
                required: MIN_LIKED,
                found: votes.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("inferred preferences from {} liked distilleries", liked.len());
    Ok(PreferenceWeights::new(profiles.attributes().clone(), weights))
}

/// Mean of `votes` divided by their sample variance plus
/// [`VARIANCE_DAMPING`].
///
/// Returns `None` for fewer than two votes, where sample variance is
/// undefined.
///
/// # Examples
/// ```
/// use dramwise_core::Sign;
/// use dramwise_scorer::damped_mean;
///
/// assert_eq!(damped_mean(&[Sign::Negative, Sign::Negative]), Some(-1.0));
/// assert_eq!(damped_mean(&[Sign::Positive, Sign::Negative]), Some(0.0));
/// assert_eq!(damped_mean(&[Sign::Positive]), None);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "weights are a ratio of the vote mean and sample variance"
)]
pub fn damped_mean(votes: &[Sign]) -> Option<f64> {
    if votes.len() < MIN_LIKED {
        return None;
    }
    let count = votes.len() as f64;
    let values = || votes.iter().map(|sign| sign.as_f64());
    let mean = values().fold(0.0, |acc, value| acc + value) / count;
    let squared = values().fold(0.0, |acc, value| {
        let deviation = value - mean;
        acc + deviation * deviation
    });
    let variance = squared / (count - 1.0);
    Some(mean / (variance + VARIANCE_DAMPING))
}

/// Validate the liked set before any computation.
///
/// The count is checked before membership.
pub(crate) fn check_likes(
    liked: &LikedSet,
    is_known: impl Fn(&str) -> bool,
) -> Result<(), RecommendError> {
    if liked.len() < MIN_LIKED {
        return Err(RecommendError::InsufficientLikes {
            required: MIN_LIKED,
            found: liked.len(),
        });
    }
    let unknown: Vec<String> = liked
        .iter()
        .filter(|name| !is_known(*name))
        .map(str::to_owned)
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(RecommendError::UnknownDistillery { names: unknown })
    }
}
