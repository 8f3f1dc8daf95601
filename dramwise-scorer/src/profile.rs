//! Population means and sign profiles.

use dramwise_core::{AttributeMeans, Dataset, Sign, SignProfile, SignProfiles};
use log::debug;

/// Arithmetic mean of each attribute across every distillery in `dataset`.
///
/// # Examples
/// ```
/// use dramwise_core::test_support::worked_example;
/// use dramwise_scorer::compute_means;
///
/// let means = compute_means(&worked_example());
/// assert_eq!(means.as_slice(), &[2.25, 1.75]);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "means divide integer column sums by the row count"
)]
pub fn compute_means(dataset: &Dataset) -> AttributeMeans {
    let count = dataset.len() as f64;
    let mut sums = vec![0_i64; dataset.attributes().len()];
    for (_, record) in dataset.iter() {
        for (sum, value) in sums.iter_mut().zip(record.intensities()) {
            *sum += i64::from(*value);
        }
    }
    AttributeMeans::new(sums.into_iter().map(|sum| sum as f64 / count).collect())
}

/// Reduce every distillery in `dataset` to a [`SignProfile`] relative to the
/// population means.
///
/// Liked and unliked distilleries alike are profiled.
#[must_use]
pub fn compute_profiles(dataset: &Dataset) -> SignProfiles {
    let means = compute_means(dataset);
    let profiles = dataset
        .iter()
        .map(|(name, record)| {
            let signs = record
                .intensities()
                .iter()
                .zip(means.as_slice())
                .map(|(value, mean)| sign_against(*value, *mean))
                .collect();
            (name.to_owned(), SignProfile::new(signs))
        })
        .collect();
    debug!(
        "profiled {} distilleries over {} attributes",
        dataset.len(),
        dataset.attributes().len()
    );
    SignProfiles::new(dataset.attributes().clone(), means, profiles)
}

#[expect(
    clippy::float_arithmetic,
    reason = "the sign of an intensity is taken from its difference to the mean"
)]
fn sign_against(value: i32, mean: f64) -> Sign {
    Sign::of(f64::from(value) - mean)
}
