//! Sign profiles: each distillery's intensities reduced to "at or above the
//! population mean" versus "below it".

use std::collections::BTreeMap;

use crate::AttributeSet;

/// Direction of an intensity relative to the attribute mean.
///
/// # Examples
/// ```
/// use dramwise_core::Sign;
///
/// assert_eq!(Sign::of(-0.25), Sign::Negative);
/// assert_eq!(Sign::of(0.0), Sign::Positive);
/// assert_eq!(Sign::of(1.75).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Strictly below the mean.
    Negative,
    /// At or above the mean.
    Positive,
}

impl Sign {
    /// Classify a difference from the mean.
    ///
    /// Only strictly negative values are [`Sign::Negative`]; zero (and NaN)
    /// are [`Sign::Positive`], so a profile never carries a zero entry.
    #[must_use]
    pub fn of(difference: f64) -> Self {
        if difference < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Numeric value, `-1` or `+1`.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Positive => 1,
        }
    }

    /// Numeric value as `f64`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }
}

/// Per-attribute signs for one distillery, in attribute order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignProfile {
    signs: Vec<Sign>,
}

impl SignProfile {
    /// Wrap signs that are already aligned with an attribute set.
    #[must_use]
    pub const fn new(signs: Vec<Sign>) -> Self {
        Self { signs }
    }

    /// Sign at attribute `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sign> {
        self.signs.get(index).copied()
    }

    /// Signs in attribute order.
    #[must_use]
    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signs.len()
    }

    /// Report whether the profile has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }
}

/// Arithmetic mean of every attribute across a whole dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeMeans {
    means: Vec<f64>,
}

impl AttributeMeans {
    /// Wrap means aligned with an attribute set.
    #[must_use]
    pub const fn new(means: Vec<f64>) -> Self {
        Self { means }
    }

    /// Mean for attribute `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.means.get(index).copied()
    }

    /// Means in attribute order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.means
    }
}

/// Sign profiles for every distillery of a dataset together with the means
/// they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct SignProfiles {
    attributes: AttributeSet,
    means: AttributeMeans,
    profiles: BTreeMap<String, SignProfile>,
}

impl SignProfiles {
    /// Assemble profiles computed against `means`.
    #[must_use]
    pub const fn new(
        attributes: AttributeSet,
        means: AttributeMeans,
        profiles: BTreeMap<String, SignProfile>,
    ) -> Self {
        Self {
            attributes,
            means,
            profiles,
        }
    }

    /// Attribute set the profiles are aligned with.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Population means used as the sign threshold.
    #[must_use]
    pub const fn means(&self) -> &AttributeMeans {
        &self.means
    }

    /// Profile for `distillery`.
    #[must_use]
    pub fn get(&self, distillery: &str) -> Option<&SignProfile> {
        self.profiles.get(distillery)
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Report whether no profiles are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterate over `(distillery, profile)` pairs in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &SignProfile)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }
}
