//! Preference weights inferred from a user's liked distilleries.

use std::cmp::Ordering;

use crate::{AttributeSet, Ranked};

/// Signed per-attribute weights: the sign gives the preferred direction and
/// the magnitude the confidence in it.
///
/// Weights are not normalised; their relative scale is each attribute's
/// influence on the compatibility score.
///
/// # Examples
/// ```
/// use dramwise_core::{AttributeSet, PreferenceWeights};
///
/// # fn main() -> Result<(), dramwise_core::AttributeSetError> {
/// let attributes = AttributeSet::new(["Smoky", "Floral"])?;
/// let weights = PreferenceWeights::new(attributes, vec![-0.5, 1.0]);
/// assert_eq!(weights.weight("Floral"), Some(1.0));
/// let ranked = weights.ranked();
/// assert_eq!(ranked.first().map(|entry| entry.name.as_str()), Some("Floral"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceWeights {
    attributes: AttributeSet,
    weights: Vec<f64>,
}

impl PreferenceWeights {
    /// Wrap weights aligned with `attributes`.
    #[must_use]
    pub const fn new(attributes: AttributeSet, weights: Vec<f64>) -> Self {
        Self {
            attributes,
            weights,
        }
    }

    /// Attribute set the weights are aligned with.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Weights in attribute order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Weight for the named attribute.
    #[must_use]
    pub fn weight(&self, attribute: &str) -> Option<f64> {
        let index = self.attributes.position(attribute)?;
        self.weights.get(index).copied()
    }

    /// Iterate over `(attribute, weight)` pairs in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.attributes.iter().zip(self.weights.iter().copied())
    }

    /// All attributes sorted by descending weight.
    ///
    /// Equal weights keep attribute-set order.
    #[must_use]
    pub fn ranked(&self) -> Vec<Ranked> {
        let mut entries: Vec<Ranked> = self
            .iter()
            .map(|(name, weight)| Ranked::new(name, weight))
            .collect();
        entries.sort_by(|left, right| {
            right
                .weight
                .partial_cmp(&left.weight)
                .unwrap_or(Ordering::Equal)
        });
        entries
    }
}
