//! Recommendation output and tuning.

/// Default number of recommendations returned.
pub const NUM_RECOMMENDATIONS: usize = 8;

/// A display label paired with its numeric weight: an attribute with its
/// preference weight, or a distillery with its compatibility score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranked {
    /// Attribute or distillery name.
    pub name: String,
    /// Preference weight or compatibility score.
    pub weight: f64,
}

impl Ranked {
    /// Pair `name` with `weight`.
    #[must_use]
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Result of a recommendation run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendations {
    /// Every attribute by descending preference weight.
    pub preferences: Vec<Ranked>,
    /// Best-matching candidates by descending score.
    pub recommendations: Vec<Ranked>,
}

/// Tunable parameters for a recommendation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendConfig {
    /// Maximum number of recommendations to return.
    pub limit: usize,
}

impl RecommendConfig {
    /// Configuration returning at most `limit` recommendations.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self::with_limit(NUM_RECOMMENDATIONS)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn recommendations_serialise_as_name_weight_pairs() {
        let output = Recommendations {
            preferences: vec![Ranked::new("Smoky", 1.0)],
            recommendations: vec![Ranked::new("Ardbeg", 2.5)],
        };
        let json = serde_json::to_value(&output).expect("serialise recommendations");
        assert_eq!(json["preferences"][0]["name"], "Smoky");
        assert_eq!(json["recommendations"][0]["weight"], 2.5);
    }
}
