//! Facade crate for the dramwise whisky recommender.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes the delimited-text loader behind the `loader-csv` feature.
//!
//! # Examples
//! ```
//! use dramwise::{AttributeSet, Dataset, LikedSet, recommend};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let attributes = AttributeSet::new(["Smoky", "Sweetness"])?;
//! let dataset = Dataset::new(
//!     attributes,
//!     [
//!         ("Ardbeg", [("Smoky", 4), ("Sweetness", 1)]),
//!         ("Lagavulin", [("Smoky", 4), ("Sweetness", 1)]),
//!         ("Laphroig", [("Smoky", 4), ("Sweetness", 2)]),
//!         ("Glenlivet", [("Smoky", 1), ("Sweetness", 3)]),
//!     ],
//! )?;
//! let liked: LikedSet = ["Ardbeg", "Lagavulin"].into_iter().collect();
//! let output = recommend(&dataset, &liked)?;
//! assert_eq!(output.recommendations.first().map(|r| r.name.as_str()), Some("Laphroig"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use dramwise_core::{
    AttributeSet, AttributeSetError, Dataset, DatasetError, Flavour, FlavourRecord, LikedSet,
    MIN_LIKED, NUM_RECOMMENDATIONS, PreferenceWeights, Ranked, RecommendConfig, RecommendError,
    Recommendations, ScoreTable, Scorer, Sign, SignProfile, SignProfiles,
};
pub use dramwise_scorer::{Recommender, SignedDotScorer, recommend};

#[cfg(feature = "loader-csv")]
pub use dramwise_data::{CsvDatasetLoader, LoadError};
