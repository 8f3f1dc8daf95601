//! Core domain types for the dramwise recommender.
//!
//! A [`Dataset`] maps distillery names to integer flavour intensities over a
//! fixed [`AttributeSet`]. Scoring reduces each record to a [`SignProfile`],
//! infers [`PreferenceWeights`] from a [`LikedSet`], and ranks candidates in a
//! [`ScoreTable`]. Constructors return `Result` so malformed input is caught
//! before any computation starts.
//!
//! # Examples
//!
//! ```
//! use dramwise_core::{AttributeSet, Dataset, LikedSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::new(
//!     AttributeSet::new(["Smoky", "Floral"])?,
//!     [
//!         ("Ardbeg", [("Smoky", 4), ("Floral", 0)]),
//!         ("Lagavulin", [("Smoky", 4), ("Floral", 0)]),
//!         ("Auchentoshan", [("Smoky", 0), ("Floral", 3)]),
//!     ],
//! )?;
//! let liked: LikedSet = ["Ardbeg", "Lagavulin"].into_iter().collect();
//! assert!(liked.unknown_in(&dataset).is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attributes;
mod dataset;
mod error;
mod flavour;
mod liked;
mod preference;
mod profile;
mod recommendation;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attributes::{AttributeSet, AttributeSetError};
pub use dataset::{Dataset, DatasetError, FlavourRecord};
pub use error::{MIN_LIKED, RecommendError};
pub use flavour::Flavour;
pub use liked::LikedSet;
pub use preference::PreferenceWeights;
pub use profile::{AttributeMeans, Sign, SignProfile, SignProfiles};
pub use recommendation::{NUM_RECOMMENDATIONS, Ranked, RecommendConfig, Recommendations};
pub use scorer::{ScoreTable, Scorer};
