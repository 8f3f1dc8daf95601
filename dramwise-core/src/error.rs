//! Errors surfaced by a recommendation run.

use thiserror::Error;

use crate::DatasetError;

/// Minimum number of liked distilleries; sample variance needs two samples.
pub const MIN_LIKED: usize = 2;

/// Errors raised before any scoring takes place.
///
/// All variants are terminal: no partial result is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The dataset failed validation.
    #[error("malformed dataset: {0}")]
    MalformedData(#[from] DatasetError),
    /// Too few liked distilleries were supplied.
    #[error("at least {required} liked distilleries are required, found {found}")]
    InsufficientLikes {
        /// Minimum accepted size of the liked set.
        required: usize,
        /// Size of the liked set supplied.
        found: usize,
    },
    /// One or more liked names are not in the dataset.
    #[error("unknown distilleries: {}", names.join(", "))]
    UnknownDistillery {
        /// Every unknown name, in order.
        names: Vec<String>,
    },
}
