//! The set of distilleries a user has declared they like.

use std::collections::BTreeSet;

use crate::Dataset;

/// De-duplicated, ordered set of liked distillery names.
///
/// # Examples
/// ```
/// use dramwise_core::LikedSet;
///
/// let liked: LikedSet = ["Ardbeg", "Lagavulin", "Ardbeg"].into_iter().collect();
/// assert_eq!(liked.len(), 2);
/// assert!(liked.contains("Lagavulin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LikedSet {
    names: BTreeSet<String>,
}

impl LikedSet {
    /// Construct an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a liked distillery, returning `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Add a liked distillery while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    /// Number of distinct liked distilleries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Report whether nothing is liked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Report whether `name` is liked.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over liked names in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Liked names that are not keys of `dataset`, in order.
    #[must_use]
    pub fn unknown_in(&self, dataset: &Dataset) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| !dataset.contains(name))
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for LikedSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for LikedSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
