//! Ordered set of attribute names shared by every record in a dataset.

use std::collections::HashSet;

use thiserror::Error;

use crate::Flavour;

/// A fixed, ordered list of named attributes.
///
/// Order does not affect scoring but determines display order and breaks ties
/// between equally weighted preferences.
///
/// # Examples
/// ```
/// use dramwise_core::AttributeSet;
///
/// # fn main() -> Result<(), dramwise_core::AttributeSetError> {
/// let attributes = AttributeSet::new(["X", "Y"])?;
/// assert_eq!(attributes.position("Y"), Some(1));
/// assert_eq!(AttributeSet::default().len(), 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct AttributeSet {
    names: Vec<String>,
}

/// Errors returned by [`AttributeSet::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttributeSetError {
    /// No attribute names were supplied.
    #[error("attribute set must name at least one attribute")]
    Empty,
    /// A name was empty or whitespace.
    #[error("attribute names must not be blank")]
    Blank,
    /// The same name appeared twice.
    #[error("attribute '{name}' is listed more than once")]
    Duplicate {
        /// The repeated attribute name.
        name: String,
    },
}

impl AttributeSet {
    /// Validate and construct an [`AttributeSet`].
    ///
    /// # Errors
    /// Returns [`AttributeSetError`] when the list is empty, contains a blank
    /// name, or repeats a name.
    pub fn new<I, S>(names: I) -> Result<Self, AttributeSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collected: Vec<String> = names.into_iter().map(Into::into).collect();
        if collected.is_empty() {
            return Err(AttributeSetError::Empty);
        }
        let mut seen = HashSet::with_capacity(collected.len());
        for name in &collected {
            if name.trim().is_empty() {
                return Err(AttributeSetError::Blank);
            }
            if !seen.insert(name.as_str()) {
                return Err(AttributeSetError::Duplicate { name: name.clone() });
            }
        }
        Ok(Self { names: collected })
    }

    /// Number of attributes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false` for a validated set; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Report whether `name` belongs to the set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Return the index of `name` within the set.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    /// Iterate over the attribute names in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Borrow the names as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            names: Flavour::ALL
                .iter()
                .map(|flavour| flavour.as_str().to_owned())
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for AttributeSet {
    type Error = AttributeSetError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<AttributeSet> for Vec<String> {
    fn from(set: AttributeSet) -> Self {
        set.names
    }
}
