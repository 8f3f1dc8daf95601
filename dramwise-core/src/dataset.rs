//! Raw flavour intensities keyed by distillery name.
//!
//! A [`Dataset`] is validated once on construction and immutable afterwards:
//! every record carries exactly the attributes of the dataset's
//! [`AttributeSet`] and distillery names are unique.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::AttributeSet;

/// Integer intensities for one distillery, aligned with the owning
/// dataset's attribute order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavourRecord {
    intensities: Vec<i32>,
}

impl FlavourRecord {
    /// Intensities in attribute order.
    #[must_use]
    pub fn intensities(&self) -> &[i32] {
        &self.intensities
    }

    /// Intensity at attribute `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.intensities.get(index).copied()
    }
}

/// Errors raised when a table of intensities is malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// The table contained no distilleries.
    #[error("dataset must contain at least one distillery")]
    Empty,
    /// Two rows shared a distillery name.
    #[error("distillery '{name}' appears more than once")]
    DuplicateDistillery {
        /// The repeated name.
        name: String,
    },
    /// A record lacked an attribute of the attribute set.
    #[error("distillery '{distillery}' has no value for attribute '{attribute}'")]
    MissingAttribute {
        /// Affected distillery.
        distillery: String,
        /// Attribute that was absent.
        attribute: String,
    },
    /// A record named an attribute outside the attribute set.
    #[error("distillery '{distillery}' has unexpected attribute '{attribute}'")]
    UnexpectedAttribute {
        /// Affected distillery.
        distillery: String,
        /// Attribute that is not part of the set.
        attribute: String,
    },
    /// A record supplied the same attribute twice.
    #[error("distillery '{distillery}' repeats attribute '{attribute}'")]
    RepeatedAttribute {
        /// Affected distillery.
        distillery: String,
        /// Attribute that was repeated.
        attribute: String,
    },
    /// A raw cell could not be read as an integer intensity.
    #[error("distillery '{distillery}' has non-numeric {attribute} value '{raw}'")]
    InvalidIntensity {
        /// Affected distillery.
        distillery: String,
        /// Attribute whose value was rejected.
        attribute: String,
        /// The raw text as read from the source.
        raw: String,
    },
}

/// Flavour records keyed by unique distillery name.
///
/// # Examples
/// ```
/// use dramwise_core::{AttributeSet, Dataset};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let attributes = AttributeSet::new(["X", "Y"])?;
/// let dataset = Dataset::new(
///     attributes,
///     [("A", [("X", 4), ("Y", 0)]), ("B", [("X", 0), ("Y", 4)])],
/// )?;
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.intensity("B", "Y"), Some(4));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    attributes: AttributeSet,
    records: BTreeMap<String, FlavourRecord>,
}

impl Dataset {
    /// Validate rows of `(distillery, [(attribute, intensity)])` and build a
    /// dataset over `attributes`.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when no rows are given, a distillery repeats,
    /// or a row does not carry exactly the attributes of the set.
    pub fn new<I, N, R, K>(attributes: AttributeSet, rows: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        let mut records = BTreeMap::new();
        for (name, values) in rows {
            let distillery: String = name.into();
            let record = build_record(&attributes, &distillery, values)?;
            if records.contains_key(&distillery) {
                return Err(DatasetError::DuplicateDistillery { name: distillery });
            }
            records.insert(distillery, record);
        }
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self {
            attributes,
            records,
        })
    }

    /// The attribute set shared by every record.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Number of distilleries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a validated dataset; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Report whether `distillery` is a key of the dataset.
    #[must_use]
    pub fn contains(&self, distillery: &str) -> bool {
        self.records.contains_key(distillery)
    }

    /// Look up the record for `distillery`.
    #[must_use]
    pub fn record(&self, distillery: &str) -> Option<&FlavourRecord> {
        self.records.get(distillery)
    }

    /// Look up a single intensity by distillery and attribute name.
    #[must_use]
    pub fn intensity(&self, distillery: &str, attribute: &str) -> Option<i32> {
        let index = self.attributes.position(attribute)?;
        self.record(distillery)?.get(index)
    }

    /// Iterate over `(distillery, record)` pairs in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &FlavourRecord)> {
        self.records
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Iterate over distillery names in order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

fn build_record<R, K>(
    attributes: &AttributeSet,
    distillery: &str,
    values: R,
) -> Result<FlavourRecord, DatasetError>
where
    R: IntoIterator<Item = (K, i32)>,
    K: AsRef<str>,
{
    let mut slots: Vec<Option<i32>> = vec![None; attributes.len()];
    for (key, value) in values {
        let attribute = key.as_ref();
        let slot = attributes
            .position(attribute)
            .and_then(|index| slots.get_mut(index))
            .ok_or_else(|| DatasetError::UnexpectedAttribute {
                distillery: distillery.to_owned(),
                attribute: attribute.to_owned(),
            })?;
        if slot.replace(value).is_some() {
            return Err(DatasetError::RepeatedAttribute {
                distillery: distillery.to_owned(),
                attribute: attribute.to_owned(),
            });
        }
    }

    let intensities = attributes
        .iter()
        .zip(slots)
        .map(|(attribute, slot)| {
            slot.ok_or_else(|| DatasetError::MissingAttribute {
                distillery: distillery.to_owned(),
                attribute: attribute.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FlavourRecord { intensities })
}
