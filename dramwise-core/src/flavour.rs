//! The twelve flavour attributes scored for every whisky distillery.
//!
//! The enum fixes the display order used by the default
//! [`AttributeSet`](crate::AttributeSet).
//!
//! # Examples
//! ```
//! use dramwise_core::Flavour;
//!
//! assert_eq!(Flavour::Smoky.as_str(), "Smoky");
//! assert_eq!(Flavour::Body.to_string(), "Body");
//! ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flavour {
    /// Weight and mouthfeel.
    Body,
    /// Perceived sweetness.
    Sweetness,
    /// Peat smoke.
    Smoky,
    /// Iodine and medicinal notes.
    Medicinal,
    /// Tobacco leaf.
    Tobacco,
    /// Honeyed notes.
    Honey,
    /// Spice.
    Spicy,
    /// Wine and sherry cask influence.
    Winey,
    /// Nuttiness.
    Nutty,
    /// Malted barley.
    Malty,
    /// Fruit.
    Fruity,
    /// Floral and grassy notes.
    Floral,
}

impl Flavour {
    /// Every flavour in display order.
    pub const ALL: [Self; 12] = [
        Self::Body,
        Self::Sweetness,
        Self::Smoky,
        Self::Medicinal,
        Self::Tobacco,
        Self::Honey,
        Self::Spicy,
        Self::Winey,
        Self::Nutty,
        Self::Malty,
        Self::Fruity,
        Self::Floral,
    ];

    /// Return the column name used for the flavour in tabular datasets.
    ///
    /// # Examples
    /// ```
    /// use dramwise_core::Flavour;
    ///
    /// assert_eq!(Flavour::Winey.as_str(), "Winey");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::Sweetness => "Sweetness",
            Self::Smoky => "Smoky",
            Self::Medicinal => "Medicinal",
            Self::Tobacco => "Tobacco",
            Self::Honey => "Honey",
            Self::Spicy => "Spicy",
            Self::Winey => "Winey",
            Self::Nutty => "Nutty",
            Self::Malty => "Malty",
            Self::Fruity => "Fruity",
            Self::Floral => "Floral",
        }
    }
}

impl std::fmt::Display for Flavour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Flavour::Honey.to_string(), Flavour::Honey.as_str());
    }

    #[test]
    fn all_lists_twelve_distinct_flavours() {
        let mut names: Vec<_> = Flavour::ALL.iter().map(|f| f.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }
}
