//! Test-only, in-memory datasets used by unit, behaviour and property tests.

use crate::{AttributeSet, Dataset, Flavour, LikedSet};

/// Build a dataset from borrowed rows, failing fast on invalid input.
///
/// # Panics
/// Panics when the attribute names or rows are invalid.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]
pub fn dataset_from(attributes: &[&str], rows: &[(&str, &[i32])]) -> Dataset {
    let set = AttributeSet::new(attributes.iter().copied()).expect("valid fixture attributes");
    let pairs = rows.iter().map(|(name, values)| {
        let cells: Vec<(&str, i32)> = attributes
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect();
        (*name, cells)
    });
    Dataset::new(set, pairs).expect("valid fixture dataset")
}

/// Two attributes, four distilleries; liking `A` and `B` cancels every
/// preference out.
///
/// Means are `X = 2.25` and `Y = 1.75`.
#[must_use]
pub fn worked_example() -> Dataset {
    dataset_from(
        &["X", "Y"],
        &[
            ("A", &[4, 0]),
            ("B", &[0, 4]),
            ("C", &[2, 2]),
            ("D", &[3, 1]),
        ],
    )
}

/// Liked set `{A, B}` for [`worked_example`].
#[must_use]
pub fn worked_example_likes() -> LikedSet {
    LikedSet::new().with("A").with("B")
}

/// Abridged table over the twelve [`Flavour`] columns, in the shape of the
/// public whisky flavour dataset.
#[must_use]
pub fn sample_whiskies() -> Dataset {
    let attributes: Vec<&str> = Flavour::ALL.iter().map(|f| f.as_str()).collect();
    dataset_from(
        &attributes,
        &[
            ("Aberfeldy", &[2, 2, 2, 0, 0, 2, 1, 2, 2, 2, 2, 2]),
            ("Aberlour", &[3, 3, 1, 0, 0, 4, 3, 2, 2, 3, 3, 2]),
            ("AnCnoc", &[1, 3, 2, 0, 0, 2, 0, 0, 2, 2, 3, 2]),
            ("Ardbeg", &[4, 1, 4, 4, 0, 0, 2, 0, 1, 2, 1, 0]),
            ("Auchentoshan", &[0, 2, 0, 0, 0, 1, 1, 0, 2, 2, 3, 3]),
            ("Balvenie", &[3, 2, 1, 0, 0, 3, 2, 1, 0, 2, 2, 2]),
            ("Bowmore", &[2, 2, 3, 1, 0, 2, 2, 1, 1, 1, 1, 2]),
            ("Bunnahabhain", &[1, 2, 1, 1, 0, 1, 1, 1, 1, 2, 2, 3]),
            ("Caol Ila", &[3, 1, 4, 2, 1, 0, 2, 0, 2, 1, 1, 1]),
            ("Clynelish", &[3, 2, 3, 3, 1, 0, 2, 0, 1, 1, 2, 0]),
            ("Dalmore", &[3, 2, 2, 1, 0, 1, 2, 2, 1, 2, 3, 1]),
            ("Glenfiddich", &[1, 3, 1, 0, 0, 0, 0, 0, 0, 2, 2, 2]),
            ("Glenlivet", &[2, 3, 1, 0, 0, 2, 2, 2, 1, 2, 2, 3]),
            ("Highland Park", &[2, 2, 3, 1, 0, 2, 1, 1, 1, 2, 1, 1]),
            ("Lagavulin", &[4, 1, 4, 4, 1, 0, 1, 2, 1, 1, 1, 0]),
            ("Laphroig", &[4, 2, 4, 4, 1, 0, 0, 1, 1, 1, 0, 0]),
            ("Macallan", &[4, 3, 1, 0, 1, 1, 2, 3, 2, 1, 1, 1]),
            ("Oban", &[2, 2, 2, 2, 0, 0, 2, 0, 2, 2, 2, 0]),
            ("Springbank", &[2, 2, 2, 2, 0, 1, 1, 1, 1, 1, 1, 1]),
            ("Talisker", &[4, 2, 3, 3, 0, 1, 3, 0, 1, 2, 2, 0]),
        ],
    )
}
