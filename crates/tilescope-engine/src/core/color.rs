use std::fmt;

use serde::{Deserialize, Serialize};

/// Class label of a detected tile (e.g. `"red"`, `"light_blue"`).
///
/// Labels come straight from the detector and are not checked against a palette.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ColorClass(String);

impl ColorClass {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorClass {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl AsRef<str> for ColorClass {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ColorClass {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColorClass {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Pattern row number, 1 (top, one tile) to 5 (bottom, five tiles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RowIndex(u8);

impl RowIndex {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const COUNT: usize = Self::MAX as usize;

    /// All rows in ascending order.
    pub const ALL: [RowIndex; Self::COUNT] = [
        RowIndex(1),
        RowIndex(2),
        RowIndex(3),
        RowIndex(4),
        RowIndex(5),
    ];

    /// Returns `None` unless `n` is in `1..=5`.
    #[must_use]
    pub const fn new(n: u8) -> Option<Self> {
        if n >= Self::MIN && n <= Self::MAX {
            Some(Self(n))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of tiles the row holds when complete.
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.0 as usize
    }

    /// Zero-based position, for indexing per-row tables.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Row number outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("row index out of range: {_0} (expected 1..=5)")]
pub struct RowIndexError(#[error(not(source))] u8);

impl TryFrom<u8> for RowIndex {
    type Error = RowIndexError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(RowIndexError(n))
    }
}

impl From<RowIndex> for u8 {
    fn from(row: RowIndex) -> Self {
        row.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_index_range() {
        assert_eq!(RowIndex::new(0), None);
        assert_eq!(RowIndex::new(6), None);
        for n in 1..=5 {
            let row = RowIndex::new(n).unwrap();
            assert_eq!(row.get(), n);
            assert_eq!(row.capacity(), usize::from(n));
            assert_eq!(row.offset(), usize::from(n) - 1);
        }
    }

    #[test]
    fn test_all_rows_ascending() {
        let numbers: Vec<u8> = RowIndex::ALL.iter().map(|r| r.get()).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_row_index_serde() {
        let row: RowIndex = serde_json::from_str("3").unwrap();
        assert_eq!(row.get(), 3);
        assert_eq!(serde_json::to_string(&row).unwrap(), "3");

        let err = serde_json::from_str::<RowIndex>("7").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_color_class_is_transparent_string() {
        let color = ColorClass::from("dark_blue");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"dark_blue\"");
        assert_eq!(color, "dark_blue");
        assert_eq!(color.to_string(), "dark_blue");
    }
}
