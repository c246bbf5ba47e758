//! Domain models for named, typed 2D point records.
//!
//! This module provides the record structure produced by the parser, mutated by
//! the grouping pass and consumed by the writer, together with the sort key
//! selection and the synthetic type labels assigned during grouping.

use bstr::BString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type label assigned to records whose name starts with a "special" character.
pub const OTHER_TYPE: &str = "#other";

/// Type label assigned to records left alone in their original type-group.
pub const VARIOUS_TYPE: &str = "various";

/// A single named point with a type label and a creation date.
///
/// Records have no identity beyond their field values and are cloned freely.
/// The `object_type` field is the only one rewritten after parsing: the
/// grouping pass may replace it with [`OTHER_TYPE`] or [`VARIOUS_TYPE`].
///
/// Text fields hold the bytes exactly as they appeared in the input, which
/// need not be UTF-8, and are written back unchanged.
///
/// # Examples
///
/// ```
/// use point_grouper::core::domain::ObjectRecord;
///
/// let record = ObjectRecord::new("Alpha", 1.0, 4.0, "Fruit", "01.01.2020");
/// assert_eq!(record.distance(), 3.0);
/// assert_eq!(record.name, "Alpha");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub name: BString,
    pub x: f64,
    pub y: f64,
    pub object_type: BString,
    /// Creation date as written in the input (`DD.MM.YYYY`), parsed lazily.
    pub created: BString,
}

impl ObjectRecord {
    /// Creates a record from its field values.
    pub fn new(
        name: impl Into<BString>,
        x: f64,
        y: f64,
        object_type: impl Into<BString>,
        created: impl Into<BString>,
    ) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            object_type: object_type.into(),
            created: created.into(),
        }
    }

    /// Returns the record's "distance": `sqrt((x - y)^2)`, i.e. `|x - y|`.
    ///
    /// This is not a geometric distance between two points; it is only used
    /// as a sort key and as the value printed next to each output line.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_grouper::core::domain::ObjectRecord;
    ///
    /// let record = ObjectRecord::new("Beta", 7.5, 2.5, "Veg", "05.05.2021");
    /// assert_eq!(record.distance(), 5.0);
    /// ```
    pub fn distance(&self) -> f64 {
        let delta = self.x - self.y;
        (delta * delta).sqrt()
    }

    /// Replaces the type label.
    pub fn relabel(&mut self, label: &str) {
        self.object_type = BString::from(label);
    }
}

/// The key used to order records inside a type-group.
///
/// # Examples
///
/// ```
/// use point_grouper::core::domain::SortKey;
///
/// assert_eq!(SortKey::from_choice(1), Some(SortKey::Distance));
/// assert_eq!(SortKey::from_choice(7), None);
/// assert_eq!(SortKey::default(), SortKey::Name);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Distance,
    Time,
}

impl SortKey {
    /// Maps the numeric menu choice (`1` distance, `2` name, `3` time) to a key.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(SortKey::Distance),
            2 => Some(SortKey::Name),
            3 => Some(SortKey::Time),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Distance => "distance",
            SortKey::Time => "time",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_absolute_difference() {
        let a = ObjectRecord::new("a", 1.0, 4.0, "t", "");
        let b = ObjectRecord::new("b", 4.0, 1.0, "t", "");
        assert_eq!(a.distance(), 3.0);
        assert_eq!(b.distance(), 3.0);
    }

    #[test]
    fn test_default_record_is_empty() {
        let record = ObjectRecord::default();
        assert!(record.name.is_empty());
        assert_eq!(record.distance(), 0.0);
    }

    #[test]
    fn test_fields_keep_raw_bytes() {
        let mut record = ObjectRecord::new(&b"\xA8lka"[..], 0.0, 0.0, "Tree", "");
        assert_eq!(record.name.as_slice(), b"\xA8lka");

        record.relabel(VARIOUS_TYPE);
        assert_eq!(record.object_type, VARIOUS_TYPE);
    }

    #[test]
    fn test_sort_key_from_choice() {
        assert_eq!(SortKey::from_choice(1), Some(SortKey::Distance));
        assert_eq!(SortKey::from_choice(2), Some(SortKey::Name));
        assert_eq!(SortKey::from_choice(3), Some(SortKey::Time));
        assert_eq!(SortKey::from_choice(0), None);
        assert_eq!(SortKey::from_choice(-4), None);
    }
}
