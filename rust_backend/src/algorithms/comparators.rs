//! Orderings used inside a type-group.
//!
//! Every comparator here assumes both records already share a type label.
//! [`compare_within_type`] enforces that: records of different types are never
//! ordered before one another and compare as [`Ordering::Equal`].

use std::cmp::Ordering;

use crate::core::domain::{ObjectRecord, SortKey};
use crate::parsing::date::parse_created_date;

/// Lexicographic (byte-wise) ordering on the record name.
pub fn compare_by_name(a: &ObjectRecord, b: &ObjectRecord) -> Ordering {
    a.name.cmp(&b.name)
}

/// Ascending ordering on `|x - y|`.
pub fn compare_by_distance(a: &ObjectRecord, b: &ObjectRecord) -> Ordering {
    a.distance().total_cmp(&b.distance())
}

/// Ascending ordering on the `DD.MM.YYYY` creation date.
///
/// Dates that fail to parse sort after every valid date and compare equal to
/// each other, so a stable sort keeps them in input order.
pub fn compare_by_time(a: &ObjectRecord, b: &ObjectRecord) -> Ordering {
    match (parse_created_date(&a.created), parse_created_date(&b.created)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two records by `key`, treating records of different types as unordered.
pub fn compare_within_type(a: &ObjectRecord, b: &ObjectRecord, key: SortKey) -> Ordering {
    if a.object_type != b.object_type {
        return Ordering::Equal;
    }

    match key {
        SortKey::Name => compare_by_name(a, b),
        SortKey::Distance => compare_by_distance(a, b),
        SortKey::Time => compare_by_time(a, b),
    }
}
