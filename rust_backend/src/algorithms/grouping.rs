//! Classification of records into type-groups and per-group ordering.
//!
//! The grouping pass runs in three steps:
//!
//! 1. Every record whose name starts with a "special" character is relabeled
//!    [`OTHER_TYPE`] and collected in that group; every other record goes to
//!    the group keyed by its own type.
//! 2. Groups with at least two members are sorted with the selected
//!    comparator. A group with a single member has that record relabeled
//!    [`VARIOUS_TYPE`].
//! 3. Groups are concatenated in ascending key order. A relabeled singleton
//!    keeps the slot of its original group, so singletons from different
//!    groups are not merged into one run.

use std::collections::BTreeMap;

use bstr::BString;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::algorithms::comparators::compare_within_type;
use crate::core::domain::{ObjectRecord, SortKey, OTHER_TYPE, VARIOUS_TYPE};

/// Lower bound of the special-character range: `'À'` as a signed 8-bit code.
const SPECIAL_RANGE_START: i8 = 0xC0_u8 as i8;

/// Upper bound of the special-character range: `'z'`.
const SPECIAL_RANGE_END: i8 = b'z' as i8;

/// Summary of a grouping run.
///
/// # Fields
///
/// * `sort_key` - Key used to order groups with two or more members
/// * `total_records` - Number of records processed
/// * `groups` - Number of distinct group keys after classification
/// * `sorted_groups` - Groups with at least two members (kept and sorted)
/// * `various_records` - Records relabeled `"various"`
/// * `other_records` - Records relabeled `"#other"` that stayed in that group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingStats {
    pub sort_key: SortKey,
    pub total_records: usize,
    pub groups: usize,
    pub sorted_groups: usize,
    pub various_records: usize,
    pub other_records: usize,
}

/// Whether a record name falls into the `"#other"` group.
///
/// The first raw byte of the name is inspected, whatever the encoding. It qualifies when it is neither
/// alphabetic nor alphanumeric (ASCII classes) and, read as a signed byte,
/// lies in `'À'..='z'`, i.e. `-64..=122`. That interval covers ASCII
/// punctuation, whitespace and control bytes up to `'z'` as well as the UTF-8
/// lead bytes of non-ASCII letters. Digits are alphanumeric and never qualify;
/// `{`, `|`, `}` and `~` lie above `'z'` and never qualify either.
///
/// # Examples
///
/// ```
/// use point_grouper::algorithms::is_other_name;
///
/// assert!(is_other_name("#hash"));
/// assert!(is_other_name("Émile"));
/// assert!(!is_other_name("7up"));
/// assert!(!is_other_name("~tilde"));
/// assert!(!is_other_name("plain"));
/// assert!(!is_other_name(b"\xA8lka"));
/// ```
pub fn is_other_name<N: AsRef<[u8]>>(name: N) -> bool {
    let first = name.as_ref().first().copied().unwrap_or(0);
    let code = first as i8;

    !first.is_ascii_alphabetic()
        && !first.is_ascii_alphanumeric()
        && (SPECIAL_RANGE_START..=SPECIAL_RANGE_END).contains(&code)
}

/// Partition records into groups keyed by type label, in ascending key order.
///
/// Records matching [`is_other_name`] are relabeled [`OTHER_TYPE`] first.
/// Input order is preserved inside each group.
pub fn group_by_type(records: Vec<ObjectRecord>) -> BTreeMap<BString, Vec<ObjectRecord>> {
    let mut groups: BTreeMap<BString, Vec<ObjectRecord>> = BTreeMap::new();

    for mut record in records {
        if is_other_name(&record.name) {
            debug!(
                "Reclassifying '{}' from '{}' to '{}'",
                record.name, record.object_type, OTHER_TYPE
            );
            record.relabel(OTHER_TYPE);
        }
        groups
            .entry(record.object_type.clone())
            .or_default()
            .push(record);
    }

    groups
}

/// Group, sort and flatten `records`, returning them in output order.
pub fn group_and_sort(records: Vec<ObjectRecord>, sort_key: SortKey) -> Vec<ObjectRecord> {
    group_and_sort_with_stats(records, sort_key).0
}

/// Like [`group_and_sort`], also returning a [`GroupingStats`] summary.
pub fn group_and_sort_with_stats(
    records: Vec<ObjectRecord>,
    sort_key: SortKey,
) -> (Vec<ObjectRecord>, GroupingStats) {
    let mut stats = GroupingStats {
        sort_key,
        total_records: records.len(),
        ..GroupingStats::default()
    };

    let groups = group_by_type(records);
    stats.groups = groups.len();

    let mut output = Vec::with_capacity(stats.total_records);

    for (key, mut members) in groups {
        if members.len() >= 2 {
            members.sort_by(|a, b| compare_within_type(a, b, sort_key));
            stats.sorted_groups += 1;
            if key == OTHER_TYPE {
                stats.other_records += members.len();
            }
            debug!(
                "Group '{}': {} records sorted by {}",
                key,
                members.len(),
                sort_key
            );
            output.extend(members);
        } else {
            for mut record in members {
                debug!(
                    "Group '{}': single record '{}' moved to '{}'",
                    key, record.name, VARIOUS_TYPE
                );
                record.relabel(VARIOUS_TYPE);
                stats.various_records += 1;
                output.push(record);
            }
        }
    }

    info!(
        "Grouped {} records into {} groups ({} sorted by {}, {} various, {} other)",
        stats.total_records,
        stats.groups,
        stats.sorted_groups,
        sort_key,
        stats.various_records,
        stats.other_records
    );

    (output, stats)
}
