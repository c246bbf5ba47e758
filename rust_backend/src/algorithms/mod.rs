//! Grouping and ordering algorithms.
//!
//! This module holds the core of the program: classifying records into
//! type-groups, deciding per group whether to sort or relabel, and the
//! comparators used to order records inside a group.
//!
//! # Components
//!
//! - [`comparators`]: Name, distance and creation-time orderings
//! - [`grouping`]: Classification, per-group decision and flattening
//!
//! # Example
//!
//! ```
//! use point_grouper::algorithms::group_and_sort;
//! use point_grouper::core::domain::{ObjectRecord, SortKey};
//!
//! let records = vec![
//!     ObjectRecord::new("Alpha", 1.0, 4.0, "Fruit", "01.01.2020"),
//!     ObjectRecord::new("Beta", 2.0, 2.0, "Fruit", "05.05.2021"),
//!     ObjectRecord::new("Gamma", 9.0, 9.0, "Veg", "01.01.2019"),
//! ];
//!
//! let sorted = group_and_sort(records, SortKey::Distance);
//! let names: Vec<String> = sorted.iter().map(|r| r.name.to_string()).collect();
//! assert_eq!(names, ["Beta", "Alpha", "Gamma"]);
//! assert_eq!(sorted[2].object_type, "various");
//! ```

pub mod comparators;
pub mod grouping;


pub use comparators::{compare_by_distance, compare_by_name, compare_by_time, compare_within_type};
pub use grouping::{
    group_and_sort, group_and_sort_with_stats, group_by_type, is_other_name, GroupingStats,
};
