//! Parsers for the whitespace-separated record format.
//!
//! # Parsers
//!
//! - [`record_parser`]: Parse input lines into [`ObjectRecord`](crate::core::domain::ObjectRecord)s
//! - [`date`]: Parse `DD.MM.YYYY` creation dates
//!
//! # Example
//!
//! ```
//! use point_grouper::parsing::record_parser::parse_records_str;
//!
//! let records = parse_records_str("Alpha 1 4 Fruit 01.01.2020\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].object_type, "Fruit");
//! ```

pub mod date;
pub mod record_parser;


pub use date::parse_created_date;
pub use record_parser::{parse_line, parse_records_bytes, parse_records_str};
