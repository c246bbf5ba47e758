//! File plumbing around the grouping pass.
//!
//! The loader is the line-record source and the writer is the line-record
//! sink; [`format`] reproduces the numeric output format of the records.
//!
//! # Example
//!
//! ```no_run
//! use point_grouper::io::loaders::RecordLoader;
//! use std::path::Path;
//!
//! let result = RecordLoader::load_from_file(Path::new("input.txt"))
//!     .expect("Failed to load");
//! println!("Loaded {} records", result.records.len());
//! ```

pub mod format;
pub mod loaders;
pub mod writer;


pub use format::format_number;
pub use loaders::{RecordLoadResult, RecordLoader};
pub use writer::{
    format_record, render_records, write_record, write_records, write_records_to_file, OutputOptions,
};
