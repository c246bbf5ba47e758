//! # Point Grouper
//!
//! Groups named, typed 2D point records by their type label, orders every
//! group by name, distance (`|x - y|`) or creation date, and writes the
//! result with a blank line between type runs.
//!
//! - [`parsing`]: whitespace-separated record lines and `DD.MM.YYYY` dates
//! - [`algorithms`]: classification, grouping and the in-group comparators
//! - [`io`]: file loading, output formatting and writing
//! - [`pipeline`]: the parse → group → sort → write run
//! - [`cli`]: the interactive sort-order prompt
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```
//! use point_grouper::core::domain::SortKey;
//! use point_grouper::pipeline::{GroupingPipeline, PipelineConfig};
//!
//! let pipeline = GroupingPipeline::with_config(PipelineConfig {
//!     sort_key: SortKey::Distance,
//!     ..PipelineConfig::default()
//! });
//!
//! let result = pipeline.process_str(
//!     "Alpha 1 4 Fruit 01.01.2020\nBeta 2 2 Fruit 05.05.2021\nGamma 9 9 Veg 01.01.2019\n",
//! );
//! assert_eq!(result.records[0].name, "Beta");
//! assert_eq!(result.records[2].object_type, "various");
//! ```

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod pipeline;

pub use crate::core::domain::{ObjectRecord, SortKey, OTHER_TYPE, VARIOUS_TYPE};
pub use error::{GrouperError, GrouperResult};
