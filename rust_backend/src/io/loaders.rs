use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use bstr::ByteSlice;
use log::{info, warn};

use crate::core::domain::ObjectRecord;
use crate::error::{GrouperError, GrouperResult};
use crate::parsing::record_parser;

/// Result of loading an input document
#[derive(Debug, Clone)]
pub struct RecordLoadResult {
    pub records: Vec<ObjectRecord>,
    /// Path the records came from, `None` for in-memory input
    pub source_path: Option<PathBuf>,
    pub num_lines: usize,
    pub blank_lines: usize,
}

impl RecordLoadResult {
    pub fn new(records: Vec<ObjectRecord>, num_lines: usize, source_path: Option<PathBuf>) -> Self {
        let blank_lines = num_lines.saturating_sub(records.len());
        Self {
            records,
            source_path,
            num_lines,
            blank_lines,
        }
    }

    pub fn num_records(&self) -> usize {
        self.records.len()
    }
}

/// Loads whitespace-separated records from a file or a string
pub struct RecordLoader;

impl RecordLoader {
    /// Read the whole file at `path` and parse every line.
    ///
    /// The content is parsed as raw bytes. Text that is not valid UTF-8 is
    /// kept verbatim in the record fields and written back unchanged.
    pub fn load_from_file(path: &Path) -> GrouperResult<RecordLoadResult> {
        let mut file = File::open(path).map_err(|source| GrouperError::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| GrouperError::InputRead {
                path: path.to_path_buf(),
                source,
            })?;

        if bytes.to_str().is_err() {
            warn!(
                "Input file {} is not valid UTF-8; text fields are kept as raw bytes",
                path.display()
            );
        }

        let result = Self::parse(&bytes, Some(path.to_path_buf()));
        info!(
            "Loaded {} records from {} ({} blank lines skipped)",
            result.num_records(),
            path.display(),
            result.blank_lines
        );
        Ok(result)
    }

    /// Parse records from an in-memory document.
    pub fn load_from_str(input: &str) -> RecordLoadResult {
        Self::parse(input.as_bytes(), None)
    }

    fn parse(input: &[u8], source_path: Option<PathBuf>) -> RecordLoadResult {
        let records = record_parser::parse_records_bytes(input);
        RecordLoadResult::new(records, input.lines().count(), source_path)
    }
}
