//! Error types for the grouping pipeline.
//!
//! Only failures that abort the run are represented here. Malformed numeric
//! or date fields are tolerated by the parser and comparators and never
//! surface as errors.

use std::io;
use std::path::PathBuf;

/// Result type for pipeline operations
pub type GrouperResult<T> = Result<T, GrouperError>;

/// Error type for pipeline operations
#[derive(Debug, thiserror::Error)]
pub enum GrouperError {
    #[error("Failed to open input file {}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open output file {}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GrouperError {
    /// One-line description of the failed stage, for the user-facing report.
    pub fn headline(&self) -> &'static str {
        match self {
            GrouperError::InputOpen { .. } => "Error opening the input file.",
            GrouperError::InputRead { .. } => "Error reading the input file.",
            GrouperError::OutputOpen { .. } => "Error opening the output file.",
            GrouperError::OutputWrite { .. } => "Error writing the output file.",
            GrouperError::Configuration(_) => "Error loading the configuration.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display_includes_path() {
        let err = GrouperError::InputOpen {
            path: PathBuf::from("missing/input.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Failed to open input file missing/input.txt");
        assert_eq!(err.source().map(|e| e.to_string()), Some("no such file".to_string()));
        assert_eq!(err.headline(), "Error opening the input file.");
    }

    #[test]
    fn test_output_headlines() {
        let open = GrouperError::OutputOpen {
            path: PathBuf::from("output.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let write = GrouperError::OutputWrite {
            path: PathBuf::from("output.txt"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(open.headline(), "Error opening the output file.");
        assert_eq!(write.headline(), "Error writing the output file.");
    }

    #[test]
    fn test_configuration_error() {
        let err = GrouperError::Configuration("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");
        assert!(err.source().is_none());
    }
}
