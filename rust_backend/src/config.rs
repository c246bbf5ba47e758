//! Configuration file support.
//!
//! Settings are read from an optional TOML file and then overridden from the
//! environment. Every field has a default, so running without any
//! configuration reads `input.txt`, writes `output.txt` and asks for the sort
//! order interactively.
//!
//! ```toml
//! [io]
//! input_path = "data/input.txt"
//! output_path = "data/output.txt"
//!
//! [output]
//! leading_blank_line = true
//!
//! [sorting]
//! choice = 1   # 1 - distance, 2 - name, 3 - time; omit to prompt
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GrouperError, GrouperResult};
use crate::io::writer::OutputOptions;

/// File searched for in the current directory.
pub const CONFIG_FILE_NAME: &str = "point_grouper.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "POINT_GROUPER_CONFIG";

/// Environment variable overriding the input path.
pub const INPUT_PATH_ENV: &str = "POINT_GROUPER_INPUT";

/// Environment variable overriding the output path.
pub const OUTPUT_PATH_ENV: &str = "POINT_GROUPER_OUTPUT";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrouperConfig {
    #[serde(default)]
    pub io: IoSettings,
    #[serde(default)]
    pub output: OutputOptions,
    #[serde(default)]
    pub sorting: SortingSettings,
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoSettings {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

/// Sort order selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingSettings {
    /// Menu choice used instead of prompting, when present
    #[serde(default)]
    pub choice: Option<i64>,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.txt")
}

impl Default for IoSettings {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

impl GrouperConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(GrouperConfig)` if successful
    /// * `Err(GrouperError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> GrouperResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GrouperError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> GrouperResult<Self> {
        toml::from_str(content).map_err(|e| {
            GrouperError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Uses the file named by `POINT_GROUPER_CONFIG` when set (it must exist),
    /// otherwise `point_grouper.toml` in the current directory when present,
    /// otherwise the defaults.
    pub fn from_default_location() -> GrouperResult<Self> {
        if let Ok(explicit) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(explicit);
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::from_file(&local);
        }

        Ok(Self::default())
    }

    /// Replace file locations with values found through `lookup`.
    ///
    /// `lookup` receives the environment variable names and returns their
    /// values; empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(input) = non_empty(INPUT_PATH_ENV) {
            self.io.input_path = PathBuf::from(input);
        }
        if let Some(output) = non_empty(OUTPUT_PATH_ENV) {
            self.io.output_path = PathBuf::from(output);
        }

        self
    }

    /// Load from the default location and apply environment overrides.
    pub fn load() -> GrouperResult<Self> {
        Ok(Self::from_default_location()?.with_overrides(|key| env::var(key).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = GrouperConfig::default();
        assert_eq!(config.io.input_path, PathBuf::from("input.txt"));
        assert_eq!(config.io.output_path, PathBuf::from("output.txt"));
        assert!(config.output.leading_blank_line);
        assert_eq!(config.sorting.choice, None);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GrouperConfig::from_toml_str("").unwrap();
        assert_eq!(config, GrouperConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = GrouperConfig::from_toml_str(
            r#"
            [io]
            input_path = "data/in.txt"
            output_path = "data/out.txt"

            [output]
            leading_blank_line = false

            [sorting]
            choice = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.io.input_path, PathBuf::from("data/in.txt"));
        assert_eq!(config.io.output_path, PathBuf::from("data/out.txt"));
        assert!(!config.output.leading_blank_line);
        assert_eq!(config.sorting.choice, Some(3));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = GrouperConfig::from_toml_str("[io]\noutput_path = \"sorted.txt\"\n").unwrap();
        assert_eq!(config.io.input_path, PathBuf::from("input.txt"));
        assert_eq!(config.io.output_path, PathBuf::from("sorted.txt"));
    }

    #[test]
    fn test_invalid_document() {
        let err = GrouperConfig::from_toml_str("[sorting]\nchoice = \"fast\"\n").unwrap_err();
        assert!(matches!(err, GrouperError::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sorting]\nchoice = 1").unwrap();

        let config = GrouperConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sorting.choice, Some(1));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GrouperConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_with_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (INPUT_PATH_ENV, "/tmp/points.txt"),
            (OUTPUT_PATH_ENV, "  "),
        ]);

        let config = GrouperConfig::default()
            .with_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.io.input_path, PathBuf::from("/tmp/points.txt"));
        assert_eq!(config.io.output_path, PathBuf::from("output.txt"));
    }
}
