//! End-to-end pipeline: parse → group → sort → write.

use std::path::Path;

use bstr::BString;
use log::info;

use crate::algorithms::grouping::{group_and_sort_with_stats, GroupingStats};
use crate::core::domain::{ObjectRecord, SortKey};
use crate::error::GrouperResult;
use crate::io::loaders::RecordLoader;
use crate::io::writer::{self, OutputOptions};

/// Result of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Records in output order, with their final type labels
    pub records: Vec<ObjectRecord>,
    pub stats: GroupingStats,
}

/// Configuration for the grouping pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub sort_key: SortKey,
    pub output: OutputOptions,
}

/// Main grouping pipeline
pub struct GroupingPipeline {
    config: PipelineConfig,
}

impl GroupingPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Group and sort records already in memory
    pub fn process_records(&self, records: Vec<ObjectRecord>) -> PipelineResult {
        let (records, stats) = group_and_sort_with_stats(records, self.config.sort_key);
        PipelineResult { records, stats }
    }

    /// Process an input document held in a string
    pub fn process_str(&self, input: &str) -> PipelineResult {
        let loaded = RecordLoader::load_from_str(input);
        self.process_records(loaded.records)
    }

    /// Render a processed result in the output file format
    pub fn render(&self, result: &PipelineResult) -> BString {
        writer::render_records(&result.records, &self.config.output)
    }

    /// Write a processed result to `output_path`
    pub fn write_result(
        &self,
        result: &PipelineResult,
        output_path: &Path,
    ) -> GrouperResult<usize> {
        writer::write_records_to_file(output_path, &result.records, &self.config.output)
    }

    /// Read `input_path`, group and sort its records, and write `output_path`.
    ///
    /// The output file is only created once the input has been read and
    /// processed.
    ///
    /// # Arguments
    /// * `input_path` - Whitespace-separated record file
    /// * `output_path` - File to create or truncate
    pub fn run(&self, input_path: &Path, output_path: &Path) -> GrouperResult<PipelineResult> {
        // Step 1: Load records
        let loaded = RecordLoader::load_from_file(input_path)?;

        // Step 2: Group and sort
        let result = self.process_records(loaded.records);

        // Step 3: Write
        self.write_result(&result, output_path)?;

        info!(
            "Processed {} -> {} ({} records, sorted by {})",
            input_path.display(),
            output_path.display(),
            result.stats.total_records,
            self.config.sort_key
        );

        Ok(result)
    }
}

impl Default for GroupingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to group and sort one file into another
pub fn group_and_sort_file(
    input_path: &Path,
    output_path: &Path,
    sort_key: SortKey,
) -> GrouperResult<PipelineResult> {
    let config = PipelineConfig {
        sort_key,
        output: OutputOptions::default(),
    };

    GroupingPipeline::with_config(config).run(input_path, output_path)
}
