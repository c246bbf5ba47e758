//! point-grouper binary
//!
//! Reads records from `input.txt`, asks for the sort order, and writes the
//! grouped records to `output.txt`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin point-grouper
//! ```
//!
//! # Environment Variables
//!
//! - `POINT_GROUPER_CONFIG`: Path to a TOML configuration file
//! - `POINT_GROUPER_INPUT`: Input file (default: input.txt)
//! - `POINT_GROUPER_OUTPUT`: Output file (default: output.txt)
//! - `RUST_LOG`: Log level (default: warn)

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use point_grouper::cli::{prompt_sort_key, resolve_choice, INVALID_CHOICE_MESSAGE};
use point_grouper::config::GrouperConfig;
use point_grouper::io::loaders::RecordLoader;
use point_grouper::pipeline::{GroupingPipeline, PipelineConfig};
use point_grouper::{GrouperError, SortKey};

fn main() -> ExitCode {
    // Initialize logging on stderr so the prompt on stdout stays clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = GrouperConfig::load().map_err(with_headline)?;
    info!(
        "Input: {}, output: {}",
        config.io.input_path.display(),
        config.io.output_path.display()
    );

    let loaded = RecordLoader::load_from_file(&config.io.input_path).map_err(with_headline)?;

    let sort_key = select_sort_key(config.sorting.choice)?;

    let pipeline = GroupingPipeline::with_config(PipelineConfig {
        sort_key,
        output: config.output.clone(),
    });

    let result = pipeline.process_records(loaded.records);
    pipeline
        .write_result(&result, &config.io.output_path)
        .map_err(with_headline)?;

    info!(
        "Done: {} records in {} groups sorted by {}",
        result.stats.total_records, result.stats.groups, sort_key
    );
    Ok(())
}

/// Use the configured menu choice, or ask on the terminal when there is none.
fn select_sort_key(configured: Option<i64>) -> Result<SortKey> {
    if let Some(choice) = configured {
        let (key, valid) = resolve_choice(Some(choice));
        if !valid {
            eprintln!("{}", INVALID_CHOICE_MESSAGE);
        }
        return Ok(key);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut diagnostics = io::stderr();

    prompt_sort_key(&mut input, &mut output, &mut diagnostics)
        .context("Failed to read the sort choice")
}

fn with_headline(err: GrouperError) -> anyhow::Error {
    let headline = err.headline();
    anyhow::Error::new(err).context(headline)
}
