//! Merge command: the full pipeline as a one-shot headless operation.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::merge::{IngestError, WorkingSet};
use crate::services::GeoJsonService;

/// Merge GeoJSON files into a single FeatureCollection
#[derive(Debug, Clone, Args)]
pub struct MergeArgs {
    /// GeoJSON files to merge, in output order
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output path for the merged document (defaults to result.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl MergeArgs {
    /// Execute the merge command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let mut batch = Vec::with_capacity(self.files.len());
        for path in &self.files {
            let file = GeoJsonService::load(path)
                .map_err(|e| CliError::io(format!("Failed to load input file: {e}")))?;
            batch.push(file);
        }

        let mut working_set = WorkingSet::new();
        working_set.ingest_batch(batch).map_err(|e| match e {
            IngestError::NoRecognizedCategory => CliError::validation(e.to_string()),
            IngestError::Parse { .. } => CliError::parse(e.to_string()),
        })?;

        let table = config.key_mapping_table();
        let merged = working_set
            .merge(&table)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let Some(merged) = merged else {
            // An accepted batch is never empty, so an empty set cannot be
            // reached from the CLI; merging nothing is a silent no-op anyway.
            return Ok(());
        };

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.file_name));

        GeoJsonService::save(&merged, &output_path)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!(
            "✓ Merged {} features to: {}",
            merged.features.len(),
            output_path.display()
        );

        Ok(())
    }
}
