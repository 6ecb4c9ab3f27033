//! Inspect command: report inferred categories without merging.
//!
//! Useful for checking whether producer files follow the `_floor_` /
//! `_sector_` / `_poi_` naming convention before a merge is attempted.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::models::{Category, FeatureCollection};
use crate::services::GeoJsonService;

/// Show the inferred category and feature count of GeoJSON files
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// GeoJSON files to inspect
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        for path in &self.files {
            let file = GeoJsonService::load(path)
                .map_err(|e| CliError::io(format!("Failed to load input file: {e}")))?;

            let category = Category::from_file_name(&file.name).map_or("none", Category::as_str);

            let content: FeatureCollection = serde_json::from_str(&file.raw_content)
                .map_err(|e| CliError::parse(format!("failed to parse {}: {e}", file.name)))?;

            println!(
                "{}: category={}, features={}",
                file.name,
                category,
                content.features.len()
            );
        }

        Ok(())
    }
}
