//! GeoJSON file I/O service.
//!
//! This module centralizes reading source files and writing the merged
//! artifact, providing consistent error messages and atomic output writes.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{FeatureCollection, InputFile};

/// Service for reading GeoJSON source files and writing merge artifacts.
pub struct GeoJsonService;

impl GeoJsonService {
    /// Reads a file into an [`InputFile`] ready for ingestion.
    ///
    /// Category inference runs on the final path component; the directory
    /// part is irrelevant to the pipeline.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the candidate file to read
    ///
    /// # Returns
    ///
    /// * `Ok(InputFile)` - Name and raw text of the file
    /// * `Err(...)` - File not found, not a file path, or I/O error
    pub fn load(path: &Path) -> Result<InputFile> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("Not a file path: {}", path.display()))?;

        let raw_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(InputFile { name, raw_content })
    }

    /// Writes a merged FeatureCollection to `path` as pretty-printed JSON
    /// (2-space indent).
    ///
    /// This performs an atomic write using a temp file + rename pattern so
    /// the artifact is never left half-written.
    pub fn save(collection: &FeatureCollection, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(collection)
            .context("Failed to serialize merged FeatureCollection")?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feature;
    use serde_json::Map;

    #[test]
    fn test_load_uses_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site_poi_a.json");
        fs::write(&path, "{}").unwrap();

        let file = GeoJsonService::load(&path).unwrap();
        assert_eq!(file.name, "site_poi_a.json");
        assert_eq!(file.raw_content, "{}");
    }

    #[test]
    fn test_load_missing_file_names_the_path() {
        let err = GeoJsonService::load(Path::new("/no/such/file.json")).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.json"));
    }

    #[test]
    fn test_save_writes_two_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");

        let feature = Feature {
            id: None,
            properties: Some(Map::new()),
            extra: Map::new(),
        };
        GeoJsonService::save(&FeatureCollection::new(vec![feature]), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"type\": \"FeatureCollection\""));
        assert!(content.contains("\n  \"features\": ["));
        // The temp file was renamed away
        assert!(!path.with_extension("tmp").exists());
    }
}
