//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes the given (name, content) pairs into a fresh temp directory.
///
/// Returns the file paths in input order along with the `TempDir`, which the
/// caller must keep alive for the duration of the test.
pub fn temp_files(files: &[(&str, &str)]) -> (Vec<PathBuf>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let paths = files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).expect("Failed to write fixture file");
            path
        })
        .collect();
    (paths, dir)
}

/// A FeatureCollection document whose features carry the given `properties`
/// objects, each paired with a distinct point geometry.
pub fn collection_with_properties(properties: &[Value]) -> String {
    let features: Vec<Value> = properties
        .iter()
        .enumerate()
        .map(|(index, props)| {
            json!({
                "type": "Feature",
                "properties": props,
                "geometry": {"type": "Point", "coordinates": [index as f64, 0.0]}
            })
        })
        .collect();

    json!({"type": "FeatureCollection", "features": features}).to_string()
}

/// A FeatureCollection with features named via a `name` property.
pub fn collection_with_names(names: &[&str]) -> String {
    let properties: Vec<Value> = names.iter().map(|name| json!({"name": name})).collect();
    collection_with_properties(&properties)
}

/// Parses a merged artifact back into JSON for assertions.
pub fn read_merged(path: &std::path::Path) -> Value {
    let content = fs::read_to_string(path).expect("Failed to read merged artifact");
    serde_json::from_str(&content).expect("Merged artifact is not valid JSON")
}

/// The `name` properties of a merged artifact's features, in order.
pub fn merged_feature_names(merged: &Value) -> Vec<String> {
    merged["features"]
        .as_array()
        .expect("features must be an array")
        .iter()
        .map(|feature| {
            feature["properties"]["name"]
                .as_str()
                .expect("feature must have a name property")
                .to_string()
        })
        .collect()
}
