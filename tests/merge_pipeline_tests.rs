//! Integration tests for the merge pipeline through the library API.
//!
//! These exercise the ingest → order → transform → serialize flow the way
//! the TUI drives it, without going through a terminal.

use geomerge::merge::{KeyMappingTable, WorkingSet};
use geomerge::models::InputFile;
use geomerge::services::GeoJsonService;
use serde_json::{json, Value};
use std::fs;

mod fixtures;
use fixtures::*;

fn input(name: &str, content: &str) -> InputFile {
    InputFile {
        name: name.to_string(),
        raw_content: content.to_string(),
    }
}

#[test]
fn test_full_pipeline_ingest_reorder_merge_save() {
    let mut set = WorkingSet::new();

    // Two batches arrive over time and append in order
    set.ingest_batch(vec![input(
        "site_poi_a.json",
        &collection_with_names(&["a1", "a2"]),
    )])
    .unwrap();
    set.ingest_batch(vec![input(
        "site_poi_b.json",
        &collection_with_names(&["b1"]),
    )])
    .unwrap();

    // The user drags file B to the front
    set.reorder(1, 0);

    let merged = set.merge(&KeyMappingTable::builtin()).unwrap().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("result.txt");
    GeoJsonService::save(&merged, &out_path).unwrap();

    let artifact = read_merged(&out_path);
    assert_eq!(merged_feature_names(&artifact), ["b1", "a1", "a2"]);
}

#[test]
fn test_merge_does_not_consume_the_working_set() {
    let mut set = WorkingSet::new();
    set.ingest_batch(vec![input(
        "site_poi_a.json",
        &collection_with_names(&["a1"]),
    )])
    .unwrap();

    let first = set.merge(&KeyMappingTable::builtin()).unwrap().unwrap();
    let second = set.merge(&KeyMappingTable::builtin()).unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_geometry_survives_the_full_pipeline_deep_equal() {
    let geometry = json!({
        "type": "MultiPolygon",
        "coordinates": [[[[127.1, 37.5], [127.2, 37.5], [127.2, 37.6], [127.1, 37.5]]]]
    });
    let document = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"id": 3, "created_da2": "2020-01-01"},
            "geometry": geometry
        }]
    });

    let mut set = WorkingSet::new();
    set.ingest_batch(vec![input("site_floor_1.json", &document.to_string())])
        .unwrap();

    let merged = set.merge(&KeyMappingTable::builtin()).unwrap().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("result.txt");
    GeoJsonService::save(&merged, &out_path).unwrap();

    let artifact: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    let feature = &artifact["features"][0];

    assert_eq!(feature["geometry"], geometry);
    assert_eq!(feature["id"], 3);
    assert_eq!(feature["properties"]["created_date"], "2020-01-01");
    assert_eq!(feature["properties"]["data_type"], "floor");
}

#[test]
fn test_custom_key_mapping_table_is_honored() {
    use geomerge::merge::KeyMapping;

    let table = KeyMappingTable::new(vec![KeyMapping::new("created_da", "creation_date")]);

    let mut set = WorkingSet::new();
    set.ingest_batch(vec![input(
        "site_poi_a.json",
        &collection_with_properties(&[json!({"created_da2": "2020-01-01"})]),
    )])
    .unwrap();

    let merged = set.merge(&table).unwrap().unwrap();
    let properties = merged.features[0].properties.as_ref().unwrap();
    assert_eq!(properties["creation_date"], json!("2020-01-01"));
}
