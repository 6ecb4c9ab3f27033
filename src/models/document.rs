//! GeoJSON document structures flowing through the merge pipeline.
//!
//! Parsing is deliberately shallow: only the fields the pipeline touches
//! (`features`, per-feature `id` and `properties`) are modeled. Everything
//! else - `geometry` above all - is carried through as raw JSON and written
//! back byte-for-byte.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::Category;

/// A single GeoJSON feature.
///
/// Only `id` and `properties` are ever examined by the merge transform;
/// `type`, `geometry`, and any other fields ride along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Top-level feature id, if present in the source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Feature properties. Absent in some producer exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// All remaining fields (`type`, `geometry`, ...), preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A GeoJSON FeatureCollection.
///
/// Only `features` is read from source documents; any other top-level keys
/// are dropped on read and absent from output. A document without a
/// `features` array is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Document type tag, always `"FeatureCollection"` on output.
    #[serde(rename = "type", default = "feature_collection_type")]
    pub document_type: String,
    /// The ordered feature list.
    pub features: Vec<Feature>,
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

impl FeatureCollection {
    /// Creates a FeatureCollection from an ordered feature list.
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            document_type: feature_collection_type(),
            features,
        }
    }
}

/// A named raw file accepted from the input surface, before parsing.
#[derive(Debug, Clone)]
pub struct InputFile {
    /// File name as supplied (base name; category inference runs on this).
    pub name: String,
    /// Raw UTF-8 text content.
    pub raw_content: String,
}

/// A parsed GeoJSON file held in the working set.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Stable synthetic identifier assigned at ingestion. Reordering and
    /// selection key off this rather than the file name, which may not be
    /// unique.
    pub id: Uuid,
    /// Original file name.
    pub name: String,
    /// Category inferred from the file name, if any.
    pub category: Option<Category>,
    /// Parsed document content.
    pub content: FeatureCollection,
}
