//! The ordered working set of ingested GeoJSON files.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::merge::transform::merge_documents;
use crate::merge::KeyMappingTable;
use crate::models::{Category, FeatureCollection, InputFile, ParsedDocument};

/// Why a batch of candidate files was rejected at ingestion.
#[derive(Debug)]
pub enum IngestError {
    /// No file name in the batch carries a category marker.
    NoRecognizedCategory,
    /// A file in the batch is not a valid GeoJSON document; the whole batch
    /// is dropped.
    Parse {
        /// Name of the offending file.
        name: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRecognizedCategory => write!(
                f,
                "at least one file name must contain _floor_, _sector_ or _poi_"
            ),
            Self::Parse { name, source } => write!(f, "failed to parse {name}: {source}"),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoRecognizedCategory => None,
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Why merging the current working set was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeError {
    /// No document in the working set carries a category.
    NoRecognizedCategory,
}

impl std::fmt::Display for MergeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRecognizedCategory => write!(
                f,
                "at least one file name must contain _floor_, _sector_ or _poi_"
            ),
        }
    }
}

impl std::error::Error for MergeError {}

/// The user's current ordered collection of ingested files awaiting merge.
///
/// The set only grows: batches append, [`reorder`](Self::reorder) rearranges,
/// and there is no remove or clear operation. Merging never consumes it.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    documents: Vec<ParsedDocument>,
}

impl WorkingSet {
    /// Creates an empty working set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents in their current user-chosen order.
    #[must_use]
    pub fn documents(&self) -> &[ParsedDocument] {
        &self.documents
    }

    /// Number of ingested documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document has been ingested yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Ingests a batch of candidate files.
    ///
    /// Files whose names do not end in `.json` or `.geojson` are silently
    /// dropped. The batch is accepted only if at least one surviving file
    /// name yields a category; a parse failure in any file rejects the whole
    /// batch. Every feature of a categorized file gets
    /// `properties.data_type` set to the file's category string (creating
    /// `properties` when absent); uncategorized files in an accepted batch
    /// get no injection. Accepted documents are appended to the end of the
    /// working set in batch order.
    ///
    /// Nothing is committed until every file has parsed: either the whole
    /// batch lands or none of it does.
    ///
    /// Returns the number of documents added.
    pub fn ingest_batch(&mut self, files: Vec<InputFile>) -> Result<usize, IngestError> {
        let candidates: Vec<InputFile> = files
            .into_iter()
            .filter(|file| has_geojson_extension(&file.name))
            .collect();

        if !candidates
            .iter()
            .any(|file| Category::from_file_name(&file.name).is_some())
        {
            return Err(IngestError::NoRecognizedCategory);
        }

        let mut parsed = Vec::with_capacity(candidates.len());
        for file in candidates {
            parsed.push(parse_document(file)?);
        }

        let added = parsed.len();
        self.documents.append(&mut parsed);
        Ok(added)
    }

    /// Moves the entry at `from` to position `to`, shifting the entries in
    /// between by one slot.
    ///
    /// Out-of-range positions are a no-op, mirroring a drag released outside
    /// the list.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.documents.len() || to >= self.documents.len() {
            return;
        }
        let document = self.documents.remove(from);
        self.documents.insert(to, document);
    }

    /// Merges the working set into a single FeatureCollection.
    ///
    /// An empty set is a silent no-op (`Ok(None)`): no artifact, no error.
    /// A non-empty set is re-validated against the category rule before
    /// merging. The working set itself is never modified.
    pub fn merge(&self, table: &KeyMappingTable) -> Result<Option<FeatureCollection>, MergeError> {
        if self.documents.is_empty() {
            return Ok(None);
        }

        if !self
            .documents
            .iter()
            .any(|document| document.category.is_some())
        {
            return Err(MergeError::NoRecognizedCategory);
        }

        Ok(Some(merge_documents(&self.documents, table)))
    }
}

/// Case-sensitive suffix filter applied to candidate file names.
fn has_geojson_extension(name: &str) -> bool {
    name.ends_with(".json") || name.ends_with(".geojson")
}

/// Parses one accepted file, injecting `data_type` when it is categorized.
fn parse_document(file: InputFile) -> Result<ParsedDocument, IngestError> {
    let category = Category::from_file_name(&file.name);

    let mut content: FeatureCollection =
        serde_json::from_str(&file.raw_content).map_err(|source| IngestError::Parse {
            name: file.name.clone(),
            source,
        })?;

    if let Some(category) = category {
        for feature in &mut content.features {
            feature.properties.get_or_insert_with(Map::new).insert(
                "data_type".to_string(),
                Value::String(category.as_str().to_string()),
            );
        }
    }

    Ok(ParsedDocument {
        id: Uuid::new_v4(),
        name: file.name,
        category,
        content,
    })
}
