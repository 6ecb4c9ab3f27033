//! The merge transform: id hoisting and property-key renaming.

use serde_json::Map;

use crate::merge::KeyMappingTable;
use crate::models::{Feature, FeatureCollection, ParsedDocument};

/// Merges every document's features, in document order, into a single
/// FeatureCollection.
///
/// Feature order in the output equals the concatenation of per-document
/// feature order; nothing is sorted, deduplicated, or dropped. Each feature
/// is transformed via [`transform_feature`].
#[must_use]
pub fn merge_documents(documents: &[ParsedDocument], table: &KeyMappingTable) -> FeatureCollection {
    let features = documents
        .iter()
        .flat_map(|document| document.content.features.iter())
        .map(|feature| transform_feature(feature.clone(), table))
        .collect();

    FeatureCollection::new(features)
}

/// Transforms a single feature for output.
///
/// If `properties.id` is present it is removed from `properties` and hoisted
/// to the top-level `id`; a pre-existing top-level `id` wins over the hoisted
/// value. Every remaining property key is then renamed through the mapping
/// table. `geometry` and all other fields pass through untouched.
///
/// When two original keys rename to the same canonical name, the
/// later-iterated key's value overwrites the earlier one. That matches the
/// long-standing behavior of the upstream exports' consumers; do not change
/// it without a product decision.
#[must_use]
pub fn transform_feature(mut feature: Feature, table: &KeyMappingTable) -> Feature {
    if let Some(properties) = feature.properties.as_mut() {
        let hoisted = properties.remove("id");
        if feature.id.is_none() {
            feature.id = hoisted;
        }

        let mut remapped = Map::with_capacity(properties.len());
        for (key, value) in std::mem::take(properties) {
            remapped.insert(table.remap(&key).to_string(), value);
        }
        *properties = remapped;
    }

    feature
}
