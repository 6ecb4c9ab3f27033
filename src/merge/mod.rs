//! The merge engine: ingest, order, transform, serialize.
//!
//! A [`WorkingSet`] accumulates parsed GeoJSON files in user-chosen order;
//! [`merge_documents`] flattens their features into a single
//! FeatureCollection, hoisting `properties.id` to the top level and renaming
//! truncated property keys through the [`KeyMappingTable`].

pub mod key_map;
pub mod transform;
pub mod working_set;

// Re-export the engine's public surface
pub use key_map::{KeyMapping, KeyMappingTable};
pub use transform::{merge_documents, transform_feature};
pub use working_set::{IngestError, MergeError, WorkingSet};
