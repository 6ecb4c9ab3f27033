//! Data models for GeoJSON documents and the merge pipeline.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business logic.

pub mod category;
pub mod document;

// Re-export all model types
pub use category::Category;
pub use document::{Feature, FeatureCollection, InputFile, ParsedDocument};
