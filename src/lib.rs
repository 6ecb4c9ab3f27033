//! GeoMerge Library
//!
//! This library provides the core functionality for the GeoMerge application:
//! ingesting GeoJSON files into an ordered working set, reordering them, and
//! merging their features into a single FeatureCollection with property-key
//! normalization.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod merge;
pub mod models;
pub mod services;
pub mod tui;
