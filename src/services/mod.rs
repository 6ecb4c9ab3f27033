//! Service layer for file I/O.
//!
//! This module contains services that sit between the pure merge engine and
//! the file system, keeping path handling and error messages consistent.

pub mod geojson;

// Re-export commonly used types and functions
pub use geojson::GeoJsonService;
