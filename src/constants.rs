//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and default output artifact name.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "GeoMerge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "geomerge";

/// Default file name of the merged output artifact.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "result.txt";
