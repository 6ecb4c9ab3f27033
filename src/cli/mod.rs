//! CLI command handlers for GeoMerge.
//!
//! This module provides headless, scriptable access to the merge pipeline
//! for automation, testing, and CI integration.

pub mod common;
pub mod inspect;
pub mod merge;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use inspect::InspectArgs;
pub use merge::MergeArgs;
