//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_FILE_NAME;
use crate::merge::{KeyMapping, KeyMappingTable};

/// Output artifact configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name the merged artifact is written to.
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output artifact settings.
    pub output: OutputConfig,
    /// Optional replacement for the built-in property-key rename table.
    /// When empty, the built-in table is used.
    pub key_mappings: Vec<KeyMapping>,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective rename table: the config override when present,
    /// otherwise the built-in table.
    #[must_use]
    pub fn key_mapping_table(&self) -> KeyMappingTable {
        if self.key_mappings.is_empty() {
            KeyMappingTable::builtin()
        } else {
            KeyMappingTable::new(self.key_mappings.clone())
        }
    }

    /// Checks if a configuration file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/GeoMerge/`
    /// - macOS: `~/Library/Application Support/GeoMerge/`
    /// - Windows: `%APPDATA%\GeoMerge\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("GeoMerge");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.output.file_name.is_empty() {
            anyhow::bail!("output.file_name cannot be empty");
        }

        for mapping in &self.key_mappings {
            if mapping.prefix.is_empty() {
                anyhow::bail!("key mapping prefix cannot be empty");
            }
        }

        Ok(())
    }

    /// Saves configuration to the config file.
    ///
    /// The write is atomic (temp file + rename) so a crash mid-save never
    /// corrupts an existing config.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_table() {
        let config = Config::new();
        assert_eq!(config.output.file_name, "result.txt");
        assert_eq!(config.key_mapping_table(), KeyMappingTable::builtin());
    }

    #[test]
    fn test_key_mappings_override_replaces_builtin_table() {
        let config: Config = toml::from_str(
            r#"
            [[key_mappings]]
            prefix = "created_da"
            canonical = "creation_date"
            "#,
        )
        .unwrap();

        let table = config.key_mapping_table();
        assert_eq!(table.remap("created_da2"), "creation_date");
        // The override is a replacement, not an extension
        assert_eq!(table.remap("business_h1"), "business_h1");
    }

    #[test]
    fn test_empty_output_file_name_fails_validation() {
        let config: Config = toml::from_str("[output]\nfile_name = \"\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_prefix_fails_validation() {
        let config: Config = toml::from_str(
            r#"
            [[key_mappings]]
            prefix = ""
            canonical = "x"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let mut config = Config::new();
        config.key_mappings.push(KeyMapping::new("abc", "abcdef"));

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(restored, config);
    }
}
