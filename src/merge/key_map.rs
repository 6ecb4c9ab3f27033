//! Property-key rename table applied during merge.

use serde::{Deserialize, Serialize};

/// A single prefix-to-canonical-name rename rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMapping {
    /// Prefix a property key must start with for the rule to apply.
    pub prefix: String,
    /// Canonical name the key is renamed to.
    pub canonical: String,
}

impl KeyMapping {
    /// Creates a rename rule.
    pub fn new(prefix: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            canonical: canonical.into(),
        }
    }
}

/// Ordered table of property-key rename rules.
///
/// Upstream exports truncate attribute names to ten characters (shapefile
/// column limits), so keys like `created_da2` or `created_dat` all stand for
/// `created_date`. Rules are checked in table order and the first matching
/// prefix wins; keys matching no rule pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMappingTable {
    rules: Vec<KeyMapping>,
}

impl KeyMappingTable {
    /// Builds a table from explicit rules, preserving their order.
    #[must_use]
    pub fn new(rules: Vec<KeyMapping>) -> Self {
        Self { rules }
    }

    /// The built-in rename table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            KeyMapping::new("created_da", "created_date"),
            KeyMapping::new("category_c", "category_code"),
            KeyMapping::new("primary_ca", "primary_category"),
            KeyMapping::new("secondary_", "secondary_category"),
            KeyMapping::new("tertiary_c", "tertiary_category"),
            KeyMapping::new("road_addre", "road_address"),
            KeyMapping::new("opening_ye", "opening_year"),
            KeyMapping::new("business_h", "business_hours"),
            KeyMapping::new("store_numb", "store_number"),
        ])
    }

    /// Renames `key` according to the first matching rule, or returns it
    /// unchanged when no rule's prefix matches.
    #[must_use]
    pub fn remap<'a>(&'a self, key: &'a str) -> &'a str {
        self.rules
            .iter()
            .find(|rule| key.starts_with(rule.prefix.as_str()))
            .map_or(key, |rule| rule.canonical.as_str())
    }

    /// The rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[KeyMapping] {
        &self.rules
    }
}

impl Default for KeyMappingTable {
    fn default() -> Self {
        Self::builtin()
    }
}
