//! Feature category inferred from GeoJSON file names.

use serde::{Deserialize, Serialize};

/// Category of a GeoJSON source file, inferred from its file name.
///
/// Upstream data producers encode the kind of data in the file name: a name
/// containing `_floor_` holds floor outlines, `_sector_` holds sector
/// polygons, and `_poi_` holds points of interest. This naming convention is
/// the only schema contract with data producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Floor outline geometry (`_floor_` marker)
    Floor,
    /// Sector polygons (`_sector_` marker)
    Sector,
    /// Points of interest (`_poi_` marker)
    Poi,
}

impl Category {
    /// Infers the category from a file name.
    ///
    /// Matching is case-insensitive. When a name contains more than one
    /// marker, the first of `_floor_`, `_sector_`, `_poi_` in that check
    /// order wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use geomerge::models::Category;
    ///
    /// assert_eq!(
    ///     Category::from_file_name("mall_POI_2024.geojson"),
    ///     Some(Category::Poi)
    /// );
    /// assert_eq!(Category::from_file_name("report.json"), None);
    /// ```
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        if lowered.contains("_floor_") {
            Some(Self::Floor)
        } else if lowered.contains("_sector_") {
            Some(Self::Sector)
        } else if lowered.contains("_poi_") {
            Some(Self::Poi)
        } else {
            None
        }
    }

    /// The string injected into each feature's `properties.data_type`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Sector => "sector",
            Self::Poi => "poi",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_category_from_marker() {
        assert_eq!(
            Category::from_file_name("site_a_floor_1.geojson"),
            Some(Category::Floor)
        );
        assert_eq!(
            Category::from_file_name("site_a_sector_1.json"),
            Some(Category::Sector)
        );
        assert_eq!(
            Category::from_file_name("site_a_poi_1.json"),
            Some(Category::Poi)
        );
    }

    #[test]
    fn test_inference_is_case_insensitive() {
        assert_eq!(
            Category::from_file_name("SITE_A_FLOOR_1.GEOJSON"),
            Some(Category::Floor)
        );
        assert_eq!(
            Category::from_file_name("Mall_Poi_Export.json"),
            Some(Category::Poi)
        );
    }

    #[test]
    fn test_unmarked_name_has_no_category() {
        assert_eq!(Category::from_file_name("report.json"), None);
        // Marker must be underscore-delimited on both sides
        assert_eq!(Category::from_file_name("floor_plan.json"), None);
    }

    #[test]
    fn test_multi_marker_name_uses_check_order() {
        // floor wins over sector and poi regardless of position in the name
        assert_eq!(
            Category::from_file_name("a_poi_and_floor_map.json"),
            Some(Category::Floor)
        );
        assert_eq!(
            Category::from_file_name("a_poi_and_sector_map.json"),
            Some(Category::Sector)
        );
    }

    #[test]
    fn test_data_type_strings() {
        assert_eq!(Category::Floor.as_str(), "floor");
        assert_eq!(Category::Sector.as_str(), "sector");
        assert_eq!(Category::Poi.as_str(), "poi");
    }
}
