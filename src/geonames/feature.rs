//! GeoNames feature classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level GeoNames classification, stored as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureClass {
    #[serde(rename = "A")]
    AdministrativeBoundary,
    #[serde(rename = "H")]
    Hydrographic,
    #[serde(rename = "L")]
    Area,
    #[serde(rename = "P")]
    PopulatedPlace,
    #[serde(rename = "R")]
    Road,
    #[serde(rename = "S")]
    Spot,
    #[serde(rename = "T")]
    Hypsographic,
    #[serde(rename = "U")]
    Undersea,
    #[serde(rename = "V")]
    Vegetation,
}

impl FeatureClass {
    pub fn code(self) -> &'static str {
        match self {
            Self::AdministrativeBoundary => "A",
            Self::Hydrographic => "H",
            Self::Area => "L",
            Self::PopulatedPlace => "P",
            Self::Road => "R",
            Self::Spot => "S",
            Self::Hypsographic => "T",
            Self::Undersea => "U",
            Self::Vegetation => "V",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::AdministrativeBoundary => "country, state, region",
            Self::Hydrographic => "stream, lake",
            Self::Area => "parks, area",
            Self::PopulatedPlace => "city, village",
            Self::Road => "road, railroad",
            Self::Spot => "spot, building, farm",
            Self::Hypsographic => "mountain, hill, rock",
            Self::Undersea => "undersea",
            Self::Vegetation => "forest, heath",
        }
    }
}

impl fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
