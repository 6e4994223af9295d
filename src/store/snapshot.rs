//! On-disk snapshot read by the bulk loader.
//!
//! Default path: ~/.gazetteer/snapshot.json. Rows use the column names of
//! their backing tables.

use crate::error::Result;
use crate::geonames::FeatureClass;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Row of `geonames_toponyms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToponymRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub ascii_name: Option<String>,
    #[serde(default)]
    pub feature_class: Option<FeatureClass>,
    #[serde(default)]
    pub feature_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Row of `geonames_alternate_names`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternateNameRow {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub preferred_name: bool,
    #[serde(default)]
    pub short_name: bool,
    pub toponym_id: i64,
}

/// Row of `geonames_airport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportRow {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub world_area_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub city_id: Option<i64>,
    #[serde(default)]
    pub country_id: Option<i64>,
}

/// A full export of the three tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub toponyms: Vec<ToponymRow>,
    #[serde(default)]
    pub alternate_names: Vec<AlternateNameRow>,
    #[serde(default)]
    pub airports: Vec<AirportRow>,
}

impl Snapshot {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gazetteer")
            .join("snapshot.json")
    }

    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&data)?;
        debug!(
            path = %path.display(),
            toponyms = snapshot.toponyms.len(),
            alternate_names = snapshot.alternate_names.len(),
            airports = snapshot.airports.len(),
            "read snapshot"
        );
        Ok(snapshot)
    }
}
