//! In-memory backing store for the read-only entities.
//!
//! Populated exactly once from a [`Snapshot`]. Associations are resolved at
//! load time; a row naming a missing toponym fails the whole load. Writes go
//! through the entities' [`ReadOnly`] guards and are always rejected.

pub mod snapshot;

pub use snapshot::{AirportRow, AlternateNameRow, Snapshot, ToponymRow};

use crate::error::{Error, Result, WriteOp};
use crate::geonames::{Airport, AlternateName, Toponym, ToponymId};
use crate::readonly::ReadOnly;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Entity counts and provenance of a loaded store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub toponyms: usize,
    pub alternate_names: usize,
    pub airports: usize,
    pub exported_at: Option<DateTime<Utc>>,
    pub loaded_at: DateTime<Utc>,
}

pub struct GeoStore {
    toponyms: BTreeMap<ToponymId, Arc<Toponym>>,
    airports: BTreeMap<String, Arc<Airport>>,
    exported_at: Option<DateTime<Utc>>,
    loaded_at: DateTime<Utc>,
}

impl GeoStore {
    /// Read a snapshot file and build the store.
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_snapshot(Snapshot::read(path)?)
    }

    /// Bulk load. This is the only path that creates entities, and it does
    /// not go through the write guards.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let Snapshot { exported_at, toponyms: toponym_rows, alternate_names, airports: airport_rows } =
            snapshot;

        let mut rows: BTreeMap<ToponymId, ToponymRow> = BTreeMap::new();
        for row in toponym_rows {
            match rows.entry(ToponymId(row.id)) {
                Entry::Occupied(_) => {
                    return Err(Error::DuplicateId { table: Toponym::TABLE, id: row.id.to_string() })
                }
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
            }
        }

        let mut names: BTreeMap<ToponymId, Vec<AlternateNameRow>> = BTreeMap::new();
        let mut seen = BTreeSet::new();
        for row in alternate_names {
            if !seen.insert(row.id) {
                return Err(Error::DuplicateId { table: AlternateName::TABLE, id: row.id.to_string() });
            }
            let owner = ToponymId(row.toponym_id);
            if !rows.contains_key(&owner) {
                return Err(Error::DanglingReference {
                    table: AlternateName::TABLE,
                    column: "toponym_id",
                    id: row.id.to_string(),
                    target: row.toponym_id,
                });
            }
            names.entry(owner).or_default().push(row);
        }

        let toponyms: BTreeMap<ToponymId, Arc<Toponym>> = rows
            .into_iter()
            .map(|(id, row)| {
                let aliases = names.remove(&id).unwrap_or_default();
                (id, Toponym::build(row, aliases))
            })
            .collect();

        let mut airports: BTreeMap<String, Arc<Airport>> = BTreeMap::new();
        for row in airport_rows {
            // IATA codes are case-insensitive; keys are stored uppercased.
            let key = row.code.to_uppercase();
            if airports.contains_key(&key) {
                return Err(Error::DuplicateId { table: Airport::TABLE, id: row.code });
            }
            let city = resolve(&toponyms, &row.code, "city_id", row.city_id)?;
            let country = resolve(&toponyms, &row.code, "country_id", row.country_id)?;
            airports.insert(key, Arc::new(Airport::from_row(row, city, country)));
        }

        debug!(
            toponyms = toponyms.len(),
            airports = airports.len(),
            "built read-only store"
        );

        Ok(Self { toponyms, airports, exported_at, loaded_at: Utc::now() })
    }

    pub fn toponym(&self, id: ToponymId) -> Option<&Arc<Toponym>> {
        self.toponyms.get(&id)
    }

    /// Toponyms in id order.
    pub fn toponyms(&self) -> impl Iterator<Item = &Arc<Toponym>> {
        self.toponyms.values()
    }

    /// Lookup by IATA code, case-insensitive.
    pub fn airport(&self, code: &str) -> Option<&Arc<Airport>> {
        self.airports.get(&code.to_uppercase())
    }

    /// Airports in code order.
    pub fn airports(&self) -> impl Iterator<Item = &Arc<Airport>> {
        self.airports.values()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            toponyms: self.toponyms.len(),
            alternate_names: self.toponyms.values().map(|t| t.aliases().len()).sum(),
            airports: self.airports.len(),
            exported_at: self.exported_at,
            loaded_at: self.loaded_at,
        }
    }

    pub fn insert<E: ReadOnly>(&mut self, entity: &E) -> Result<()> {
        entity.before_write(WriteOp::Insert)
    }

    pub fn update<E: ReadOnly>(&mut self, entity: &E) -> Result<()> {
        entity.before_write(WriteOp::Update)
    }

    pub fn remove<E: ReadOnly>(&mut self, entity: &E) -> Result<()> {
        entity.before_write(WriteOp::Delete)
    }
}

fn resolve(
    toponyms: &BTreeMap<ToponymId, Arc<Toponym>>,
    code: &str,
    column: &'static str,
    id: Option<i64>,
) -> Result<Option<Arc<Toponym>>> {
    let Some(id) = id else {
        return Ok(None);
    };
    match toponyms.get(&ToponymId(id)) {
        Some(toponym) => Ok(Some(Arc::clone(toponym))),
        None => Err(Error::DanglingReference {
            table: Airport::TABLE,
            column,
            id: code.to_string(),
            target: id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geonames::FeatureClass;
    use crate::location::{Geographical, Location};
    use crate::render::{render_json, RenderLevel};
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> Snapshot {
        serde_json::from_value(json!({
            "exported_at": "2024-05-01T00:00:00Z",
            "toponyms": [
                {"id": 5128581, "name": "New York City", "ascii_name": "New York City",
                 "feature_class": "P", "feature_code": "PPL",
                 "latitude": 40.71427, "longitude": -74.00597},
                {"id": 6252001, "name": "United States", "ascii_name": "United States",
                 "feature_class": "A", "feature_code": "PCLI"}
            ],
            "alternate_names": [
                {"id": 1, "toponym_id": 5128581, "name": "NYC", "language_code": "en", "short_name": true},
                {"id": 2, "toponym_id": 5128581, "name": "New York", "language_code": "en", "preferred_name": true},
                {"id": 3, "toponym_id": 5128581, "name": "Nueva York", "language_code": "es"},
                {"id": 4, "toponym_id": 5128581, "language_code": "link"}
            ],
            "airports": [
                {"code": "JFK", "name": "John F. Kennedy Intl", "city_name": "New York",
                 "country_name": "United States", "country_code": "US", "world_area_code": "639",
                 "latitude": 40.6398, "longitude": -73.7789,
                 "city_id": 5128581, "country_id": 6252001},
                {"code": "ZZZ", "name": "Unlinked Field"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_load_and_resolve_associations() {
        let store = GeoStore::from_snapshot(sample()).unwrap();
        let jfk = store.airport("jfk").unwrap();
        assert_eq!(jfk.city().unwrap().name(), "New York City");
        assert_eq!(
            jfk.country().unwrap().feature_class(),
            Some(FeatureClass::AdministrativeBoundary)
        );
        // Shared, not copied.
        assert!(Arc::ptr_eq(jfk.city().unwrap(), store.toponym(ToponymId(5128581)).unwrap()));

        let zzz = store.airport("ZZZ").unwrap();
        assert!(zzz.city().is_none());
        assert_eq!(zzz.location().latitude(), None);
    }

    #[test]
    fn test_alternate_names_ordered_and_owned() {
        let store = GeoStore::from_snapshot(sample()).unwrap();
        let nyc = store.toponym(ToponymId(5128581)).unwrap();
        let ids: Vec<i64> = nyc.aliases().iter().map(AlternateName::id).collect();
        assert_eq!(ids, [2, 1, 3, 4]);
        for name in nyc.aliases() {
            assert_eq!(name.toponym().id(), nyc.id());
            assert_eq!(name.toponym_id(), nyc.id());
            assert!(Arc::ptr_eq(&name.toponym(), nyc));
        }
        let us = store.toponym(ToponymId(6252001)).unwrap();
        assert!(us.aliases().is_empty());
        let out = render_json(&**us, RenderLevel::Medium).unwrap();
        assert_eq!(out["location"], json!({"latitude": null, "longitude": null}));
    }

    #[test]
    fn test_writes_rejected_without_effect() {
        let mut store = GeoStore::from_snapshot(sample()).unwrap();
        let before = serde_json::to_value(store.stats()).unwrap();

        let jfk = Arc::clone(store.airport("JFK").unwrap());
        let nyc = Arc::clone(store.toponym(ToponymId(5128581)).unwrap());
        let name = nyc.aliases().iter().next().unwrap();

        assert!(store.insert(&*jfk).unwrap_err().is_read_only());
        assert!(store.update(&*nyc).unwrap_err().is_read_only());
        assert!(store.remove(name).unwrap_err().is_read_only());
        assert!(store.remove(&*jfk).unwrap_err().is_read_only());

        assert_eq!(serde_json::to_value(store.stats()).unwrap(), before);
        assert!(store.airport("JFK").is_some());
        assert_eq!(nyc.aliases().len(), 4);
    }

    #[test]
    fn test_dangling_alternate_name() {
        let mut snapshot = sample();
        snapshot.alternate_names[0].toponym_id = 42;
        match GeoStore::from_snapshot(snapshot) {
            Err(Error::DanglingReference { table, column, target, .. }) => {
                assert_eq!(table, "geonames_alternate_names");
                assert_eq!(column, "toponym_id");
                assert_eq!(target, 42);
            }
            other => panic!("expected dangling reference, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_dangling_airport_city() {
        let mut snapshot = sample();
        snapshot.airports[1].city_id = Some(7);
        assert!(matches!(
            GeoStore::from_snapshot(snapshot),
            Err(Error::DanglingReference { column: "city_id", .. })
        ));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut snapshot = sample();
        let dup = snapshot.toponyms[0].clone();
        snapshot.toponyms.push(dup);
        assert!(matches!(
            GeoStore::from_snapshot(snapshot),
            Err(Error::DuplicateId { table: "geonames_toponyms", .. })
        ));

        let mut snapshot = sample();
        let dup = snapshot.airports[0].clone();
        snapshot.airports.push(dup);
        assert!(matches!(
            GeoStore::from_snapshot(snapshot),
            Err(Error::DuplicateId { table: "geonames_airport", .. })
        ));
    }

    #[test]
    fn test_airport_codes_case_insensitive() {
        let mut snapshot = sample();
        snapshot.airports[1].code = "Abc".into();
        let store = GeoStore::from_snapshot(snapshot).unwrap();
        assert_eq!(store.airport("abc").unwrap().code(), "Abc");
        assert_eq!(store.airport("ABC").unwrap().name(), "Unlinked Field");
        assert!(store.airport("jfk").is_some());

        let mut snapshot = sample();
        let mut upper = snapshot.airports[1].clone();
        snapshot.airports[1].code = "Abc".into();
        upper.code = "ABC".into();
        snapshot.airports.push(upper);
        match GeoStore::from_snapshot(snapshot) {
            Err(Error::DuplicateId { table, id }) => {
                assert_eq!(table, "geonames_airport");
                assert_eq!(id, "ABC");
            }
            other => panic!("expected duplicate id, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_stats() {
        let store = GeoStore::from_snapshot(sample()).unwrap();
        let stats = store.stats();
        assert_eq!(stats.toponyms, 2);
        assert_eq!(stats.alternate_names, 4);
        assert_eq!(stats.airports, 2);
        assert!(stats.exported_at.is_some());
    }

    #[test]
    fn test_open_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, serde_json::to_string(&sample()).unwrap()).unwrap();

        let store = GeoStore::open(&path).unwrap();
        assert_eq!(store.airports().count(), 2);
        assert_eq!(store.toponyms().count(), 2);
    }
}
