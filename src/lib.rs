//! Read-only GeoNames reference data: toponyms, their alternate names and
//! airports.
//!
//! Entities are created once by [`GeoStore::from_snapshot`] and never change
//! afterwards. Every write is rejected by the [`ReadOnly`] guards, and every
//! entity renders itself through the [`Renderer`] sink.

pub mod error;
pub mod geonames;
pub mod location;
pub mod readonly;
pub mod render;
pub mod store;

pub use error::{Error, RenderError, Result, WriteOp};
pub use geonames::{Airport, AlternateName, FeatureClass, Toponym, ToponymId};
pub use location::{format_coords, GeoLocation, Geographical, Location};
pub use readonly::ReadOnly;
pub use render::{render_json, JsonRenderer, RenderLevel, Renderable, Renderer};
pub use store::{GeoStore, Snapshot, StoreStats};
