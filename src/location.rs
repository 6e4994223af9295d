//! Read-only coordinate facade shared by every coordinate-bearing entity.

use crate::error::{self, RenderError, WriteOp};
use crate::readonly::reject;
use crate::render::{RenderLevel, Renderable, Renderer};
use std::fmt;

/// Latitude/longitude view. Missing values stay `None`; they are never
/// defaulted to the equator or the prime meridian.
pub trait Location {
    fn latitude(&self) -> Option<f64>;

    fn longitude(&self) -> Option<f64>;

    /// Always fails: the facade only reads.
    fn set_latitude(&self, latitude: Option<f64>) -> error::Result<()>;

    /// Always fails: the facade only reads.
    fn set_longitude(&self, longitude: Option<f64>) -> error::Result<()>;
}

/// Capability of entities that carry coordinates.
pub trait Geographical {
    /// The cached facade. Repeated calls return the same instance.
    fn location(&self) -> &GeoLocation;
}

/// Coordinates copied out of the owning entity on first access.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    owner: &'static str,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl GeoLocation {
    pub(crate) fn new(owner: &'static str, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self { owner, latitude, longitude }
    }
}

impl Location for GeoLocation {
    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    fn set_latitude(&self, _latitude: Option<f64>) -> error::Result<()> {
        Err(reject(self.owner, WriteOp::SetCoordinate))
    }

    fn set_longitude(&self, _longitude: Option<f64>) -> error::Result<()> {
        Err(reject(self.owner, WriteOp::SetCoordinate))
    }
}

impl Renderable for GeoLocation {
    fn render(&self, r: &mut dyn Renderer, _level: RenderLevel) -> Result<(), RenderError> {
        r.entry("latitude", self.latitude.into())?;
        r.entry("longitude", self.longitude.into())
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => f.write_str(&format_coords(lat, lon)),
            _ => f.write_str("unknown"),
        }
    }
}

/// Format coordinates with hemisphere letters, e.g. `59.3293°N, 18.0686°E`.
pub fn format_coords(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}\u{00B0}{}, {:.4}\u{00B0}{}", lat.abs(), ns, lon.abs(), ew)
}
