//! Airports, linked to their city and country toponyms when known.

use super::Toponym;
use crate::error::RenderError;
use crate::location::{GeoLocation, Geographical};
use crate::readonly::{sealed, ReadOnly};
use crate::render::{RenderLevel, Renderable, Renderer};
use crate::store::snapshot::AirportRow;
use std::sync::{Arc, OnceLock};

/// An airport. City and country are shared associations; the airport never
/// owns the referenced toponyms.
#[derive(Debug)]
pub struct Airport {
    code: String,
    name: String,
    city_name: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
    world_area_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<Arc<Toponym>>,
    country: Option<Arc<Toponym>>,
    location: OnceLock<GeoLocation>,
}

impl Airport {
    pub const TABLE: &'static str = "geonames_airport";

    pub(crate) fn from_row(
        row: AirportRow,
        city: Option<Arc<Toponym>>,
        country: Option<Arc<Toponym>>,
    ) -> Self {
        Self {
            code: row.code,
            name: row.name,
            city_name: row.city_name,
            country_name: row.country_name,
            country_code: row.country_code,
            world_area_code: row.world_area_code,
            latitude: row.latitude,
            longitude: row.longitude,
            city,
            country,
            location: OnceLock::new(),
        }
    }

    /// IATA code.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city_name(&self) -> Option<&str> {
        self.city_name.as_deref()
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country_name.as_deref()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn world_area_code(&self) -> Option<&str> {
        self.world_area_code.as_deref()
    }

    pub fn city(&self) -> Option<&Arc<Toponym>> {
        self.city.as_ref()
    }

    pub fn country(&self) -> Option<&Arc<Toponym>> {
        self.country.as_ref()
    }
}

impl Geographical for Airport {
    fn location(&self) -> &GeoLocation {
        self.location
            .get_or_init(|| GeoLocation::new(Self::ENTITY, self.latitude, self.longitude))
    }
}

impl sealed::Sealed for Airport {}

impl ReadOnly for Airport {
    const ENTITY: &'static str = "Airport";
}

impl Renderable for Airport {
    // Flat: associations and coordinates are not part of the output.
    fn render(&self, r: &mut dyn Renderer, _level: RenderLevel) -> Result<(), RenderError> {
        r.entry("code", self.code.as_str().into())?;
        r.entry("name", self.name.as_str().into())?;
        r.entry("cityName", self.city_name().into())?;
        r.entry("countryName", self.country_name().into())?;
        r.entry("countryCode", self.country_code().into())?;
        r.entry("worldAreaCode", self.world_area_code().into())
    }
}
