//! Named, classified geographic points.

use super::{AlternateName, FeatureClass, ToponymId};
use crate::error::RenderError;
use crate::location::{GeoLocation, Geographical};
use crate::readonly::{sealed, ReadOnly};
use crate::render::{RenderLevel, Renderable, Renderer};
use crate::store::snapshot::{AlternateNameRow, ToponymRow};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

#[derive(Debug)]
pub struct Toponym {
    id: ToponymId,
    name: String,
    ascii_name: Option<String>,
    feature_class: Option<FeatureClass>,
    feature_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    alternate_names: BTreeSet<AlternateName>,
    location: OnceLock<GeoLocation>,
}

impl Toponym {
    pub const TABLE: &'static str = "geonames_toponyms";

    pub(crate) fn from_row(row: ToponymRow, alternate_names: BTreeSet<AlternateName>) -> Self {
        Self {
            id: ToponymId(row.id),
            name: row.name,
            ascii_name: row.ascii_name,
            feature_class: row.feature_class,
            feature_code: row.feature_code,
            latitude: row.latitude,
            longitude: row.longitude,
            alternate_names,
            location: OnceLock::new(),
        }
    }

    /// Allocates the toponym with its names; each name points back at the
    /// new allocation.
    pub(crate) fn build(row: ToponymRow, names: Vec<AlternateNameRow>) -> Arc<Self> {
        Arc::new_cyclic(|owner| {
            let aliases = names
                .into_iter()
                .map(|name| AlternateName::from_row(name, owner.clone()))
                .collect();
            Self::from_row(row, aliases)
        })
    }

    pub fn id(&self) -> ToponymId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ascii_name(&self) -> Option<&str> {
        self.ascii_name.as_deref()
    }

    pub fn feature_class(&self) -> Option<FeatureClass> {
        self.feature_class
    }

    pub fn feature_code(&self) -> Option<&str> {
        self.feature_code.as_deref()
    }

    /// Alternate names, iterated in [`AlternateName::compare`] order.
    pub fn aliases(&self) -> &BTreeSet<AlternateName> {
        &self.alternate_names
    }
}

impl Geographical for Toponym {
    fn location(&self) -> &GeoLocation {
        self.location
            .get_or_init(|| GeoLocation::new(Self::ENTITY, self.latitude, self.longitude))
    }
}

impl sealed::Sealed for Toponym {}

impl ReadOnly for Toponym {
    const ENTITY: &'static str = "Toponym";
}

impl Renderable for Toponym {
    fn render(&self, r: &mut dyn Renderer, level: RenderLevel) -> Result<(), RenderError> {
        r.entry("id", self.id.0.into())?;
        r.entry("name", self.name.as_str().into())?;
        r.entry("asciiName", self.ascii_name().into())?;
        r.entry("featureClass", self.feature_class.map(FeatureClass::code).into())?;
        r.entry("featureCode", self.feature_code().into())?;
        r.nested("location", Some(self.location() as &dyn Renderable), level)
    }
}
