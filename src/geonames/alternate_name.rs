//! Localized or alternate labels of a toponym.

use super::{Toponym, ToponymId};
use crate::error::RenderError;
use crate::readonly::{sealed, ReadOnly};
use crate::render::{RenderLevel, Renderable, Renderer};
use crate::store::snapshot::AlternateNameRow;
use std::cmp::Ordering;
use std::sync::{Arc, Weak};

/// One label of a toponym. The owner is held weakly: the toponym owns its
/// names, never the other way round. Not `Clone`, so a name is only reachable
/// through the toponym that owns it.
#[derive(Debug)]
pub struct AlternateName {
    id: i64,
    name: Option<String>,
    language_code: Option<String>,
    preferred_name: bool,
    short_name: bool,
    toponym_id: ToponymId,
    toponym: Weak<Toponym>,
}

impl AlternateName {
    pub const TABLE: &'static str = "geonames_alternate_names";

    pub(crate) fn from_row(row: AlternateNameRow, toponym: Weak<Toponym>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            language_code: row.language_code,
            preferred_name: row.preferred_name,
            short_name: row.short_name,
            toponym_id: ToponymId(row.toponym_id),
            toponym,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    pub fn is_preferred_name(&self) -> bool {
        self.preferred_name
    }

    pub fn is_short_name(&self) -> bool {
        self.short_name
    }

    pub fn toponym_id(&self) -> ToponymId {
        self.toponym_id
    }

    /// The owning toponym, resolved when the store was loaded.
    ///
    /// # Panics
    ///
    /// Never for a name borrowed from a loaded toponym: the owner outlives
    /// every borrow of its names.
    pub fn toponym(&self) -> Arc<Toponym> {
        self.toponym
            .upgrade()
            .expect("alternate name outlived its owning toponym")
    }

    /// Preferred names first, then by name (ordinal, missing names last).
    /// Ties fall back to the row id so distinct rows never collapse in a set.
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        b.preferred_name
            .cmp(&a.preferred_name)
            .then_with(|| match (&a.name, &b.name) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl PartialEq for AlternateName {
    fn eq(&self, other: &Self) -> bool {
        Self::compare(self, other) == Ordering::Equal
    }
}

impl Eq for AlternateName {}

impl PartialOrd for AlternateName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlternateName {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl sealed::Sealed for AlternateName {}

impl ReadOnly for AlternateName {
    const ENTITY: &'static str = "AlternateName";
}

impl Renderable for AlternateName {
    fn render(&self, r: &mut dyn Renderer, _level: RenderLevel) -> Result<(), RenderError> {
        r.entry("name", self.name().into())?;
        r.entry("languageCode", self.language_code().into())?;
        r.entry("isPreferredName", self.preferred_name.into())?;
        r.entry("isShortName", self.short_name.into())
    }
}
