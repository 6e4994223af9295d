//! Read-only GeoNames entities.
//!
//! Each entity maps onto one table, is built only by the store's bulk
//! loader and rejects every write through its [`crate::ReadOnly`] hooks.

pub mod airport;
pub mod alternate_name;
pub mod feature;
pub mod toponym;

pub use airport::Airport;
pub use alternate_name::AlternateName;
pub use feature::FeatureClass;
pub use toponym::Toponym;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identity of a toponym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToponymId(pub i64);

impl fmt::Display for ToponymId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
