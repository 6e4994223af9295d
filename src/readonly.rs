//! Write guards for entities populated once by the snapshot loader.
//!
//! The store adapter calls [`ReadOnly::before_write`] ahead of any write.
//! Every hook rejects unconditionally, so a write never has a partial effect.

use crate::error::{Error, Result, WriteOp};
use tracing::warn;

pub(crate) mod sealed {
    pub trait Sealed {}
}

pub(crate) fn reject(entity: &'static str, operation: WriteOp) -> Error {
    warn!(entity, %operation, "rejected write to read-only entity");
    Error::ReadOnly { entity, operation }
}

/// Lifecycle hooks of an immutable entity. Sealed: only this crate's
/// entities implement it.
pub trait ReadOnly: sealed::Sealed {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    fn pre_persist(&self) -> Result<()> {
        Err(reject(Self::ENTITY, WriteOp::Insert))
    }

    fn pre_update(&self) -> Result<()> {
        Err(reject(Self::ENTITY, WriteOp::Update))
    }

    fn pre_remove(&self) -> Result<()> {
        Err(reject(Self::ENTITY, WriteOp::Delete))
    }

    fn before_write(&self, operation: WriteOp) -> Result<()> {
        match operation {
            WriteOp::Insert => self.pre_persist(),
            WriteOp::Update => self.pre_update(),
            WriteOp::Delete => self.pre_remove(),
            WriteOp::SetCoordinate => Err(reject(Self::ENTITY, operation)),
        }
    }
}
