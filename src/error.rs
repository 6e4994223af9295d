//! Error types for the gazetteer.
//!
//! A read-only violation is a caller bug and is never retried. Missing
//! optional associations are not errors at all.

use std::fmt;
use thiserror::Error;

/// Result type alias for gazetteer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A state-changing operation routed through the store adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Insert,
    Update,
    Delete,
    /// Coordinate setter on a location facade.
    SetCoordinate,
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "insert"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::SetCoordinate => write!(f, "set coordinate"),
        }
    }
}

/// Renderer protocol violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("value emitted without a preceding key")]
    ValueWithoutKey,

    #[error("key '{0}' never received a value")]
    DanglingKey(String),

    #[error("key '{0}' emitted twice")]
    DuplicateKey(String),
}

/// Main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Write attempted against an immutable entity.
    #[error("{entity} is read-only ({operation} rejected)")]
    ReadOnly {
        entity: &'static str,
        operation: WriteOp,
    },

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row references a toponym that is not part of the snapshot.
    #[error("{table}.{column} of row {id} references missing toponym {target}")]
    DanglingReference {
        table: &'static str,
        column: &'static str,
        id: String,
        target: i64,
    },

    #[error("duplicate id {id} in {table}")]
    DuplicateId { table: &'static str, id: String },
}

impl Error {
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly { .. })
    }
}
