//! Structured rendering: a key/value sink walked by each entity.
//!
//! Entities describe themselves through [`Renderable`]; the sink decides the
//! output format. [`JsonRenderer`] produces an insertion-ordered JSON object.

use crate::error::RenderError;
use serde_json::{Map, Value};
use std::fmt;

/// How deeply nested associations are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderLevel {
    /// Scalars only; nested objects are rendered as null.
    Tiny,
    Short,
    #[default]
    Medium,
    Long,
}

impl RenderLevel {
    pub fn expands_nested(self) -> bool {
        self > Self::Tiny
    }
}

impl fmt::Display for RenderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tiny => write!(f, "tiny"),
            Self::Short => write!(f, "short"),
            Self::Medium => write!(f, "medium"),
            Self::Long => write!(f, "long"),
        }
    }
}

/// Generic key/value sink. A key must be followed by exactly one value.
pub trait Renderer {
    fn key(&mut self, key: &str) -> Result<(), RenderError>;

    fn value(&mut self, value: Value) -> Result<(), RenderError>;

    /// Value position filled by a nested object.
    fn object(&mut self, value: &dyn Renderable, level: RenderLevel) -> Result<(), RenderError>;

    fn entry(&mut self, key: &str, value: Value) -> Result<(), RenderError> {
        self.key(key)?;
        self.value(value)
    }

    /// Emits `key` with the nested object, or with null when the association
    /// is absent or `level` does not expand nested objects.
    fn nested(
        &mut self,
        key: &str,
        value: Option<&dyn Renderable>,
        level: RenderLevel,
    ) -> Result<(), RenderError> {
        self.key(key)?;
        match value {
            Some(inner) if level.expands_nested() => self.object(inner, level),
            _ => self.value(Value::Null),
        }
    }
}

/// Anything that can describe its public state to a [`Renderer`].
pub trait Renderable {
    fn render(&self, renderer: &mut dyn Renderer, level: RenderLevel) -> Result<(), RenderError>;
}

/// Renderer producing a JSON object in emission order.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    map: Map<String, Value>,
    pending: Option<String>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Result<Map<String, Value>, RenderError> {
        match self.pending {
            Some(key) => Err(RenderError::DanglingKey(key)),
            None => Ok(self.map),
        }
    }
}

impl Renderer for JsonRenderer {
    fn key(&mut self, key: &str) -> Result<(), RenderError> {
        if let Some(pending) = self.pending.take() {
            return Err(RenderError::DanglingKey(pending));
        }
        if self.map.contains_key(key) {
            return Err(RenderError::DuplicateKey(key.to_string()));
        }
        self.pending = Some(key.to_string());
        Ok(())
    }

    fn value(&mut self, value: Value) -> Result<(), RenderError> {
        let key = self.pending.take().ok_or(RenderError::ValueWithoutKey)?;
        self.map.insert(key, value);
        Ok(())
    }

    fn object(&mut self, value: &dyn Renderable, level: RenderLevel) -> Result<(), RenderError> {
        let inner = render_json(value, level)?;
        self.value(inner)
    }
}

/// Render `value` into a JSON object.
pub fn render_json(value: &dyn Renderable, level: RenderLevel) -> Result<Value, RenderError> {
    let mut renderer = JsonRenderer::new();
    value.render(&mut renderer, level)?;
    Ok(Value::Object(renderer.finish()?))
}
