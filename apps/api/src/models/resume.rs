use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level sections a full replace must carry with non-blank values.
pub const REQUIRED_SECTIONS: &[&str] = &["personal_info", "skills"];

/// The whole résumé: section name to arbitrary JSON content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeDocument(Map<String, Value>);

impl ResumeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts only JSON objects; anything else is handed back unchanged.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }

    pub fn get(&self, section: &str) -> Option<&Value> {
        self.0.get(section)
    }

    /// Removes a section, keeping the remaining sections in their order.
    pub fn remove(&mut self, section: &str) -> Option<Value> {
        self.0.shift_remove(section)
    }

    pub fn section_count(&self) -> usize {
        self.0.len()
    }

    /// Names of required sections that are absent or blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_SECTIONS
            .iter()
            .copied()
            .filter(|name| self.get(name).map_or(true, is_blank))
            .collect()
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }
}

impl From<Map<String, Value>> for ResumeDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ResumeDocument> for Map<String, Value> {
    fn from(doc: ResumeDocument) -> Self {
        doc.0
    }
}

impl From<ResumeDocument> for Value {
    fn from(doc: ResumeDocument) -> Self {
        Value::Object(doc.0)
    }
}

/// Structural classification used by the merge walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Mapping,
    Sequence,
    Scalar,
    Null,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueKind::Mapping,
            Value::Array(_) => ValueKind::Sequence,
            Value::Null => ValueKind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => ValueKind::Scalar,
        }
    }
}

/// A value counts as blank when it carries no content: null, false, zero,
/// or an empty string, array or object.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
