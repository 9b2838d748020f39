//! In-memory configuration mapping

use crate::error::{ArtifactError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed mapping produced by parsing a YAML or JSON file
///
/// Values use the JSON data model. Key order follows the source document.
/// Lookups are explicit: [`get`](Self::get) for optional keys,
/// [`require`](Self::require) for required ones, and the `*_as` variants to
/// pull a value out as a concrete type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMapping {
    entries: Map<String, Value>,
}

impl ConfigMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from any value that serializes to a JSON object
    pub fn from_serializable<T: Serialize>(data: &T) -> Result<Self> {
        match serde_json::to_value(data) {
            Ok(Value::Object(entries)) => Ok(Self { entries }),
            Ok(other) => Err(ArtifactError::InvalidValue {
                key: "<root>".to_string(),
                message: format!("expected a mapping, got {}", value_kind(&other)),
            }),
            Err(e) => Err(ArtifactError::InvalidValue {
                key: "<root>".to_string(),
                message: e.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert a value, returning the previous one if the key was present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a top-level key that must be present
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| ArtifactError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Look up a dotted path such as `model.params.learning_rate`
    ///
    /// Each segment indexes into a nested mapping; a purely numeric segment
    /// also indexes into a sequence.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Dotted-path lookup that must succeed
    pub fn require_path(&self, path: &str) -> Result<&Value> {
        self.get_path(path).ok_or_else(|| ArtifactError::MissingKey {
            key: path.to_string(),
        })
    }

    /// Optional typed lookup; a present key with the wrong shape is an error
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get_path(path) {
            Some(value) => convert(path, value).map(Some),
            None => Ok(None),
        }
    }

    /// Required typed lookup
    pub fn require_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        convert(path, self.require_path(path)?)
    }

    /// Required string value
    pub fn require_str(&self, path: &str) -> Result<&str> {
        let value = self.require_path(path)?;
        value.as_str().ok_or_else(|| ArtifactError::InvalidValue {
            key: path.to_string(),
            message: format!("expected a string, got {}", value_kind(value)),
        })
    }

    /// Nested mapping under `path`
    pub fn section(&self, path: &str) -> Result<ConfigMapping> {
        match self.require_path(path)? {
            Value::Object(map) => Ok(ConfigMapping {
                entries: map.clone(),
            }),
            other => Err(ArtifactError::InvalidValue {
                key: path.to_string(),
                message: format!("expected a mapping, got {}", value_kind(other)),
            }),
        }
    }

    /// Deserialize the whole mapping into a typed configuration struct
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(Value::Object(self.entries)).map_err(|e| {
            ArtifactError::InvalidValue {
                key: "<root>".to_string(),
                message: e.to_string(),
            }
        })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}

impl From<Map<String, Value>> for ConfigMapping {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<ConfigMapping> for Value {
    fn from(mapping: ConfigMapping) -> Self {
        mapping.into_value()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ConfigMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn convert<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| ArtifactError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
