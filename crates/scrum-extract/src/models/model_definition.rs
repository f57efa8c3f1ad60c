//! Data model definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ExtractError, ExtractResult};

/// Structured scrum update produced by the extractor.
///
/// The field layout belongs to the extractor (prompt / model), not to the
/// consumers of this crate, so the record is kept as a JSON object and
/// serialized transparently: a `ScrumUpdate` built from
/// `{"tasks": ["fix bug"], "blockers": []}` serializes back to exactly that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrumUpdate(Map<String, Value>);

impl ScrumUpdate {
  /// Wraps a JSON object map
  #[must_use]
  pub fn new(fields: Map<String, Value>) -> Self {
    Self(fields)
  }

  /// Converts an arbitrary JSON value.
  ///
  /// # Errors
  /// Returns [`ExtractError::Parse`] unless `value` is a JSON object
  pub fn from_value(value: Value) -> ExtractResult<Self> {
    match value {
      Value::Object(fields) => Ok(Self(fields)),
      other => Err(ExtractError::parse(format!(
        "expected a JSON object, got {}",
        json_kind(&other)
      ))),
    }
  }

  /// Looks up a top-level field
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  /// Borrows the underlying fields
  #[must_use]
  pub fn fields(&self) -> &Map<String, Value> {
    &self.0
  }

  /// Number of top-level fields
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether the record has no fields
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Consumes the record and returns it as a JSON value
  #[must_use]
  pub fn into_value(self) -> Value {
    Value::Object(self.0)
  }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn from_value_accepts_object() {
    let update = ScrumUpdate::from_value(json!({"tasks": ["fix bug"], "blockers": []})).unwrap();
    assert_eq!(update.len(), 2);
    assert_eq!(update.get("tasks"), Some(&json!(["fix bug"])));
  }

  #[test]
  fn from_value_rejects_array() {
    let err = ScrumUpdate::from_value(json!(["fix bug"])).unwrap_err();
    assert!(matches!(err, ExtractError::Parse(_)));
    assert!(err.to_string().contains("an array"));
  }

  #[test]
  fn serializes_transparently() {
    let value = json!({"tasks": ["fix bug"], "blockers": []});
    let update = ScrumUpdate::from_value(value.clone()).unwrap();
    let reparsed: Value = serde_json::from_str(&serde_json::to_string(&update).unwrap()).unwrap();
    assert_eq!(reparsed, value);
  }

  #[test]
  fn default_is_empty() {
    assert!(ScrumUpdate::default().is_empty());
  }
}
