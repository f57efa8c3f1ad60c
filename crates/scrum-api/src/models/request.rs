//! Request model definition

use serde::Deserialize;

/// Scrum update request
///
/// Shared by the form endpoint (`application/x-www-form-urlencoded`) and the
/// JSON endpoint; both carry a single `input_data` field.
#[derive(Debug, Deserialize)]
pub struct ScrumUpdateRequest {
  /// Free-text scrum update
  pub input_data: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"input_data": "Today I fixed a bug"}"#;
    let req: ScrumUpdateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.input_data, "Today I fixed a bug");
  }

  #[test]
  fn deserialize_missing_field_fails() {
    let json = r#"{"text": "Today I fixed a bug"}"#;
    assert!(serde_json::from_str::<ScrumUpdateRequest>(json).is_err());
  }
}
