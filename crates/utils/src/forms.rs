use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation failures keyed by form field name, the shape the external
/// renderer needs to re-render a form with inline messages.
///
/// A submission either persists completely or fails with one of these;
/// there is no partial write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn new() -> Self {
    FieldErrors::default()
  }

  pub fn add(&mut self, field: &str, message: &str) {
    self
      .0
      .entry(field.to_string())
      .or_default()
      .push(message.to_string());
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, field: &str) -> Option<&[String]> {
    self.0.get(field).map(|v| v.as_slice())
  }
}

/// The message used for a missing required field.
pub const REQUIRED: &str = "This field is required.";
/// The message used for a reference to a row that doesn't exist.
pub const INVALID_CHOICE: &str = "Select a valid choice.";
/// The message used for an unparseable URL field.
pub const INVALID_URL: &str = "Enter a valid URL.";

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_field_errors_accumulate_per_field() {
    let mut errors = FieldErrors::new();
    assert!(errors.is_empty());

    errors.add("text", REQUIRED);
    errors.add("community", INVALID_CHOICE);
    errors.add("community", "Another problem.");

    assert!(!errors.is_empty());
    assert_eq!(errors.get("text"), Some(&[REQUIRED.to_string()][..]));
    assert_eq!(
      errors.get("community").map(<[String]>::len),
      Some(2),
    );
    assert_eq!(errors.get("image"), None);
  }

  #[test]
  fn test_field_errors_serialize_keyed_by_field() {
    let mut errors = FieldErrors::new();
    errors.add("text", REQUIRED);
    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(json, "{\"text\":[\"This field is required.\"]}");
  }
}
