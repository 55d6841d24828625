//! Pipeline item model.
//!
//! An inspection operation runs once per pipeline item and writes its
//! result into a named field of the item's JSON payload. Items passing
//! through untouched keep whatever structure they arrived with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of data flowing through a workflow pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineItem {
    /// The item's JSON payload.
    pub json: Value,
}

impl PipelineItem {
    /// Create an item with an empty object payload.
    pub fn new() -> Self {
        Self {
            json: Value::Object(serde_json::Map::new()),
        }
    }

    /// Create an item wrapping an existing payload.
    pub const fn from_value(json: Value) -> Self {
        Self { json }
    }

    /// Insert or overwrite a top-level field of the payload.
    ///
    /// A non-object payload is replaced by a fresh object first; the
    /// field name is used verbatim, so `"ssl.analyze"` is one flat key.
    pub fn set_field(&mut self, name: &str, value: Value) {
        if !self.json.is_object() {
            self.json = Value::Object(serde_json::Map::new());
        }
        if let Some(map) = self.json.as_object_mut() {
            map.insert(name.to_string(), value);
        }
    }

    /// Look up a top-level field of the payload.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.json.as_object().and_then(|map| map.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_field_on_empty_item() {
        let mut item = PipelineItem::new();
        item.set_field("ssl", json!({"grade": "A"}));
        assert_eq!(item.field("ssl"), Some(&json!({"grade": "A"})));
    }

    #[test]
    fn test_set_field_preserves_existing_payload() {
        let mut item = PipelineItem::from_value(json!({"upstream": 1}));
        item.set_field("ssl", json!(true));
        assert_eq!(item.field("upstream"), Some(&json!(1)));
        assert_eq!(item.field("ssl"), Some(&json!(true)));
    }

    #[test]
    fn test_set_field_replaces_non_object_payload() {
        let mut item = PipelineItem::from_value(json!("scalar"));
        item.set_field("ssl", json!(42));
        assert_eq!(item.field("ssl"), Some(&json!(42)));
    }

    #[test]
    fn test_dotted_name_is_a_flat_key() {
        let mut item = PipelineItem::new();
        item.set_field("ssl.analyze", json!({"grade": "B"}));
        assert!(item.field("ssl").is_none());
        assert_eq!(item.field("ssl.analyze"), Some(&json!({"grade": "B"})));
    }

    #[test]
    fn test_set_field_overwrites() {
        let mut item = PipelineItem::new();
        item.set_field("ssl", json!(1));
        item.set_field("ssl", json!(2));
        assert_eq!(item.field("ssl"), Some(&json!(2)));
    }
}
