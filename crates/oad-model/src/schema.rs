//! JSON Schema bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON Schema, kept as an untyped JSON value.
///
/// Schemas are nested arbitrarily deep and are compared as canonical text
/// rather than field by field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(pub Value);

impl Schema {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Render the schema as YAML with every mapping's keys sorted.
    ///
    /// Two schemas that differ only in key order render identically.
    pub fn to_canonical_yaml(&self) -> String {
        let sorted = sorted_yaml(&self.0);
        match serde_yaml::to_string(&sorted) {
            Ok(text) => text,
            // A mapping built from JSON always serializes; fall back to JSON text.
            Err(_) => self.0.to_string(),
        }
    }
}

fn sorted_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                serde_yaml::Value::Number(u.into())
            } else if let Some(i) = n.as_i64() {
                serde_yaml::Value::Number(i.into())
            } else {
                serde_yaml::Value::Number(n.as_f64().unwrap_or_default().into())
            }
        }
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(items) => serde_yaml::Value::Sequence(items.iter().map(sorted_yaml).collect()),
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut mapping = serde_yaml::Mapping::new();
            for (key, child) in entries {
                mapping.insert(serde_yaml::Value::String(key.clone()), sorted_yaml(child));
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_yaml_sorts_keys() {
        let schema = Schema::new(json!({"type": "object", "properties": {"b": {}, "a": {}}}));
        let text = schema.to_canonical_yaml();
        let a = text.find("a:").unwrap();
        let b = text.find("b:").unwrap();
        let props = text.find("properties:").unwrap();
        let ty = text.find("type:").unwrap();
        assert!(a < b);
        assert!(props < ty);
    }

    #[test]
    fn key_order_does_not_change_text() {
        let one: Schema = serde_json::from_str(r#"{"type":"string","format":"uuid"}"#).unwrap();
        let two: Schema = serde_json::from_str(r#"{"format":"uuid","type":"string"}"#).unwrap();
        assert_eq!(one.to_canonical_yaml(), two.to_canonical_yaml());
    }

    #[test]
    fn numbers_survive() {
        let schema = Schema::new(json!({"maximum": 10, "minimum": -2, "multipleOf": 0.5}));
        let text = schema.to_canonical_yaml();
        assert!(text.contains("maximum: 10"));
        assert!(text.contains("minimum: -2"));
        assert!(text.contains("multipleOf: 0.5"));
    }
}
