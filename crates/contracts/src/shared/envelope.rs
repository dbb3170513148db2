//! Collection response shapes
//!
//! List endpoints answer either with a bare JSON array or with an object that
//! wraps the array under `content` (paged responses) or under the entity's
//! plural name (e.g. `{"roles": [...]}`).

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Key used by paged envelopes
pub const CONTENT_FIELD: &str = "content";

/// Pull the record array out of a list response
pub fn extract_collection<T: DeserializeOwned>(
    value: Value,
    envelope_field: &str,
) -> Result<Vec<T>, String> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let inner = map
                .remove(envelope_field)
                .or_else(|| map.remove(CONTENT_FIELD))
                .ok_or_else(|| {
                    format!(
                        "response has neither '{}' nor '{}' field",
                        envelope_field, CONTENT_FIELD
                    )
                })?;
            match inner {
                Value::Array(items) => items,
                Value::Null => Vec::new(),
                other => {
                    return Err(format!(
                        "expected an array in envelope, got {}",
                        type_name(&other)
                    ))
                }
            }
        }
        Value::Null => Vec::new(),
        other => return Err(format!("expected an array, got {}", type_name(&other))),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| e.to_string()))
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_bare_array() {
        let items: Vec<Item> = extract_collection(json!([{"id": 1}, {"id": 2}]), "roles").unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_content_envelope() {
        let body = json!({"content": [{"id": 7}], "totalElements": 1});
        let items: Vec<Item> = extract_collection(body, "roles").unwrap();
        assert_eq!(items, vec![Item { id: 7 }]);
    }

    #[test]
    fn test_entity_named_envelope_preferred() {
        let body = json!({"roles": [{"id": 3}], "content": [{"id": 99}]});
        let items: Vec<Item> = extract_collection(body, "roles").unwrap();
        assert_eq!(items, vec![Item { id: 3 }]);
    }

    #[test]
    fn test_null_collection_is_empty() {
        let items: Vec<Item> = extract_collection(json!({"roles": null}), "roles").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let err = extract_collection::<Item>(json!({"data": []}), "roles").unwrap_err();
        assert!(err.contains("'roles'"));
        assert!(extract_collection::<Item>(json!("oops"), "roles").is_err());
    }
}
