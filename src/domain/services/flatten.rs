//! JSON flattening
//!
//! Projects a nested JSON object onto a flat [`Record`]:
//!
//! - nested objects join keys with `.` (`user.name`)
//! - arrays of scalars repeat the key once per element (`tags=a&tags=b`)
//! - arrays holding objects or arrays use a bracketed index (`items[0].sku`)
//! - `null` produces no field

use serde_json::Value;

use crate::domain::value_objects::Record;
use crate::error::{LyticsError, LyticsResult};

/// Deepest nesting accepted before a record is rejected
pub const MAX_DEPTH: usize = 32;

/// Flatten a JSON object into a record
pub fn flatten(value: &Value) -> LyticsResult<Record> {
    let Value::Object(map) = value else {
        return Err(LyticsError::Flatten {
            message: format!("expected an object, found {}", kind_of(value)),
        });
    };

    let mut record = Record::new();
    for (key, child) in map {
        flatten_into(&mut record, key, child, 1)?;
    }
    Ok(record)
}

fn flatten_into(record: &mut Record, key: &str, value: &Value, depth: usize) -> LyticsResult<()> {
    if depth > MAX_DEPTH {
        return Err(LyticsError::Flatten {
            message: format!("nesting deeper than {} levels at '{}'", MAX_DEPTH, key),
        });
    }

    match value {
        Value::Null => {}
        Value::String(s) => record.add(key, s.as_str()),
        Value::Bool(_) | Value::Number(_) => record.add(key, value.to_string()),
        Value::Object(map) => {
            for (child_key, child) in map {
                flatten_into(record, &format!("{}.{}", key, child_key), child, depth + 1)?;
            }
        }
        Value::Array(items) => {
            let nested = items
                .iter()
                .any(|v| matches!(v, Value::Object(_) | Value::Array(_)));
            for (idx, item) in items.iter().enumerate() {
                if nested {
                    flatten_into(record, &format!("{}[{}]", key, idx), item, depth + 1)?;
                } else {
                    flatten_into(record, key, item, depth + 1)?;
                }
            }
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
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
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_object_keeps_key_order() {
        let record = flatten(&json!({"id": "1", "name": "a", "age": 30})).unwrap();
        assert_eq!(record.encode(), "id=1&name=a&age=30");
    }

    #[test]
    fn nested_objects_use_dotted_keys() {
        let record = flatten(&json!({"user": {"name": "ann", "geo": {"city": "pdx"}}})).unwrap();
        assert_eq!(record.get("user.name"), Some("ann"));
        assert_eq!(record.get("user.geo.city"), Some("pdx"));
    }

    #[test]
    fn scalar_arrays_repeat_the_key() {
        let record = flatten(&json!({"tags": ["a", "b", 3]})).unwrap();
        assert_eq!(record.get_all("tags"), vec!["a", "b", "3"]);
    }

    #[test]
    fn object_arrays_use_brackets() {
        let record = flatten(&json!({"items": [{"sku": "x"}, {"sku": "y"}]})).unwrap();
        assert_eq!(record.get("items[0].sku"), Some("x"));
        assert_eq!(record.get("items[1].sku"), Some("y"));
    }

    #[test]
    fn nulls_are_skipped() {
        let record = flatten(&json!({"a": null, "b": true})).unwrap();
        assert_eq!(record.keys(), vec!["b"]);
        assert_eq!(record.get("b"), Some("true"));
    }

    #[test]
    fn non_object_fails() {
        assert!(flatten(&json!(5)).is_err());
        assert!(flatten(&json!(["a"])).is_err());
        assert!(flatten(&Value::Null).is_err());
    }

    #[test]
    fn excessive_depth_fails() {
        let mut value = json!("leaf");
        for _ in 0..(MAX_DEPTH + 1) {
            value = json!({ "n": value });
        }
        assert!(flatten(&value).is_err());
    }
}
