//! Property tests for JSON flattening.

use proptest::prelude::*;
use serde_json::{Map, Value};

use lytics::domain::services::flatten;

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(6, 64, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: flattening never panics, whatever the JSON shape.
    #[test]
    fn property_flatten_never_panics(value in json_value()) {
        let _ = flatten(&value);
    }

    /// PROPERTY: only objects flatten.
    #[test]
    fn property_non_objects_are_rejected(value in json_value()) {
        prop_assert_eq!(flatten(&value).is_ok(), value.is_object());
    }

    /// PROPERTY: a flat object of strings keeps every key, value and its order.
    #[test]
    fn property_flat_object_is_preserved(
        fields in proptest::collection::btree_map("[a-z]{1,8}", "[A-Za-z0-9 ]{0,8}", 0..8)
    ) {
        let object: Map<String, Value> = fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let record = flatten(&Value::Object(object)).unwrap();

        let pairs: Vec<(String, String)> = record
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let expected: Vec<(String, String)> = fields.into_iter().collect();
        prop_assert_eq!(pairs, expected);
    }
}
