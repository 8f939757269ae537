//! Property-based tests for the conformance predicates.
//!
//! These use proptest to verify that classification is total and pure
//! across many generated JSON values, and that the typed mirror and the
//! runtime predicates accept the same shapes.

use flux_action::{is_error, is_fsa, is_plain_object, status, validate, FluxStandardAction};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arbitrary_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{0,8}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

prop_compose! {
    fn conforming_action()(
        kind in "[A-Z_]{1,12}",
        payload in proptest::option::of(arbitrary_value()),
        error in proptest::option::of(any::<bool>()),
        meta in proptest::option::of(arbitrary_value()),
    ) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::String(kind));
        if let Some(payload) = payload {
            map.insert("payload".into(), payload);
        }
        if let Some(error) = error {
            map.insert("error".into(), Value::Bool(error));
        }
        if let Some(meta) = meta {
            map.insert("meta".into(), meta);
        }
        Value::Object(map)
    }
}

proptest! {
    #[test]
    fn classification_is_pure(value in arbitrary_value()) {
        prop_assert_eq!(is_fsa(&value), is_fsa(&value));
        prop_assert_eq!(is_error(&value), is_error(&value));
        prop_assert_eq!(status::is_success(&value), status::is_success(&value));
        prop_assert_eq!(status::is_error(&value), status::is_error(&value));
    }

    #[test]
    fn validate_agrees_with_is_fsa(value in arbitrary_value()) {
        prop_assert_eq!(validate(&value).is_ok(), is_fsa(&value));
        prop_assert_eq!(status::validate(&value).is_ok(), status::is_fsa(&value));
    }

    #[test]
    fn conforming_values_are_plain_objects(value in arbitrary_value()) {
        if is_fsa(&value) || status::is_fsa(&value) {
            prop_assert!(is_plain_object(&value));
        }
    }

    #[test]
    fn errors_are_conforming_actions(value in arbitrary_value()) {
        if is_error(&value) {
            prop_assert!(is_fsa(&value));
        }
        if status::is_error(&value) || status::is_success(&value) {
            prop_assert!(status::is_fsa(&value));
        }
    }

    #[test]
    fn generated_actions_conform(action in conforming_action()) {
        prop_assert!(is_fsa(&action));
    }

    #[test]
    fn typed_actions_satisfy_the_runtime_check(action in conforming_action()) {
        // The generator only emits boolean `error` values, so the typed
        // mirror accepts every generated action.
        let typed: FluxStandardAction = serde_json::from_value(action.clone()).unwrap();
        let round_tripped = serde_json::to_value(&typed).unwrap();
        prop_assert!(is_fsa(&round_tripped));
        prop_assert_eq!(typed.is_error(), is_error(&action));
    }

    #[test]
    fn deserializable_values_conform(value in arbitrary_value()) {
        if serde_json::from_value::<FluxStandardAction>(value.clone()).is_ok() {
            prop_assert!(is_fsa(&value));
        }
    }
}
