//! Plain-object test for untyped values

use serde_json::Value;

/// Returns `true` if `value` is a plain data object.
///
/// A plain object is a direct key/value record: `{}`, `{"a": 1}`, and so
/// on. Arrays, strings, numbers, booleans, and `null` are not plain
/// objects. Keys carry no special meaning, so records with keys named
/// `"constructor"` or `"valueOf"` are plain objects like any other.
///
/// This test runs on already-deserialized input. Deserialization strips
/// everything that could make a value non-plain at the source (functions,
/// class instances, custom prototypes), so what remains is the
/// object/array/primitive split.
///
/// # Examples
///
/// ```
/// use flux_action::is_plain_object;
/// use serde_json::json;
///
/// assert!(is_plain_object(&json!({})));
/// assert!(is_plain_object(&json!({"constructor": "anything"})));
/// assert!(!is_plain_object(&json!([1, 2, 3])));
/// assert!(!is_plain_object(&json!("a")));
/// ```
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}
