//! Conformance predicates for the Flux Standard Action shape
//!
//! An action conforms when it is a plain object whose own keys are drawn
//! from [`VALID_KEYS`] and whose `type` is a non-empty string. [`is_fsa`]
//! answers yes/no; [`validate`] names the first violation for callers that
//! want diagnostics at a trust boundary.
//!
//! Outcome classification here follows the boolean-error convention:
//! exactly `error: true` marks a failed outcome. The incompatible
//! `status`-string convention lives in [`crate::status`].

use serde_json::Value;
use thiserror::Error;

use crate::plain::is_plain_object;

/// Own keys a conforming action may carry.
pub const VALID_KEYS: [&str; 4] = ["type", "payload", "error", "meta"];

/// Why a value was rejected by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The value is an array, a primitive, or `null`.
    #[error("not a plain object")]
    NotPlainObject,
    /// The `type` key is absent.
    #[error("missing `type`")]
    MissingType,
    /// The `type` value is not a non-empty string.
    #[error("`type` is not a non-empty string")]
    InvalidType,
    /// An own key outside the allowed set.
    #[error("unexpected key `{0}`")]
    UnexpectedKey(String),
}

/// Shape check shared by both outcome conventions, parameterized by the
/// convention's allowed key set.
pub(crate) fn validate_shape(action: &Value, valid_keys: &[&str]) -> Result<(), ShapeError> {
    if !is_plain_object(action) {
        return Err(ShapeError::NotPlainObject);
    }
    let Value::Object(map) = action else {
        // is_plain_object admits only objects
        return Err(ShapeError::NotPlainObject);
    };
    match map.get("type") {
        None => return Err(ShapeError::MissingType),
        Some(Value::String(kind)) if !kind.is_empty() => {}
        Some(_) => return Err(ShapeError::InvalidType),
    }
    if let Some(key) = map.keys().find(|key| !valid_keys.contains(&key.as_str())) {
        return Err(ShapeError::UnexpectedKey(key.clone()));
    }
    Ok(())
}

/// Check `action` against the standard shape, reporting the first
/// violation.
///
/// [`is_fsa`] is this check collapsed to a bool; the two never disagree.
///
/// # Examples
///
/// ```
/// use flux_action::{validate, ShapeError};
/// use serde_json::json;
///
/// assert_eq!(validate(&json!({"type": "save"})), Ok(()));
/// assert_eq!(
///     validate(&json!({"type": "save", "extra": 1})),
///     Err(ShapeError::UnexpectedKey("extra".into())),
/// );
/// ```
pub fn validate(action: &Value) -> Result<(), ShapeError> {
    validate_shape(action, &VALID_KEYS)
}

/// Returns `true` if `action` conforms to the Flux Standard Action shape.
///
/// A conforming action is a plain object, carries a `type` that is a
/// non-empty string, and has no own keys outside `type`, `payload`,
/// `error`, and `meta`. Discriminators are strings only: JSON has no
/// unique-token kind, so no other `type` representation survives the
/// boundary this predicate guards.
///
/// Rejections are logged at trace level with the reason.
///
/// # Examples
///
/// ```
/// use flux_action::is_fsa;
/// use serde_json::json;
///
/// assert!(is_fsa(&json!({"type": "save"})));
/// assert!(is_fsa(&json!({"type": "save", "payload": 1, "meta": 2, "error": true})));
/// assert!(!is_fsa(&json!({})));
/// assert!(!is_fsa(&json!({"type": 123})));
/// assert!(!is_fsa(&json!({"type": "save", "extra": 1})));
/// ```
pub fn is_fsa(action: &Value) -> bool {
    match validate(action) {
        Ok(()) => true,
        Err(reason) => {
            tracing::trace!(reason = %reason, "value does not conform to the action shape");
            false
        }
    }
}

/// Returns `true` if `action` is a conforming action representing a failed
/// outcome.
///
/// Only the boolean `true` marks a failure; `"true"`, `1`, and `false` do
/// not. Non-conforming values are never errors, whatever their `error`
/// key holds.
///
/// # Examples
///
/// ```
/// use flux_action::is_error;
/// use serde_json::json;
///
/// assert!(is_error(&json!({"type": "save", "error": true})));
/// assert!(!is_error(&json!({"type": "save", "error": "true"})));
/// assert!(!is_error(&json!({"type": "save"})));
/// ```
pub fn is_error(action: &Value) -> bool {
    is_fsa(action) && matches!(action.get("error"), Some(Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TYPE: &str = "ACTION_TYPE";

    #[test]
    fn test_requires_a_type() {
        assert!(is_fsa(&json!({ "type": TYPE })));
        assert!(!is_fsa(&json!({})));
        assert!(!is_fsa(&json!({ "type": null })));
        assert!(!is_fsa(&Value::Null));
    }

    #[test]
    fn test_only_accepts_plain_objects() {
        assert!(!is_fsa(&json!([TYPE])));
        assert!(!is_fsa(&json!(TYPE)));
        assert!(!is_fsa(&json!(123)));
    }

    #[test]
    fn test_type_must_be_a_nonempty_string() {
        assert!(!is_fsa(&json!({ "type": true })));
        assert!(!is_fsa(&json!({ "type": 123 })));
        assert!(!is_fsa(&json!({ "type": "" })));
    }

    #[test]
    fn test_rejects_invalid_keys() {
        assert!(is_fsa(&json!({ "type": TYPE, "payload": "foobar" })));
        assert!(is_fsa(&json!({ "type": TYPE, "meta": "foobar" })));
        assert!(is_fsa(&json!({ "type": TYPE, "error": {"message": "boom"} })));
        assert!(is_fsa(
            &json!({ "type": TYPE, "payload": 1, "meta": 2, "error": true })
        ));
        assert!(!is_fsa(&json!({ "type": TYPE, "extra": "foobar" })));
    }

    #[test]
    fn test_error_flag_is_strict() {
        assert!(is_error(&json!({ "type": TYPE, "error": true })));
        assert!(!is_error(&json!({ "type": TYPE, "error": "true" })));
        assert!(!is_error(&json!({ "type": TYPE, "error": false })));
        assert!(!is_error(&json!({ "type": TYPE })));
    }

    #[test]
    fn test_error_requires_conformance() {
        assert!(!is_error(&json!({ "error": true })));
        assert!(!is_error(&json!({ "type": TYPE, "error": true, "extra": 1 })));
        assert!(!is_error(&Value::Null));
    }

    #[test]
    fn test_validate_names_the_first_violation() {
        assert_eq!(validate(&json!(42)), Err(ShapeError::NotPlainObject));
        assert_eq!(validate(&json!({})), Err(ShapeError::MissingType));
        assert_eq!(validate(&json!({ "type": 7 })), Err(ShapeError::InvalidType));
        assert_eq!(
            validate(&json!({ "type": TYPE, "extra": 1 })),
            Err(ShapeError::UnexpectedKey("extra".into()))
        );
        assert_eq!(validate(&json!({ "type": TYPE })), Ok(()));
    }
}
