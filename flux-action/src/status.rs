//! Status-string outcome classification
//!
//! The alternative outcome convention: instead of a boolean `error` flag,
//! an action carries a `status` string (`"success"`, `"error"`,
//! `"pending"`, ...). The two conventions are mutually incompatible, so
//! each owns its key set: here `status` replaces `error` in the allowed
//! keys, and a value mixing both conforms to neither convention.
//!
//! An action with no `status` key counts as successful.
//!
//! # Examples
//!
//! ```
//! use flux_action::status;
//! use serde_json::json;
//!
//! assert!(status::is_success(&json!({"type": "save"})));
//! assert!(status::is_success(&json!({"type": "save", "status": "success"})));
//! assert!(status::is_error(&json!({"type": "save", "status": "error"})));
//!
//! // "pending" is neither outcome.
//! let pending = json!({"type": "save", "status": "pending"});
//! assert!(!status::is_success(&pending));
//! assert!(!status::is_error(&pending));
//! ```

use serde_json::Value;

use crate::classify::{validate_shape, ShapeError};

/// Own keys a conforming action may carry under the status convention.
pub const VALID_KEYS: [&str; 4] = ["type", "payload", "status", "meta"];

/// Status string marking a successful outcome.
pub const SUCCESS: &str = "success";
/// Status string marking a failed outcome.
pub const ERROR: &str = "error";
/// Status string for an outcome that is not yet known.
pub const PENDING: &str = "pending";

/// Check `action` against the status-convention shape, reporting the first
/// violation.
pub fn validate(action: &Value) -> Result<(), ShapeError> {
    validate_shape(action, &VALID_KEYS)
}

/// Returns `true` if `action` conforms to the status-convention shape.
///
/// Same contract as [`crate::is_fsa`], with `status` in place of `error`
/// in the allowed key set.
pub fn is_fsa(action: &Value) -> bool {
    match validate(action) {
        Ok(()) => true,
        Err(reason) => {
            tracing::trace!(reason = %reason, "value does not conform to the action shape");
            false
        }
    }
}

/// Returns `true` if `action` is a conforming action representing a
/// successful outcome: `status` is absent or exactly `"success"`.
pub fn is_success(action: &Value) -> bool {
    is_fsa(action)
        && match action.get("status") {
            None => true,
            Some(Value::String(status)) => status == SUCCESS,
            Some(_) => false,
        }
}

/// Returns `true` if `action` is a conforming action representing a failed
/// outcome: `status` is exactly `"error"`.
pub fn is_error(action: &Value) -> bool {
    is_fsa(action) && matches!(action.get("status"), Some(Value::String(status)) if status == ERROR)
}
