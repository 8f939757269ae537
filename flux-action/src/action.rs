//! Typed mirror of the Flux Standard Action shape
//!
//! These types are the compile-time counterpart of the runtime predicates
//! in [`crate::classify`]: well-typed code carries a
//! [`FluxStandardAction`] and never needs to classify anything, while
//! untyped input is checked with [`crate::is_fsa`] before (or instead of)
//! deserializing. The serde impls keep the two in lockstep:
//! `deny_unknown_fields` enforces the allowed key set and the `type` field
//! refuses empty strings, so a value accepted by the deserializer always
//! satisfies [`crate::is_fsa`], and a serialized action always passes it.
//!
//! # Example
//!
//! ```
//! use flux_action::{is_fsa, FluxStandardAction};
//! use serde_json::{json, Value};
//!
//! let action: FluxStandardAction<String> = serde_json::from_value(json!({
//!     "type": "fetch/failed",
//!     "payload": "connection timed out",
//!     "error": true,
//! })).unwrap();
//!
//! assert!(action.is_error());
//! assert!(is_fsa(&serde_json::to_value(&action).unwrap()));
//!
//! // Extraneous keys fail deserialization, like they fail `is_fsa`.
//! let bad = json!({"type": "fetch/failed", "extra": 1});
//! assert!(serde_json::from_value::<FluxStandardAction>(bad).is_err());
//! ```

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An action with optional payload and metadata.
///
/// `type` identifies the nature of the action to the consumer; two actions
/// with the same `type` describe the same kind of event. Everything about
/// the event that is not its kind or outcome belongs in `payload`; `meta`
/// is for auxiliary information that is not part of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FluxStandardAction<P = Value, M = Value> {
    /// The action's discriminator.
    #[serde(rename = "type", deserialize_with = "non_empty_kind")]
    pub kind: String,
    /// Event data. By convention an error description when `error` is
    /// true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
    /// Marks the action as a failed outcome when exactly `true`; any
    /// other value, including absence, means the action is not an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    /// Auxiliary data that is not part of the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<P, M> FluxStandardAction<P, M> {
    /// Whether this action represents a failed outcome, under the same
    /// strict contract as [`crate::is_error`].
    pub fn is_error(&self) -> bool {
        self.error == Some(true)
    }
}

/// An action whose payload is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FluxStandardActionWithPayload<P, M = Value> {
    /// The action's discriminator.
    #[serde(rename = "type", deserialize_with = "non_empty_kind")]
    pub kind: String,
    /// Event data.
    pub payload: P,
    /// Marks the action as a failed outcome when exactly `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    /// Auxiliary data that is not part of the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

/// An action whose metadata is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FluxStandardActionWithMeta<P, M> {
    /// The action's discriminator.
    #[serde(rename = "type", deserialize_with = "non_empty_kind")]
    pub kind: String,
    /// Event data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
    /// Marks the action as a failed outcome when exactly `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    /// Auxiliary data that is not part of the payload.
    pub meta: M,
}

/// An action whose payload and metadata are both required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FluxStandardActionWithPayloadAndMeta<P, M> {
    /// The action's discriminator.
    #[serde(rename = "type", deserialize_with = "non_empty_kind")]
    pub kind: String,
    /// Event data.
    pub payload: P,
    /// Marks the action as a failed outcome when exactly `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    /// Auxiliary data that is not part of the payload.
    pub meta: M,
}

/// An action representing a failed outcome.
///
/// The `error` field is typed as [`ErrorFlag`], so it can only ever hold
/// the literal `true`, and the payload (by convention the error that
/// caused the action) is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorFluxStandardAction<E, M = Value> {
    /// The action's discriminator.
    #[serde(rename = "type", deserialize_with = "non_empty_kind")]
    pub kind: String,
    /// The error that caused the action.
    pub payload: E,
    /// Always the literal `true`.
    pub error: ErrorFlag,
    /// Auxiliary data that is not part of the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<E, M> From<ErrorFluxStandardAction<E, M>> for FluxStandardAction<E, M> {
    fn from(action: ErrorFluxStandardAction<E, M>) -> Self {
        Self {
            kind: action.kind,
            payload: Some(action.payload),
            error: Some(true),
            meta: action.meta,
        }
    }
}

/// Alias for [`FluxStandardAction`].
pub type Fsa<P = Value, M = Value> = FluxStandardAction<P, M>;
/// Alias for [`ErrorFluxStandardAction`].
pub type ErrorFsa<E, M = Value> = ErrorFluxStandardAction<E, M>;
/// Alias for [`FluxStandardActionWithPayload`].
pub type FsaWithPayload<P, M = Value> = FluxStandardActionWithPayload<P, M>;
/// Alias for [`FluxStandardActionWithMeta`].
pub type FsaWithMeta<P, M> = FluxStandardActionWithMeta<P, M>;
/// Alias for [`FluxStandardActionWithPayloadAndMeta`].
pub type FsaWithPayloadAndMeta<P, M> = FluxStandardActionWithPayloadAndMeta<P, M>;

/// The literal `true` carried in the `error` field of
/// [`ErrorFluxStandardAction`].
///
/// Serializes as the JSON boolean `true` and refuses any other value on
/// deserialization, so a deserialized error action can never carry
/// `error: false` or a non-boolean flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorFlag;

impl Serialize for ErrorFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for ErrorFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagVisitor;

        impl Visitor<'_> for FlagVisitor {
            type Value = ErrorFlag;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("the boolean `true`")
            }

            fn visit_bool<E>(self, flag: bool) -> Result<ErrorFlag, E>
            where
                E: de::Error,
            {
                if flag {
                    Ok(ErrorFlag)
                } else {
                    Err(E::invalid_value(Unexpected::Bool(false), &self))
                }
            }
        }

        deserializer.deserialize_bool(FlagVisitor)
    }
}

fn non_empty_kind<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let kind = String::deserialize(deserializer)?;
    if kind.is_empty() {
        return Err(de::Error::invalid_value(
            Unexpected::Str(""),
            &"a non-empty action type",
        ));
    }
    Ok(kind)
}
