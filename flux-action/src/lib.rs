//! Validation for the Flux Standard Action shape
//!
//! A Flux Standard Action (FSA) is the conventional shape for events
//! flowing through a Redux-style unidirectional pipeline:
//! `{type, payload?, error?, meta?}`. This crate classifies untyped values
//! against that shape and mirrors it with a generic structural type. It
//! never constructs or dispatches actions; it only classifies values that
//! already exist.
//!
//! # Core Concepts
//!
//! - **Plain-object test**: is this value a key/value record at all?
//!   ([`is_plain_object`])
//! - **Conformance**: [`is_fsa`] classifies a [`serde_json::Value`]
//!   against the shape; [`validate`] reports why a value was rejected
//! - **Outcome**: the default contract flags failures with `error: true`
//!   ([`is_error`]); the incompatible `status`-string convention lives in
//!   [`status`]
//! - **Typed mirror**: [`FluxStandardAction`] is the compile-time shape
//!   for well-typed code; its serde impls accept exactly the values the
//!   runtime predicates accept
//!
//! Classification is pure and total: any input, a bool out, no panics.
//!
//! # Example
//!
//! ```
//! use flux_action::{is_error, is_fsa};
//! use serde_json::json;
//!
//! assert!(is_fsa(&json!({"type": "counter/increment"})));
//! assert!(is_fsa(&json!({
//!     "type": "fetch/failed",
//!     "payload": "timeout",
//!     "error": true,
//! })));
//!
//! // Extraneous keys reject the whole value.
//! assert!(!is_fsa(&json!({"type": "counter/increment", "extra": 1})));
//!
//! assert!(is_error(&json!({"type": "fetch/failed", "error": true})));
//! assert!(!is_error(&json!({"type": "fetch/failed", "error": "true"})));
//! ```
//!
//! # Untyped vs typed input
//!
//! The runtime predicates exist for trust boundaries: input that was just
//! deserialized and could be anything. Internal code should carry
//! [`FluxStandardAction`] (or one of its variants) instead and let the
//! type system forbid malformed actions outright.

pub mod action;
pub mod classify;
pub mod plain;
pub mod status;

// Typed mirror exports
pub use action::{
    ErrorFlag, ErrorFluxStandardAction, ErrorFsa, FluxStandardAction, FluxStandardActionWithMeta,
    FluxStandardActionWithPayload, FluxStandardActionWithPayloadAndMeta, Fsa, FsaWithMeta,
    FsaWithPayload, FsaWithPayloadAndMeta,
};

// Classifier exports (boolean-error convention is the default contract;
// the status-string convention stays behind its module path)
pub use classify::{is_error, is_fsa, validate, ShapeError, VALID_KEYS};
pub use plain::is_plain_object;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{ErrorFluxStandardAction, FluxStandardAction};
    pub use crate::classify::{is_error, is_fsa, validate, ShapeError};
    pub use crate::plain::is_plain_object;
    pub use crate::status;
}
