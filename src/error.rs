//! Error types for the wiring engine

use thiserror::Error;

/// Result type alias for wiring operations
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while resolving and assigning dependencies
///
/// Every variant is terminal for the call that produced it: the engine never
/// retries, and a failed call reports nothing beyond the returned error.
#[derive(Error, Debug)]
pub enum WireError {
    /// Injection target is not an injectable record
    #[error("cannot inject into {type_name}: not an injectable record")]
    NotInjectable { type_name: &'static str },

    /// A named request had no matching registration
    #[error("missing dependency {name:?} for {owner}'s field {field}")]
    MissingNamed {
        name: String,
        owner: &'static str,
        field: &'static str,
    },

    /// An automatic request had no registration of the declared slot type
    #[error(
        "missing dependency for {owner}'s field {field}, searched for type {expected} \
         (did you try to auto-wire a trait object?)"
    )]
    MissingTyped {
        expected: &'static str,
        owner: &'static str,
        field: &'static str,
    },

    /// A named dependency resolved to a type the slot cannot store
    #[error("dependency {name:?} cannot fill {owner}'s field {field}, which expects {expected}")]
    SlotMismatch {
        name: String,
        owner: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// Configuration error
    #[cfg(feature = "config")]
    #[error("configuration error: {0}")]
    Config(String),
}
