//! Error types for fallible event helpers and registry operations.
//!
//! The core event operations (`name`, `is`, `get`, `set`, `add`, ...) are
//! total and never produce these errors.

use thiserror::Error;

/// Errors produced by typed payload access and event registries.
#[derive(Debug, Error)]
pub enum EventError {
    /// A typed lookup asked for a key that is not present.
    #[error("no value for key: {key}")]
    MissingKey { key: String },

    /// The stored value could not be read as the requested type.
    #[error("value for key {key} is not a {expected}: {reason}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        reason: String,
    },

    /// The event name is not acceptable to a registry.
    #[error("invalid event name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// An event with this name is already registered and replacement is off.
    #[error("event already registered: {name}")]
    DuplicateEvent { name: String },

    /// The registry is full.
    #[error("registry capacity of {limit} events exceeded")]
    CapacityExceeded { limit: usize },

    /// A registry lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience alias used throughout the event crate.
pub type Result<T> = std::result::Result<T, EventError>;
