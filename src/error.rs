//! Error types for algotrace.
//!
//! The error surface is deliberately narrow: the generators are total
//! functions over well-formed input and signal the degenerate (empty-input)
//! case with an empty trace rather than an error. Errors arise only at the
//! boundaries — loading an empty trace into the store, parsing a run
//! configuration, or exporting a trace.

use thiserror::Error;

/// Result type alias for algotrace operations.
pub type TraceResult<T> = Result<T, TraceError>;

/// Unified error type for all algotrace operations.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Attempted to load an empty trace into the store.
    ///
    /// Generators return an empty trace for empty input; callers must check
    /// before loading, and the store refuses so an empty trace can never
    /// become a rendered state.
    #[error("cannot load an empty trace into the store")]
    EmptyTrace,

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error during export.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TraceError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check whether this error is the empty-trace rejection.
    #[must_use]
    pub const fn is_empty_trace(&self) -> bool {
        matches!(self, Self::EmptyTrace)
    }
}
