//! # Error Types
//!
//! Errors raised at the edges of the stack: decoding stored event records,
//! reading files, and loading configuration. Phase and visibility
//! resolution are total functions and have no error type of their own.

use thiserror::Error;

/// Top-level error type for the event phase stack.
#[derive(Error, Debug)]
pub enum EvtError {
    /// A timestamp string could not be parsed.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An identifier failed validation.
    #[error("invalid {kind} identifier: {reason}")]
    InvalidIdentifier {
        /// Identifier namespace (e.g. "event", "organizer").
        kind: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML decoding failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
