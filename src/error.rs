//! Error types for the tsprep library.

use thiserror::Error;

/// Result type alias for catalog and pipeline operations.
pub type Result<T> = std::result::Result<T, PrepError>;

/// Errors raised on caller contract violations.
///
/// Ordinary rule failures are not errors; they are reported through
/// [`crate::catalog::Validation`] so every violated rule reaches the user
/// in one pass.
#[derive(Error, Debug)]
pub enum PrepError {
    /// Step identifier does not resolve against the catalog.
    #[error("unknown step id: {0:?}")]
    UnknownStep(String),

    /// Number of supplied inputs does not match the step's arity.
    #[error("step {step:?} takes {expected} input(s), got {got}")]
    InputCountMismatch {
        step: String,
        expected: usize,
        got: usize,
    },

    /// Pipeline position does not exist.
    #[error("pipeline position out of range: {position} (length: {len})")]
    PositionOutOfRange { position: usize, len: usize },

    /// Catalog entry violates a construction invariant.
    #[error("invalid catalog entry {id:?}: {reason}")]
    InvalidEntry { id: String, reason: String },

    /// A pipeline handed to submission still has failing rules.
    #[error("pipeline step at position {position} failed validation: {failures:?}")]
    InvalidPipeline {
        position: usize,
        failures: Vec<String>,
    },

    /// Submission payload could not be encoded.
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
