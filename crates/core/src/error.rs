//! Unified error types for the sessionizer engine.
//!
//! Pipeline-level failures never abort processing: an unreadable source
//! either short-circuits the load with an empty table plus a diagnostic
//! message (field-count pre-check) or is skipped (load pass), and malformed
//! records are dropped without a per-record error. Query-level not-found
//! conditions live in the `query` crate as their own sentinel type.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the sessionizer engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A source could not be read or parsed at all.
    #[error("source {name} unreadable: {reason}")]
    SourceUnreadable { name: String, reason: String },

    /// A single record failed schema coercion or validation.
    ///
    /// Callers drop the record and keep going; this variant never
    /// propagates past the load pass.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// The supplied field schema is unusable (e.g. a required field name
    /// is missing from it).
    #[error("schema error: {0}")]
    Schema(String),
}

impl Error {
    /// Create a source-unreadable error.
    pub fn source_unreadable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnreadable {
            name: source.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }
}
