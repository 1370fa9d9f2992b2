//! Error types for the studymate core library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all studymate core operations.
///
/// Format anomalies found while streaming are not errors: they are reported
/// through observers and logged. The variants below are either contract
/// violations (bad timezone, inconsistent persisted progress) or outcomes a
/// caller has to act on, such as a generation that must be discarded.
#[derive(Error, Debug)]
pub enum StudymateError {
    /// The timezone identifier is not a known IANA zone
    #[error("Invalid timezone '{timezone}': {source}")]
    InvalidTimezone {
        timezone: String,
        #[source]
        source: jiff::Error,
    },
    /// Persisted progress contradicts an assumption of the evaluator
    #[error("Invariant violated: {message}")]
    Invariant { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A studyplan block could not be finalized; the generation must be
    /// discarded
    #[error("Invalid studyplan in model response: {}", anomalies.join("; "))]
    InvalidStudyplan { anomalies: Vec<String> },
    /// The requested task cannot be completed right now
    #[error("Task cannot be completed: {reason}")]
    TaskNotCompletable { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StudymateError {
        StudymateError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StudymateError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }

    /// Creates a task completion refusal.
    pub fn not_completable(reason: impl Into<String>) -> Self {
        Self::TaskNotCompletable {
            reason: reason.into(),
        }
    }
}

/// Result type alias for studymate core operations
pub type Result<T> = std::result::Result<T, StudymateError>;
