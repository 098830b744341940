//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A target's kind does not fit the operation it appears in.
    #[error("Operation '{operation}' target #{index}: expected {expected}, found {found}")]
    MalformedTarget {
        /// Name of the operation.
        operation: String,
        /// Position of the offending target.
        index: usize,
        /// What the operation accepts at this position.
        expected: &'static str,
        /// What was actually there.
        found: String,
    },

    /// Numeric arguments do not fit the operation.
    #[error("Operation '{operation}' has invalid arguments: {reason}")]
    InvalidArguments {
        /// Name of the operation.
        operation: String,
        /// Human-readable reason.
        reason: String,
    },

    /// Measurement record lookbacks must be negative.
    #[error("Invalid measurement record offset {0}: lookbacks must be negative")]
    InvalidRecordOffset(i64),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
