//! Error types for the viewer.

use thiserror::Error;

/// Fatal errors that abort rendering. No document is produced.
///
/// Recoverable conditions (dangling record lookbacks, a failed fault search,
/// overlay entries on discarded layers) are logged and never surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViewerError {
    /// The circuit contains an operation the viewer cannot draw.
    #[error("Unsupported operation: {name}")]
    UnsupportedOperation {
        /// The offending operation name.
        name: String,
    },

    /// A target or argument violates the shape its operation requires.
    #[error("Malformed circuit: {0}")]
    Circuit(#[from] tessel_ir::IrError),

    /// Invalid viewer configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for viewer operations.
pub type ViewerResult<T> = Result<T, ViewerError>;
