//! Error types for the circuit text parser.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at position {position}: {message}")]
    LexerError { position: usize, message: String },

    /// Unexpected token.
    #[error("Unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// A `}` without a matching `REPEAT ... {`.
    #[error("Unmatched '}}' at line {0}")]
    UnmatchedBrace(usize),

    /// A target that cannot be represented.
    #[error("Invalid target '{target}' at line {line}")]
    InvalidTarget { line: usize, target: String },

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    CircuitError(#[from] tessel_ir::IrError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
