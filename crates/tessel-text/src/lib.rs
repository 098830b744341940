//! Circuit Text Format Parser and Emitter for Tessel
//!
//! This crate reads and writes the line-oriented text format used for timed
//! stabilizer circuits: one instruction per line, optional parenthesised
//! arguments, whitespace-separated targets, and brace-delimited repeat blocks.
//!
//! # Syntax
//!
//! | Feature | Example |
//! |---------|---------|
//! | Gates | `H 0 1`, `CX 0 1 2 3` |
//! | Arguments | `X_ERROR(0.001) 5`, `QUBIT_COORDS(1, 0.5) 3` |
//! | Record lookbacks | `DETECTOR rec[-1] rec[-3]` |
//! | Pauli products | `MPP X0*X1 Z2*Z3` |
//! | Inverted results | `M !4` |
//! | Repeat blocks | `REPEAT 100 { ... }` |
//! | Comments | `# comment` |
//!
//! # Example: Parsing
//!
//! ```rust
//! use tessel_text::parse;
//!
//! let source = r"
//!     R 0 1
//!     TICK
//!     REPEAT 3 {
//!         CX 0 1
//!         MR 1
//!         DETECTOR rec[-1]
//!         TICK
//!     }
//! ";
//!
//! let circuit = parse(source).unwrap();
//! assert_eq!(circuit.num_measurements(), 3);
//! assert_eq!(circuit.num_detectors(), 3);
//! ```
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use tessel_text::{emit, parse};
//!
//! let circuit = parse("MPP X0*X1 Z2\nTICK\n").unwrap();
//! let text = emit(&circuit);
//! assert_eq!(text, "MPP X0*X1 Z2\nTICK\n");
//! assert_eq!(parse(&text).unwrap(), circuit);
//! ```

mod emitter;
mod error;
mod lexer;
mod parser;

pub use emitter::emit;
pub use error::{ParseError, ParseResult};
pub use parser::parse;
