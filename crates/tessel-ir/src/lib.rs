//! Tessel Circuit Intermediate Representation
//!
//! This crate provides the data structures for timed stabilizer circuits as
//! consumed by the tessel viewer: qubit targets, closed operation categories,
//! nested repeat blocks, and the fault mechanisms an external error search
//! hands back for highlighting.
//!
//! # Core Components
//!
//! - **Targets**: [`QubitId`], [`Pauli`] and [`GateTarget`] (qubit, Pauli-tagged
//!   qubit, measurement-record lookback, or product combiner)
//! - **Operations**: [`Operation`] with its [`OpKind`], resolved once from the name
//! - **Name tables**: [`SingleQubitGate`], [`TwoQubitGate`], [`NoiseChannel`]
//! - **Circuit**: [`Circuit`] builder API with [`CircuitItem::Repeat`] blocks
//! - **Faults**: [`FaultMechanism`] and the [`FaultSearch`] contract
//!
//! # Example: A Repetition-Code Round
//!
//! ```rust
//! use tessel_ir::Circuit;
//!
//! let mut round = Circuit::new();
//! round.gate("CX", &[0, 1, 2, 1]).unwrap();
//! round.gate("MR", &[1]).unwrap();
//! round.detector(&[-1, -2], &[1.0, 0.0]).unwrap();
//! round.tick();
//!
//! let mut circuit = Circuit::new();
//! circuit.gate("R", &[0, 1, 2]).unwrap();
//! circuit.gate("MR", &[1]).unwrap();
//! circuit.tick();
//! circuit.repeat(10, round).unwrap();
//!
//! assert_eq!(circuit.num_measurements(), 11);
//! assert_eq!(circuit.num_detectors(), 10);
//! ```
//!
//! # Operation Categories
//!
//! | Category | Names |
//! |----------|-------|
//! | Coordinates | `QUBIT_COORDS`, `SHIFT_COORDS` |
//! | Single-qubit | `I X Y Z H S ...`, resets `R RX RY`, measurements `M MX MY MR MRX MRY` |
//! | Two-qubit | `CX CY CZ XCX ... YCZ ISWAP ISWAP_DAG SWAP` |
//! | Pauli products | `MPP` |
//! | Annotations | `TICK`, `DETECTOR`, `OBSERVABLE_INCLUDE` |
//! | Noise | `X_ERROR Y_ERROR Z_ERROR E ELSE_CORRELATED_ERROR DEPOLARIZE1 DEPOLARIZE2` |

pub mod circuit;
pub mod error;
pub mod fault;
pub mod gate;
pub mod instruction;
pub mod noise;
pub mod qubit;

pub use circuit::{Circuit, CircuitItem};
pub use error::{IrError, IrResult};
pub use fault::{
    DemTarget, ErrorLocation, ExplainedError, FaultMechanism, FaultSearch, PauliFlip, SearchError,
};
pub use gate::{SingleQubitGate, TwoQubitGate};
pub use instruction::{OpKind, Operation};
pub use noise::NoiseChannel;
pub use qubit::{GateTarget, Pauli, QubitId};
