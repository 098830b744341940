//! Qubit identifiers and operation targets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Unique identifier for a qubit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// A single-qubit Pauli basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pauli {
    X,
    Y,
    Z,
}

impl Pauli {
    /// The single-letter name of this basis.
    pub fn letter(self) -> char {
        match self {
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Parse a basis from its letter.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Pauli::X),
            'Y' | 'y' => Some(Pauli::Y),
            'Z' | 'z' => Some(Pauli::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One target of an operation.
///
/// The text form mirrors the circuit format: `5`, `!5`, `X5`, `rec[-2]`, `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateTarget {
    /// A plain qubit, optionally with its measurement result inverted.
    Qubit { qubit: QubitId, inverted: bool },
    /// A qubit tagged with a Pauli basis (Pauli-product terms, correlated errors).
    Pauli {
        pauli: Pauli,
        qubit: QubitId,
        inverted: bool,
    },
    /// A lookback into the measurement record. Always negative.
    Record(i32),
    /// Joins the neighbouring Pauli targets into one product.
    Combiner,
}

impl GateTarget {
    /// Plain qubit target.
    pub fn qubit(id: u32) -> Self {
        GateTarget::Qubit {
            qubit: QubitId(id),
            inverted: false,
        }
    }

    /// Pauli-tagged qubit target.
    pub fn pauli(pauli: Pauli, id: u32) -> Self {
        GateTarget::Pauli {
            pauli,
            qubit: QubitId(id),
            inverted: false,
        }
    }

    /// Measurement record lookback. `offset` must be negative.
    pub fn record(offset: i64) -> IrResult<Self> {
        if offset >= 0 {
            return Err(IrError::InvalidRecordOffset(offset));
        }
        let offset = i32::try_from(offset).map_err(|_| IrError::InvalidRecordOffset(offset))?;
        Ok(GateTarget::Record(offset))
    }

    /// Return a copy with the inversion flag set. Records and combiners are unchanged.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            GateTarget::Qubit { qubit, .. } => GateTarget::Qubit {
                qubit,
                inverted: true,
            },
            GateTarget::Pauli { pauli, qubit, .. } => GateTarget::Pauli {
                pauli,
                qubit,
                inverted: true,
            },
            other => other,
        }
    }

    /// The qubit this target touches, for qubit and Pauli targets.
    pub fn qubit_id(&self) -> Option<QubitId> {
        match self {
            GateTarget::Qubit { qubit, .. } | GateTarget::Pauli { qubit, .. } => Some(*qubit),
            _ => None,
        }
    }

    /// The Pauli basis, for Pauli targets.
    pub fn pauli_basis(&self) -> Option<Pauli> {
        match self {
            GateTarget::Pauli { pauli, .. } => Some(*pauli),
            _ => None,
        }
    }

    /// The record lookback, for record targets.
    pub fn record_offset(&self) -> Option<i32> {
        match self {
            GateTarget::Record(offset) => Some(*offset),
            _ => None,
        }
    }

    pub fn is_qubit(&self) -> bool {
        matches!(self, GateTarget::Qubit { .. })
    }

    pub fn is_record(&self) -> bool {
        matches!(self, GateTarget::Record(_))
    }

    pub fn is_combiner(&self) -> bool {
        matches!(self, GateTarget::Combiner)
    }

    /// Short description of the target's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GateTarget::Qubit { .. } => "qubit",
            GateTarget::Pauli { .. } => "pauli",
            GateTarget::Record(_) => "record",
            GateTarget::Combiner => "combiner",
        }
    }
}

impl fmt::Display for GateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateTarget::Qubit { qubit, inverted } => {
                if *inverted {
                    write!(f, "!")?;
                }
                write!(f, "{qubit}")
            }
            GateTarget::Pauli {
                pauli,
                qubit,
                inverted,
            } => {
                if *inverted {
                    write!(f, "!")?;
                }
                write!(f, "{pauli}{qubit}")
            }
            GateTarget::Record(offset) => write!(f, "rec[{offset}]"),
            GateTarget::Combiner => write!(f, "*"),
        }
    }
}
