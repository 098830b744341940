//! Fault mechanisms supplied by an external error search.
//!
//! A fault mechanism is a small set of physical Pauli flips, each located at a
//! tick of the circuit, together with the detectors (and observables) the
//! flips end up toggling. The viewer only consumes this for highlighting; the
//! search that produces it lives outside this workspace and is reached
//! through [`FaultSearch`].

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::qubit::{Pauli, QubitId};

/// A Pauli flip on one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliFlip {
    pub qubit: QubitId,
    pub pauli: Pauli,
}

/// Where in the circuit an elementary error happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// Number of ticks executed before the error, counting repeat iterations.
    pub tick_offset: usize,
    /// The Pauli product applied by the error.
    pub flipped: Vec<PauliFlip>,
}

/// A symptom of an error in the detector error model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum DemTarget {
    /// Sequential detector index.
    Detector(u64),
    /// Logical observable index.
    Observable(u64),
}

/// One error term of a fault mechanism, with the circuit locations that explain it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExplainedError {
    /// Circuit locations producing this error. Only the first is drawn.
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
    /// The detectors and observables flipped.
    #[serde(default)]
    pub dem_targets: Vec<DemTarget>,
}

impl ExplainedError {
    /// Indices of detectors flipped by this error.
    pub fn detectors(&self) -> impl Iterator<Item = u64> + '_ {
        self.dem_targets.iter().filter_map(|t| match t {
            DemTarget::Detector(index) => Some(*index),
            DemTarget::Observable(_) => None,
        })
    }
}

/// A minimal combination of faults, typically an undetectable logical error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaultMechanism {
    pub errors: Vec<ExplainedError>,
}

impl FaultMechanism {
    /// Number of elementary errors in the mechanism.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Boxed error returned by a fault search.
pub type SearchError = Box<dyn std::error::Error + Send + Sync>;

/// An external search deriving a minimal fault mechanism from a circuit.
pub trait FaultSearch {
    /// Find a smallest set of faults that flips a logical observable undetected.
    fn shortest_error(&self, circuit: &Circuit) -> Result<FaultMechanism, SearchError>;
}
