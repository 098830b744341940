//! Circuit operations and their categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::{SingleQubitGate, TwoQubitGate};
use crate::noise::NoiseChannel;
use crate::qubit::{GateTarget, Pauli, QubitId};

/// The category of an operation, resolved once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// `QUBIT_COORDS`: place qubits in the plane.
    QubitCoords,
    /// `SHIFT_COORDS`: accumulate an offset for later coordinates.
    ShiftCoords,
    /// Single-qubit gate, reset or measurement.
    SingleQubit(SingleQubitGate),
    /// Two-qubit gate applied to target pairs.
    TwoQubit(TwoQubitGate),
    /// `MPP`: Pauli-product measurements.
    PauliProduct,
    /// `TICK`: time-slice boundary.
    Tick,
    /// `DETECTOR`: parity check over earlier measurements.
    Detector,
    /// `OBSERVABLE_INCLUDE`: add measurements to a logical observable.
    ObservableInclude,
    /// A declared noise channel.
    Noise(NoiseChannel),
    /// Anything else.
    Unsupported,
}

impl OpKind {
    /// Resolve the category of an operation name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "QUBIT_COORDS" => OpKind::QubitCoords,
            "SHIFT_COORDS" => OpKind::ShiftCoords,
            "MPP" => OpKind::PauliProduct,
            "TICK" => OpKind::Tick,
            "DETECTOR" => OpKind::Detector,
            "OBSERVABLE_INCLUDE" => OpKind::ObservableInclude,
            _ => {
                if let Some(gate) = SingleQubitGate::from_name(name) {
                    OpKind::SingleQubit(gate)
                } else if let Some(gate) = TwoQubitGate::from_name(name) {
                    OpKind::TwoQubit(gate)
                } else if let Some(channel) = NoiseChannel::from_name(name) {
                    OpKind::Noise(channel)
                } else {
                    OpKind::Unsupported
                }
            }
        }
    }

    /// Whether this operation appends to the measurement record.
    pub fn produces_measurements(&self) -> bool {
        match self {
            OpKind::SingleQubit(gate) => gate.is_measurement(),
            OpKind::PauliProduct => true,
            _ => false,
        }
    }
}

/// A single circuit operation: name, targets and numeric arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The name as written in the source.
    pub name: String,
    /// The resolved category.
    pub kind: OpKind,
    /// Targets, in source order.
    pub targets: Vec<GateTarget>,
    /// Numeric arguments (probabilities, coordinates, indices).
    pub args: Vec<f64>,
}

impl Operation {
    /// Create an operation, resolving its category from the name.
    pub fn new(
        name: impl Into<String>,
        targets: impl IntoIterator<Item = GateTarget>,
        args: impl IntoIterator<Item = f64>,
    ) -> Self {
        let name = name.into();
        Self {
            kind: OpKind::from_name(&name),
            name,
            targets: targets.into_iter().collect(),
            args: args.into_iter().collect(),
        }
    }

    /// Get the name of the operation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of measurement results this operation appends to the record.
    pub fn num_measurements(&self) -> usize {
        if !self.kind.produces_measurements() {
            return 0;
        }
        // One result per product: terms minus the combiners joining them.
        let combiners = self.targets.iter().filter(|t| t.is_combiner()).count();
        self.targets.len().saturating_sub(2 * combiners)
    }

    /// The plain qubit at `index`, or a malformed-target error.
    pub fn qubit_at(&self, index: usize) -> IrResult<QubitId> {
        match self.targets.get(index) {
            Some(GateTarget::Qubit { qubit, .. }) => Ok(*qubit),
            other => Err(self.malformed(index, "qubit", other)),
        }
    }

    /// The qubit touched by a qubit or Pauli target at `index`.
    pub fn touched_qubit_at(&self, index: usize) -> IrResult<QubitId> {
        let target = self.targets.get(index);
        target
            .and_then(GateTarget::qubit_id)
            .ok_or_else(|| self.malformed(index, "qubit or pauli", target))
    }

    /// The Pauli term at `index`.
    pub fn pauli_at(&self, index: usize) -> IrResult<(QubitId, Pauli)> {
        let target = self.targets.get(index);
        target
            .and_then(|t| Some((t.qubit_id()?, t.pauli_basis()?)))
            .ok_or_else(|| self.malformed(index, "pauli", target))
    }

    /// The record lookback at `index`.
    pub fn record_at(&self, index: usize) -> IrResult<i32> {
        let target = self.targets.get(index);
        target
            .and_then(GateTarget::record_offset)
            .ok_or_else(|| self.malformed(index, "record", target))
    }

    /// The logical observable index of an `OBSERVABLE_INCLUDE`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn observable_index(&self) -> IrResult<u32> {
        match self.args.first() {
            Some(&v) if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => Ok(v as u32),
            Some(v) => Err(IrError::InvalidArguments {
                operation: self.name.clone(),
                reason: format!("observable index {v} is not a non-negative integer"),
            }),
            None => Err(IrError::InvalidArguments {
                operation: self.name.clone(),
                reason: "missing observable index".into(),
            }),
        }
    }

    fn malformed(&self, index: usize, expected: &'static str, found: Option<&GateTarget>) -> IrError {
        IrError::MalformedTarget {
            operation: self.name.clone(),
            index,
            expected,
            found: found.map_or_else(|| "nothing".to_string(), |t| format!("{} '{t}'", t.kind_name())),
        }
    }

    pub fn is_tick(&self) -> bool {
        matches!(self.kind, OpKind::Tick)
    }

    pub fn is_detector(&self) -> bool {
        matches!(self.kind, OpKind::Detector)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, "({})", args.join(", "))?;
        }
        // Product terms are glued together by `*` without surrounding spaces.
        let mut joined = false;
        for target in &self.targets {
            if target.is_combiner() {
                write!(f, "*")?;
                joined = true;
                continue;
            }
            if !joined {
                write!(f, " ")?;
            }
            write!(f, "{target}")?;
            joined = false;
        }
        Ok(())
    }
}
