//! High-level circuit builder API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{IrError, IrResult};
use crate::instruction::{OpKind, Operation};
use crate::qubit::{GateTarget, Pauli};

/// One entry of a circuit: an operation or a repeated sub-circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CircuitItem {
    /// A plain operation.
    Operation(Operation),
    /// A body executed `count` times in a row.
    Repeat {
        /// Number of iterations. Never zero.
        count: u64,
        /// The repeated instructions.
        body: Circuit,
    },
}

/// A timed circuit of gates, measurements and annotations.
///
/// Operations are kept in program order; `REPEAT` blocks stay nested until
/// [`Circuit::flattened`] is called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    items: Vec<CircuitItem>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// The top-level items, in program order.
    pub fn items(&self) -> &[CircuitItem] {
        &self.items
    }

    /// Number of top-level items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an operation without any validation.
    pub fn append(&mut self, operation: Operation) -> &mut Self {
        self.items.push(CircuitItem::Operation(operation));
        self
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Apply a single- or two-qubit gate to plain qubit targets.
    pub fn gate(&mut self, name: &str, qubits: &[u32]) -> IrResult<&mut Self> {
        match OpKind::from_name(name) {
            OpKind::SingleQubit(_) => {}
            OpKind::TwoQubit(_) => {
                if qubits.len() % 2 != 0 {
                    return Err(IrError::InvalidArguments {
                        operation: name.to_string(),
                        reason: format!("{} targets do not form pairs", qubits.len()),
                    });
                }
            }
            _ => {
                return Err(IrError::InvalidArguments {
                    operation: name.to_string(),
                    reason: "not a gate".into(),
                });
            }
        }
        let targets = qubits.iter().map(|&q| GateTarget::qubit(q));
        Ok(self.append(Operation::new(name, targets, [])))
    }

    /// Apply a declared noise channel with probability `p`.
    pub fn noise(&mut self, name: &str, p: f64, targets: &[GateTarget]) -> IrResult<&mut Self> {
        if !matches!(OpKind::from_name(name), OpKind::Noise(_)) {
            return Err(IrError::InvalidArguments {
                operation: name.to_string(),
                reason: "not a noise channel".into(),
            });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(IrError::InvalidArguments {
                operation: name.to_string(),
                reason: format!("probability {p} outside [0, 1]"),
            });
        }
        Ok(self.append(Operation::new(name, targets.iter().copied(), [p])))
    }

    /// Close the current time slice.
    pub fn tick(&mut self) -> &mut Self {
        self.append(Operation::new("TICK", [], []))
    }

    /// Declare the plane position of a qubit.
    pub fn qubit_coords(&mut self, qubit: u32, coords: &[f64]) -> IrResult<&mut Self> {
        if coords.is_empty() {
            return Err(IrError::InvalidArguments {
                operation: "QUBIT_COORDS".into(),
                reason: "at least one coordinate is required".into(),
            });
        }
        Ok(self.append(Operation::new(
            "QUBIT_COORDS",
            [GateTarget::qubit(qubit)],
            coords.iter().copied(),
        )))
    }

    /// Offset every later coordinate declaration.
    pub fn shift_coords(&mut self, deltas: &[f64]) -> &mut Self {
        self.append(Operation::new("SHIFT_COORDS", [], deltas.iter().copied()))
    }

    /// Measure a list of Pauli products, one result per product.
    pub fn mpp(&mut self, products: &[&[(Pauli, u32)]]) -> IrResult<&mut Self> {
        let mut targets = Vec::new();
        for product in products {
            if product.is_empty() {
                return Err(IrError::InvalidArguments {
                    operation: "MPP".into(),
                    reason: "empty Pauli product".into(),
                });
            }
            for (k, &(pauli, qubit)) in product.iter().enumerate() {
                if k > 0 {
                    targets.push(GateTarget::Combiner);
                }
                targets.push(GateTarget::pauli(pauli, qubit));
            }
        }
        Ok(self.append(Operation::new("MPP", targets, [])))
    }

    /// Declare a detector over earlier measurements.
    pub fn detector(&mut self, lookbacks: &[i64], coords: &[f64]) -> IrResult<&mut Self> {
        let targets = records(lookbacks)?;
        Ok(self.append(Operation::new("DETECTOR", targets, coords.iter().copied())))
    }

    /// Include earlier measurements in a logical observable.
    pub fn observable_include(&mut self, index: u32, lookbacks: &[i64]) -> IrResult<&mut Self> {
        let targets = records(lookbacks)?;
        Ok(self.append(Operation::new(
            "OBSERVABLE_INCLUDE",
            targets,
            [f64::from(index)],
        )))
    }

    /// Append `body` repeated `count` times.
    pub fn repeat(&mut self, count: u64, body: Circuit) -> IrResult<&mut Self> {
        if count == 0 {
            return Err(IrError::InvalidArguments {
                operation: "REPEAT".into(),
                reason: "repeat count must be positive".into(),
            });
        }
        self.items.push(CircuitItem::Repeat { count, body });
        Ok(self)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Visit every operation in execution order, unrolling repeat blocks.
    pub fn for_each_operation<F: FnMut(&Operation)>(&self, f: &mut F) {
        for item in &self.items {
            match item {
                CircuitItem::Operation(op) => f(op),
                CircuitItem::Repeat { count, body } => {
                    for _ in 0..*count {
                        body.for_each_operation(f);
                    }
                }
            }
        }
    }

    /// Total number of measurement results, counting repeat iterations.
    pub fn num_measurements(&self) -> u64 {
        self.count_unrolled(&|op| op.num_measurements() as u64)
    }

    /// Total number of detectors, counting repeat iterations.
    pub fn num_detectors(&self) -> u64 {
        self.count_unrolled(&|op| u64::from(op.is_detector()))
    }

    /// Total number of ticks, counting repeat iterations.
    pub fn num_ticks(&self) -> u64 {
        self.count_unrolled(&|op| u64::from(op.is_tick()))
    }

    fn count_unrolled(&self, per_op: &dyn Fn(&Operation) -> u64) -> u64 {
        self.items
            .iter()
            .map(|item| match item {
                CircuitItem::Operation(op) => per_op(op),
                CircuitItem::Repeat { count, body } => count * body.count_unrolled(per_op),
            })
            .sum()
    }

    /// Declared detector coordinates, keyed by sequential detector index.
    ///
    /// Coordinate shifts in effect at each detector are applied. Detectors
    /// declared without coordinates are absent from the map.
    pub fn detector_coordinates(&self) -> BTreeMap<u64, Vec<f64>> {
        let mut coords = BTreeMap::new();
        let mut shift: Vec<f64> = Vec::new();
        let mut next_detector = 0u64;
        self.for_each_operation(&mut |op| match op.kind {
            OpKind::ShiftCoords => accumulate_shift(&mut shift, &op.args),
            OpKind::Detector => {
                if !op.args.is_empty() {
                    coords.insert(next_detector, shifted(&op.args, &shift));
                }
                next_detector += 1;
            }
            _ => {}
        });
        coords
    }

    /// Unroll every repeat block and fold coordinate shifts into the
    /// coordinates of later `QUBIT_COORDS` and `DETECTOR` operations.
    ///
    /// The result contains no `REPEAT` and no `SHIFT_COORDS`.
    pub fn flattened(&self) -> Circuit {
        let mut flat = Circuit::new();
        let mut shift: Vec<f64> = Vec::new();
        self.for_each_operation(&mut |op| match op.kind {
            OpKind::ShiftCoords => accumulate_shift(&mut shift, &op.args),
            OpKind::QubitCoords | OpKind::Detector => {
                let mut op = op.clone();
                op.args = shifted(&op.args, &shift);
                flat.append(op);
            }
            _ => {
                flat.append(op.clone());
            }
        });
        flat
    }
}

impl FromIterator<Operation> for Circuit {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(CircuitItem::Operation).collect(),
        }
    }
}

fn records(lookbacks: &[i64]) -> IrResult<Vec<GateTarget>> {
    lookbacks.iter().map(|&k| GateTarget::record(k)).collect()
}

fn accumulate_shift(shift: &mut Vec<f64>, deltas: &[f64]) {
    if shift.len() < deltas.len() {
        shift.resize(deltas.len(), 0.0);
    }
    for (s, d) in shift.iter_mut().zip(deltas) {
        *s += d;
    }
}

fn shifted(coords: &[f64], shift: &[f64]) -> Vec<f64> {
    coords
        .iter()
        .enumerate()
        .map(|(i, c)| c + shift.get(i).copied().unwrap_or(0.0))
        .collect()
}
