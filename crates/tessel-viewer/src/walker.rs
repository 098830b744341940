//! Instruction stream walker.
//!
//! One [`Walker`] owns every piece of mutable state for a single render:
//! the layers, the measurement timeline, the coordinate shift and the
//! detector counter. Repeat blocks are expanded by walking the body once per
//! iteration against the same session.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::{FxHashMap, FxHashSet};
use tessel_ir::{
    Circuit, CircuitItem, GateTarget, IrError, NoiseChannel, OpKind, Operation, Pauli, QubitId,
    SingleQubitGate, TwoQubitGate,
};
use tracing::{debug, trace, warn};

use crate::coords::{CoordinateMap, CoordinateShift};
use crate::error::{ViewerError, ViewerResult};
use crate::glyph::{self, DIAMETER, RADIUS};
use crate::layer::Layer;
use crate::overlay::{ErrorMark, MarkKind};
use crate::svg::{Anchor, Baseline, Primitive};
use crate::timeline::MeasurementTimeline;

const DETECTOR_COLOR: &str = "black";
const HIGHLIGHTED_DETECTOR_COLOR: &str = "#FF8000";
const OBSERVABLE_COLOR: &str = "blue";

/// Vertical distance between stacked labels on one measurement.
const LABEL_STACK_STEP: f64 = 15.0;

/// A declared-noise event, drawn later as a faint annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoiseNote {
    pub qubit: QubitId,
    pub layer: usize,
    pub code: &'static str,
}

/// Everything the walk produced, ready for finalisation.
#[derive(Debug)]
pub struct WalkOutcome {
    pub layers: Vec<Layer>,
    /// Coordinates in effect at the end of the walk.
    pub final_coords: CoordinateMap,
    pub corrections: Vec<ErrorMark>,
    pub noted: BTreeSet<NoiseNote>,
    pub measurements: usize,
    pub detectors: u64,
}

/// How a parity annotation labels the measurements it references.
enum Parity {
    Detector { highlighted: bool },
    Observable,
}

pub struct Walker<'a> {
    finished: Vec<Layer>,
    current: Layer,
    timeline: MeasurementTimeline,
    shift: CoordinateShift,
    detector_index: u64,
    label_stack: FxHashMap<usize, u32>,
    highlighted_detectors: &'a FxHashSet<u64>,
    detector_coords: Option<BTreeMap<u64, Vec<f64>>>,
    corrections: Vec<ErrorMark>,
    noted: BTreeSet<NoiseNote>,
}

impl<'a> Walker<'a> {
    pub fn new(highlighted_detectors: &'a FxHashSet<u64>) -> Self {
        Self {
            finished: Vec::new(),
            current: Layer::new(),
            timeline: MeasurementTimeline::new(),
            shift: CoordinateShift::default(),
            detector_index: 0,
            label_stack: FxHashMap::default(),
            highlighted_detectors,
            detector_coords: None,
            corrections: Vec::new(),
            noted: BTreeSet::new(),
        }
    }

    /// Append declared coordinates to detector labels.
    #[must_use]
    pub fn with_detector_coords(mut self, coords: BTreeMap<u64, Vec<f64>>) -> Self {
        self.detector_coords = Some(coords);
        self
    }

    /// Walk a whole circuit and hand back the accumulated state.
    pub fn run(mut self, circuit: &Circuit) -> ViewerResult<WalkOutcome> {
        self.walk(circuit)?;
        let final_coords = self.current.coords().clone();
        let mut layers = self.finished;
        layers.push(self.current);
        Ok(WalkOutcome {
            layers,
            final_coords,
            corrections: self.corrections,
            noted: self.noted,
            measurements: self.timeline.len(),
            detectors: self.detector_index,
        })
    }

    fn walk(&mut self, circuit: &Circuit) -> ViewerResult<()> {
        for item in circuit.items() {
            match item {
                CircuitItem::Operation(op) => self.apply(op)?,
                CircuitItem::Repeat { count, body } => {
                    for _ in 0..*count {
                        self.walk(body)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, op: &Operation) -> ViewerResult<()> {
        trace!(operation = %op, "apply");
        match op.kind {
            OpKind::QubitCoords => self.declare_coords(op)?,
            OpKind::ShiftCoords => self.shift.accumulate(&op.args),
            OpKind::SingleQubit(gate) => self.draw_single(op, gate)?,
            OpKind::TwoQubit(gate) => self.draw_pairs(op, gate)?,
            OpKind::PauliProduct => self.draw_products(op)?,
            OpKind::Tick => self.advance(),
            OpKind::Detector => {
                let label = self.detector_label();
                let highlighted = self.highlighted_detectors.contains(&self.detector_index);
                self.detector_index += 1;
                self.mark_measurements(op, &label, &Parity::Detector { highlighted })?;
            }
            OpKind::ObservableInclude => {
                let index = op.observable_index()?;
                self.mark_measurements(op, &format!("L{index}"), &Parity::Observable)?;
            }
            OpKind::Noise(channel) => self.note_noise(op, channel)?,
            OpKind::Unsupported => {
                return Err(ViewerError::UnsupportedOperation {
                    name: op.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn current_index(&self) -> usize {
        self.finished.len()
    }

    fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        if index == self.finished.len() {
            Some(&mut self.current)
        } else {
            self.finished.get_mut(index)
        }
    }

    /// Close the current layer and open the next with a snapshot of its coordinates.
    fn advance(&mut self) {
        let next = self.current.successor();
        self.finished.push(std::mem::replace(&mut self.current, next));
        debug!(layer = self.current_index(), "advanced to next layer");
    }

    fn declare_coords(&mut self, op: &Operation) -> ViewerResult<()> {
        let grid = self
            .shift
            .apply(&op.args)
            .ok_or_else(|| IrError::InvalidArguments {
                operation: op.name.clone(),
                reason: "missing coordinates".into(),
            })?;
        for i in 0..op.targets.len() {
            let qubit = op.qubit_at(i)?;
            self.current.coords_mut().declare(qubit, grid);
        }
        Ok(())
    }

    fn register_measurement(&mut self, qubit: QubitId) {
        let index = self.timeline.push(self.current_index());
        let point = self.current.locate(qubit);
        self.current.record_measurement(index, point);
    }

    fn draw_single(&mut self, op: &Operation, gate: SingleQubitGate) -> ViewerResult<()> {
        let qubits = (0..op.targets.len())
            .map(|i| op.qubit_at(i))
            .collect::<Result<Vec<_>, _>>()?;
        if gate.is_measurement() {
            for &qubit in &qubits {
                self.register_measurement(qubit);
            }
        }
        let style = glyph::gate_style(gate);
        for qubit in qubits {
            let at = self.current.locate(qubit);
            glyph::draw_box(&mut self.current, at, &style.label, style.fill, style.text_color);
        }
        Ok(())
    }

    fn draw_pairs(&mut self, op: &Operation, gate: TwoQubitGate) -> ViewerResult<()> {
        let n = op.targets.len();
        if n % 2 == 1 {
            // The last target has no partner.
            op.qubit_at(n)?;
        }
        for k in (0..n).step_by(2) {
            let (first, second) = (op.targets[k], op.targets[k + 1]);
            if first.is_record() || second.is_record() {
                // Classically controlled: mark the quantum side, draw no edge.
                let controlled = [first, second].into_iter().find_map(|t| match t {
                    GateTarget::Qubit { qubit, .. } => Some(qubit),
                    _ => None,
                });
                if let Some(qubit) = controlled {
                    self.corrections.push(ErrorMark {
                        qubit,
                        layer: self.current_index(),
                        kind: MarkKind::Correction,
                    });
                }
                continue;
            }
            let a = op.qubit_at(k)?;
            let b = op.qubit_at(k + 1)?;
            let pa = self.current.locate(a);
            let pb = self.current.locate(b);
            glyph::draw_pair(&mut self.current, pa, pb, gate);
        }
        Ok(())
    }

    fn draw_products(&mut self, op: &Operation) -> ViewerResult<()> {
        let n = op.targets.len();
        let mut start = 0;
        while start < n {
            let mut end = start + 1;
            while end < n && op.targets[end].is_combiner() {
                end += 2;
            }
            let members = (start..end)
                .step_by(2)
                .map(|i| op.pauli_at(i))
                .collect::<Result<Vec<(QubitId, Pauli)>, _>>()?;
            self.draw_product(&members);
            start = end;
        }
        Ok(())
    }

    fn draw_product(&mut self, members: &[(QubitId, Pauli)]) {
        let Some(&(first, _)) = members.first() else {
            return;
        };
        self.register_measurement(first);
        let placed: Vec<_> = members
            .iter()
            .map(|&(qubit, basis)| (self.current.locate(qubit), basis))
            .collect();
        let color = glyph::chunk_color(members);
        glyph::draw_product(&mut self.current, &placed, &color);
    }

    fn detector_label(&self) -> String {
        let mut label = format!("D{}", self.detector_index);
        if let Some(coords) = self
            .detector_coords
            .as_ref()
            .and_then(|all| all.get(&self.detector_index))
        {
            let values: Vec<String> = coords.iter().map(ToString::to_string).collect();
            label.push_str(&format!("({})", values.join(",")));
        }
        label
    }

    fn mark_measurements(&mut self, op: &Operation, label: &str, parity: &Parity) -> ViewerResult<()> {
        let (color, highlighted) = match parity {
            Parity::Detector { highlighted: true } => (HIGHLIGHTED_DETECTOR_COLOR, true),
            Parity::Detector { highlighted: false } => (DETECTOR_COLOR, false),
            Parity::Observable => (OBSERVABLE_COLOR, false),
        };
        for i in 0..op.targets.len() {
            let offset = op.record_at(i)?;
            let Some(index) = self.timeline.resolve(offset) else {
                warn!(
                    operation = %op.name,
                    offset,
                    recorded = self.timeline.len(),
                    "measurement lookback reaches before the first measurement; skipping mark"
                );
                continue;
            };
            let slot = self.label_stack.entry(index).or_insert(0);
            let stacked = f64::from(*slot) * LABEL_STACK_STEP;
            *slot += 1;

            let Some(owner) = self.timeline.layer_of(index) else {
                continue;
            };
            let Some(layer) = self.layer_mut(owner) else {
                continue;
            };
            let Some(at) = layer.measurement_position(index) else {
                continue;
            };
            if highlighted {
                layer.push(Primitive::rect(at.x - RADIUS, at.y - RADIUS, DIAMETER, color));
            }
            layer.push(
                Primitive::text(at.x + RADIUS + 1.0, at.y - RADIUS + stacked, label, color, 16)
                    .aligned(Anchor::Start, Baseline::Hanging),
            );
        }
        Ok(())
    }

    fn note_noise(&mut self, op: &Operation, channel: NoiseChannel) -> ViewerResult<()> {
        for i in 0..op.targets.len() {
            let qubit = op.touched_qubit_at(i)?;
            self.noted.insert(NoiseNote {
                qubit,
                layer: self.current_index(),
                code: channel.short_code(),
            });
        }
        Ok(())
    }
}
