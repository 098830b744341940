//! Per-time-slice canvas state.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tessel_ir::QubitId;

use crate::coords::{CoordinateMap, PITCH, Point, grid_label};
use crate::svg::{Anchor, Baseline, Primitive};

/// Radius of the faint marker drawn at positions idle in a layer.
const IDLE_RADIUS: f64 = 5.0;

/// Axis-aligned view box of a frame, in SVG units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}

/// One time slice of the diagram.
///
/// Each layer owns a snapshot of the qubit coordinate map taken when it was
/// opened; edits to a later layer never reach back into earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    coords: CoordinateMap,
    primitives: Vec<Primitive>,
    used: BTreeSet<Point>,
    measurements: FxHashMap<usize, Point>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the next layer, inheriting a copy of this layer's coordinates.
    pub fn successor(&self) -> Self {
        Self {
            coords: self.coords.clone(),
            ..Self::default()
        }
    }

    pub fn coords(&self) -> &CoordinateMap {
        &self.coords
    }

    pub fn coords_mut(&mut self) -> &mut CoordinateMap {
        &mut self.coords
    }

    /// Plot position of a qubit, marking it as used in this layer.
    pub fn locate(&mut self, qubit: QubitId) -> Point {
        let point = self.coords.position(qubit);
        self.used.insert(point);
        point
    }

    /// Mark a position as used without drawing at it.
    pub fn reserve(&mut self, point: Point) {
        self.used.insert(point);
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn used_positions(&self) -> &BTreeSet<Point> {
        &self.used
    }

    /// Remember where global measurement `index` was taken in this layer.
    pub fn record_measurement(&mut self, index: usize, point: Point) {
        self.measurements.insert(index, point);
    }

    pub fn measurement_position(&self, index: usize) -> Option<Point> {
        self.measurements.get(&index).copied()
    }

    /// Used positions padded by one pitch on every side.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.used.iter().next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &self.used {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        bounds.min_x -= PITCH;
        bounds.min_y -= PITCH;
        bounds.max_x += PITCH;
        bounds.max_y += PITCH;
        Some(bounds)
    }

    /// Mark positions used elsewhere in the run but idle here, then label
    /// every used column along the bottom and every used row along the left.
    pub fn add_idles(&mut self, all_positions: &BTreeSet<Point>) {
        let idle: Vec<Point> = all_positions.difference(&self.used).copied().collect();
        for p in idle {
            self.push(Primitive::circle(p.x, p.y, IDLE_RADIUS, "gray").outlined());
        }
        self.used.extend(all_positions.iter().copied());

        let Some(bounds) = self.bounds() else {
            return;
        };
        let mut xs: Vec<f64> = self.used.iter().map(|p| p.x).collect();
        xs.dedup();
        let mut ys: Vec<f64> = self.used.iter().map(|p| p.y).collect();
        ys.sort_by(f64::total_cmp);
        ys.dedup();

        for x in xs {
            self.push(
                Primitive::text(x, bounds.max_y - 5.0, grid_label(x), "black", 24)
                    .aligned(Anchor::Middle, Baseline::Auto),
            );
        }
        for y in ys {
            self.push(
                Primitive::text(bounds.min_x + 5.0, y, grid_label(y), "black", 24)
                    .aligned(Anchor::Start, Baseline::Middle),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_snapshots_coordinates() {
        let mut first = Layer::new();
        first.coords_mut().declare(QubitId(0), (2.0, 3.0));
        let mut second = first.successor();
        second.coords_mut().declare(QubitId(0), (5.0, 5.0));

        assert_eq!(first.coords().grid(QubitId(0)), (2.0, 3.0));
        assert_eq!(second.coords().grid(QubitId(0)), (5.0, 5.0));
        assert!(second.is_empty());
        assert!(second.used_positions().is_empty());
    }

    #[test]
    fn test_bounds_pad_by_pitch() {
        let mut layer = Layer::new();
        assert!(layer.bounds().is_none());
        layer.locate(QubitId(0));
        layer.locate(QubitId(2));
        let bounds = layer.bounds().unwrap();
        assert_eq!(
            bounds,
            Bounds {
                min_x: -32.0,
                min_y: -32.0,
                max_x: 96.0,
                max_y: 32.0
            }
        );
        assert_eq!(bounds.view_box(), "-32 -32 128 64");
    }

    #[test]
    fn test_idles_and_axis_labels() {
        let mut layer = Layer::new();
        layer.locate(QubitId(0));
        let all: BTreeSet<Point> = [Point::new(0.0, 0.0), Point::new(32.0, 0.0)]
            .into_iter()
            .collect();
        layer.add_idles(&all);

        let idles = layer
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { r, .. } if *r == IDLE_RADIUS))
            .count();
        assert_eq!(idles, 1);

        let labels: Vec<&str> = layer
            .primitives()
            .iter()
            .filter_map(Primitive::text_content)
            .collect();
        // Two columns and one row.
        assert_eq!(labels, vec!["0", "1", "0"]);
        assert_eq!(layer.used_positions().len(), 2);
    }
}
