//! Coordinate resolution: qubit ids to plot positions.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use tessel_ir::QubitId;

/// Distance between adjacent grid positions, in SVG units.
pub const PITCH: f64 = 32.0;

/// A plot position in SVG units.
///
/// Points are totally ordered so they can live in ordered sets, which keeps
/// idle markers and axis labels in a stable order.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        // Fold -0.0 into 0.0 so equal positions compare equal.
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    /// Linear blend `self * (1 - t) + other * t`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
        )
    }

    /// The mean of a non-empty set of points.
    pub fn centroid(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

/// Cumulative offset applied to later coordinate declarations.
///
/// Only the first two dimensions matter for plotting; further deltas are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordinateShift {
    dx: f64,
    dy: f64,
}

impl CoordinateShift {
    pub fn accumulate(&mut self, deltas: &[f64]) {
        if let Some(dx) = deltas.first() {
            self.dx += dx;
        }
        if let Some(dy) = deltas.get(1) {
            self.dy += dy;
        }
    }

    /// Apply the shift to declared grid coordinates.
    ///
    /// A single value `v` means `(v, 0)`. Returns `None` if no coordinates are given.
    pub fn apply(&self, coords: &[f64]) -> Option<(f64, f64)> {
        let x = *coords.first()?;
        let y = coords.get(1).copied().unwrap_or(0.0);
        Some((x + self.dx, y + self.dy))
    }
}

/// Grid positions of qubits for one layer.
///
/// Undeclared qubits sit at `(id, 0)`.
#[derive(Debug, Clone, Default)]
pub struct CoordinateMap {
    grid: FxHashMap<QubitId, (f64, f64)>,
}

impl CoordinateMap {
    pub fn declare(&mut self, qubit: QubitId, grid: (f64, f64)) {
        self.grid.insert(qubit, grid);
    }

    /// Grid coordinates of a qubit.
    pub fn grid(&self, qubit: QubitId) -> (f64, f64) {
        self.grid
            .get(&qubit)
            .copied()
            .unwrap_or((f64::from(qubit.0), 0.0))
    }

    /// Plot position of a qubit, in SVG units.
    pub fn position(&self, qubit: QubitId) -> Point {
        let (x, y) = self.grid(qubit);
        Point::new(x * PITCH, y * PITCH)
    }
}

/// Format a plot coordinate as a grid value for axis labels.
///
/// Integral values print without a fractional part.
pub fn grid_label(coordinate: f64) -> String {
    let value = coordinate / PITCH + 0.0;
    format!("{value}")
}
