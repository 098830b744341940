//! Fixed visual vocabulary: gate boxes, two-qubit endpoints and Pauli-product fans.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use tessel_ir::{Pauli, QubitId, SingleQubitGate, TwoQubitGate};

use crate::coords::Point;
use crate::layer::Layer;
use crate::svg::Primitive;

/// Side of a gate box, in SVG units.
pub const DIAMETER: f64 = 32.0;
pub const RADIUS: f64 = DIAMETER / 2.0;

/// Stroke width of the lines joining a Pauli product's members.
const PRODUCT_STROKE: f64 = 8.0;

/// How far product boxes are pulled from a member toward the centroid.
const PRODUCT_INSET: f64 = 0.1;

/// Box style for a single-qubit gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateStyle {
    pub label: String,
    pub fill: &'static str,
    pub text_color: &'static str,
}

/// Look up the box style of a single-qubit gate.
pub fn gate_style(gate: SingleQubitGate) -> GateStyle {
    use SingleQubitGate as G;

    let name = gate.name();
    let (label, fill, text_color) = match gate {
        G::I => (name.to_string(), "white", "gray"),
        G::X | G::Y | G::Z => (name.to_string(), "white", "black"),
        G::R | G::RX | G::RY | G::M | G::MX | G::MY | G::MR | G::MRX | G::MRY => {
            (name.to_string(), "black", "white")
        }
        G::CXyz | G::CZyx => (axis_cycle_label(name), "teal", "black"),
        G::H
        | G::HYz
        | G::HXy
        | G::S
        | G::SqrtX
        | G::SqrtY
        | G::SDag
        | G::SqrtXDag
        | G::SqrtYDag => (clifford_label(name), "yellow", "black"),
    };
    GateStyle {
        label,
        fill,
        text_color,
    }
}

/// `SQRT_X_DAG` → `√X⁻¹`, `H_YZ` → `Hyz`.
fn clifford_label(name: &str) -> String {
    let name = name.replace("SQRT_", "√").replace("_DAG", "⁻¹");
    match name.split_once('_') {
        Some((head, tail)) => format!("{head}{}", tail.to_lowercase()),
        None => name,
    }
}

/// `C_XYZ` → `Cxyz`.
fn axis_cycle_label(name: &str) -> String {
    match name.split_once('_') {
        Some((head, tail)) => format!("{head}{}", tail.to_lowercase()),
        None => name.to_string(),
    }
}

fn label_font_size(label: &str) -> u32 {
    match label.chars().count() {
        1 => 32,
        2 => 24,
        _ => 18,
    }
}

/// Draw a labelled box centred on `at`.
pub fn draw_box(layer: &mut Layer, at: Point, label: &str, fill: &str, text_color: &str) {
    layer.push(Primitive::rect(at.x - RADIUS, at.y - RADIUS, DIAMETER, fill));
    layer.push(Primitive::text(
        at.x,
        at.y,
        label,
        text_color,
        label_font_size(label),
    ));
}

/// Endpoint glyph of a two-qubit gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Plus in a circle.
    X,
    /// Three-spoke tick in a circle.
    Y,
    /// Filled dot.
    Z,
    /// Small diagonal cross.
    Swap,
    /// Dot with a full-size diagonal cross.
    ISwap,
}

/// Endpoint glyphs for the first and second member of a pair.
pub fn endpoint_styles(gate: TwoQubitGate) -> (Endpoint, Endpoint) {
    use Endpoint as E;
    use TwoQubitGate as G;

    match gate {
        G::CX => (E::Z, E::X),
        G::CY => (E::Z, E::Y),
        G::CZ => (E::Z, E::Z),
        G::XCX => (E::X, E::X),
        G::XCY => (E::X, E::Y),
        G::XCZ => (E::X, E::Z),
        G::YCX => (E::Y, E::X),
        G::YCY => (E::Y, E::Y),
        G::YCZ => (E::Y, E::Z),
        G::ISwap | G::ISwapDag => (E::ISwap, E::ISwap),
        G::Swap => (E::Swap, E::Swap),
    }
}

pub fn draw_endpoint(layer: &mut Layer, at: Point, style: Endpoint) {
    let Point { x, y } = at;
    match style {
        Endpoint::X => {
            layer.push(Primitive::circle(x, y, RADIUS, "white").outlined());
            layer.push(Primitive::line(x - RADIUS, y, x + RADIUS, y));
            layer.push(Primitive::line(x, y - RADIUS, x, y + RADIUS));
        }
        Endpoint::Y => {
            let s = RADIUS * std::f64::consts::FRAC_1_SQRT_2;
            layer.push(Primitive::circle(x, y, RADIUS, "white").outlined());
            layer.push(Primitive::line(x, y, x, y + RADIUS));
            layer.push(Primitive::line(x, y, x - s, y - s));
            layer.push(Primitive::line(x, y, x + s, y - s));
        }
        Endpoint::Z => {
            layer.push(Primitive::circle(x, y, RADIUS, "black"));
        }
        Endpoint::Swap => draw_cross(layer, at, RADIUS / 3.0),
        Endpoint::ISwap => {
            layer.push(Primitive::circle(x, y, RADIUS / 2.0, "black"));
            draw_cross(layer, at, RADIUS);
        }
    }
}

fn draw_cross(layer: &mut Layer, at: Point, r: f64) {
    let Point { x, y } = at;
    layer.push(Primitive::line(x - r, y - r, x + r, y + r));
    layer.push(Primitive::line(x - r, y + r, x + r, y - r));
}

/// Draw one two-qubit gate application: a connecting line and both endpoints.
pub fn draw_pair(layer: &mut Layer, first: Point, second: Point, gate: TwoQubitGate) {
    let (style1, style2) = endpoint_styles(gate);
    layer.push(Primitive::line(first.x, first.y, second.x, second.y));
    draw_endpoint(layer, first, style1);
    draw_endpoint(layer, second, style2);
}

/// Reserved colour for single-basis Pauli products.
pub fn basis_color(pauli: Pauli) -> &'static str {
    match pauli {
        Pauli::X => "#FF8080",
        Pauli::Y => "#80FF80",
        Pauli::Z => "#8080FF",
    }
}

/// A light colour derived from the product's members.
///
/// Identical products always get the same colour; different products almost
/// always differ.
pub fn chunk_color(members: &[(QubitId, Pauli)]) -> String {
    let mut hasher = FxHasher::default();
    members.hash(&mut hasher);
    let rgb = 0x0080_8080 | (hasher.finish() & 0x007f_7f7f);
    format!("#{rgb:06x}")
}

/// Draw one Pauli-product measurement.
///
/// `members` pairs each plot position with its basis. Products measured in a
/// single basis use that basis' reserved colour with blank boxes; mixed
/// products use `mixed_color` and label every box.
pub fn draw_product(layer: &mut Layer, members: &[(Point, Pauli)], mixed_color: &str) {
    let points: Vec<Point> = members.iter().map(|(p, _)| *p).collect();
    let Some(centroid) = Point::centroid(&points) else {
        return;
    };
    let single_basis = members
        .first()
        .map(|(_, first)| *first)
        .filter(|first| members.iter().all(|(_, b)| b == first));
    let color: &str = match single_basis {
        Some(basis) => basis_color(basis),
        None => mixed_color,
    };

    for p in &points {
        layer.push(Primitive::thick_line(
            p.x,
            p.y,
            centroid.x,
            centroid.y,
            color,
            PRODUCT_STROKE,
        ));
    }
    for (p, basis) in members {
        let label = if single_basis.is_some() {
            String::new()
        } else {
            format!("P{basis}")
        };
        draw_box(layer, p.lerp(centroid, PRODUCT_INSET), &label, color, "black");
    }
}
