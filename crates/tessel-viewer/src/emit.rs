//! Frame emission: finalise walked layers into self-contained SVG frames.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use tracing::warn;

use crate::coords::Point;
use crate::glyph::RADIUS;
use crate::layer::{Bounds, Layer};
use crate::overlay::ErrorMark;
use crate::svg::{Anchor, Baseline, Primitive};
use crate::walker::WalkOutcome;

/// One rendered time slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    primitives: Vec<Primitive>,
    bounds: Bounds,
}

impl Frame {
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Serialise as a standalone SVG document sized to the frame's bounds.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">"#,
            self.bounds.view_box()
        );
        svg.push('\n');
        for primitive in &self.primitives {
            let _ = writeln!(svg, "    {primitive}");
        }
        svg.push_str("</svg>");
        svg
    }
}

/// The rendered document: one frame per surviving layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub(crate) frames: Vec<Frame>,
    pub(crate) editor_link: Option<String>,
}

impl Diagram {
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Link handing the flattened circuit to the external editor, if configured.
    pub fn editor_link(&self) -> Option<&str> {
        self.editor_link.as_deref()
    }
}

/// Pad, annotate and freeze the walked layers.
///
/// Trailing layers without primitives are dropped first; overlay glyphs and
/// noise notes that pointed at a dropped layer are skipped.
pub(crate) fn finalize(outcome: WalkOutcome, flips: &[ErrorMark]) -> Vec<Frame> {
    let WalkOutcome {
        mut layers,
        final_coords,
        corrections,
        noted,
        ..
    } = outcome;

    let mut all_positions: BTreeSet<Point> = layers
        .iter()
        .flat_map(|layer| layer.used_positions().iter().copied())
        .collect();
    while layers.last().is_some_and(Layer::is_empty) {
        layers.pop();
    }

    // Glyph targets count as used, so qubits without gates stay in frame.
    let annotated = flips
        .iter()
        .chain(&corrections)
        .map(|mark| (mark.layer, mark.qubit))
        .chain(noted.iter().map(|note| (note.layer, note.qubit)));
    for (index, qubit) in annotated {
        if let Some(layer) = layers.get_mut(index) {
            let at = final_coords.position(qubit);
            layer.reserve(at);
            all_positions.insert(at);
        }
    }

    for layer in &mut layers {
        layer.add_idles(&all_positions);
    }

    for mark in flips.iter().chain(&corrections) {
        let Some(layer) = layers.get_mut(mark.layer) else {
            warn!(
                qubit = %mark.qubit,
                layer = mark.layer,
                glyph = %mark.kind.glyph(),
                "error mark falls on a discarded layer; skipping"
            );
            continue;
        };
        let at = final_coords.position(mark.qubit);
        layer.push(
            Primitive::text(at.x, at.y, mark.kind.glyph(), mark.kind.color(), 64)
                .aligned(Anchor::Middle, Baseline::Middle),
        );
    }

    for note in &noted {
        let Some(layer) = layers.get_mut(note.layer) else {
            warn!(
                qubit = %note.qubit,
                layer = note.layer,
                code = note.code,
                "noise note falls on a discarded layer; skipping"
            );
            continue;
        };
        let at = final_coords.position(note.qubit);
        layer.push(
            Primitive::text(at.x - RADIUS, at.y, note.code, "red", 12)
                .aligned(Anchor::End, Baseline::Middle),
        );
    }

    layers
        .into_iter()
        .map(|layer| {
            let bounds = layer.bounds().unwrap_or_default();
            Frame {
                primitives: layer.into_primitives(),
                bounds,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::MarkKind;
    use crate::walker::Walker;
    use rustc_hash::FxHashSet;
    use tessel_ir::{Circuit, GateTarget, Pauli, QubitId};

    fn walk(circuit: &Circuit) -> WalkOutcome {
        let highlighted = FxHashSet::default();
        Walker::new(&highlighted).run(circuit).unwrap()
    }

    #[test]
    fn test_trailing_empty_layers_are_dropped() {
        let mut c = Circuit::new();
        c.gate("H", &[0]).unwrap();
        c.tick();
        c.tick();
        c.gate("H", &[1]).unwrap();
        c.tick();
        c.tick();
        let frames = finalize(walk(&c), &[]);
        // The empty middle layer survives, padded with idle markers.
        assert_eq!(frames.len(), 3);
        let idles = frames[1]
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { fill, .. } if fill == "gray"))
            .count();
        assert_eq!(idles, 2);
    }

    #[test]
    fn test_nothing_drawn_means_no_frames() {
        let mut c = Circuit::new();
        c.tick();
        c.noise("Z_ERROR", 0.5, &[GateTarget::qubit(0)]).unwrap();
        c.tick();
        assert!(finalize(walk(&c), &[]).is_empty());
    }

    #[test]
    fn test_frames_share_bounds_after_padding() {
        let mut c = Circuit::new();
        c.gate("H", &[0]).unwrap();
        c.tick();
        c.gate("H", &[3]).unwrap();
        let frames = finalize(walk(&c), &[]);
        assert_eq!(frames[0].bounds(), frames[1].bounds());
        assert_eq!(frames[0].bounds().view_box(), "-32 -32 160 64");
    }

    #[test]
    fn test_overlay_marks() {
        let mut c = Circuit::new();
        c.gate("H", &[0, 1]).unwrap();
        c.noise("Y_ERROR", 0.1, &[GateTarget::qubit(1)]).unwrap();
        let flips = [
            ErrorMark {
                qubit: QubitId(0),
                layer: 0,
                kind: MarkKind::Flip(Pauli::X),
            },
            ErrorMark {
                qubit: QubitId(0),
                layer: 7,
                kind: MarkKind::Flip(Pauli::Z),
            },
        ];
        let frames = finalize(walk(&c), &flips);
        assert_eq!(frames.len(), 1);
        let prims = frames[0].primitives();
        assert!(prims.iter().any(|p| matches!(
            p,
            Primitive::Text { content, fill, font_size: 64, x, .. }
                if content == "X" && fill == "red" && *x == 0.0
        )));
        assert!(!prims.iter().any(|p| p.text_content() == Some("Z")));
        assert!(prims.iter().any(|p| matches!(
            p,
            Primitive::Text { content, font_size: 12, x, .. } if content == "Y" && *x == 16.0
        )));
    }

    #[test]
    fn test_annotations_on_gateless_qubits_stay_in_frame() {
        let mut c = Circuit::new();
        c.gate("H", &[0]).unwrap();
        c.noise("DEPOLARIZE1", 0.1, &[GateTarget::qubit(5)]).unwrap();
        c.tick();
        c.gate("H", &[0]).unwrap();
        let flips = [ErrorMark {
            qubit: QubitId(7),
            layer: 0,
            kind: MarkKind::Flip(Pauli::X),
        }];
        let frames = finalize(walk(&c), &flips);
        assert_eq!(frames.len(), 2);

        let inside = |frame: &Frame, content: &str| {
            let b = frame.bounds();
            frame.primitives().iter().any(|p| {
                matches!(p, Primitive::Text { content: c, x, y, .. }
                    if c == content
                        && (b.min_x..=b.max_x).contains(x)
                        && (b.min_y..=b.max_y).contains(y))
            })
        };
        assert!(inside(&frames[0], "X"));
        assert!(inside(&frames[0], "D1"));
        assert_eq!(frames[0].bounds().view_box(), "-32 -32 288 64");

        // Reserved positions are idle in the other layers.
        let idles: Vec<f64> = frames[1]
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { cx, fill, .. } if fill == "gray" => Some(*cx),
                _ => None,
            })
            .collect();
        assert_eq!(idles, vec![160.0, 224.0]);
        assert_eq!(frames[0].bounds(), frames[1].bounds());
    }

    #[test]
    fn test_svg_document() {
        let mut c = Circuit::new();
        c.gate("X", &[0]).unwrap();
        let frames = finalize(walk(&c), &[]);
        let svg = frames[0].to_svg();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-32 -32 64 64">"#
        ));
        assert!(svg.contains(r#"    <rect x="-16" y="-16" width="32" height="32" fill="white" stroke="black"/>"#));
        assert!(svg.ends_with("</svg>"));
    }
}
