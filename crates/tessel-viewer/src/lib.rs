//! Tessel Circuit Viewer
//!
//! Compiles a timed stabilizer circuit into a time-sliced, navigable HTML
//! document: one SVG frame per `TICK`-delimited layer, with detector and
//! observable annotations placed on the measurements they reference.
//!
//! # Pipeline
//!
//! 1. **Overlay**: an optional fault mechanism (supplied, or derived through a
//!    [`FaultSearch`]) is mapped to Pauli-flip glyphs and highlighted detectors.
//! 2. **Walk**: the instruction stream is traversed in program order, repeat
//!    blocks unrolled, drawing gate glyphs into the current layer while the
//!    measurement timeline and coordinate shift evolve.
//! 3. **Emit**: trailing empty layers are dropped, every layer is padded with
//!    idle markers and axis labels, and overlay glyphs are placed.
//!
//! # Example
//!
//! ```rust
//! use tessel_ir::Circuit;
//! use tessel_viewer::{Viewer, ViewerConfig};
//!
//! let mut circuit = Circuit::new();
//! circuit.gate("R", &[0, 1]).unwrap();
//! circuit.gate("H", &[0, 1]).unwrap();
//! circuit.tick();
//! circuit.gate("CZ", &[0, 1]).unwrap();
//! circuit.tick();
//! circuit.gate("M", &[0, 1]).unwrap();
//! circuit.detector(&[-1, -2], &[]).unwrap();
//!
//! let viewer = Viewer::new(ViewerConfig::default());
//! let diagram = viewer.render(&circuit, None).unwrap();
//! assert_eq!(diagram.len(), 3);
//!
//! let html = diagram.to_html(viewer.config());
//! assert!(html.contains("id=layer2"));
//! ```
//!
//! # Errors
//!
//! Unsupported operations and targets of the wrong shape abort the render
//! with a [`ViewerError`]. Lookbacks reaching before the first measurement, a
//! failing fault search, and overlay entries on dropped layers are logged
//! with `tracing` and otherwise ignored.

pub mod config;
pub mod coords;
mod emit;
pub mod error;
pub mod glyph;
mod html;
pub mod layer;
pub mod overlay;
pub mod svg;
pub mod timeline;
mod walker;

pub use config::ViewerConfig;
pub use emit::{Diagram, Frame};
pub use error::{ViewerError, ViewerResult};
pub use html::editor_link;

use tessel_ir::{Circuit, FaultMechanism, FaultSearch};
use tracing::{debug, info, instrument};

use crate::overlay::Overlay;
use crate::walker::Walker;

/// Renders circuits with a fixed configuration.
pub struct Viewer {
    config: ViewerConfig,
    search: Option<Box<dyn FaultSearch>>,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            search: None,
        }
    }

    /// Derive an overlay with `search` whenever no fault mechanism is supplied.
    #[must_use]
    pub fn with_fault_search(mut self, search: Box<dyn FaultSearch>) -> Self {
        self.search = Some(search);
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Render a circuit into frames.
    ///
    /// `known_error` takes precedence over the configured fault search.
    #[instrument(skip_all, fields(items = circuit.len()))]
    pub fn render(
        &self,
        circuit: &Circuit,
        known_error: Option<&FaultMechanism>,
    ) -> ViewerResult<Diagram> {
        self.config.validate()?;

        let overlay = Overlay::resolve(circuit, known_error, self.search.as_deref());
        debug!(
            flips = overlay.flips.len(),
            highlighted = overlay.highlighted_detectors.len(),
            "resolved error overlay"
        );

        let mut walker = Walker::new(&overlay.highlighted_detectors);
        if self.config.label_detector_coordinates {
            walker = walker.with_detector_coords(circuit.detector_coordinates());
        }
        let outcome = walker.run(circuit)?;
        let (measurements, detectors) = (outcome.measurements, outcome.detectors);

        let frames = emit::finalize(outcome, &overlay.flips);
        info!(
            layers = frames.len(),
            measurements,
            detectors,
            "rendered circuit"
        );

        let editor_link = self
            .config
            .editor_url
            .as_deref()
            .map(|base| editor_link(circuit, base));
        Ok(Diagram {
            frames,
            editor_link,
        })
    }

    /// Render straight to the HTML document.
    pub fn render_html(
        &self,
        circuit: &Circuit,
        known_error: Option<&FaultMechanism>,
    ) -> ViewerResult<String> {
        Ok(self.render(circuit, known_error)?.to_html(&self.config))
    }
}

/// Render a circuit to HTML without an error overlay.
pub fn render_html(circuit: &Circuit, config: &ViewerConfig) -> ViewerResult<String> {
    Viewer::new(config.clone()).render_html(circuit, None)
}
