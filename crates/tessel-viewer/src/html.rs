//! The interactive HTML shell around rendered frames.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use tessel_ir::{Circuit, CircuitItem, OpKind, Operation};

use crate::config::ViewerConfig;
use crate::emit::Diagram;

/// Build the hand-off link for the external circuit editor.
///
/// The circuit is flattened, qubit coordinates are moved to the front, and
/// the lines are joined with `;` with spaces replaced by `_`.
pub fn editor_link(circuit: &Circuit, base_url: &str) -> String {
    let flat = circuit.flattened();
    let (coords, rest): (Vec<&Operation>, Vec<&Operation>) = flat
        .items()
        .iter()
        .filter_map(|item| match item {
            CircuitItem::Operation(op) => Some(op),
            CircuitItem::Repeat { .. } => None,
        })
        .partition(|op| op.kind == OpKind::QubitCoords);
    let lines: Vec<String> = coords
        .into_iter()
        .chain(rest)
        .map(ToString::to_string)
        .collect();
    format!("{base_url}#circuit={}", lines.join(";").replace(' ', "_"))
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

const NAVIGATION_SCRIPT: &str = r#"<script>
    let layer_index = 0;
    let layers = [];
    while (true) {
        let svg = document.getElementById('layer' + layers.length);
        if (svg === null) {
            break;
        }
        layers.push(svg);
    }

    function handleLayerIndexChange() {
        if (layer_index >= layers.length) {
            layer_index = layers.length - 1;
        }
        if (layer_index < 0) {
            layer_index = 0;
        }
        let shown = layers.length === 0 ? 0 : layer_index + 1;
        document.getElementById('step').innerHTML = "Layer: " + shown + "/" + layers.length;
        for (let k = 0; k < layers.length; k++) {
            layers[k].style.display = layer_index === k ? "" : "none";
        }
    }
    document.getElementById("btnPrev").addEventListener("click", ev => {
        layer_index -= 1;
        handleLayerIndexChange();
    });
    document.getElementById("btnNext").addEventListener("click", ev => {
        layer_index += 1;
        handleLayerIndexChange();
    });
    document.addEventListener('keydown', ev => {
        if (ev.code == "KeyA" && !ev.getModifierState("Control")) {
            layer_index -= 1;
            ev.preventDefault();
            handleLayerIndexChange();
        } else if (ev.code == "KeyD") {
            layer_index += 1;
            ev.preventDefault();
            handleLayerIndexChange();
        }
    });

    handleLayerIndexChange();
</script>"#;

impl Diagram {
    /// Render the self-contained navigation document.
    ///
    /// Every frame is embedded as a hidden base64 SVG image with id
    /// `layer{k}`; the script only toggles visibility between them.
    pub fn to_html(&self, config: &ViewerConfig) -> String {
        let images: Vec<String> = self
            .frames()
            .iter()
            .enumerate()
            .map(|(k, frame)| {
                let data = BASE64.encode(frame.to_svg().as_bytes());
                format!(
                    r#"<img style="max-width: 95%; max-height: 95%; display: none" id=layer{k} src="data:image/svg+xml;base64,{data}" />"#
                )
            })
            .collect();

        let mut html = String::from(
            r#"<div id="step">Loading...</div>
<button id="btnPrev">Previous Layer (hotkey: a)</button>
<button id="btnNext">Next Layer (hotkey: d)</button>
"#,
        );
        if let Some(link) = self.editor_link() {
            html.push_str(&format!(
                "<a href=\"{}\">Open in Crumble</a>\n",
                escape_attribute(link)
            ));
        }
        html.push_str(&format!(
            "<div id=\"viewer\" style=\"border: 1px solid black; margin-bottom: 50px; width: {}px; height: {}px; resize: both; overflow: auto\">\n",
            config.width, config.height
        ));
        html.push_str(&images.join("\n"));
        html.push_str("\n</div>\n");
        html.push_str(NAVIGATION_SCRIPT);
        html
    }
}
