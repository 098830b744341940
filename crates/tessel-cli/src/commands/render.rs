//! Render command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use tessel_ir::{Circuit, FaultMechanism};
use tessel_text::parse;
use tessel_viewer::{Viewer, ViewerConfig};

/// Execute the render command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    config_path: Option<&str>,
    fault_path: Option<&str>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    println!(
        "{} Rendering {}",
        style("→").cyan().bold(),
        style(input).green()
    );

    let circuit = load_circuit(input)?;
    println!(
        "  Loaded: {} measurements, {} detectors, {} ticks",
        circuit.num_measurements(),
        circuit.num_detectors(),
        circuit.num_ticks()
    );

    let config = load_config(config_path, width, height)?;
    let fault = fault_path.map(load_fault).transpose()?;
    if let Some(fault) = &fault {
        println!("  Highlighting {} errors", fault.len());
    }

    let viewer = Viewer::new(config);
    let diagram = viewer
        .render(&circuit, fault.as_ref())
        .with_context(|| format!("Failed to render {input}"))?;
    let html = diagram.to_html(viewer.config());

    let output_path = output.map_or_else(|| default_output(input), PathBuf::from);
    fs::write(&output_path, html)
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;

    println!(
        "{} Rendered {} layers",
        style("✓").green().bold(),
        diagram.len()
    );
    println!("  Output: {}", style(output_path.display()).green());

    Ok(())
}

/// Load a circuit from a text file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    parse(&source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))
}

/// Load the viewer configuration and apply command-line size overrides.
fn load_config(path: Option<&str>, width: Option<u32>, height: Option<u32>) -> Result<ViewerConfig> {
    let mut config = ViewerConfig::load(path.map(Path::new))?;
    if let Some(width) = width {
        config.width = width;
    }
    if let Some(height) = height {
        config.height = height;
    }
    config.validate()?;
    debug!(width = config.width, height = config.height, "viewer configuration");
    Ok(config)
}

/// Load a fault mechanism exported as JSON by an external search.
fn load_fault(path: &str) -> Result<FaultMechanism> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    serde_json::from_str(&source).with_context(|| format!("Invalid fault mechanism: {path}"))
}

/// `circuit.stim` → `circuit.html`, next to the input.
fn default_output(input: &str) -> PathBuf {
    Path::new(input).with_extension("html")
}
