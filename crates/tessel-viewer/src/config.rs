//! Viewer configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with TESSEL_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ViewerError, ViewerResult};

/// Default hand-off target for the "open in editor" link.
pub const DEFAULT_EDITOR_URL: &str = "http://localhost:63342/crumble/crumble.html";

/// Settings for rendering a circuit into the HTML viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Width of the viewer panel in pixels.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Height of the frame images in pixels.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Base URL of the external circuit editor. `None` omits the link.
    #[serde(default = "default_editor_url")]
    pub editor_url: Option<String>,

    /// Append declared detector coordinates to detector labels.
    #[serde(default)]
    pub label_detector_coordinates: bool,
}

fn default_size() -> u32 {
    500
}

#[allow(clippy::unnecessary_wraps)]
fn default_editor_url() -> Option<String> {
    Some(DEFAULT_EDITOR_URL.to_string())
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            editor_url: default_editor_url(),
            label_detector_coordinates: false,
        }
    }
}

impl ViewerConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(contents: &str) -> ViewerResult<Self> {
        let config: ViewerConfig =
            serde_yaml_ng::from_str(contents).map_err(|e| ViewerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ViewerResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ViewerError::Config(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Load configuration with the full precedence chain.
    pub fn load(config_file: Option<&Path>) -> ViewerResult<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.merge_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `TESSEL_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are ignored. An empty `TESSEL_EDITOR_URL`
    /// disables the editor link.
    #[must_use]
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(width) = lookup("TESSEL_WIDTH").and_then(|v| v.parse().ok()) {
            self.width = width;
        }
        if let Some(height) = lookup("TESSEL_HEIGHT").and_then(|v| v.parse().ok()) {
            self.height = height;
        }
        if let Some(url) = lookup("TESSEL_EDITOR_URL") {
            self.editor_url = if url.is_empty() { None } else { Some(url) };
        }
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> ViewerResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewerError::Config(format!(
                "viewer size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some(url) = &self.editor_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ViewerError::Config(format!(
                    "editor URL must be http(s): {url}"
                )));
            }
        }
        Ok(())
    }
}
