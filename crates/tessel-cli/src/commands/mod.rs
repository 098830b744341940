//! CLI command implementations.

pub mod render;
pub mod version;
