//! Library side of the `draft-viewer` binary: config, logging and rendering.

pub mod config;
pub mod logging;
pub mod render;
