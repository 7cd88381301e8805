//! Subcommand handlers.

pub mod config;
pub mod cut;
pub mod dump;
pub mod info;
pub mod play;

use std::path::Path;

use anyhow::{Context, Result};

use scriptcut::{Capture, CapturePaths, Config};

/// Load the capture named by `base`.
pub fn open(base: &Path, config: &Config) -> Result<Capture> {
    let paths = CapturePaths::from_base(base, &config.capture);
    Capture::load(paths).with_context(|| format!("Failed to open capture {}", base.display()))
}
