//! Capture file naming.
//!
//! A capture called `demo` is the pair `demo.session` + `demo.timing`, the
//! names `script --timing=demo.timing demo.session` produces.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::CaptureConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePaths {
    pub session: PathBuf,
    pub timing: PathBuf,
}

impl CapturePaths {
    /// Derive both file names from a base path.
    ///
    /// A base that already carries the session or timing extension has it
    /// stripped first, so `demo`, `demo.session` and `demo.timing` all name
    /// the same capture.
    pub fn from_base(base: &Path, config: &CaptureConfig) -> Self {
        let base = strip_known_extension(base, config);
        Self {
            session: with_extension(&base, &config.session_extension),
            timing: with_extension(&base, &config.timing_extension),
        }
    }
}

/// `path` with `suffix` appended to its file name.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

fn strip_known_extension(base: &Path, config: &CaptureConfig) -> PathBuf {
    match base.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == config.session_extension || ext == config.timing_extension => {
            base.with_extension("")
        }
        _ => base.to_path_buf(),
    }
}

// Appends rather than replaces, so dotted bases like `demo.v2` survive
fn with_extension(base: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
