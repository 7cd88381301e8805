//! Shared fixtures and helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use scriptcut::{Capture, CapturePaths, Config};

/// Commands in the `demo` fixture.
pub const DEMO_COMMANDS: usize = 42;
/// Timed content bytes in the `demo` fixture.
pub const DEMO_BYTES: usize = 87;
/// Recorded timing entries in the `demo` fixture.
pub const DEMO_ENTRIES: usize = 12;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Copy capture `name` into a fresh temp dir; returns the dir and the base path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    for ext in ["session", "timing"] {
        let file = format!("{}.{}", name, ext);
        fs::copy(fixtures_dir().join(&file), dir.path().join(&file)).expect("copy fixture");
    }
    let base = dir.path().join(name);
    (dir, base)
}

/// Load capture `name` straight from the fixtures directory.
pub fn load_fixture(name: &str) -> Capture {
    let paths = CapturePaths::from_base(&fixtures_dir().join(name), &Config::default().capture);
    Capture::load(paths).expect("load fixture")
}

/// The timed content of the `demo` fixture.
pub fn demo_content() -> String {
    let raw = fs::read_to_string(fixtures_dir().join("demo.session")).expect("read fixture");
    let body = raw.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body[..DEMO_BYTES].to_string()
}
