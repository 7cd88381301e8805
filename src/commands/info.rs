//! Info command handler

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use humansize::{format_size, BINARY};
use serde::Serialize;

use scriptcut::theme::current_theme;
use scriptcut::{Capture, Config};

/// What `info` reports about one capture.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub session: String,
    pub timing: String,
    pub commands: usize,
    pub control_sequences: usize,
    pub content_bytes: usize,
    pub timing_bytes: usize,
    pub duration_secs: f64,
    pub timing_entries: usize,
    pub consistent: bool,
    /// Invalid UTF-8 was replaced on load; the capture cannot be saved
    pub lossy: bool,
    /// Control sequence count per category label
    pub categories: BTreeMap<&'static str, usize>,
}

impl Summary {
    pub fn of(capture: &Capture) -> Self {
        let session = &capture.session;
        let mut categories = BTreeMap::new();
        for category in session.commands().iter().filter_map(|c| c.category()) {
            *categories.entry(category.label()).or_insert(0) += 1;
        }

        let timings = session.timings();
        Self {
            session: capture.paths.session.display().to_string(),
            timing: capture.paths.timing.display().to_string(),
            commands: session.len(),
            control_sequences: categories.values().sum(),
            content_bytes: session.total_bytes(),
            timing_bytes: timings.total_bytes(),
            duration_secs: session.total_duration(),
            timing_entries: timings.len() - usize::from(timings.has_synthetic_head()),
            consistent: session.is_consistent(),
            lossy: capture.lossy,
            categories,
        }
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(base: &Path, json: bool, config: &Config) -> Result<()> {
    let capture = super::open(base, config)?;
    let summary = Summary::of(&capture);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let theme = current_theme();
    println!("{}", theme.accent_bold_text(&summary.session));
    println!(
        "  Commands:  {} ({} control sequences)",
        summary.commands, summary.control_sequences
    );
    println!(
        "  Size:      {}",
        format_size(summary.content_bytes as u64, BINARY)
    );
    println!(
        "  Duration:  {:.1}s over {} timing entries",
        summary.duration_secs, summary.timing_entries
    );
    if !summary.consistent {
        println!(
            "  {}",
            theme.error_text(&format!(
                "Timing covers {} bytes, content has {}",
                summary.timing_bytes, summary.content_bytes
            ))
        );
    }

    if summary.lossy {
        println!(
            "  {}",
            theme.error_text("Invalid UTF-8 was replaced on load; edits cannot be saved")
        );
    }

    if !summary.categories.is_empty() {
        println!("  Control sequences:");
        for (label, count) in &summary.categories {
            println!("    {:<26}{:>6}", label, count);
        }
    }
    Ok(())
}
