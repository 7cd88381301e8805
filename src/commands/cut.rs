//! Cut command handler

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use humansize::{format_size, BINARY};

use scriptcut::ansi;
use scriptcut::theme::current_theme;
use scriptcut::{Config, Session};

#[cfg(not(tarpaulin_include))]
pub fn handle(
    base: &Path,
    from: usize,
    to: Option<usize>,
    dry_run: bool,
    config: &Config,
) -> Result<()> {
    let mut capture = super::open(base, config)?;
    let session = &mut capture.session;
    let end = validate_range(session, from, to)?;
    let theme = current_theme();

    if dry_run {
        let bytes = ansi::total_len(&session.commands()[from..end]);
        println!(
            "Would remove {} commands ({}) starting at {:.3}s",
            end - from,
            format_size(bytes as u64, BINARY),
            time_at(session, from)
        );
        return Ok(());
    }

    let bytes = cut(session, from, to).ok_or_else(|| anyhow!("Nothing removed at {}", from))?;
    capture.save(&config.capture)?;

    println!(
        "{}",
        theme.success_text(&format!(
            "Removed {} commands ({}) from {}",
            end - from,
            format_size(bytes as u64, BINARY),
            capture.paths.session.display()
        ))
    );
    Ok(())
}

/// Resolve the exclusive end of the range, rejecting ranges outside the
/// session.
fn validate_range(session: &Session, from: usize, to: Option<usize>) -> Result<usize> {
    let len = session.len();
    if from >= len {
        bail!("Position {} is past the end ({} commands)", from, len);
    }
    let end = to.unwrap_or(from + 1);
    if end <= from || end > len {
        bail!("Invalid range {}..{} ({} commands)", from, end, len);
    }
    Ok(end)
}

/// Delete `from..to` through the In/Out marks, or the single command at
/// `from`.
fn cut(session: &mut Session, from: usize, to: Option<usize>) -> Option<usize> {
    session.seek(from);
    if let Some(to) = to {
        session.mark_in();
        session.seek(to);
        session.mark_out();
    }
    session.delete_selection()
}

fn time_at(session: &Session, position: usize) -> f64 {
    session
        .position_to_byte_offset(position)
        .map(|offset| session.locate_timing(offset).elapsed)
        .unwrap_or_else(|| session.total_duration())
}
