//! Dump command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use scriptcut::ansi::Command;
use scriptcut::theme::{current_theme, Theme};
use scriptcut::{Config, Cursor, Session};

/// Columns reserved for the glyph.
const GLYPH_WIDTH: usize = 2;

#[cfg(not(tarpaulin_include))]
pub fn handle(
    base: &Path,
    from: usize,
    count: Option<usize>,
    boundaries: bool,
    config: &Config,
) -> Result<()> {
    let mut capture = super::open(base, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for row in rows(&mut capture.session, from, count, boundaries) {
        match writeln!(out, "{}", row) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            other => other?,
        }
    }
    Ok(())
}

/// Formatted listing rows starting at `from`.
///
/// With `boundaries` only commands that start a timing entry are listed.
pub fn rows(session: &mut Session, from: usize, count: Option<usize>, boundaries: bool) -> Vec<String> {
    rows_with(session, from, count, boundaries, &current_theme())
}

fn rows_with(
    session: &mut Session,
    from: usize,
    count: Option<usize>,
    boundaries: bool,
    theme: &Theme,
) -> Vec<String> {
    let limit = count.unwrap_or(usize::MAX);
    let mut rows = Vec::new();
    if from >= session.len() || limit == 0 {
        return rows;
    }

    session.seek(from);
    loop {
        if let Some(command) = session.current_command() {
            rows.push(format_row(session.cursor(), command, theme));
        }
        if rows.len() >= limit {
            break;
        }
        let moved = if boundaries {
            session.advance_to_next_timing_boundary()
        } else {
            session.step_forward()
        };
        if !moved {
            break;
        }
    }
    rows
}

fn format_row(cursor: Cursor, command: &Command, theme: &Theme) -> String {
    let glyph = command.glyph();
    let pad = GLYPH_WIDTH.saturating_sub(glyph.width());
    let glyph = format!("{}{}", glyph, " ".repeat(pad));

    let position = theme.secondary_text(&format!(
        "{:>7} {:>9} {:>10.3}",
        cursor.position, cursor.offset, cursor.time
    ));
    let (glyph, description) = match command.category() {
        Some(category) => (
            theme.category_text(&glyph, category),
            theme.primary_text(&command.describe()),
        ),
        None => (glyph, command.describe()),
    };
    format!("{}  {} {}", position, glyph, description)
}
