//! Play command handler

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use scriptcut::player::{play_session, PlaybackResult};
use scriptcut::theme::current_theme;
use scriptcut::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle(base: &Path, from: usize, speed: Option<f64>, config: &Config) -> Result<()> {
    let mut capture = super::open(base, config)?;
    let mut playback = config.playback.clone();
    if let Some(speed) = speed {
        playback.speed = speed;
    }
    capture.session.seek(from);

    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))
        .context("Failed to install Ctrl-C handler")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = play_session(&mut capture.session, &playback, &mut out, &stop)
        .context("Playback failed")?;

    // Leave the terminal with default rendition whatever the capture did
    write!(out, "\x1b[0m")?;
    out.flush()?;

    let theme = current_theme();
    match result {
        PlaybackResult::Finished => {
            eprintln!("{}", theme.success_text("\nPlayback finished"));
        }
        PlaybackResult::Interrupted => {
            eprintln!(
                "{}",
                theme.secondary_text(&format!(
                    "\nStopped at command {}",
                    capture.session.cursor().position
                ))
            );
        }
    }
    Ok(())
}
