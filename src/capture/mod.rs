//! Loading and saving `script --timing` captures.
//!
//! The session file starts with a preamble line (`Script started on ...`)
//! that the timing file does not account for; it is dropped on load and a
//! configurable header is written in its place on save. A closing
//! `Script done on ...` line past the timed bytes is kept aside and written
//! back unchanged. Captures that could only be decoded lossily are
//! read-only: saving them would rewrite the replaced bytes.

mod error;
mod paths;

pub use error::CaptureError;
pub use paths::{backup_path, CapturePaths};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::ansi;
use crate::config::CaptureConfig;
use crate::session::Session;
use crate::timing::TimingTrack;

const TRAILER_PREFIX: &str = "Script done";
/// Suffix of the staging files written before a save is committed.
const STAGING_SUFFIX: &str = ".tmp";

/// An open capture: the session plus what is needed to write it back.
#[derive(Debug, Clone)]
pub struct Capture {
    pub paths: CapturePaths,
    pub session: Session,
    /// Untimed closing line(s), written after the content
    pub trailer: String,
    /// Invalid UTF-8 was replaced while decoding the session file
    pub lossy: bool,
}

impl Capture {
    pub fn load(paths: CapturePaths) -> Result<Self, CaptureError> {
        let raw = read_file(&paths.session)?;
        let timing_bytes = read_file(&paths.timing)?;

        let (text, lossy) = decode(strip_preamble(&raw), &paths.session);
        let (timing_text, _) = decode(&timing_bytes, &paths.timing);
        let timings = TimingTrack::parse(&timing_text).map_err(|source| CaptureError::Timing {
            path: paths.timing.clone(),
            source,
        })?;

        let (content, trailer) = split_trailer(&text, timings.total_bytes());
        let session = Session::new(ansi::tokenize(content), timings);
        if !session.is_consistent() {
            warn!(
                content_bytes = session.total_bytes(),
                timing_bytes = session.timings().total_bytes(),
                "session and timing lengths differ"
            );
        }

        info!(
            path = %paths.session.display(),
            commands = session.len(),
            entries = session.timings().len(),
            "loaded capture"
        );
        Ok(Self {
            trailer: trailer.to_string(),
            paths,
            session,
            lossy,
        })
    }

    /// Write both files, copying the previous versions aside first when
    /// `config.keep_backups` is set.
    ///
    /// New contents are staged next to the targets and renamed into place
    /// only once both are written and backed up, so a failure leaves the
    /// existing capture untouched.
    pub fn save(&self, config: &CaptureConfig) -> Result<(), CaptureError> {
        if self.lossy {
            return Err(CaptureError::Lossy {
                path: self.paths.session.clone(),
            });
        }

        let mut content = String::with_capacity(config.header.len() + self.session.total_bytes() + 1);
        content.push_str(&config.header);
        content.push('\n');
        content.push_str(&self.session.content_string());
        content.push_str(&self.trailer);

        let session_tmp = backup_path(&self.paths.session, STAGING_SUFFIX);
        let timing_tmp = backup_path(&self.paths.timing, STAGING_SUFFIX);
        let staged = stage(&session_tmp, &content)
            .and_then(|()| stage(&timing_tmp, &self.session.timing_string()))
            .and_then(|()| {
                if config.keep_backups {
                    back_up(&self.paths.session, &config.backup_suffix)?;
                    back_up(&self.paths.timing, &config.backup_suffix)?;
                }
                Ok(())
            });
        if let Err(e) = staged {
            discard(&[session_tmp.as_path(), timing_tmp.as_path()]);
            return Err(e);
        }

        fs::rename(&session_tmp, &self.paths.session)?;
        fs::rename(&timing_tmp, &self.paths.timing)?;

        info!(path = %self.paths.session.display(), "saved capture");
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, CaptureError> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CaptureError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CaptureError::Io(e),
    })
}

/// Everything after the first newline (empty if there is none).
fn strip_preamble(raw: &[u8]) -> &[u8] {
    match raw.iter().position(|&b| b == b'\n') {
        Some(end) => &raw[end + 1..],
        None => &[],
    }
}

/// Decoded text, and whether invalid bytes had to be replaced.
fn decode(bytes: &[u8], path: &Path) -> (String, bool) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), false),
        Err(e) => {
            warn!(
                path = %path.display(),
                valid_up_to = e.valid_up_to(),
                "invalid UTF-8, decoding lossily"
            );
            (String::from_utf8_lossy(bytes).into_owned(), true)
        }
    }
}

/// Split off a `Script done` line that sits past the timed bytes.
fn split_trailer(text: &str, timed: usize) -> (&str, &str) {
    let Some(tail) = text.get(timed..) else {
        return (text, "");
    };
    if tail.trim_start_matches(['\r', '\n']).starts_with(TRAILER_PREFIX) {
        debug!(bytes = tail.len(), "keeping untimed trailer aside");
        (&text[..timed], tail)
    } else {
        (text, "")
    }
}

fn stage(path: &Path, contents: &str) -> Result<(), CaptureError> {
    fs::write(path, contents)?;
    Ok(())
}

fn discard(paths: &[&Path]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "failed to remove staging file");
            }
        }
    }
}

fn back_up(path: &Path, suffix: &str) -> Result<(), CaptureError> {
    if !path.exists() {
        return Ok(());
    }
    let backup = backup_path(path, suffix);
    fs::copy(path, &backup).map_err(|source| CaptureError::Backup {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(from = %path.display(), to = %backup.display(), "backed up");
    Ok(())
}
