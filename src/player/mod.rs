//! Timed replay of a session
//!
//! - `state`: playback clock (speed multiplier, wall to recorded time)
//! - `scheduler`: decides which commands are due and how long to wait
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use scriptcut::config::PlaybackConfig;
//! use scriptcut::player::{play_session, PlaybackResult};
//! use scriptcut::Session;
//!
//! let mut session = Session::from_text("hello", "0.5 5\n").unwrap();
//! let stop = AtomicBool::new(false);
//! let result = play_session(&mut session, &PlaybackConfig::default(), &mut std::io::stdout(), &stop);
//! match result {
//!     Ok(PlaybackResult::Finished) => println!("Finished"),
//!     Ok(PlaybackResult::Interrupted) => println!("Stopped by user"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

mod scheduler;
pub mod state;

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

pub use scheduler::{Frame, Scheduler};
pub use state::PlaybackClock;

use crate::config::PlaybackConfig;
use crate::session::Session;

/// How a playback run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Every due command was written
    Finished,
    /// `stop` was raised before the end
    Interrupted,
}

/// Replay `session` from its cursor to `out` in real time.
///
/// `stop` is checked between frames. The session cursor is left where
/// playback stopped.
pub fn play_session<W: Write>(
    session: &mut Session,
    config: &PlaybackConfig,
    out: &mut W,
    stop: &AtomicBool,
) -> io::Result<PlaybackResult> {
    let mut scheduler = Scheduler::start(session, config);

    loop {
        if stop.load(Ordering::Relaxed) {
            tracing::info!(position = session.cursor().position, "playback interrupted");
            return Ok(PlaybackResult::Interrupted);
        }
        let Some(frame) = scheduler.step(session) else {
            break;
        };
        if !frame.chunk.is_empty() {
            out.write_all(frame.chunk.as_bytes())?;
            out.flush()?;
        }
        if !frame.sleep.is_zero() {
            thread::sleep(scheduler.clock().to_wall(frame.sleep));
        }
    }

    Ok(PlaybackResult::Finished)
}
