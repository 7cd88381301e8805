//! Frame scheduling against the timing track.
//!
//! The scheduler keeps a target byte offset: every timing entry whose turn
//! has come adds its length to the target, and the session cursor is
//! drained up to it. Output therefore follows the recorded byte counts
//! exactly and never drifts from the track.

use std::time::Duration;

use super::state::PlaybackClock;
use crate::config::PlaybackConfig;
use crate::session::Session;

/// Output for one scheduling step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Serialized commands due by now (may be empty)
    pub chunk: String,
    /// Recorded time to wait before the next step
    pub sleep: Duration,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Next timing entry to fold in
    index: usize,
    /// Byte offset playback should have reached
    target: usize,
    /// Recorded seconds folded in since start
    played: f64,
    max_sleep: Duration,
    clock: PlaybackClock,
}

impl Scheduler {
    /// Start playing from the session cursor.
    ///
    /// Bytes of the cursor's timing entry that lie before the cursor are
    /// skipped, not replayed.
    pub fn start(session: &Session, config: &PlaybackConfig) -> Self {
        let location = session.locate_timing(session.cursor().offset);
        tracing::debug!(
            position = session.cursor().position,
            entry = location.index,
            "playback started"
        );
        Self {
            index: location.index,
            target: location.base,
            played: 0.0,
            max_sleep: config.max_sleep(),
            clock: PlaybackClock::new(config.speed()),
        }
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Step using the wall clock.
    pub fn step(&mut self, session: &mut Session) -> Option<Frame> {
        let elapsed = Duration::from_secs_f64(self.clock.elapsed().max(0.0));
        self.step_at(session, elapsed)
    }

    /// Step as if `elapsed` recorded time had passed since start.
    ///
    /// Returns `None` once every entry has been folded in and nothing is
    /// left to write.
    pub fn step_at(&mut self, session: &mut Session, elapsed: Duration) -> Option<Frame> {
        let elapsed = elapsed.as_secs_f64();
        let entries = session.timings().entries();

        let mut last_folded = None;
        while self.played < elapsed && self.index < entries.len() {
            let entry = entries[self.index];
            self.target += entry.length;
            self.played += entry.duration;
            last_folded = Some(entry.duration);
            self.index += 1;
        }
        let exhausted = self.index >= entries.len();

        let chunk = drain_to(session, self.target);
        if chunk.is_empty() && exhausted {
            return None;
        }

        let due = last_folded.unwrap_or(self.played - elapsed);
        let sleep = Duration::from_secs_f64(due.clamp(0.0, self.max_sleep.as_secs_f64()));
        Some(Frame { chunk, sleep })
    }
}

/// Append commands from the cursor until the cursor reaches `target`.
fn drain_to(session: &mut Session, target: usize) -> String {
    let cursor = session.cursor();
    let mut position = cursor.position;
    let mut offset = cursor.offset;
    let mut chunk = String::new();

    for command in &session.commands()[position..] {
        if offset >= target {
            break;
        }
        command.write_to(&mut chunk);
        offset += command.byte_len();
        position += 1;
    }

    if position != cursor.position {
        session.place_cursor_at(position, offset);
    }
    chunk
}
