//! Session model: commands and timings kept in step.
//!
//! A [`Session`] owns the tokenized content, its timing track, a cursor and
//! the In/Out marks. Content and timing cover the same bytes: the sum of
//! timing entry lengths equals the serialized length of the commands, and
//! every edit keeps it that way.
//!
//! # Module Structure
//!
//! - [`cursor`] - position/offset/time conversions and navigation
//! - [`edit`] - region deletion
//! - [`marks`] - In/Out selection

mod cursor;
mod edit;
mod marks;

pub use marks::MarkRange;

use crate::ansi::{self, Command};
use crate::timing::{TimingError, TimingTrack};

/// Where the editor stands in a session.
///
/// `offset` is always the serialized length of the commands before
/// `position`; `time` is the recorded time at which the byte at `offset`
/// was written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Index into the command sequence (`0..=len`)
    pub position: usize,
    /// Byte offset into the serialized content
    pub offset: usize,
    /// Cumulative recorded duration through the timing entry at `offset`
    pub time: f64,
}

/// One open capture.
#[derive(Debug, Clone)]
pub struct Session {
    commands: Vec<Command>,
    timings: TimingTrack,
    cursor: Cursor,
    marks: MarkRange,
}

impl Session {
    /// Build a session with the cursor on the first command.
    pub fn new(commands: Vec<Command>, timings: TimingTrack) -> Self {
        let mut session = Self {
            commands,
            timings,
            cursor: Cursor {
                position: 0,
                offset: 0,
                time: 0.0,
            },
            marks: MarkRange::default(),
        };
        session.place_cursor(0);
        session
    }

    /// Tokenize `content` and parse `timing` text.
    pub fn from_text(content: &str, timing: &str) -> Result<Self, TimingError> {
        let timings = TimingTrack::parse(timing)?;
        Ok(Self::new(ansi::tokenize(content), timings))
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn timings(&self) -> &TimingTrack {
        &self.timings
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn marks(&self) -> MarkRange {
        self.marks
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialized length of the whole content.
    pub fn total_bytes(&self) -> usize {
        ansi::total_len(&self.commands)
    }

    pub fn total_duration(&self) -> f64 {
        self.timings.total_duration()
    }

    /// Whether the timing track covers exactly the content bytes.
    pub fn is_consistent(&self) -> bool {
        self.timings.total_bytes() == self.total_bytes()
    }

    /// Command under the cursor, `None` at the end of content.
    pub fn current_command(&self) -> Option<&Command> {
        self.commands.get(self.cursor.position)
    }

    /// Serialized content, ready to be written after a header line.
    pub fn content_string(&self) -> String {
        ansi::serialize(&self.commands)
    }

    /// Serialized timing, synthetic head omitted.
    pub fn timing_string(&self) -> String {
        self.timings.to_timing_string()
    }

    /// Move the cursor to `position` (clamped to the content length).
    fn place_cursor(&mut self, position: usize) {
        let position = position.min(self.commands.len());
        let offset = ansi::total_len(&self.commands[..position]);
        self.place_cursor_at(position, offset);
    }

    /// Move the cursor when the caller already knows the byte offset.
    pub(crate) fn place_cursor_at(&mut self, position: usize, offset: usize) {
        debug_assert_eq!(
            self.position_to_byte_offset(position),
            Some(offset),
            "cursor offset out of step with position"
        );
        self.cursor = Cursor {
            position,
            offset,
            time: self.timings.locate(offset).elapsed,
        };
    }
}
