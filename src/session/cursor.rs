//! Cursor conversions and navigation.
//!
//! Conversions are linear scans over the command sequence; captures are
//! interactively sized so no prefix index is kept.

use super::Session;
use crate::timing::TimingLocation;

impl Session {
    /// Byte offset at which command `position` starts.
    ///
    /// `position == len` gives the total length; anything beyond is `None`.
    pub fn position_to_byte_offset(&self, position: usize) -> Option<usize> {
        if position > self.commands.len() {
            return None;
        }
        Some(crate::ansi::total_len(&self.commands[..position]))
    }

    /// Index of the command whose bytes contain `offset`.
    pub fn byte_offset_to_position(&self, offset: usize) -> Option<usize> {
        let mut end = 0;
        for (index, command) in self.commands.iter().enumerate() {
            end += command.byte_len();
            if end > offset {
                return Some(index);
            }
        }
        None
    }

    /// Timing entry containing byte `offset`, clamped to the last entry.
    pub fn locate_timing(&self, offset: usize) -> TimingLocation {
        self.timings.locate(offset)
    }

    /// Jump to `position`, clamped to the content length.
    ///
    /// Returns whether the cursor moved.
    pub fn seek(&mut self, position: usize) -> bool {
        let before = self.cursor.position;
        self.place_cursor(position);
        self.cursor.position != before
    }

    /// One command forward, staying on the last command.
    pub fn step_forward(&mut self) -> bool {
        let next = self.cursor.position + 1;
        if next >= self.commands.len() {
            return false;
        }
        let offset = self.cursor.offset + self.commands[self.cursor.position].byte_len();
        self.place_cursor_at(next, offset);
        true
    }

    /// One command back.
    pub fn step_back(&mut self) -> bool {
        let Some(previous) = self.cursor.position.checked_sub(1) else {
            return false;
        };
        let offset = self.cursor.offset - self.commands[previous].byte_len();
        self.place_cursor_at(previous, offset);
        true
    }

    /// Move to the start of the next timing bucket.
    ///
    /// A bucket boundary that falls inside a multi-byte command moves the
    /// cursor to that command. Boundaries that would not change the
    /// position are skipped. Returns whether the cursor moved.
    pub fn advance_to_next_timing_boundary(&mut self) -> bool {
        let current = self.cursor.position;
        let offset = self.cursor.offset;
        let total = self.total_bytes();

        let target = self
            .timings
            .boundaries()
            .filter(|&boundary| boundary > offset)
            .take_while(|&boundary| boundary < total)
            .filter_map(|boundary| self.byte_offset_to_position(boundary))
            .find(|&position| position > current);

        match target {
            Some(position) => {
                self.place_cursor(position);
                true
            }
            None => false,
        }
    }

    /// Move to the start of the current bucket, or of the previous one when
    /// already at a start.
    ///
    /// Empty buckets are skipped. Returns whether the cursor moved.
    pub fn retreat_to_previous_timing_boundary(&mut self) -> bool {
        let current = self.cursor.position;
        let offset = self.cursor.offset;

        let target = self
            .timings
            .boundaries()
            .take_while(|&boundary| boundary < offset)
            .last()
            .and_then(|boundary| self.byte_offset_to_position(boundary));

        match target {
            Some(position) if position < current => {
                self.place_cursor(position);
                true
            }
            _ => false,
        }
    }
}
