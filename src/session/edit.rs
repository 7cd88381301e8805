//! Region deletion.
//!
//! Removing commands also removes their bytes from the timing track, so the
//! session stays consistent after every edit.

use tracing::{debug, error};

use super::Session;
use crate::ansi;

impl Session {
    /// Delete commands `from..to`.
    ///
    /// Returns the number of content bytes removed, or `None` when the range
    /// is inverted or reaches past the end. The cursor and marks follow the
    /// commands that remain.
    pub fn delete_region(&mut self, from: usize, to: usize) -> Option<usize> {
        if from > to || to > self.commands.len() {
            debug!(from, to, len = self.commands.len(), "delete range out of bounds");
            return None;
        }
        if from == to {
            return Some(0);
        }

        let from_offset = self.position_to_byte_offset(from)?;
        let bytes = ansi::total_len(&self.commands[from..to]);

        let unaccounted = self.timings.remove_bytes(from_offset, bytes);
        if unaccounted > 0 {
            error!(
                from,
                to,
                bytes,
                unaccounted,
                "timing track shorter than deleted content"
            );
        }

        self.commands.drain(from..to);

        let removed = to - from;
        let position = match self.cursor.position {
            p if p >= to => p - removed,
            p => p.min(from),
        };
        self.marks.shift_after_delete(from, to);
        self.place_cursor(position);

        debug!(from, to, bytes, "deleted region");
        Some(bytes)
    }

    /// Delete the marked selection, or the command under the cursor when no
    /// In mark is set.
    ///
    /// With a selection the cursor lands on its start and the marks are
    /// cleared.
    pub fn delete_selection(&mut self) -> Option<usize> {
        match self.marks.range(self.commands.len()) {
            Some(range) => {
                let removed = self.delete_region(range.start, range.end);
                self.marks.clear();
                self.place_cursor(range.start);
                removed
            }
            None => {
                let position = self.cursor.position;
                if position >= self.commands.len() {
                    return None;
                }
                self.delete_region(position, position + 1)
            }
        }
    }
}
