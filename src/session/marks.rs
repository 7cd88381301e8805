//! In/Out selection marks.

use std::ops::Range;

use super::Session;

/// Half-open selection `[mark_in, mark_out)` over command positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkRange {
    pub mark_in: Option<usize>,
    pub mark_out: Option<usize>,
}

impl MarkRange {
    /// Set In; Out follows so the range is never inverted.
    pub fn set_in(&mut self, position: usize) {
        self.mark_in = Some(position);
        if self.mark_out.map_or(true, |out| out < position) {
            self.mark_out = Some(position + 1);
        }
    }

    /// Set Out; an Out before In is pushed to just past In.
    pub fn set_out(&mut self, position: usize) {
        self.mark_out = match self.mark_in {
            Some(mark_in) if position < mark_in => Some(mark_in + 1),
            _ => Some(position),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_set(&self) -> bool {
        self.mark_in.is_some()
    }

    /// Selected positions, clipped to `len`. `None` without an In mark.
    pub fn range(&self, len: usize) -> Option<Range<usize>> {
        let start = self.mark_in?.min(len);
        let end = self.mark_out.unwrap_or(start + 1).clamp(start, len);
        Some(start..end)
    }

    pub fn contains(&self, position: usize) -> bool {
        match (self.mark_in, self.mark_out) {
            (Some(mark_in), Some(mark_out)) => (mark_in..mark_out).contains(&position),
            _ => false,
        }
    }

    /// Follow the commands after `from..to` were removed.
    pub(crate) fn shift_after_delete(&mut self, from: usize, to: usize) {
        let shift = |mark: usize| {
            if mark >= to {
                mark - (to - from)
            } else {
                mark.min(from)
            }
        };
        self.mark_in = self.mark_in.map(shift);
        self.mark_out = self.mark_out.map(shift);
    }
}

impl Session {
    /// Set the In mark at the cursor.
    pub fn mark_in(&mut self) {
        self.marks.set_in(self.cursor.position);
    }

    /// Set the Out mark at the cursor.
    pub fn mark_out(&mut self) {
        self.marks.set_out(self.cursor.position);
    }

    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }
}
