//! Timing track: the pacing half of a capture.
//!
//! `script --timing` writes one `<delay> <bytes>` line per chunk it copied
//! to the output file. The track keeps those lines as run-length entries
//! over the content's byte stream.
//!
//! A track is never empty. Tracks read from timing files start with a
//! synthetic `(0.0, 0)` entry that is dropped again when writing.

use std::fmt::Write as _;

/// One recorded write: wait `duration` seconds, then `length` bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingEntry {
    pub duration: f64,
    pub length: usize,
}

impl TimingEntry {
    pub fn new(duration: f64, length: usize) -> Self {
        Self { duration, length }
    }

    const ZERO: TimingEntry = TimingEntry {
        duration: 0.0,
        length: 0,
    };
}

/// Where a byte offset falls on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingLocation {
    /// Entry whose half-open byte interval contains the offset
    pub index: usize,
    /// Byte offset at which that entry starts
    pub base: usize,
    /// Cumulative duration through that entry
    pub elapsed: f64,
}

/// Errors reading timing text.
#[derive(Debug, thiserror::Error)]
pub enum TimingError {
    #[error("Malformed timing entry on line {line}: {text:?}")]
    Malformed { line: usize, text: String },

    #[error("Invalid duration on line {line}: {duration}")]
    InvalidDuration { line: usize, duration: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimingTrack {
    entries: Vec<TimingEntry>,
    synthetic_head: bool,
}

impl Default for TimingTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingTrack {
    /// A track holding only the synthetic leading entry.
    pub fn new() -> Self {
        Self {
            entries: vec![TimingEntry::ZERO],
            synthetic_head: true,
        }
    }

    /// Use `entries` as they are (no synthetic head).
    ///
    /// An empty list degenerates to a single zero entry.
    pub fn from_entries(entries: Vec<TimingEntry>) -> Self {
        if entries.is_empty() {
            return Self::new();
        }
        Self {
            entries,
            synthetic_head: false,
        }
    }

    /// Parse timing text, one `<duration> <byte-length>` pair per line.
    ///
    /// Blank lines are skipped. The synthetic `(0.0, 0)` entry is prepended.
    pub fn parse(text: &str) -> Result<Self, TimingError> {
        let mut track = Self::new();
        for (number, line) in text.lines().enumerate() {
            let line_no = number + 1;
            if line.trim().is_empty() {
                continue;
            }
            let entry = parse_line(line, line_no)?;
            track.entries.push(entry);
        }
        Ok(track)
    }

    /// Timing text for every entry except the synthetic head.
    pub fn to_timing_string(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries[self.first_recorded()..] {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{:.6} {}", entry.duration, entry.length);
        }
        out
    }

    pub fn entries(&self) -> &[TimingEntry] {
        &self.entries
    }

    /// Number of entries, synthetic head included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_synthetic_head(&self) -> bool {
        self.synthetic_head
    }

    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.length).sum()
    }

    pub fn total_duration(&self) -> f64 {
        self.entries.iter().map(|e| e.duration).sum()
    }

    /// Find the entry containing byte `offset`.
    ///
    /// Offsets past the end clamp to the last entry, with `base` equal to
    /// the total length and `elapsed` to the total duration.
    pub fn locate(&self, offset: usize) -> TimingLocation {
        let mut elapsed = 0.0;
        let mut base = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            elapsed += entry.duration;
            if base + entry.length > offset {
                return TimingLocation {
                    index,
                    base,
                    elapsed,
                };
            }
            base += entry.length;
        }
        TimingLocation {
            index: self.entries.len() - 1,
            base,
            elapsed,
        }
    }

    /// Start offsets of every non-empty entry, ascending.
    pub fn boundaries(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .scan(0usize, |base, entry| {
                let start = *base;
                *base += entry.length;
                Some((start, entry.length))
            })
            .filter(|&(_, length)| length > 0)
            .map(|(start, _)| start)
    }

    /// Take `count` bytes starting at byte `offset` out of the track.
    ///
    /// An entry the removal starts strictly inside keeps its head and its
    /// duration. Entries wholly covered disappear with their durations. The
    /// entry the removal ends inside is shortened. Returns the number of
    /// bytes that could not be accounted for (zero unless the track was
    /// already shorter than the content).
    pub fn remove_bytes(&mut self, offset: usize, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        if offset >= self.total_bytes() {
            return count;
        }

        let mut remaining = count;
        let location = self.locate(offset);
        let mut index = location.index.max(self.first_recorded());
        let bucket_end = location.base + self.entries[location.index].length;

        if offset > location.base && offset + remaining > bucket_end {
            let head_cut = bucket_end - offset;
            self.entries[location.index].length -= head_cut;
            remaining -= head_cut;
            index = location.index + 1;
        }

        while remaining > 0 && index < self.entries.len() {
            let length = self.entries[index].length;
            if length > remaining {
                self.entries[index].length -= remaining;
                remaining = 0;
            } else {
                remaining -= length;
                self.entries.remove(index);
            }
        }

        if self.entries.is_empty() {
            self.entries.push(TimingEntry::ZERO);
            self.synthetic_head = true;
        }

        tracing::trace!(
            offset,
            count,
            remaining,
            entries = self.entries.len(),
            "removed bytes from timing track"
        );
        remaining
    }

    fn first_recorded(&self) -> usize {
        usize::from(self.synthetic_head)
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<TimingEntry, TimingError> {
    let malformed = || TimingError::Malformed {
        line: line_no,
        text: line.to_string(),
    };

    let mut fields = line.split_whitespace();
    let (Some(duration), Some(length), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };
    let duration: f64 = duration.parse().map_err(|_| malformed())?;
    let length: usize = length.parse().map_err(|_| malformed())?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(TimingError::InvalidDuration {
            line: line_no,
            duration,
        });
    }

    Ok(TimingEntry::new(duration, length))
}
