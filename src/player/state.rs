//! Playback clock
//!
//! Maps wall time to recorded time under a fixed speed multiplier.

use std::time::{Duration, Instant};

use crate::config::clamp_speed;

#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Playback speed multiplier (1.0 = normal)
    speed: f64,
    /// Wall clock time when playback started
    start_time: Instant,
}

impl PlaybackClock {
    /// Start a clock now. `speed` is clamped to the supported range.
    pub fn new(speed: f64) -> Self {
        Self {
            speed: clamp_speed(speed),
            start_time: Instant::now(),
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Recorded seconds played so far.
    pub fn elapsed(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * self.speed
    }

    /// Wall time needed to play `recorded` time at the current speed.
    pub fn to_wall(&self, recorded: Duration) -> Duration {
        recorded.div_f64(self.speed)
    }
}
