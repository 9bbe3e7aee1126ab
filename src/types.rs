//! Core data model shared by the parser, the sync engine and the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One timed line of a transcript.
///
/// A segment is active for playback times in `[start_time, end_time)`.
/// `end_time` is not guaranteed to be greater than `start_time`: the last
/// line of a transcript gets a fixed fallback end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricSegment {
    /// Inclusive start, in seconds.
    pub start_time: f64,
    /// Exclusive end, in seconds.
    pub end_time: f64,
    /// Trimmed line text, possibly empty.
    pub text: String,
}

impl LyricSegment {
    /// Create a new segment.
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self { start_time, end_time, text: text.into() }
    }

    /// Whether `time` falls inside this segment's half-open interval.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

impl fmt::Display for LyricSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2} - {:.2}] {}", self.start_time, self.end_time, self.text)
    }
}

/// Playback position as reported by a transport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackClock {
    /// Current position in seconds.
    pub current_time: f64,
    /// Track length in seconds, once metadata is known.
    pub duration: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let seg = LyricSegment::new(1.0, 5.0, "Hello");
        assert!(!seg.contains(0.99));
        assert!(seg.contains(1.0));
        assert!(seg.contains(4.99));
        assert!(!seg.contains(5.0));
    }

    #[test]
    fn inverted_interval_never_contains() {
        let seg = LyricSegment::new(5.0, 1.0, "World");
        assert!(!seg.contains(1.0));
        assert!(!seg.contains(3.0));
        assert!(!seg.contains(5.0));
    }

    #[test]
    fn display_shows_bounds_and_text() {
        let seg = LyricSegment::new(1.5, 2.25, "la");
        assert_eq!(seg.to_string(), "[1.50 - 2.25] la");
    }
}
