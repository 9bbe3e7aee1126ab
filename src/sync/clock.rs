//! Wall-clock transport.
//!
//! Advances a playback position in real time without touching audio. The
//! terminal front-end drives the engine with it, and tests use it where a
//! real transport would be.

use std::time::Instant;

use super::transport::Transport;

/// Software playback clock.
#[derive(Debug, Clone, Default)]
pub struct SoftwareClock {
    /// Position when the clock last started or stopped.
    anchor: f64,
    /// Set while running.
    started_at: Option<Instant>,
    duration: Option<f64>,
}

impl SoftwareClock {
    /// Create a paused clock at position 0 with unknown duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paused clock with a known track length.
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration.max(0.0)),
            ..Self::default()
        }
    }

    /// Record the track length once it becomes known.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = Some(duration.max(0.0));
        self.anchor = self.clamp(self.anchor);
    }

    /// Whether the clock is currently advancing.
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    fn clamp(&self, time: f64) -> f64 {
        let time = if time.is_finite() { time.max(0.0) } else { 0.0 };
        self.duration.map_or(time, |d| time.min(d))
    }
}

impl Transport for SoftwareClock {
    fn play(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        self.anchor = self.current_time();
        self.started_at = None;
    }

    fn seek(&mut self, time: f64) {
        self.anchor = self.clamp(time);
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    fn current_time(&self) -> f64 {
        let elapsed = self.started_at.map_or(0.0, |start| start.elapsed().as_secs_f64());
        self.clamp(self.anchor + elapsed)
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn is_finished(&self) -> bool {
        self.duration.is_some_and(|d| self.current_time() >= d)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;
    use std::time::Duration;

    #[test]
    fn paused_clock_holds_position() {
        let mut clock = SoftwareClock::with_duration(60.0);
        clock.seek(12.5);
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(clock.current_time(), 12.5);
        assert!(!clock.is_running());
    }

    #[test]
    fn running_clock_advances_and_pause_freezes() {
        let mut clock = SoftwareClock::new();
        clock.play();
        std::thread::sleep(Duration::from_millis(20));
        clock.pause();
        let frozen = clock.current_time();
        assert!(frozen >= 0.02);
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(clock.current_time(), frozen);
    }

    #[test]
    fn seek_is_clamped_to_track() {
        let mut clock = SoftwareClock::with_duration(30.0);
        clock.seek(-4.0);
        assert_eq!(clock.current_time(), 0.0);
        clock.seek(99.0);
        assert_eq!(clock.current_time(), 30.0);
        assert!(clock.is_finished());
    }

    #[test]
    fn unknown_duration_is_unbounded() {
        let mut clock = SoftwareClock::new();
        assert_eq!(clock.duration(), None);
        clock.seek(5000.0);
        assert_eq!(clock.current_time(), 5000.0);
        assert!(!clock.is_finished());

        clock.set_duration(100.0);
        assert_eq!(clock.current_time(), 100.0);
        assert_eq!(clock.clock().duration, Some(100.0));
    }
}
