//! Playback transport contract.
//!
//! The engine never decodes or plays audio itself. Whatever owns the audio
//! implements [`Transport`] and the engine drives it through these calls.

use crate::types::PlaybackClock;

/// Trait for audio playback transports.
///
/// Implementations own the real clock. Constructing one stands in for
/// loading a source; hand it to
/// [`SyncEngine::attach_transport`](crate::sync::SyncEngine::attach_transport)
/// once it is ready.
pub trait Transport {
    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback, keeping the position.
    fn pause(&mut self);

    /// Jump to a position.
    ///
    /// # Arguments
    /// * `time` - Target position in seconds
    fn seek(&mut self, time: f64);

    /// Current playback position in seconds.
    ///
    /// Polled by the engine as its time-update notification.
    fn current_time(&self) -> f64;

    /// Track length in seconds, or `None` before metadata has loaded.
    fn duration(&self) -> Option<f64>;

    /// Whether playback ran to the end of the track.
    fn is_finished(&self) -> bool {
        false
    }

    /// Snapshot of position and duration.
    fn clock(&self) -> PlaybackClock {
        PlaybackClock {
            current_time: self.current_time(),
            duration: self.duration(),
        }
    }
}
