//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Transcript parsing constants.
pub mod lyrics {
    /// End time given to a segment when no later line carries a timestamp.
    ///
    /// This is a literal second, not the track duration, so the final line
    /// usually ends at or before its start. Lookup treats such a final line
    /// as open-ended: it stays active from its start onwards.
    pub const FALLBACK_END_TIME: f64 = 1.0;

    /// Divisor turning the fractional timestamp field into seconds.
    pub const CENTISECONDS_PER_SECOND: f64 = 100.0;
}

/// Playback and seek constants.
pub mod playback {
    /// Default coarse seek step in seconds (arrow keys).
    pub const DEFAULT_SEEK_STEP: f64 = 5.0;

    /// Fine seek step in seconds, matching the seek slider resolution.
    pub const FINE_SEEK_STEP: f64 = 0.1;

    /// Seconds appended after the last timestamp when no duration is given.
    pub const TRAILING_SECONDS: f64 = 5.0;

    /// Label shown while the transport is playing.
    pub const PAUSE_LABEL: &str = "Pause";

    /// Label shown while the transport is paused or unloaded.
    pub const PLAY_LABEL: &str = "Play";
}

/// Event loop constants.
pub mod event_loop {
    /// Default terminal poll interval in milliseconds.
    pub const DEFAULT_TICK_MS: u64 = 50;

    /// Sleep between polls when no event arrived, in milliseconds.
    pub const IDLE_SLEEP_MS: u64 = 5;
}

/// UI layout constants.
pub mod ui {
    /// Height of the playback info panel, including borders.
    pub const PLAYBACK_PANEL_HEIGHT: u16 = 5;

    /// Height of the command/status bar, including borders.
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}
