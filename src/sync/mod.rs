//! Playback synchronization engine.
//!
//! [`SyncEngine`] holds the parsed segments and the last known playback time,
//! and resolves which segment is active. It is a plain reducer: every time
//! update replaces the active index with a fresh lookup, and nothing here
//! blocks or spawns.

pub mod clock;
pub mod transport;

pub use clock::SoftwareClock;
pub use transport::Transport;

use crate::constants::playback::{PAUSE_LABEL, PLAY_LABEL};
use crate::types::LyricSegment;

/// State owned by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    /// Segments of the loaded transcript, in source order.
    pub segments: Vec<LyricSegment>,
    /// Index of the active segment in `segments`.
    pub active_index: Option<usize>,
    /// Whether the transport was last told to play.
    pub is_playing: bool,
}

/// What a scroll collaborator needs to bring the active line into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Index of the active line, if any.
    pub active_index: Option<usize>,
    /// Number of lines currently displayed.
    pub segment_count: usize,
}

/// Something that scrolls the active line into a centered position.
pub trait ScrollCollaborator {
    /// Bring the requested line into view.
    fn scroll_into_view(&mut self, request: ScrollRequest);
}

/// One transcript line as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView<'a> {
    /// Line text.
    pub text: &'a str,
    /// Whether this line is the active segment.
    pub is_active: bool,
}

/// Read-only snapshot for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncView<'a> {
    /// All lines with their highlight flag.
    pub lines: Vec<LineView<'a>>,
    /// Text of the active line, empty when none.
    pub active_text: &'a str,
    /// Current time as `HH:MM:SS`.
    pub time_label: String,
    /// Current time in seconds.
    pub current_time: f64,
    /// Upper bound of the seek slider.
    pub duration: f64,
    /// Whether playback is running.
    pub is_playing: bool,
    /// Label for the play/pause control.
    pub play_label: &'static str,
}

/// Synchronizes a segment sequence with a playback clock.
#[derive(Debug)]
pub struct SyncEngine<T: Transport = SoftwareClock> {
    state: SyncState,
    current_time: f64,
    transport: Option<T>,
    pending_scroll: Option<ScrollRequest>,
}

impl<T: Transport> Default for SyncEngine<T> {
    fn default() -> Self {
        Self {
            state: SyncState::default(),
            current_time: 0.0,
            transport: None,
            pending_scroll: None,
        }
    }
}

impl SyncEngine {
    /// Create an engine with no segments and no transport.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> SyncEngine<T> {
    /// Create an engine with a transport already loaded.
    pub fn with_transport(transport: T) -> Self {
        let mut engine = Self::default();
        engine.attach_transport(transport);
        engine
    }

    /// Replace the segment sequence wholesale.
    ///
    /// The active segment is cleared until the next time update.
    pub fn set_segments(&mut self, segments: Vec<LyricSegment>) {
        tracing::debug!("Loaded {} segments", segments.len());
        self.state.segments = segments;
        self.state.active_index = None;
        self.request_scroll();
    }

    /// Record a new playback time and recompute the active segment.
    ///
    /// Returns true when the active segment changed.
    pub fn update_time(&mut self, time: f64) -> bool {
        self.current_time = time;
        let active = active_index_at(&self.state.segments, time);
        if active == self.state.active_index {
            return false;
        }
        self.state.active_index = active;
        self.request_scroll();
        true
    }

    /// Jump to `time`.
    ///
    /// The engine's time moves immediately, before the transport reports the
    /// new position. Does nothing when no audio is loaded.
    pub fn seek(&mut self, time: f64) -> bool {
        let Some(transport) = self.transport.as_mut() else {
            tracing::debug!("Seek to {time:.2}s ignored: no audio loaded");
            return false;
        };
        transport.seek(time);
        tracing::debug!("Seek to {}", format_time(time));
        self.update_time(time);
        true
    }

    /// Toggle between playing and paused. Does nothing when no audio is loaded.
    ///
    /// Playing a track that already ran to the end starts it again from 0.
    pub fn toggle_play_pause(&mut self) {
        let Some(transport) = self.transport.as_mut() else {
            return;
        };
        let restart = !self.state.is_playing && transport.is_finished();
        if self.state.is_playing {
            transport.pause();
        } else {
            if restart {
                transport.seek(0.0);
            }
            transport.play();
        }
        self.state.is_playing = !self.state.is_playing;
        if restart {
            tracing::debug!("Restarting finished track");
            self.update_time(0.0);
        }
    }

    /// Load audio: install a transport, paused at position 0.
    pub fn attach_transport(&mut self, transport: T) {
        if self.transport.is_some() {
            tracing::info!("Replacing loaded transport");
        }
        self.transport = Some(transport);
        self.state.is_playing = false;
        self.update_time(0.0);
    }

    /// Unload audio, returning the transport.
    pub fn detach_transport(&mut self) -> Option<T> {
        self.state.is_playing = false;
        self.transport.take()
    }

    /// Pull the transport's position as a time update.
    ///
    /// A transport that ran to the end is treated as paused.
    pub fn tick(&mut self) -> bool {
        let Some(transport) = self.transport.as_mut() else {
            return false;
        };
        let time = transport.current_time();
        if self.state.is_playing && transport.is_finished() {
            transport.pause();
            self.state.is_playing = false;
            tracing::info!("Playback finished at {}", format_time(time));
        }
        self.update_time(time)
    }

    /// Deliver the pending scroll request, if any. Returns true if one was sent.
    pub fn flush_scroll(&mut self, target: &mut impl ScrollCollaborator) -> bool {
        self.take_scroll_request().is_some_and(|request| {
            target.scroll_into_view(request);
            true
        })
    }

    /// Take the pending scroll request without delivering it.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    fn request_scroll(&mut self) {
        self.pending_scroll = Some(ScrollRequest {
            active_index: self.state.active_index,
            segment_count: self.state.segments.len(),
        });
    }

    /// Loaded segments.
    pub fn segments(&self) -> &[LyricSegment] {
        &self.state.segments
    }

    /// The active segment, if any.
    pub fn active_segment(&self) -> Option<&LyricSegment> {
        self.state.active_index.and_then(|idx| self.state.segments.get(idx))
    }

    /// Index of the active segment, if any.
    pub const fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    /// Text of the active segment, empty when none is active.
    pub fn active_text(&self) -> &str {
        self.active_segment().map_or("", |seg| seg.text.as_str())
    }

    /// Last recorded playback time in seconds.
    pub const fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Whether playback is running.
    pub const fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Whether a transport is loaded.
    pub const fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// The loaded transport.
    pub const fn transport(&self) -> Option<&T> {
        self.transport.as_ref()
    }

    /// The loaded transport, mutably.
    pub fn transport_mut(&mut self) -> Option<&mut T> {
        self.transport.as_mut()
    }

    /// Seek slider upper bound: track length, or 0 while unknown.
    pub fn duration(&self) -> f64 {
        self.transport.as_ref().and_then(|t| t.duration()).unwrap_or(0.0)
    }

    /// Engine state.
    pub const fn state(&self) -> &SyncState {
        &self.state
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> SyncView<'_> {
        let lines = self
            .state
            .segments
            .iter()
            .enumerate()
            .map(|(idx, seg)| LineView {
                text: &seg.text,
                is_active: Some(idx) == self.state.active_index,
            })
            .collect();

        SyncView {
            lines,
            active_text: self.active_text(),
            time_label: format_time(self.current_time),
            current_time: self.current_time,
            duration: self.duration(),
            is_playing: self.state.is_playing,
            play_label: if self.state.is_playing { PAUSE_LABEL } else { PLAY_LABEL },
        }
    }
}

/// Find the first segment active at `time`.
///
/// Segments are half-open `[start, end)`. The last segment is open-ended when
/// its end does not lie after its start, which is how the parser marks a line
/// with no timestamped successor.
pub fn active_index_at(segments: &[LyricSegment], time: f64) -> Option<usize> {
    let last = segments.len().checked_sub(1);
    segments.iter().enumerate().position(|(idx, seg)| {
        seg.contains(time)
            || (Some(idx) == last && seg.end_time <= seg.start_time && time >= seg.start_time)
    })
}

/// Render seconds as zero-padded `HH:MM:SS`, dropping the fraction.
///
/// Negative and non-finite values render as `00:00:00`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
