//! Terminal application state.
//!
//! `App` plays the collaborators around the engine: it loads the transcript,
//! owns the software transport through the engine, forwards key actions and
//! hands scroll requests to the lyric panel.

use crossterm::event::{KeyCode, KeyEvent};

use crate::config::Config;
use crate::constants::playback::TRAILING_SECONDS;
use crate::error::Result;
use crate::input::{dispatch, GlobalHandler, InputContext, InputHandler, InputResult, PlaybackHandler};
use crate::services::{FileTranscript, TranscriptSource};
use crate::sync::{SoftwareClock, SyncEngine};
use crate::types::LyricSegment;
use crate::ui::LyricPanel;

/// Main application state.
pub struct App {
    /// Loaded configuration.
    pub config: Config,
    /// Sync engine driving the software clock.
    pub engine: SyncEngine<SoftwareClock>,
    /// Lyric list view state.
    pub lyric_panel: LyricPanel,
    /// Title shown above the lyrics.
    pub title: String,
    /// Whether the help modal is shown.
    pub show_help: bool,
    /// Error shown in a blocking modal.
    pub error_message: Option<String>,
    /// Info shown in a blocking modal.
    pub status_message: Option<String>,
    source: Option<FileTranscript>,
    duration_override: Option<f64>,
    global_handler: GlobalHandler,
    playback_handler: PlaybackHandler,
    should_quit: bool,
}

impl App {
    /// Create an app with no transcript loaded.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engine: SyncEngine::new(),
            lyric_panel: LyricPanel::new(),
            title: "No transcript".to_string(),
            show_help: false,
            error_message: None,
            status_message: None,
            source: None,
            duration_override: None,
            global_handler: GlobalHandler,
            playback_handler: PlaybackHandler,
            should_quit: false,
        }
    }

    /// Use a fixed track length instead of deriving one from the transcript.
    pub fn set_duration_override(&mut self, duration: Option<f64>) {
        self.duration_override = duration;
    }

    /// Load a transcript and make it the active one.
    pub fn load_transcript(&mut self, source: FileTranscript) -> Result<()> {
        let segments = source.load_segments()?;
        let duration = self.duration_override.unwrap_or_else(|| derive_duration(&segments));

        self.title = source.name();
        self.source = Some(source);
        self.engine.set_segments(segments);

        match self.engine.transport_mut() {
            Some(clock) => clock.set_duration(duration),
            None => self.engine.attach_transport(SoftwareClock::with_duration(duration)),
        }
        Ok(())
    }

    /// Re-read the current transcript, keeping the playback position.
    pub fn reload(&mut self) {
        let Some(source) = self.source.clone() else {
            self.status_message = Some("No transcript loaded".to_string());
            return;
        };
        match self.load_transcript(source) {
            Ok(()) => {
                let time = self.engine.current_time();
                self.engine.update_time(time);
                tracing::info!("Reloaded {}", self.title);
            }
            Err(e) => {
                tracing::warn!("Reload failed: {e}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Poll the transport and route scroll requests to the panel.
    pub fn handle_updates(&mut self) {
        self.engine.tick();
        self.engine.flush_scroll(&mut self.lyric_panel);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Modals swallow keys until dismissed
        if self.error_message.is_some() || self.status_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.error_message = None;
                self.status_message = None;
            }
            return;
        }

        let ctx = InputContext {
            show_help: self.show_help,
            seek_step: self.config.seek_step,
        };
        let mut handlers: [&mut dyn InputHandler; 2] = [&mut self.global_handler, &mut self.playback_handler];
        let result = dispatch(&mut handlers, key, &ctx);
        self.apply(result);
    }

    /// Apply a handled input action.
    pub fn apply(&mut self, result: InputResult) {
        match result {
            InputResult::Quit => self.should_quit = true,
            InputResult::ToggleHelp => self.show_help = !self.show_help,
            InputResult::TogglePlayback => self.engine.toggle_play_pause(),
            InputResult::SeekBy(delta) => {
                let target = self.engine.current_time() + delta;
                self.seek_clamped(target);
            }
            InputResult::SeekTo(time) => self.seek_clamped(time),
            InputResult::SeekToEnd => self.seek_clamped(self.engine.duration()),
            InputResult::Reload => self.reload(),
            InputResult::Consumed | InputResult::Ignored => {}
        }
    }

    /// Seek within `[0, duration]`, the range of the seek slider.
    fn seek_clamped(&mut self, time: f64) {
        let duration = self.engine.duration();
        let target = if duration > 0.0 { time.clamp(0.0, duration) } else { time.max(0.0) };
        self.engine.seek(target);
    }

    /// Whether the main loop should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Track length when none was given: last timestamp plus a short tail.
fn derive_duration(segments: &[LyricSegment]) -> f64 {
    segments.iter().map(|s| s.start_time).fold(0.0, f64::max) + TRAILING_SECONDS
}
