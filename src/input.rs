//! Input handling abstractions.
//!
//! Keys are mapped to playback actions here so the mapping can be tested
//! without a terminal. The app applies the resulting [`InputResult`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::playback::FINE_SEEK_STEP;

/// Result of processing an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// The input was consumed and handled.
    Consumed,
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
    /// Show or hide the help modal.
    ToggleHelp,
    /// Toggle play/pause.
    TogglePlayback,
    /// Seek relative to the current time, in seconds.
    SeekBy(f64),
    /// Seek to an absolute time, in seconds.
    SeekTo(f64),
    /// Seek to the end of the track.
    SeekToEnd,
    /// Re-read the transcript from its source.
    Reload,
}

/// Context passed to input handlers.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// Whether help is currently shown.
    pub show_help: bool,
    /// Coarse seek step in seconds.
    pub seek_step: f64,
}

/// Trait for handling keyboard input.
///
/// Implementations of this trait handle input for specific modes
/// or input contexts.
pub trait InputHandler {
    /// Handle a key event.
    ///
    /// # Arguments
    /// * `key` - The key event to handle
    /// * `ctx` - Context about the current application state
    ///
    /// # Returns
    /// The result of handling the input.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for global shortcuts (help, quit).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputResult::Quit;
        }

        match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => InputResult::ToggleHelp,
            // Esc closes help first
            KeyCode::Esc if ctx.show_help => InputResult::ToggleHelp,
            KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for transport controls.
#[derive(Debug, Default)]
pub struct PlaybackHandler;

impl InputHandler for PlaybackHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if ctx.show_help {
            return InputResult::Ignored;
        }

        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            FINE_SEEK_STEP
        } else {
            ctx.seek_step
        };

        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') => InputResult::TogglePlayback,
            KeyCode::Left | KeyCode::Char('h') => InputResult::SeekBy(-step),
            KeyCode::Right | KeyCode::Char('l') => InputResult::SeekBy(step),
            KeyCode::Home | KeyCode::Char('0') => InputResult::SeekTo(0.0),
            KeyCode::End => InputResult::SeekToEnd,
            KeyCode::Char('r') => InputResult::Reload,
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "PlaybackHandler"
    }
}

/// Run handlers in order, returning the first result that is not `Ignored`.
pub fn dispatch(handlers: &mut [&mut dyn InputHandler], key: KeyEvent, ctx: &InputContext) -> InputResult {
    for handler in handlers.iter_mut() {
        let result = handler.handle(key, ctx);
        if result != InputResult::Ignored {
            tracing::debug!("{} handled {:?}", handler.name(), key.code);
            return result;
        }
    }
    InputResult::Ignored
}
