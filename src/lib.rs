//! `lyricsync` - timestamped lyrics synchronized with a playback clock.
//!
//! The core is the [`lyrics`] parser and the [`sync`] engine. The remaining
//! modules build a small terminal player around them.


// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod constants;
pub mod input;
pub mod services;
pub mod types;
pub mod config;
pub mod error;
pub mod logging;
pub mod lyrics;
pub mod sync;
pub mod ui;

pub use lyrics::{parse_lyrics, LyricParser};
pub use sync::{format_time, SyncEngine};
pub use types::LyricSegment;
