//! Lyrics processing.
//!
//! Turns timestamped transcript text into [`LyricSegment`](crate::types::LyricSegment)s
//! for the sync engine.

pub mod parser;

pub use parser::{parse_lyrics, LyricParser};
