//! Timestamped lyric (LRC-style) parser.
//!
//! Each line may carry a `[mm:ss.cc]` marker followed by text. Lines without
//! a marker are skipped silently; parsing never fails.

// Allow unwrap for the compile-time constant regex in the lazy_static block
#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::lyrics::{CENTISECONDS_PER_SECOND, FALLBACK_END_TIME};
use crate::types::LyricSegment;

lazy_static! {
    /// `[mm:ss.cc]text`, first marker anywhere on the line. The separator
    /// before the centiseconds accepts any character.
    static ref TIMESTAMP_RE: Regex =
        Regex::new(r"\[([0-9]{2}):([0-9]{2}).([0-9]{2})\](.*)").unwrap();
}

/// Stateless parser for timestamped transcripts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LyricParser;

impl LyricParser {
    /// Create a new parser.
    pub const fn new() -> Self {
        Self
    }

    /// Parse raw transcript content into ordered segments.
    pub fn parse(&self, content: &str) -> Vec<LyricSegment> {
        parse_lyrics(content)
    }
}

/// A line that carried a timestamp marker.
struct TimedLine<'a> {
    start_time: f64,
    text: &'a str,
}

/// Parse raw transcript content into ordered segments.
///
/// A segment ends where the next timestamped line starts; the last one gets
/// [`FALLBACK_END_TIME`].
pub fn parse_lyrics(content: &str) -> Vec<LyricSegment> {
    let lines: Vec<Option<TimedLine<'_>>> = content.split('\n').map(parse_line).collect();
    let total = lines.len();

    let mut segments = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(line) = line else {
            continue;
        };

        let end_time = lines[idx + 1..]
            .iter()
            .flatten()
            .next()
            .map_or(FALLBACK_END_TIME, |next| next.start_time);

        segments.push(LyricSegment::new(line.start_time, end_time, line.text.trim()));
    }

    tracing::debug!("Parsed {} segments from {total} lines ({} skipped)", segments.len(), total - segments.len());
    segments
}

/// Extract the start time and trailing text from one raw line.
fn parse_line(line: &str) -> Option<TimedLine<'_>> {
    let caps = TIMESTAMP_RE.captures(line)?;
    let minutes: u32 = caps.get(1)?.as_str().parse().ok()?;
    let seconds: u32 = caps.get(2)?.as_str().parse().ok()?;
    let centis: u32 = caps.get(3)?.as_str().parse().ok()?;

    Some(TimedLine {
        start_time: timestamp_to_seconds(minutes, seconds, centis),
        text: caps.get(4).map_or("", |m| m.as_str()),
    })
}

/// `minutes*60 + seconds + centis/100`.
pub fn timestamp_to_seconds(minutes: u32, seconds: u32, centis: u32) -> f64 {
    f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(centis) / CENTISECONDS_PER_SECOND
}
