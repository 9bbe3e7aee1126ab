//! End-to-end tests: transcript file -> parser -> engine -> renderer view.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

use lyricsync::services::{FileTranscript, TranscriptSource};
use lyricsync::sync::{ScrollCollaborator, ScrollRequest, SoftwareClock, Transport};
use lyricsync::{format_time, parse_lyrics, LyricSegment, SyncEngine};
use std::io::Write;

const SONG: &str = "\
[ti:Example]
[ar:Nobody]
[00:01.00]First line
[00:04.50]Second line

[00:09.25]Third line
";

#[derive(Default)]
struct Recorder(Vec<ScrollRequest>);

impl ScrollCollaborator for Recorder {
    fn scroll_into_view(&mut self, request: ScrollRequest) {
        self.0.push(request);
    }
}

#[test]
fn test_hello_world_scenario() {
    let segments = parse_lyrics("[00:01.00]Hello\n[00:05.00]World");
    assert_eq!(
        segments,
        vec![
            LyricSegment { start_time: 1.0, end_time: 5.0, text: "Hello".to_string() },
            LyricSegment { start_time: 5.0, end_time: 1.0, text: "World".to_string() },
        ]
    );

    let mut engine = SyncEngine::new();
    engine.set_segments(segments);

    engine.update_time(3.0);
    assert_eq!(engine.active_segment().map(|s| s.text.as_str()), Some("Hello"));
    engine.update_time(5.0);
    assert_eq!(engine.active_segment().map(|s| s.text.as_str()), Some("World"));
    engine.update_time(0.5);
    assert!(engine.active_segment().is_none());
}

#[test]
fn test_file_to_view() {
    let mut file = tempfile::Builder::new().suffix(".lrc").tempfile().unwrap();
    file.write_all(SONG.as_bytes()).unwrap();

    let segments = FileTranscript::new(file.path()).load_segments().unwrap();
    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["First line", "Second line", "Third line"]);
    assert_eq!(segments[0].end_time, 4.5);
    assert_eq!(segments[1].end_time, 9.25);
    assert_eq!(segments[2].end_time, 1.0);

    let mut engine = SyncEngine::with_transport(SoftwareClock::with_duration(12.0));
    engine.set_segments(segments);
    engine.seek(6.0);

    let view = engine.view();
    let active: Vec<bool> = view.lines.iter().map(|l| l.is_active).collect();
    assert_eq!(active, vec![false, true, false]);
    assert_eq!(view.time_label, "00:00:06");
    assert_eq!(view.duration, 12.0);
    assert_eq!(view.play_label, "Play");
}

#[test]
fn test_playback_follows_clock() {
    let mut engine = SyncEngine::with_transport(SoftwareClock::with_duration(12.0));
    engine.set_segments(parse_lyrics(SONG));
    let mut recorder = Recorder::default();
    engine.flush_scroll(&mut recorder);

    engine.toggle_play_pause();
    assert!(engine.is_playing());
    assert!(engine.transport().unwrap().is_running());

    // Jump into the first line while running, then let the clock drive
    engine.seek(1.0);
    engine.tick();
    assert_eq!(engine.active_text(), "First line");
    assert!(engine.flush_scroll(&mut recorder));
    assert_eq!(recorder.0.last().unwrap().active_index, Some(0));

    engine.toggle_play_pause();
    let paused_at = engine.transport().unwrap().current_time();
    engine.tick();
    assert_eq!(engine.current_time(), paused_at);
}

#[test]
fn test_contiguous_boundaries_hand_off() {
    let mut engine = SyncEngine::new();
    engine.set_segments(parse_lyrics(SONG));

    engine.update_time(4.49);
    assert_eq!(engine.active_text(), "First line");
    engine.update_time(4.5);
    assert_eq!(engine.active_text(), "Second line");
    engine.update_time(9.25);
    assert_eq!(engine.active_text(), "Third line");
    engine.update_time(0.99);
    assert_eq!(engine.active_text(), "");
}

#[test]
fn test_format_time_examples() {
    assert_eq!(format_time(3661.0), "01:01:01");
    assert_eq!(format_time(0.0), "00:00:00");
    assert_eq!(format_time(61.9), "00:01:01");
}
