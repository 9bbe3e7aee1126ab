//! Debug tool to dump the segments parsed from a timestamped transcript.
//!
//! Usage:
//!   `cargo run --bin dump_lrc -- <file.lrc>`
//!   `cargo run --bin dump_lrc -- <file.lrc> --json`
//!   `cargo run --bin dump_lrc -- <file.lrc> --at 12.5`

use anyhow::{bail, Context};
use lyricsync::services::{FileTranscript, TranscriptSource};
use lyricsync::{format_time, SyncEngine};
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1).filter(|a| !a.starts_with("--")) else {
        bail!("Usage: {} <file.lrc> [--json] [--at SECS]", args[0]);
    };

    let source = FileTranscript::new(path);
    let segments = source
        .load_segments()
        .with_context(|| format!("Failed to load {path}"))?;

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    println!("{} ({} segments)", source.name(), segments.len());
    for (i, seg) in segments.iter().enumerate() {
        let inverted = if seg.end_time < seg.start_time { "  (end before start)" } else { "" };
        println!(
            "  {:>3}. {} -> {:>8.2}  {}{inverted}",
            i + 1,
            format_time(seg.start_time),
            seg.end_time,
            seg.text,
        );
    }

    if let Some(pos) = args.iter().position(|a| a == "--at") {
        let raw = args.get(pos + 1).context("--at needs a time in seconds")?;
        let time: f64 = raw.parse().with_context(|| format!("Invalid time {raw:?}"))?;

        let mut engine = SyncEngine::new();
        engine.set_segments(segments);
        engine.update_time(time);
        match engine.active_segment() {
            Some(seg) => println!("\nActive at {time}s: {:?}", seg.text),
            None => println!("\nActive at {time}s: (none)"),
        }
    }

    Ok(())
}
