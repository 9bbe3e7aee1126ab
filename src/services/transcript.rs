//! Transcript sources.
//!
//! Supplies raw timestamped text to the parser. Where the text comes from is
//! not the engine's concern; this module only covers local files.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lyrics::parse_lyrics;
use crate::types::LyricSegment;

/// Trait for anything that can produce transcript text.
pub trait TranscriptSource {
    /// Read the raw transcript content.
    fn read(&self) -> Result<String>;

    /// Human-readable name (for titles and logging).
    fn name(&self) -> String;

    /// Read and parse into segments.
    fn load_segments(&self) -> Result<Vec<LyricSegment>> {
        let content = self.read()?;
        let segments = parse_lyrics(&content);
        tracing::info!("Loaded {} segments from {}", segments.len(), self.name());
        Ok(segments)
    }
}

/// Transcript backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileTranscript {
    path: PathBuf,
}

impl FileTranscript {
    /// Create a source for an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve a user-supplied name.
    ///
    /// Existing paths are used as given. Otherwise the name is looked up in
    /// `lyrics_dir`, also trying an `.lrc` extension.
    pub fn resolve(name: &str, lyrics_dir: Option<&Path>) -> Result<Self> {
        let expanded = PathBuf::from(shellexpand::tilde(name).to_string());
        if expanded.is_file() {
            return Ok(Self::new(expanded));
        }

        if let Some(dir) = lyrics_dir.filter(|_| expanded.is_relative()) {
            let candidates = [dir.join(&expanded), dir.join(&expanded).with_extension("lrc")];
            if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
                tracing::debug!("Resolved {name} to {}", found.display());
                return Ok(Self::new(found));
            }
        }

        Err(Error::transcript(expanded, "file not found"))
    }

    /// Path of the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptSource for FileTranscript {
    fn read(&self) -> Result<String> {
        let bytes = fs_err::read(&self.path)?;
        // Transcripts are text; tolerate stray invalid bytes rather than failing
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn name(&self) -> String {
        self.path
            .file_stem()
            .map_or_else(|| self.path.display().to_string(), |s| s.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::Write;

    #[test]
    fn reads_and_parses_file() {
        let mut file = tempfile::Builder::new().suffix(".lrc").tempfile().unwrap();
        write!(file, "[00:01.00]Hello\n[00:05.00]World\n").unwrap();

        let source = FileTranscript::new(file.path());
        let segments = source.load_segments().unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text, "World");
    }

    #[test]
    fn resolves_bare_name_in_lyrics_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("song.lrc"), "[00:01.00]x").unwrap();

        let source = FileTranscript::resolve("song", Some(dir.path())).unwrap();
        assert_eq!(source.path(), dir.path().join("song.lrc"));
        assert_eq!(source.name(), "song");
    }

    #[test]
    fn missing_file_is_transcript_error() {
        let err = FileTranscript::resolve("no_such_song_lyricsync_test", None).unwrap_err();
        assert!(matches!(err, Error::Transcript { .. }));
    }

    #[test]
    fn invalid_utf8_is_tolerated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[00:01.00]caf\xe9\n").unwrap();

        let segments = FileTranscript::new(file.path()).load_segments().unwrap();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].text.starts_with("caf"));
    }
}
