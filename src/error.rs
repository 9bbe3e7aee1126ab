//! Application error types.
//!
//! The parser and sync engine never fail; these errors come from the edges:
//! reading transcripts, loading configuration and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Transcript could not be located or read
    #[error("Transcript error for {path:?}: {message}")]
    Transcript {
        /// Transcript path as requested by the user.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a transcript error for the given path
    pub fn transcript(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Transcript { path: path.into(), message: message.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("LYRICSYNC_SEEK_STEP is not a number", "Use seconds, e.g. 5 or 2.5");
        let msg = err.to_string();
        assert!(msg.contains("LYRICSYNC_SEEK_STEP"));
        assert!(msg.contains("e.g. 5"));
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match Error::io(source, PathBuf::from("song.lrc")) {
            Error::Io { path: Some(p), .. } => assert_eq!(p, PathBuf::from("song.lrc")),
            _ => panic!("Expected Io error with path"),
        }
    }
}
