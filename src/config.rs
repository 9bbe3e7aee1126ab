//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{event_loop, playback};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory used to resolve bare transcript names
    pub lyrics_path: Option<PathBuf>,
    /// Coarse seek step in seconds
    pub seek_step: f64,
    /// Terminal poll interval in milliseconds
    pub tick_ms: u64,
    /// Log file; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            lyrics_path: None,
            seek_step: playback::DEFAULT_SEEK_STEP,
            tick_ms: event_loop::DEFAULT_TICK_MS,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Lyrics directory: env var override, or default ~/Music/Lyrics/
        config.lyrics_path = lookup("LYRICSYNC_LYRICS_PATH").map_or_else(
            || {
                dirs::home_dir()
                    .map(|h| h.join("Music/Lyrics"))
                    .filter(|p| p.is_dir())
            },
            |path| Some(PathBuf::from(shellexpand::tilde(&path).to_string())),
        );

        if let Some(step) = lookup("LYRICSYNC_SEEK_STEP") {
            config.seek_step = step
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0)
                .ok_or_else(|| {
                    Error::config(
                        format!("LYRICSYNC_SEEK_STEP must be a positive number, got {step:?}"),
                        "Use seconds, e.g. 5 or 2.5",
                    )
                })?;
        }

        if let Some(tick) = lookup("LYRICSYNC_TICK_MS") {
            config.tick_ms = tick
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|t| *t > 0)
                .ok_or_else(|| {
                    Error::config(
                        format!("LYRICSYNC_TICK_MS must be a positive integer, got {tick:?}"),
                        "Use milliseconds, e.g. 50",
                    )
                })?;
        }

        config.log_file = lookup("LYRICSYNC_LOG")
            .filter(|p| !p.is_empty())
            .map(|p| PathBuf::from(shellexpand::tilde(&p).to_string()));

        Ok(config)
    }

    /// Check if a lyrics directory is configured
    pub const fn has_lyrics_path(&self) -> bool {
        self.lyrics_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.seek_step, playback::DEFAULT_SEEK_STEP);
        assert_eq!(config.tick_ms, event_loop::DEFAULT_TICK_MS);
        assert!(config.log_file.is_none());
        assert_eq!(config.app_name(), "lyricsync");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LYRICSYNC_LYRICS_PATH", "/srv/lyrics"),
            ("LYRICSYNC_SEEK_STEP", "2.5"),
            ("LYRICSYNC_TICK_MS", "20"),
            ("LYRICSYNC_LOG", "/tmp/lyricsync.log"),
        ]))
        .unwrap();
        assert_eq!(config.lyrics_path, Some(PathBuf::from("/srv/lyrics")));
        assert!(config.has_lyrics_path());
        assert_eq!(config.seek_step, 2.5);
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/lyricsync.log")));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = Config::from_lookup(lookup_from(&[("LYRICSYNC_SEEK_STEP", "fast")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = Config::from_lookup(lookup_from(&[("LYRICSYNC_TICK_MS", "0")])).unwrap_err();
        assert!(err.to_string().contains("LYRICSYNC_TICK_MS"));
    }
}
