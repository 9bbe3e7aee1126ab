//! Service modules for the collaborators around the sync engine.
//!
//! The engine only consumes text and a clock; these services supply them.

pub mod transcript;

pub use transcript::{FileTranscript, TranscriptSource};
