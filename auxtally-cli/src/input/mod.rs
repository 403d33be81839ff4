//! Input handling module

pub mod transcript;

pub use transcript::{filter_speaker, parse_lines, read_transcript, TranscriptLine};
