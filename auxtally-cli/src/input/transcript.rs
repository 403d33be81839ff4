//! Transcript reading, field parsing, and speaker filtering
//!
//! The expected format is one utterance per line with five tab-delimited
//! fields: `Line, Spkr, StTime, Content, EnTime`. Only `Content` is
//! analyzed; the other fields pass through to the output rows unchanged.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// One parsed transcript row
///
/// All fields are kept as opaque strings: the tool never interprets line
/// numbers or timestamps, it only carries them into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Line number field as written in the transcript
    pub line: String,
    /// Speaker identifier
    pub speaker: String,
    /// Utterance start time
    pub start_time: String,
    /// The utterance text (what the classifier analyzes)
    pub content: String,
    /// Utterance end time
    pub end_time: String,
}

/// Read a transcript file as UTF-8 text
pub fn read_transcript(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Parse transcript text into rows, skipping anything malformed
///
/// A well-formed row has exactly five tab-delimited fields. Empty lines
/// are ignored silently; lines with the wrong field count are logged and
/// skipped so one bad line never aborts the batch. A header row, if
/// present, survives parsing but is removed by the speaker filter.
pub fn parse_lines(text: &str) -> Vec<TranscriptLine> {
    let mut rows = Vec::new();
    for raw in text.lines() {
        if raw.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = raw.split('\t').collect();
        if fields.len() != 5 {
            log::warn!(
                "{}",
                CliError::MalformedLine(format!("{} fields: {raw}", fields.len()))
            );
            continue;
        }
        rows.push(TranscriptLine {
            line: fields[0].trim().to_string(),
            speaker: fields[1].trim().to_string(),
            start_time: fields[2].trim().to_string(),
            content: fields[3].trim().to_string(),
            end_time: fields[4].trim().to_string(),
        });
    }
    rows
}

impl TranscriptLine {
    /// True when this row belongs to the given speaker (exact match)
    pub fn is_speaker(&self, speaker: &str) -> bool {
        self.speaker == speaker
    }
}

/// Keep only the rows attributed to one speaker
pub fn filter_speaker(rows: Vec<TranscriptLine>, speaker: &str) -> Vec<TranscriptLine> {
    rows.into_iter().filter(|r| r.is_speaker(speaker)).collect()
}
