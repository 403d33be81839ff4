//! Occurrence record emitters

use anyhow::Result;
use serde::Serialize;

use crate::input::TranscriptLine;
use auxtally_core::Occurrence;

/// One output row: transcript metadata plus the classified occurrence
///
/// Column names match the reference tabular format exactly.
#[derive(Debug, Clone, Serialize)]
pub struct OccurrenceRow {
    /// Transcript line number field (passthrough)
    #[serde(rename = "Line")]
    pub line: String,
    /// Speaker identifier (passthrough)
    #[serde(rename = "Spkr")]
    pub speaker: String,
    /// Utterance start time (passthrough)
    #[serde(rename = "StTime")]
    pub start_time: String,
    /// The utterance text
    #[serde(rename = "Content")]
    pub content: String,
    /// Utterance end time (passthrough)
    #[serde(rename = "EnTime")]
    pub end_time: String,
    /// Auxiliary category label (e.g. `BE_N`)
    #[serde(rename = "Label")]
    pub label: String,
    /// Surface form (e.g. `isn't`)
    #[serde(rename = "Aux")]
    pub aux: String,
}

impl OccurrenceRow {
    /// Build a row from a transcript line and one detected occurrence
    pub fn new(source: &TranscriptLine, occurrence: &Occurrence) -> Self {
        Self {
            line: source.line.clone(),
            speaker: source.speaker.clone(),
            start_time: source.start_time.clone(),
            content: source.content.clone(),
            end_time: source.end_time.clone(),
            label: occurrence.category.label().to_string(),
            aux: occurrence.form.as_str().to_string(),
        }
    }
}

/// Trait for occurrence record emitters
pub trait RecordEmitter {
    /// Write a single occurrence row
    fn emit(&mut self, row: &OccurrenceRow) -> Result<()>;

    /// Finalize output (flush, close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod csv;
pub mod json;

pub use self::csv::CsvEmitter;
pub use self::json::JsonEmitter;
