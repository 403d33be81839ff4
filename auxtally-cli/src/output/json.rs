//! JSON record emitter

use super::{OccurrenceRow, RecordEmitter};
use anyhow::Result;
use std::io::Write;

/// JSON emitter - buffers rows and writes one pretty-printed array
pub struct JsonEmitter<W: Write> {
    writer: W,
    rows: Vec<OccurrenceRow>,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> RecordEmitter for JsonEmitter<W> {
    fn emit(&mut self, row: &OccurrenceRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TranscriptLine;
    use auxtally_core::{AuxCategory, Occurrence, SurfaceForm};

    #[test]
    fn test_rows_serialize_with_reference_column_names() {
        let source = TranscriptLine {
            line: "1".to_string(),
            speaker: "SPK".to_string(),
            start_time: "0.35".to_string(),
            content: "he ain't here".to_string(),
            end_time: "2.10".to_string(),
        };
        let occurrence = Occurrence {
            category: AuxCategory::Aint,
            form: SurfaceForm::Aint,
        };

        let mut emitter = JsonEmitter::new(Vec::new());
        emitter.emit(&OccurrenceRow::new(&source, &occurrence)).unwrap();
        emitter.finish().unwrap();

        let written = String::from_utf8(emitter.writer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0]["Label"], "AI");
        assert_eq!(parsed[0]["Aux"], "ain't");
        assert_eq!(parsed[0]["Spkr"], "SPK");
    }

    #[test]
    fn test_empty_batch_is_an_empty_array() {
        let mut emitter = JsonEmitter::new(Vec::new());
        emitter.finish().unwrap();
        let written = String::from_utf8(emitter.writer).unwrap();
        assert_eq!(written.trim(), "[]");
    }
}
