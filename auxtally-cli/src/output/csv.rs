//! CSV record emitter

use super::{OccurrenceRow, RecordEmitter};
use anyhow::Result;
use std::io::{self, Write};

/// CSV emitter - one header row, then one row per occurrence
pub struct CsvEmitter<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvEmitter<W> {
    /// Create a new CSV emitter
    pub fn new(writer: W) -> Self {
        Self {
            writer: ::csv::Writer::from_writer(writer),
        }
    }
}

impl CsvEmitter<io::Stdout> {
    /// Create an emitter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RecordEmitter for CsvEmitter<W> {
    fn emit(&mut self, row: &OccurrenceRow) -> Result<()> {
        // serialize() writes the header automatically before the first row
        self.writer.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
