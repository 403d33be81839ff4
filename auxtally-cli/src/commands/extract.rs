//! Extract command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use auxtally_core::AuxExtractor;

use crate::input::{filter_speaker, parse_lines, read_transcript};
use crate::output::{CsvEmitter, JsonEmitter, OccurrenceRow, RecordEmitter};
use crate::tagger::RuleTagger;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Transcript file (tab-delimited: Line, Spkr, StTime, Content, EnTime)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Speaker ID whose lines are analyzed
    #[arg(short, long, value_name = "ID")]
    pub speaker: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One CSV row per occurrence with a header row
    Csv,
    /// JSON array of occurrence objects
    Json,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Extracting auxiliaries for speaker {}", self.speaker);

        let text = read_transcript(&self.input)?;
        let rows = filter_speaker(parse_lines(&text), &self.speaker);
        log::info!("{} transcript lines for this speaker", rows.len());

        let extractor = AuxExtractor::new(RuleTagger::new());
        let mut records = Vec::new();
        for row in &rows {
            match extractor.extract(&row.content) {
                Ok(tally) => {
                    for occurrence in tally.occurrences() {
                        records.push(OccurrenceRow::new(row, &occurrence));
                    }
                }
                // a failed sentence contributes no rows, never aborts the run
                Err(e) => log::warn!("skipping line {}: {e}", row.line),
            }
        }
        log::info!("{} occurrences found", records.len());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut emitter: Box<dyn RecordEmitter> = match self.format {
            OutputFormat::Csv => Box::new(CsvEmitter::new(writer)),
            OutputFormat::Json => Box::new(JsonEmitter::new(writer)),
        };
        for record in &records {
            emitter.emit(record)?;
        }
        emitter.finish()?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
