//! auxtally CLI library
//!
//! Command-line interface for tallying auxiliary-verb constructions in
//! single-speaker transcript lines: transcript parsing, speaker filtering,
//! a built-in heuristic tagger, and CSV/JSON record emitters around the
//! `auxtally-core` classifier.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod tagger;

pub use error::{CliError, CliResult};
