//! Auxiliary-verb construction classification for transcribed speech
//!
//! Given one sentence at a time, this crate detects every occurrence of
//! the closed BE / HAVE / DO / "ain't" auxiliary vocabulary — positive and
//! negated, contracted and fully expressed — and tallies each occurrence
//! under exactly one `(category, surface form)` slot.
//!
//! Tokenization and part-of-speech tagging are consumed through the
//! [`Tagger`] trait; the crate never tags text itself. Each sentence is
//! analyzed independently with no cross-sentence state, so batches can be
//! processed in any order (the CLI keeps input order for deterministic
//! output).
//!
//! ```
//! use auxtally_core::{extract, AuxCategory, SurfaceForm, Tagger, TagError, Token, PartOfSpeech};
//!
//! struct BareTagger;
//! impl Tagger for BareTagger {
//!     fn tag(&self, sentence: &str) -> Result<Vec<Token>, TagError> {
//!         Ok(sentence
//!             .split_whitespace()
//!             .map(|w| Token::new(w, PartOfSpeech::Other))
//!             .collect())
//!     }
//! }
//!
//! let tally = extract("I do not know", &BareTagger).unwrap();
//! assert_eq!(tally.get(AuxCategory::DoNegative, SurfaceForm::DoNot), 1);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod disambig;
pub mod error;
pub mod forms;
mod matcher;
pub mod token;

pub use aggregate::{extract, AuxExtractor, Occurrence, SentenceTally};
pub use disambig::{resolve_contracted_s, SResolution};
pub use error::{ExtractError, Result};
pub use forms::{slot_index, AuxCategory, SurfaceForm, SLOTS};
pub use token::{PartOfSpeech, TagError, Tagger, Tense, Token};
