//! Token model and the tagger capability seam
//!
//! The core never tokenizes or tags text itself; it consumes an ordered
//! token sequence produced by an external [`Tagger`] implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse part-of-speech tag for a token
///
/// Follows the Universal POS inventory loosely; only the distinctions the
/// classifier actually consults are split out, everything else collapses
/// into [`PartOfSpeech::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// Lexical (main) verb
    Verb,
    /// Auxiliary or modal verb
    Aux,
    /// Noun
    Noun,
    /// Pronoun
    Pron,
    /// Adjective
    Adj,
    /// Adverb
    Adv,
    /// Determiner
    Det,
    /// Adposition (preposition)
    Adp,
    /// Numeral
    Num,
    /// Punctuation
    Punct,
    /// Anything else
    Other,
}

/// Morphological tense feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    /// Past tense or past participle
    Past,
    /// Present tense or present participle
    Pres,
}

/// A single tagged token within a sentence
///
/// Immutable once produced; token indices are stable for the lifetime of
/// one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text exactly as it appears in the sentence
    pub text: String,
    /// Coarse part of speech
    pub pos: PartOfSpeech,
    /// Tense feature, if the tagger assigns one
    pub tense: Option<Tense>,
}

impl Token {
    /// Create a token without a tense feature
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
            tense: None,
        }
    }

    /// Create a token carrying a tense feature
    pub fn with_tense(text: impl Into<String>, pos: PartOfSpeech, tense: Tense) -> Self {
        Self {
            text: text.into(),
            pos,
            tense: Some(tense),
        }
    }

    /// Lowercased surface text, used for all classification comparisons
    pub fn lowered(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Errors a tagger may report for a single sentence
///
/// Tagging failures are recoverable per sentence: callers skip auxiliary
/// extraction for the failing sentence and continue with the next one.
#[derive(Debug, Error)]
pub enum TagError {
    /// The tagger cannot handle this input at all
    #[error("unsupported input: {0}")]
    Unsupported(String),

    /// The tagger failed internally
    #[error("tagger failure: {0}")]
    Internal(String),
}

/// Tokenizer/POS-tagger capability consumed by the classifier
///
/// Implementations must return tokens in sentence order and should keep
/// word-internal apostrophes attached ("she's" stays one token); the
/// classifier inspects token suffixes like `'s` and `'re` directly.
pub trait Tagger {
    /// Tokenize and tag one sentence
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, TagError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, TagError> {
        (**self).tag(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_constructors() {
        let plain = Token::new("happy", PartOfSpeech::Adj);
        assert_eq!(plain.text, "happy");
        assert_eq!(plain.pos, PartOfSpeech::Adj);
        assert_eq!(plain.tense, None);

        let tensed = Token::with_tense("gone", PartOfSpeech::Verb, Tense::Past);
        assert_eq!(tensed.tense, Some(Tense::Past));
    }

    #[test]
    fn test_lowered_preserves_apostrophes() {
        let tok = Token::new("She's", PartOfSpeech::Pron);
        assert_eq!(tok.lowered(), "she's");
    }

    #[test]
    fn test_tag_error_display() {
        let err = TagError::Unsupported("binary input".to_string());
        assert_eq!(err.to_string(), "unsupported input: binary input");

        let err = TagError::Internal("model panic".to_string());
        assert_eq!(err.to_string(), "tagger failure: model panic");
    }
}
