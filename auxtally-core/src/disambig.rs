//! Disambiguation of contracted `'s` between the BE and HAVE families
//!
//! A word-final `'s` can contract either "is" or "has". The only local
//! evidence used is the part of speech and tense of the token that follows
//! the construction: a past-tense lexical verb means a perfect ("she's
//! gone" = "she has gone"), anything else means a copula ("she's happy" =
//! "she is happy").
//!
//! Known limitation: possessive `'s` ("Miranda's book") is not recognized
//! and resolves to BE whenever no past-tense verb follows. This is a
//! deliberate, documented precision trade-off carried over from the
//! reference tallies; do not special-case it away in one call site only.

use crate::token::{PartOfSpeech, Tense, Token};

/// Family an ambiguous `'s` resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SResolution {
    /// Contracted "is"
    Be,
    /// Contracted "has"
    Have,
}

/// Resolve an ambiguous `'s` (or `'s not`) from the token following the
/// construction
///
/// `next` is the token at *i + 1* for a positive `'s` at index *i*, and
/// the token after "not" for a `'s not` sequence. Both call sites must use
/// this same function so the two contexts can never drift apart.
///
/// No following token (construction is sentence-final) defaults to BE.
pub fn resolve_contracted_s(next: Option<&Token>) -> SResolution {
    match next {
        Some(token) if token.pos == PartOfSpeech::Verb && token.tense == Some(Tense::Past) => {
            SResolution::Have
        }
        _ => SResolution::Be,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_verb_resolves_to_have() {
        let gone = Token::with_tense("gone", PartOfSpeech::Verb, Tense::Past);
        assert_eq!(resolve_contracted_s(Some(&gone)), SResolution::Have);
    }

    #[test]
    fn test_adjective_resolves_to_be() {
        let happy = Token::new("happy", PartOfSpeech::Adj);
        assert_eq!(resolve_contracted_s(Some(&happy)), SResolution::Be);
    }

    #[test]
    fn test_present_verb_resolves_to_be() {
        let going = Token::with_tense("going", PartOfSpeech::Verb, Tense::Pres);
        assert_eq!(resolve_contracted_s(Some(&going)), SResolution::Be);
    }

    #[test]
    fn test_past_auxiliary_resolves_to_be() {
        // "she's been there": spaCy-style tagging calls "been" AUX, not
        // VERB, so the reference tool resolves it to BE.
        let been = Token::with_tense("been", PartOfSpeech::Aux, Tense::Past);
        assert_eq!(resolve_contracted_s(Some(&been)), SResolution::Be);
    }

    #[test]
    fn test_verb_without_tense_resolves_to_be() {
        let go = Token::new("go", PartOfSpeech::Verb);
        assert_eq!(resolve_contracted_s(Some(&go)), SResolution::Be);
    }

    #[test]
    fn test_sentence_final_defaults_to_be() {
        assert_eq!(resolve_contracted_s(None), SResolution::Be);
    }
}
