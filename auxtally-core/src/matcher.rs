//! Surface-form matchers for the auxiliary families
//!
//! Two mechanisms cover the closed vocabulary:
//!
//! - **Boundary regexes** for forms that are unambiguous as raw text
//!   (bare positives like "is"/"have"/"did", fully contracted negatives
//!   like "isn't"/"don't", and "ain't"). Compiled once, first use, into a
//!   single ordered table.
//! - **Token adjacency** for everything that needs context: separate
//!   "not" negations (classified from the token preceding "not") and the
//!   ambiguous contracted `'s` (resolved from the token following the
//!   construction).
//!
//! Matching is case-insensitive and bounded by non-word characters or
//! string edges, so "this" never yields an "is".

use std::sync::LazyLock;

use regex::Regex;

use crate::aggregate::SentenceTally;
use crate::disambig::{resolve_contracted_s, SResolution};
use crate::forms::{AuxCategory, SurfaceForm};
use crate::token::Token;

/// A compiled boundary pattern plus the slot it credits.
struct FormPattern {
    category: AuxCategory,
    form: SurfaceForm,
    re: Regex,
    /// Positive forms skip occurrences directly followed by "not"; those
    /// belong to the negated family and are counted by the token scan.
    exclude_not: bool,
}

/// Matches when the text right after a form is one non-word character and
/// then the letters "not". This reproduces the reference lookahead, which
/// also rejects "is nothing" (the letters alone are checked, not a word).
static NOT_FOLLOWS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\Wnot").unwrap());

/// All regex-matched forms, compiled once. Order is irrelevant here (each
/// pattern is independent); slot order is imposed by the tally.
static FORM_PATTERNS: LazyLock<Vec<FormPattern>> = LazyLock::new(build_form_patterns);

fn build_form_patterns() -> Vec<FormPattern> {
    let specs: &[(AuxCategory, SurfaceForm, bool)] = &[
        (AuxCategory::BePositive, SurfaceForm::Is, true),
        (AuxCategory::BePositive, SurfaceForm::Are, true),
        (AuxCategory::BePositive, SurfaceForm::Am, true),
        (AuxCategory::BePositive, SurfaceForm::AposRe, true),
        (AuxCategory::BePositive, SurfaceForm::AposM, true),
        (AuxCategory::BeNegative, SurfaceForm::Isnt, false),
        (AuxCategory::BeNegative, SurfaceForm::Arent, false),
        (AuxCategory::HavePositive, SurfaceForm::Have, true),
        (AuxCategory::HavePositive, SurfaceForm::Has, true),
        (AuxCategory::HavePositive, SurfaceForm::AposVe, true),
        (AuxCategory::HaveNegative, SurfaceForm::Havent, false),
        (AuxCategory::HaveNegative, SurfaceForm::Hasnt, false),
        (AuxCategory::DoPositive, SurfaceForm::Do, true),
        (AuxCategory::DoPositive, SurfaceForm::Does, true),
        (AuxCategory::DoPositive, SurfaceForm::Did, true),
        (AuxCategory::DoNegative, SurfaceForm::Dont, false),
        (AuxCategory::DoNegative, SurfaceForm::Doesnt, false),
        (AuxCategory::DoNegative, SurfaceForm::Didnt, false),
        (AuxCategory::Aint, SurfaceForm::Aint, false),
    ];

    specs
        .iter()
        .map(|&(category, form, exclude_not)| {
            let literal = form.as_str();
            // Apostrophe-initial contractions attach to the preceding
            // word, so they carry no leading boundary assertion.
            let pattern = if literal.starts_with('\'') {
                format!(r"(?i){literal}\b")
            } else {
                format!(r"(?i)\b{literal}\b")
            };
            FormPattern {
                category,
                form,
                re: Regex::new(&pattern)
                    .unwrap_or_else(|e| panic!("invalid form pattern '{pattern}': {e}")),
                exclude_not,
            }
        })
        .collect()
}

/// Count every regex-matched surface form in `sentence` into the tally.
pub(crate) fn count_regex_forms(sentence: &str, tally: &mut SentenceTally) {
    for pattern in FORM_PATTERNS.iter() {
        for m in pattern.re.find_iter(sentence) {
            if pattern.exclude_not && NOT_FOLLOWS.is_match(&sentence[m.end()..]) {
                continue;
            }
            tally.bump(pattern.category, pattern.form);
        }
    }
}

/// Classify every separate "not" token from its immediate left neighbor.
///
/// A sentence-initial "not" is always the bare BE-negative "not"; a "not"
/// whose neighbor is no recognized auxiliary is too. A neighbor ending in
/// `'s` is resolved against the token *after* "not".
pub(crate) fn scan_negations(tokens: &[Token], tally: &mut SentenceTally) {
    for (idx, token) in tokens.iter().enumerate() {
        if !token.text.eq_ignore_ascii_case("not") {
            continue;
        }
        if idx == 0 {
            tally.bump(AuxCategory::BeNegative, SurfaceForm::BareNot);
            continue;
        }

        let prev = tokens[idx - 1].lowered();
        let (category, form) = match prev.as_str() {
            "is" => (AuxCategory::BeNegative, SurfaceForm::IsNot),
            "are" => (AuxCategory::BeNegative, SurfaceForm::AreNot),
            "am" => (AuxCategory::BeNegative, SurfaceForm::AmNot),
            "have" => (AuxCategory::HaveNegative, SurfaceForm::HaveNot),
            "has" => (AuxCategory::HaveNegative, SurfaceForm::HasNot),
            "do" => (AuxCategory::DoNegative, SurfaceForm::DoNot),
            "does" => (AuxCategory::DoNegative, SurfaceForm::DoesNot),
            "did" => (AuxCategory::DoNegative, SurfaceForm::DidNot),
            _ if prev.ends_with("'re") => (AuxCategory::BeNegative, SurfaceForm::AposReNot),
            _ if prev.ends_with("'m") => (AuxCategory::BeNegative, SurfaceForm::AposMNot),
            _ if prev.ends_with("'ve") => (AuxCategory::HaveNegative, SurfaceForm::AposVeNot),
            _ if prev.ends_with("'s") => match resolve_contracted_s(tokens.get(idx + 1)) {
                SResolution::Be => (AuxCategory::BeNegative, SurfaceForm::AposSNot),
                SResolution::Have => (AuxCategory::HaveNegative, SurfaceForm::AposSNot),
            },
            // "not" with no auxiliary to its left: bare negation.
            _ => (AuxCategory::BeNegative, SurfaceForm::BareNot),
        };
        tally.bump(category, form);
    }
}

/// A token carrying a word-final `'s`, optionally with trailing
/// punctuation still attached ("that's,").
static ENDS_WITH_APOS_S: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)'s\W*$").unwrap());

/// Resolve and count every positive contracted `'s`.
///
/// A `'s` immediately before "not" is skipped here: that physical token is
/// the negation scan's to classify, and the same occurrence must never be
/// credited to two categories.
pub(crate) fn scan_contracted_s(tokens: &[Token], tally: &mut SentenceTally) {
    for (idx, token) in tokens.iter().enumerate() {
        if !ENDS_WITH_APOS_S.is_match(&token.text) {
            continue;
        }
        let next = tokens.get(idx + 1);
        if next.is_some_and(|t| t.text.eq_ignore_ascii_case("not")) {
            continue;
        }
        match resolve_contracted_s(next) {
            SResolution::Be => tally.bump(AuxCategory::BePositive, SurfaceForm::AposS),
            SResolution::Have => tally.bump(AuxCategory::HavePositive, SurfaceForm::AposS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{PartOfSpeech, Tense};

    fn regex_counts(sentence: &str) -> SentenceTally {
        let mut tally = SentenceTally::new();
        count_regex_forms(sentence, &mut tally);
        tally
    }

    fn words(sentence: &str) -> Vec<Token> {
        sentence
            .split_whitespace()
            .map(|w| Token::new(w, PartOfSpeech::Other))
            .collect()
    }

    #[test]
    fn test_bare_positive_forms_counted_per_occurrence() {
        let tally = regex_counts("this is true and that is false");
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Is), 2);
    }

    #[test]
    fn test_no_match_inside_longer_words() {
        let tally = regex_counts("this history is amiss");
        // "this", "history", "amiss" contain "is"/"am" as substrings only
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Is), 1);
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Am), 0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let tally = regex_counts("IS he? Ain't ARE they");
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Is), 1);
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Are), 1);
        assert_eq!(tally.get(AuxCategory::Aint, SurfaceForm::Aint), 1);
    }

    #[test]
    fn test_positive_form_followed_by_not_is_skipped() {
        let tally = regex_counts("he is not here but she is here");
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Is), 1);
    }

    #[test]
    fn test_lookahead_also_rejects_nothing() {
        // The reference lookahead checks letters, not a whole word, so
        // "is nothing" is excluded from the positive count as well.
        let tally = regex_counts("there is nothing here");
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Is), 0);
    }

    #[test]
    fn test_fully_contracted_negatives() {
        let tally = regex_counts("he isn't here, they aren't there, I don't care");
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::Isnt), 1);
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::Arent), 1);
        assert_eq!(tally.get(AuxCategory::DoNegative, SurfaceForm::Dont), 1);
        // "isn't" must not leak an "is"
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::Is), 0);
    }

    #[test]
    fn test_contracted_positives_attach_to_words() {
        let tally = regex_counts("they're sure we've seen it and I'm glad");
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::AposRe), 1);
        assert_eq!(tally.get(AuxCategory::HavePositive, SurfaceForm::AposVe), 1);
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::AposM), 1);
    }

    #[test]
    fn test_do_family_does_not_cross_match() {
        let tally = regex_counts("she doesn't know what he did");
        assert_eq!(tally.get(AuxCategory::DoNegative, SurfaceForm::Doesnt), 1);
        assert_eq!(tally.get(AuxCategory::DoPositive, SurfaceForm::Did), 1);
        // "does" must not be found inside "doesn't"
        assert_eq!(tally.get(AuxCategory::DoPositive, SurfaceForm::Does), 0);
    }

    #[test]
    fn test_leading_not_is_bare_negation() {
        let mut tally = SentenceTally::new();
        scan_negations(&words("Not bad at all"), &mut tally);
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::BareNot), 1);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_not_after_recognized_auxiliaries() {
        let mut tally = SentenceTally::new();
        scan_negations(&words("I do not know why they are not here"), &mut tally);
        assert_eq!(tally.get(AuxCategory::DoNegative, SurfaceForm::DoNot), 1);
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::AreNot), 1);
    }

    #[test]
    fn test_not_after_contracted_auxiliaries() {
        let mut tally = SentenceTally::new();
        scan_negations(&words("they're not sure and I'm not either"), &mut tally);
        assert_eq!(
            tally.get(AuxCategory::BeNegative, SurfaceForm::AposReNot),
            1
        );
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::AposMNot), 1);
    }

    #[test]
    fn test_not_after_unrecognized_word_is_bare() {
        let mut tally = SentenceTally::new();
        scan_negations(&words("maybe not"), &mut tally);
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::BareNot), 1);
    }

    #[test]
    fn test_s_not_resolved_by_token_after_not() {
        let mut tokens = words("she's not gone");
        tokens[2] = Token::with_tense("gone", PartOfSpeech::Verb, Tense::Past);
        let mut tally = SentenceTally::new();
        scan_negations(&tokens, &mut tally);
        assert_eq!(
            tally.get(AuxCategory::HaveNegative, SurfaceForm::AposSNot),
            1
        );

        let mut tally = SentenceTally::new();
        scan_negations(&words("she's not happy"), &mut tally);
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::AposSNot), 1);
    }

    #[test]
    fn test_sentence_final_s_not_defaults_to_be() {
        // No token follows "not", so the shared resolver's default applies
        let mut tally = SentenceTally::new();
        scan_negations(&words("no she's not"), &mut tally);
        assert_eq!(tally.get(AuxCategory::BeNegative, SurfaceForm::AposSNot), 1);
    }

    #[test]
    fn test_positive_s_resolution() {
        let mut tokens = words("she's gone");
        tokens[1] = Token::with_tense("gone", PartOfSpeech::Verb, Tense::Past);
        let mut tally = SentenceTally::new();
        scan_contracted_s(&tokens, &mut tally);
        assert_eq!(tally.get(AuxCategory::HavePositive, SurfaceForm::AposS), 1);
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::AposS), 0);
    }

    #[test]
    fn test_sentence_final_s_defaults_to_be_positive() {
        let mut tally = SentenceTally::new();
        scan_contracted_s(&words("I know whose it's"), &mut tally);
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::AposS), 1);
    }

    #[test]
    fn test_s_before_not_is_not_counted_positive() {
        // That token belongs to the negation scan; counting it here too
        // would attribute one physical token to two categories.
        let mut tally = SentenceTally::new();
        let tokens = words("he's not here but she's here");
        scan_contracted_s(&tokens, &mut tally);
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::AposS), 1);
    }

    #[test]
    fn test_s_with_trailing_punctuation_still_matches() {
        let mut tally = SentenceTally::new();
        scan_contracted_s(&words("that's, well, fine"), &mut tally);
        assert_eq!(tally.get(AuxCategory::BePositive, SurfaceForm::AposS), 1);
    }
}
