//! Per-sentence aggregation of all matcher families
//!
//! One [`SentenceTally`] holds the counts for every declared
//! `(category, form)` slot. The aggregator runs the regex matchers
//! unconditionally and the token-based matchers only when the sentence can
//! contain a token-dependent form; the sentence is tagged at most once and
//! the tokenization is shared by every matcher that needs it.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::forms::{slot_index, AuxCategory, SurfaceForm, SLOTS};
use crate::matcher::{count_regex_forms, scan_contracted_s, scan_negations};
use crate::token::Tagger;

/// Number of declared slots
const SLOT_COUNT: usize = SLOTS.len();

/// One detected auxiliary occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// The auxiliary family and polarity
    pub category: AuxCategory,
    /// The exact lexical realization
    pub form: SurfaceForm,
}

/// Fixed-schema per-sentence counts over the closed slot table
///
/// Every declared slot is present even at zero, so downstream callers can
/// either inspect the full schema or expand only the nonzero entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceTally {
    counts: [u32; SLOT_COUNT],
}

impl SentenceTally {
    /// An all-zero tally
    pub fn new() -> Self {
        Self {
            counts: [0; SLOT_COUNT],
        }
    }

    /// Credit one occurrence to a declared slot.
    ///
    /// An undeclared pair is a programming defect, not input-dependent
    /// behavior, so it panics rather than mislabeling output.
    pub(crate) fn bump(&mut self, category: AuxCategory, form: SurfaceForm) {
        let idx = slot_index(category, form)
            .unwrap_or_else(|| panic!("undeclared slot ({category:?}, {form:?})"));
        self.counts[idx] += 1;
    }

    /// Count for one `(category, form)` pair; undeclared pairs are zero
    pub fn get(&self, category: AuxCategory, form: SurfaceForm) -> u32 {
        slot_index(category, form)
            .map(|idx| self.counts[idx])
            .unwrap_or(0)
    }

    /// Total number of occurrences across all slots
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// True when no auxiliary occurred in the sentence
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// All slots with their counts, zeros included, in canonical order
    pub fn counts(&self) -> impl Iterator<Item = (AuxCategory, SurfaceForm, u32)> + '_ {
        SLOTS
            .iter()
            .zip(self.counts.iter())
            .map(|(&(category, form), &count)| (category, form, count))
    }

    /// Expand nonzero slots into one [`Occurrence`] per detected instance,
    /// in canonical slot order
    pub fn occurrences(&self) -> Vec<Occurrence> {
        let mut out = Vec::with_capacity(self.total() as usize);
        for (category, form, count) in self.counts() {
            for _ in 0..count {
                out.push(Occurrence { category, form });
            }
        }
        out
    }
}

impl Default for SentenceTally {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap pre-check for sentences that may contain a token-dependent form
/// (a separate "not" or any contracted `'s`). Everything else is covered
/// by the regex matchers and needs no tagging at all.
static TOKEN_TRIGGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bnot\b|'s").unwrap());

/// Auxiliary extractor bound to a tagger
///
/// Stateless across calls: two runs over the same sentence and tagger
/// output produce identical tallies.
pub struct AuxExtractor<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> AuxExtractor<T> {
    /// Create an extractor using the given tagger capability
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Analyze one sentence and tally every auxiliary occurrence
    ///
    /// A tagger failure surfaces as an error carrying zero occurrences'
    /// worth of information; it is per-sentence recoverable and should be
    /// logged and skipped by batch callers.
    pub fn extract(&self, sentence: &str) -> Result<SentenceTally> {
        let mut tally = SentenceTally::new();
        count_regex_forms(sentence, &mut tally);

        if TOKEN_TRIGGER.is_match(sentence) {
            let tokens = self.tagger.tag(sentence)?;
            scan_negations(&tokens, &mut tally);
            scan_contracted_s(&tokens, &mut tally);
        }

        Ok(tally)
    }
}

/// Analyze one sentence with an ad-hoc tagger (convenience)
pub fn extract<T: Tagger>(sentence: &str, tagger: &T) -> Result<SentenceTally> {
    AuxExtractor::new(tagger).extract(sentence)
}
