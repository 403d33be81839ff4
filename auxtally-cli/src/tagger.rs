//! Heuristic English tokenizer and part-of-speech tagger
//!
//! A rule-based stand-in for a statistical tagger, good enough to feed the
//! classifier's one real question: is the next token a past-tense lexical
//! verb? Classification is ordered, first match wins: closed-class
//! lexicons first, then an irregular past-form list, then suffix rules,
//! then a noun catch-all.
//!
//! The tokenizer keeps word-internal apostrophes attached ("she's",
//! "ain't" stay single tokens), which is what the classifier's suffix
//! checks expect.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use auxtally_core::{PartOfSpeech, TagError, Tagger, Tense, Token};

/// Word tokens (with internal apostrophes) or single punctuation marks.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:'\w+)*|[^\w\s]").unwrap());

/// Auxiliaries and modals, with the tense the finite form carries.
static AUXILIARIES: LazyLock<HashMap<&'static str, Option<Tense>>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for word in ["is", "are", "am", "be", "being", "have", "has", "do", "does"] {
        m.insert(word, Some(Tense::Pres));
    }
    for word in ["was", "were", "been", "had", "did"] {
        m.insert(word, Some(Tense::Past));
    }
    for word in [
        "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ain't",
        "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "hadn't", "don't", "doesn't",
        "didn't", "won't", "wouldn't", "can't", "couldn't", "shouldn't",
    ] {
        m.insert(word, None);
    }
    m
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "mine",
        "yours", "hers", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself",
        "ourselves", "themselves", "who", "whom", "somebody", "someone", "anybody", "anyone",
        "everybody", "everyone", "nobody",
    ]
    .into_iter()
    .collect()
});

static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "its", "our",
        "their", "some", "any", "no", "every", "each", "all", "both",
    ]
    .into_iter()
    .collect()
});

static ADPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "in", "on", "at", "to", "from", "with", "without", "of", "for", "by", "about", "into",
        "over", "under", "through", "between", "after", "before", "around", "up", "down", "off",
        "out",
    ]
    .into_iter()
    .collect()
});

/// Common irregular past tenses and past participles.
static IRREGULAR_PAST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "gone", "done", "seen", "taken", "got", "gotten", "made", "said", "told", "went", "came",
        "ran", "knew", "known", "thought", "found", "heard", "left", "felt", "kept", "held",
        "brought", "bought", "caught", "taught", "stood", "understood", "lost", "paid", "met",
        "sat", "spoke", "spoken", "broke", "broken", "chose", "chosen", "wrote", "written",
        "drove", "driven", "ate", "eaten", "fell", "fallen", "gave", "given", "grew", "grown",
        "threw", "thrown", "wore", "worn", "won", "sent", "built", "spent", "sang", "sung",
        "drank", "drunk", "swam", "swum", "began", "begun", "forgot", "forgotten", "woke",
        "woken", "slept", "read", "put", "let", "set", "hit", "cut", "hurt", "meant", "led",
        "became", "saw", "took", "married", "born",
    ]
    .into_iter()
    .collect()
});

/// Words ending in "ed" that are not past-tense verbs (or that a
/// statistical tagger would call adjectives, steering `'s` toward BE).
static ED_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "need", "feed", "seed", "deed", "speed", "breed", "indeed", "hundred", "sacred", "naked",
        "wicked", "tired", "bored", "scared", "worried", "excited", "interested", "hatred",
    ]
    .into_iter()
    .collect()
});

/// Words ending in "ing" that are not present participles.
static ING_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "thing", "something", "nothing", "anything", "everything", "king", "ring", "spring",
        "string", "morning", "evening", "during", "ceiling", "sibling", "darling",
    ]
    .into_iter()
    .collect()
});

/// Classify one lowercased token. Ordered rules, first match wins.
fn classify(word: &str) -> (PartOfSpeech, Option<Tense>) {
    if word.chars().all(|c| !c.is_alphanumeric()) {
        return (PartOfSpeech::Punct, None);
    }
    if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return (PartOfSpeech::Num, None);
    }
    if let Some(&tense) = AUXILIARIES.get(word) {
        return (PartOfSpeech::Aux, tense);
    }
    if PRONOUNS.contains(word) {
        return (PartOfSpeech::Pron, None);
    }
    if DETERMINERS.contains(word) {
        return (PartOfSpeech::Det, None);
    }
    if ADPOSITIONS.contains(word) {
        return (PartOfSpeech::Adp, None);
    }
    if IRREGULAR_PAST.contains(word) {
        return (PartOfSpeech::Verb, Some(Tense::Past));
    }
    if word.len() > 3 && word.ends_with("ed") && !ED_EXCEPTIONS.contains(word) {
        return (PartOfSpeech::Verb, Some(Tense::Past));
    }
    if word.len() > 4 && word.ends_with("ing") && !ING_EXCEPTIONS.contains(word) {
        return (PartOfSpeech::Verb, Some(Tense::Pres));
    }
    if word.len() > 3 && word.ends_with("ly") {
        return (PartOfSpeech::Adv, None);
    }
    (PartOfSpeech::Noun, None)
}

/// Rule-based tagger implementing the core tagging capability
#[derive(Debug, Default)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a new tagger (stateless; the rule tables are shared statics)
    pub fn new() -> Self {
        Self
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, TagError> {
        Ok(TOKEN_RE
            .find_iter(sentence)
            .map(|m| {
                let text = m.as_str();
                let (pos, tense) = classify(&text.to_lowercase());
                Token {
                    text: text.to_string(),
                    pos,
                    tense,
                }
            })
            .collect())
    }
}
