//! Closed vocabularies: auxiliary categories, surface forms, and the
//! canonical slot table
//!
//! Every occurrence the classifier can ever emit is one of the
//! `(category, form)` pairs declared in [`SLOTS`]. The table order is the
//! canonical output order: negated families first, then positive families,
//! then AIN'T, with forms in their fixed per-family order. Downstream rows
//! are reproducible because this order never depends on input content.

use serde::{Deserialize, Serialize};

/// Auxiliary construction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuxCategory {
    /// Positive forms of BE
    BePositive,
    /// Negated forms of BE
    BeNegative,
    /// Positive forms of HAVE
    HavePositive,
    /// Negated forms of HAVE
    HaveNegative,
    /// Positive forms of DO
    DoPositive,
    /// Negated forms of DO
    DoNegative,
    /// "ain't" (inherently negative, no polarity split)
    Aint,
}

impl AuxCategory {
    /// Stable output label, matching the reference CSV fixtures
    pub fn label(&self) -> &'static str {
        match self {
            AuxCategory::BePositive => "BE_P",
            AuxCategory::BeNegative => "BE_N",
            AuxCategory::HavePositive => "HV_P",
            AuxCategory::HaveNegative => "HV_N",
            AuxCategory::DoPositive => "DO_P",
            AuxCategory::DoNegative => "DO_N",
            AuxCategory::Aint => "AI",
        }
    }
}

/// Lexical realization of a category member
///
/// Shared ambiguous realizations (`'s`, `'s not`) appear once here and are
/// credited to either the BE or the HAVE family after disambiguation,
/// never to both for the same physical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)] // variants are self-describing surface strings
pub enum SurfaceForm {
    // BE positive
    Is,
    Are,
    Am,
    AposS,
    AposRe,
    AposM,
    // BE negative
    IsNot,
    AreNot,
    AmNot,
    AposSNot,
    AposReNot,
    AposMNot,
    BareNot,
    Isnt,
    Arent,
    // HAVE positive
    Have,
    Has,
    AposVe,
    // HAVE negative
    HaveNot,
    HasNot,
    AposVeNot,
    Havent,
    Hasnt,
    // DO positive
    Do,
    Does,
    Did,
    // DO negative
    DoNot,
    DoesNot,
    DidNot,
    Dont,
    Doesnt,
    Didnt,
    // AIN'T
    Aint,
}

impl SurfaceForm {
    /// The literal surface text this form stands for
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceForm::Is => "is",
            SurfaceForm::Are => "are",
            SurfaceForm::Am => "am",
            SurfaceForm::AposS => "'s",
            SurfaceForm::AposRe => "'re",
            SurfaceForm::AposM => "'m",
            SurfaceForm::IsNot => "is not",
            SurfaceForm::AreNot => "are not",
            SurfaceForm::AmNot => "am not",
            SurfaceForm::AposSNot => "'s not",
            SurfaceForm::AposReNot => "'re not",
            SurfaceForm::AposMNot => "'m not",
            SurfaceForm::BareNot => "not",
            SurfaceForm::Isnt => "isn't",
            SurfaceForm::Arent => "aren't",
            SurfaceForm::Have => "have",
            SurfaceForm::Has => "has",
            SurfaceForm::AposVe => "'ve",
            SurfaceForm::HaveNot => "have not",
            SurfaceForm::HasNot => "has not",
            SurfaceForm::AposVeNot => "'ve not",
            SurfaceForm::Havent => "haven't",
            SurfaceForm::Hasnt => "hasn't",
            SurfaceForm::Do => "do",
            SurfaceForm::Does => "does",
            SurfaceForm::Did => "did",
            SurfaceForm::DoNot => "do not",
            SurfaceForm::DoesNot => "does not",
            SurfaceForm::DidNot => "did not",
            SurfaceForm::Dont => "don't",
            SurfaceForm::Doesnt => "doesn't",
            SurfaceForm::Didnt => "didn't",
            SurfaceForm::Aint => "ain't",
        }
    }
}

/// Every `(category, form)` pair the classifier may emit, in canonical
/// output order
pub const SLOTS: &[(AuxCategory, SurfaceForm)] = &[
    // BE negative
    (AuxCategory::BeNegative, SurfaceForm::IsNot),
    (AuxCategory::BeNegative, SurfaceForm::AreNot),
    (AuxCategory::BeNegative, SurfaceForm::AmNot),
    (AuxCategory::BeNegative, SurfaceForm::AposSNot),
    (AuxCategory::BeNegative, SurfaceForm::AposReNot),
    (AuxCategory::BeNegative, SurfaceForm::AposMNot),
    (AuxCategory::BeNegative, SurfaceForm::BareNot),
    (AuxCategory::BeNegative, SurfaceForm::Isnt),
    (AuxCategory::BeNegative, SurfaceForm::Arent),
    // HAVE negative
    (AuxCategory::HaveNegative, SurfaceForm::HaveNot),
    (AuxCategory::HaveNegative, SurfaceForm::HasNot),
    (AuxCategory::HaveNegative, SurfaceForm::AposVeNot),
    (AuxCategory::HaveNegative, SurfaceForm::AposSNot),
    (AuxCategory::HaveNegative, SurfaceForm::Havent),
    (AuxCategory::HaveNegative, SurfaceForm::Hasnt),
    // DO negative
    (AuxCategory::DoNegative, SurfaceForm::DoNot),
    (AuxCategory::DoNegative, SurfaceForm::DoesNot),
    (AuxCategory::DoNegative, SurfaceForm::DidNot),
    (AuxCategory::DoNegative, SurfaceForm::Dont),
    (AuxCategory::DoNegative, SurfaceForm::Doesnt),
    (AuxCategory::DoNegative, SurfaceForm::Didnt),
    // BE positive
    (AuxCategory::BePositive, SurfaceForm::AposS),
    (AuxCategory::BePositive, SurfaceForm::Is),
    (AuxCategory::BePositive, SurfaceForm::Are),
    (AuxCategory::BePositive, SurfaceForm::Am),
    (AuxCategory::BePositive, SurfaceForm::AposRe),
    (AuxCategory::BePositive, SurfaceForm::AposM),
    // HAVE positive
    (AuxCategory::HavePositive, SurfaceForm::AposS),
    (AuxCategory::HavePositive, SurfaceForm::Have),
    (AuxCategory::HavePositive, SurfaceForm::Has),
    (AuxCategory::HavePositive, SurfaceForm::AposVe),
    // DO positive
    (AuxCategory::DoPositive, SurfaceForm::Do),
    (AuxCategory::DoPositive, SurfaceForm::Does),
    (AuxCategory::DoPositive, SurfaceForm::Did),
    // AIN'T
    (AuxCategory::Aint, SurfaceForm::Aint),
];

/// Position of a `(category, form)` pair within [`SLOTS`], if declared
pub fn slot_index(category: AuxCategory, form: SurfaceForm) -> Option<usize> {
    SLOTS
        .iter()
        .position(|&(cat, f)| cat == category && f == form)
}
