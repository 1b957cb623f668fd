use serde::{Deserialize, Serialize};

/// Every probability, threshold, window and cap the pipeline uses.
///
/// The process-wide humanizer runs with [`Tuning::DEFAULT`]. Tests build
/// variants with struct-update syntax, typically on top of
/// [`Tuning::deterministic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // Pattern substitution triggers
    pub research_pattern_trigger: f64,
    pub cliche_pattern_trigger: f64,
    pub hedge_pattern_trigger: f64,

    // Synonym resolution
    pub academic_synonym_cap: usize,
    pub fallback_synonym_cap: usize,
    pub meaning_threshold: f64,
    pub meaning_sense_depth: usize,

    // Paraphrase
    pub paraphrase_min_words: usize,
    pub noun_verb_substitution: f64,
    pub modifier_substitution: f64,

    // Structural rewrite
    pub merge_probability: f64,
    pub merge_max_words: usize,
    pub merge_next_max_words: usize,
    pub split_probability: f64,
    pub split_min_words: usize,
    pub split_window: usize,
    pub split_margin: usize,
    pub split_transition_probability: f64,
    pub flow_probability: f64,
    pub flow_emphasis_probability: f64,
    pub length_min_sentences: usize,
    pub length_spread_min: usize,
    pub interjection_probability: f64,
    pub interjection_min_words: usize,

    // Punctuation variation
    pub parenthetical_probability: f64,
    pub parenthetical_commit_probability: f64,
    pub parenthetical_min_words: usize,
    pub em_dash_probability: f64,
    pub em_dash_min_words: usize,
    pub exclamation_probability: f64,
    pub exclamation_min_words: usize,
}

impl Tuning {
    pub const DEFAULT: Tuning = Tuning {
        research_pattern_trigger: 0.9,
        cliche_pattern_trigger: 0.85,
        hedge_pattern_trigger: 0.75,
        academic_synonym_cap: 7,
        fallback_synonym_cap: 5,
        meaning_threshold: 0.4,
        meaning_sense_depth: 3,
        paraphrase_min_words: 2,
        noun_verb_substitution: 0.45,
        modifier_substitution: 0.35,
        merge_probability: 0.3,
        merge_max_words: 10,
        merge_next_max_words: 15,
        split_probability: 0.25,
        split_min_words: 30,
        split_window: 5,
        split_margin: 2,
        split_transition_probability: 0.4,
        flow_probability: 0.35,
        flow_emphasis_probability: 0.4,
        length_min_sentences: 3,
        length_spread_min: 10,
        interjection_probability: 0.15,
        interjection_min_words: 8,
        parenthetical_probability: 0.25,
        parenthetical_commit_probability: 0.3,
        parenthetical_min_words: 8,
        em_dash_probability: 0.15,
        em_dash_min_words: 6,
        exclamation_probability: 0.05,
        exclamation_min_words: 5,
    };

    /// Default thresholds with every random trigger switched off. Only the
    /// deterministic stages (section tense rules, academic register, tone
    /// lexicon, grammar cleanup, capitalization) change the text.
    pub fn deterministic() -> Self {
        Tuning {
            research_pattern_trigger: 0.0,
            cliche_pattern_trigger: 0.0,
            hedge_pattern_trigger: 0.0,
            noun_verb_substitution: 0.0,
            modifier_substitution: 0.0,
            merge_probability: 0.0,
            split_probability: 0.0,
            split_transition_probability: 0.0,
            flow_probability: 0.0,
            flow_emphasis_probability: 0.0,
            interjection_probability: 0.0,
            parenthetical_probability: 0.0,
            parenthetical_commit_probability: 0.0,
            em_dash_probability: 0.0,
            exclamation_probability: 0.0,
            ..Tuning::DEFAULT
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::DEFAULT
    }
}

/// Draw a Bernoulli trial. Probabilities at or below zero never fire and at
/// or above one always fire without consuming randomness.
pub(crate) fn roll<R: rand::Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    if probability <= 0.0 {
        false
    } else if probability >= 1.0 {
        true
    } else {
        rng.gen::<f64>() < probability
    }
}

/// Uniform choice from a non-empty static table.
pub(crate) fn pick<R: rand::Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items[rng.gen_range(0..items.len())]
}
