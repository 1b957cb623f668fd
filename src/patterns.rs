//! Whole-text phrase substitution.
//!
//! Each table in [`crate::vocabulary`] compiles to an ordered list of
//! [`PatternRule`]s. A pass folds the rules over the text in order; every
//! rule rolls its trigger once and, when it fires, rewrites all of its
//! matches with the same phrase.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use tracing::trace;

use crate::casing::match_initial_case;
use crate::tuning::{roll, Tuning};
use crate::vocabulary::{
    PhraseTable, ACADEMIC_RULES, CLICHE_PATTERNS, HEDGE_PATTERNS, RESEARCH_PATTERNS,
    SECTION_RULES, TONE_LEXICON,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCategory {
    /// Research-paper register.
    Research,
    /// Generic machine-writing connectives.
    Cliche,
    /// Hedged constructions.
    Hedge,
    /// Academic verb and noun forms.
    Academic,
    /// Informal to academic vocabulary.
    Tone,
}

impl PatternCategory {
    pub fn name(self) -> &'static str {
        match self {
            PatternCategory::Research => "research",
            PatternCategory::Cliche => "cliche",
            PatternCategory::Hedge => "hedge",
            PatternCategory::Academic => "academic",
            PatternCategory::Tone => "tone",
        }
    }

    /// Probability that a single rule of this category fires in one pass.
    pub fn trigger(self, tuning: &Tuning) -> f64 {
        match self {
            PatternCategory::Research => tuning.research_pattern_trigger,
            PatternCategory::Cliche => tuning.cliche_pattern_trigger,
            PatternCategory::Hedge => tuning.hedge_pattern_trigger,
            PatternCategory::Academic | PatternCategory::Tone => 1.0,
        }
    }

    pub fn rules(self) -> &'static [PatternRule] {
        match self {
            PatternCategory::Research => &RESEARCH_RULES,
            PatternCategory::Cliche => &CLICHE_RULES,
            PatternCategory::Hedge => &HEDGE_RULES,
            PatternCategory::Academic => &ACADEMIC_REGISTER_RULES,
            PatternCategory::Tone => &TONE_RULES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub category: PatternCategory,
    regex: Regex,
    replacements: &'static [&'static str],
}

impl PatternRule {
    /// Compile `pattern` case-insensitively. Panics on an invalid pattern;
    /// only the static tables are compiled through here.
    fn compile(category: PatternCategory, pattern: &str, replacements: &'static [&'static str]) -> Self {
        Self {
            category,
            regex: Regex::new(&format!("(?i){pattern}")).unwrap(),
            replacements,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn replacements(&self) -> &'static [&'static str] {
        self.replacements
    }

    /// Replace every match with `phrase`, carrying over the first-letter case
    /// of each matched span.
    pub fn replace_with(&self, text: &str, phrase: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures| match_initial_case(&caps[0], phrase))
            .into_owned()
    }

    /// Roll once against `trigger`; on success pick one phrase for all
    /// matches.
    pub fn apply<R: Rng + ?Sized>(&self, text: &str, trigger: f64, rng: &mut R) -> String {
        if self.replacements.is_empty() || !roll(rng, trigger) {
            return text.to_string();
        }
        let phrase = if self.replacements.len() == 1 {
            self.replacements[0]
        } else {
            self.replacements[rng.gen_range(0..self.replacements.len())]
        };
        if self.regex.is_match(text) {
            trace!(pattern = self.regex.as_str(), phrase, "pattern fired");
        }
        self.replace_with(text, phrase)
    }
}

fn compile_table(category: PatternCategory, table: PhraseTable) -> Vec<PatternRule> {
    table
        .iter()
        .map(|&(pattern, replacements)| PatternRule::compile(category, pattern, replacements))
        .collect()
}

fn compile_fixed(category: PatternCategory, table: &'static [(&'static str, &'static str)]) -> Vec<PatternRule> {
    table
        .iter()
        .map(|(pattern, replacement)| {
            PatternRule::compile(category, pattern, std::slice::from_ref(replacement))
        })
        .collect()
}

static RESEARCH_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile_table(PatternCategory::Research, RESEARCH_PATTERNS));
static CLICHE_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile_table(PatternCategory::Cliche, CLICHE_PATTERNS));
static HEDGE_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile_table(PatternCategory::Hedge, HEDGE_PATTERNS));
static ACADEMIC_REGISTER_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile_fixed(PatternCategory::Academic, ACADEMIC_RULES));
static TONE_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile_fixed(PatternCategory::Tone, TONE_LEXICON));

struct CompiledSection {
    name: &'static str,
    keywords: &'static [&'static str],
    rules: Vec<(Regex, &'static str)>,
}

static SECTION_REWRITES: Lazy<Vec<CompiledSection>> = Lazy::new(|| {
    SECTION_RULES
        .iter()
        .map(|section| CompiledSection {
            name: section.section,
            keywords: section.keywords,
            rules: section
                .rewrites
                .iter()
                .map(|(pattern, replacement)| {
                    (Regex::new(&format!("(?i){pattern}")).unwrap(), *replacement)
                })
                .collect(),
        })
        .collect()
});

/// Fold `rules` over `text`, each rule with its own independent trigger.
pub fn substitute<R: Rng + ?Sized>(text: &str, rules: &[PatternRule], trigger: f64, rng: &mut R) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc, trigger, rng))
}

/// One pass of a whole category at its tuned trigger.
pub fn apply_category<R: Rng + ?Sized>(
    text: &str,
    category: PatternCategory,
    tuning: &Tuning,
    rng: &mut R,
) -> String {
    substitute(text, category.rules(), category.trigger(tuning), rng)
}

/// Deterministic categories: every rule rewrites with its first phrase, no
/// randomness involved.
pub fn apply_fixed(text: &str, category: PatternCategory) -> String {
    category.rules().iter().fold(text.to_string(), |acc, rule| {
        match rule.replacements.first() {
            Some(phrase) => rule.replace_with(&acc, phrase),
            None => acc,
        }
    })
}

/// Tense and phrasing rewrites for every paper section whose keywords occur
/// anywhere in the text (substring match, so "results" triggers "result").
pub fn apply_section_rules(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = text.to_string();
    for section in SECTION_REWRITES.iter() {
        if !section.keywords.iter().any(|k| lower.contains(k)) {
            continue;
        }
        trace!(section = section.name, "section rewrites");
        for (regex, replacement) in &section.rules {
            out = regex
                .replace_all(&out, |caps: &Captures| match_initial_case(&caps[0], replacement))
                .into_owned();
        }
    }
    out
}

/// Section rules, then the research, cliche and hedge categories in order.
pub fn structure_aware_substitution<R: Rng + ?Sized>(text: &str, tuning: &Tuning, rng: &mut R) -> String {
    let mut out = apply_section_rules(text);
    for category in [PatternCategory::Research, PatternCategory::Cliche, PatternCategory::Hedge] {
        out = apply_category(&out, category, tuning, rng);
    }
    out
}
