//! Lexical knowledge base: tokenization, tagging, sense and synonym lookup,
//! sense similarity.
//!
//! The pipeline only talks to the [`Lexicon`] trait. [`BundledLexicon`] is
//! the in-crate backend built from an embedded sense inventory.

pub mod bundled;
pub mod morphology;
mod tagger;
pub mod tokenize;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

pub use bundled::BundledLexicon;
pub use tokenize::join_tokens;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Penn Treebank tag, e.g. `NN`, `VBZ`, `JJ`, or the punctuation itself.
    pub tag: String,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Coarse category of a Penn tag: `NN*`, `VB*`, `JJ*`, `RB*`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.chars().next()? {
            'N' if tag.starts_with("NN") => Some(PartOfSpeech::Noun),
            'V' if tag.starts_with("VB") => Some(PartOfSpeech::Verb),
            'J' if tag.starts_with("JJ") => Some(PartOfSpeech::Adjective),
            'R' if tag.starts_with("RB") => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Sense-id code: `n`, `v`, `a` (also `s` for satellites), `r`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub fn is_substantive(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Verb)
    }
}

/// The knowledge-base capability the pipeline runs against.
///
/// Lookup methods return `Result` so a backend can report that it could not
/// answer; callers decide whether that means "no candidates" or "reject".
pub trait Lexicon: Send + Sync {
    fn sentences(&self, text: &str) -> Vec<String>;

    fn words(&self, sentence: &str) -> Vec<String>;

    fn tag(&self, words: &[String]) -> Vec<Token>;

    /// Single-word replacement candidates for `word` used as `pos`, already in
    /// the surface word's inflection.
    fn synonyms(&self, word: &str, pos: PartOfSpeech) -> Result<Vec<String>, LexiconError>;

    /// Sense ids of `word` across every part of speech, most common first.
    fn senses(&self, word: &str) -> Result<Vec<String>, LexiconError>;

    /// Path similarity in `[0, 1]`, `None` when the senses are unrelated.
    fn similarity(&self, a: &str, b: &str) -> Result<Option<f64>, LexiconError>;

    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        self.tag(&self.words(sentence))
    }
}
