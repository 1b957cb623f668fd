//! Rewrites machine-generated prose into academic-register human prose.
//!
//! The work happens in a fixed sequence of text-to-text stages (see
//! [`pipeline::Stage`]): phrase substitution, sense-checked synonym
//! paraphrasing, sentence restructuring and surface polish. Lexical
//! knowledge comes through the [`lexicon::Lexicon`] trait; the crate ships
//! an embedded backend, [`lexicon::BundledLexicon`].

pub mod agreement;
pub mod casing;
pub mod error;
pub mod guard;
pub mod lexicon;
pub mod paraphrase;
pub mod patterns;
pub mod pipeline;
pub mod polish;
pub mod resolver;
pub mod structure;
pub mod tuning;
pub mod vocabulary;

use once_cell::sync::Lazy;
use serde::Serialize;

pub use error::{HumanizeError, LexiconError};
pub use lexicon::{BundledLexicon, Lexicon, PartOfSpeech, Token};
pub use pipeline::{Humanizer, Stage};
pub use tuning::Tuning;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// The response shape of a single humanize request.
#[derive(Debug, Clone, Serialize)]
pub struct HumanizeResponse {
    pub original: String,
    pub humanized: String,
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Process-wide humanizer
// ---------------------------------------------------------------------------

static DEFAULT_HUMANIZER: Lazy<Humanizer> = Lazy::new(Humanizer::bundled);

/// The shared humanizer behind [`humanize`] and [`get_synonyms`]. Its
/// synonym cache lives for the rest of the process.
pub fn default_humanizer() -> &'static Humanizer {
    &DEFAULT_HUMANIZER
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Humanize `text` with the bundled lexicon, default tuning and thread-local
/// randomness. Blank input is the only error.
pub fn humanize(text: &str) -> Result<String, HumanizeError> {
    DEFAULT_HUMANIZER.humanize(text, &mut rand::thread_rng())
}

/// Humanize `text` and wrap the outcome in a [`HumanizeResponse`].
pub fn humanize_response(text: &str) -> Result<HumanizeResponse, HumanizeError> {
    let humanized = humanize(text)?;
    Ok(HumanizeResponse {
        original: text.to_string(),
        humanized,
        success: true,
    })
}

/// At most seven replacement candidates for `word` under the Penn tag `pos`.
pub fn get_synonyms(word: &str, pos: &str) -> Vec<String> {
    DEFAULT_HUMANIZER.synonyms(word, pos)
}
