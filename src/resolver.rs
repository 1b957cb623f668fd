use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{trace, warn};

use crate::lexicon::{Lexicon, PartOfSpeech};
use crate::tuning::Tuning;
use crate::vocabulary::{INFORMAL_WORDS, PRESERVED_TERMS, RESEARCH_VOCABULARY};

type CacheKey = (String, PartOfSpeech);

/// Ranked replacement candidates for a word in a given part of speech.
///
/// Preserved research terms get nothing, curated vocabulary is returned
/// verbatim, everything else comes from the lexicon. Lexicon answers are
/// cached per (lower-cased word, part of speech) and never rewritten. A
/// failed lookup yields no candidates.
pub struct SynonymResolver {
    lexicon: Arc<dyn Lexicon>,
    academic_cap: usize,
    fallback_cap: usize,
    cache: RwLock<HashMap<CacheKey, Arc<[String]>>>,
}

impl SynonymResolver {
    pub fn new(lexicon: Arc<dyn Lexicon>, tuning: &Tuning) -> Self {
        Self {
            lexicon,
            academic_cap: tuning.academic_synonym_cap,
            fallback_cap: tuning.fallback_synonym_cap,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// `tag` is a Penn tag; only its coarse category matters. `_context`
    /// (the neighbouring words) is accepted for callers that have it.
    pub fn resolve(&self, word: &str, tag: &str, _context: &[&str]) -> Vec<String> {
        let lower = word.to_lowercase();
        if PRESERVED_TERMS.contains(lower.as_str()) {
            return Vec::new();
        }
        if let Some(curated) = RESEARCH_VOCABULARY.get(lower.as_str()) {
            return curated.iter().map(|s| s.to_string()).collect();
        }
        let Some(pos) = PartOfSpeech::from_tag(tag) else {
            return Vec::new();
        };

        let Some(candidates) = self.candidates(&lower, pos) else {
            return Vec::new();
        };

        let academic: Vec<String> = candidates
            .iter()
            .filter(|c| !INFORMAL_WORDS.contains(c.to_lowercase().as_str()))
            .take(self.academic_cap)
            .cloned()
            .collect();
        if !academic.is_empty() {
            return academic;
        }
        candidates.iter().take(self.fallback_cap).cloned().collect()
    }

    /// Cached lexicon candidates, `None` when the lexicon could not answer.
    fn candidates(&self, lower: &str, pos: PartOfSpeech) -> Option<Arc<[String]>> {
        let key = (lower.to_string(), pos);
        if let Some(hit) = self.cache.read().get(&key) {
            return Some(Arc::clone(hit));
        }

        let found = match self.lexicon.synonyms(lower, pos) {
            Ok(found) => found,
            Err(e) => {
                warn!(word = lower, ?pos, error = %e, "synonym lookup failed");
                return None;
            }
        };

        let mut single_words: Vec<String> = Vec::with_capacity(found.len());
        for candidate in found {
            if candidate.contains(char::is_whitespace) || candidate.eq_ignore_ascii_case(lower) {
                continue;
            }
            if !single_words.contains(&candidate) {
                single_words.push(candidate);
            }
        }
        trace!(word = lower, ?pos, count = single_words.len(), "cached synonyms");

        let mut cache = self.cache.write();
        let entry = cache.entry(key).or_insert_with(|| single_words.into());
        Some(Arc::clone(entry))
    }

    /// The cached candidate list for `word`, if one has been written.
    pub fn cached(&self, word: &str, pos: PartOfSpeech) -> Option<Arc<[String]>> {
        self.cache
            .read()
            .get(&(word.to_lowercase(), pos))
            .map(Arc::clone)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }
}
