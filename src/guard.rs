use std::sync::Arc;

use tracing::debug;

use crate::error::LexiconError;
use crate::lexicon::Lexicon;
use crate::tuning::Tuning;

/// How close a candidate's meaning is to the original word, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MeaningScore(pub f64);

impl MeaningScore {
    pub const SAME: MeaningScore = MeaningScore(1.0);
    pub const UNRELATED: MeaningScore = MeaningScore(0.0);
}

/// Accepts a replacement only when the lexicon can vouch for it: a shared
/// sense, or path similarity above the threshold among the leading senses of
/// each word. Unknown words and lookup failures are rejections.
pub struct MeaningGuard {
    lexicon: Arc<dyn Lexicon>,
    threshold: f64,
    sense_depth: usize,
}

impl MeaningGuard {
    pub fn new(lexicon: Arc<dyn Lexicon>, tuning: &Tuning) -> Self {
        Self {
            lexicon,
            threshold: tuning.meaning_threshold,
            sense_depth: tuning.meaning_sense_depth,
        }
    }

    pub fn accepts(&self, original: &str, candidate: &str, _context: &[&str]) -> bool {
        match self.score(original, candidate) {
            Ok(score) => score.0 > self.threshold,
            Err(e) => {
                debug!(original, candidate, error = %e, "meaning check failed, rejecting");
                false
            }
        }
    }

    pub fn score(&self, original: &str, candidate: &str) -> Result<MeaningScore, LexiconError> {
        if original.to_lowercase() == candidate.to_lowercase() {
            return Ok(MeaningScore::SAME);
        }

        let original_senses = self.lexicon.senses(original)?;
        if original_senses.is_empty() {
            return Ok(MeaningScore::UNRELATED);
        }
        let candidate_senses = self.lexicon.senses(candidate)?;
        if candidate_senses.is_empty() {
            return Ok(MeaningScore::UNRELATED);
        }
        if original_senses.iter().any(|s| candidate_senses.contains(s)) {
            return Ok(MeaningScore::SAME);
        }

        let mut best = 0.0f64;
        for a in original_senses.iter().take(self.sense_depth) {
            for b in candidate_senses.iter().take(self.sense_depth) {
                if let Some(similarity) = self.lexicon.similarity(a, b)? {
                    best = best.max(similarity);
                }
            }
        }
        Ok(MeaningScore(best))
    }
}
