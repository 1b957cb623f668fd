use std::sync::Arc;

use rand::Rng;
use tracing::trace;

use crate::agreement::check_agreement;
use crate::casing::match_initial_case;
use crate::guard::MeaningGuard;
use crate::lexicon::{join_tokens, Lexicon, PartOfSpeech, Token};
use crate::resolver::SynonymResolver;
use crate::tuning::{roll, Tuning};
use crate::vocabulary::STOP_WORDS;

/// Word-for-word synonym substitution within one sentence.
///
/// Every content word is offered to the resolver, the candidates are
/// filtered by the meaning guard and agreement-adjusted, and one survivor
/// replaces the word with a part-of-speech dependent probability. Tokens are
/// never inserted or removed.
pub struct SentenceParaphraser {
    lexicon: Arc<dyn Lexicon>,
    resolver: SynonymResolver,
    guard: MeaningGuard,
    noun_verb_substitution: f64,
    modifier_substitution: f64,
}

impl SentenceParaphraser {
    pub fn new(lexicon: Arc<dyn Lexicon>, tuning: &Tuning) -> Self {
        Self {
            resolver: SynonymResolver::new(Arc::clone(&lexicon), tuning),
            guard: MeaningGuard::new(Arc::clone(&lexicon), tuning),
            lexicon,
            noun_verb_substitution: tuning.noun_verb_substitution,
            modifier_substitution: tuning.modifier_substitution,
        }
    }

    pub fn resolver(&self) -> &SynonymResolver {
        &self.resolver
    }

    pub fn guard(&self) -> &MeaningGuard {
        &self.guard
    }

    pub fn paraphrase<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> String {
        let tokens = self.lexicon.tokenize(sentence);
        let words = self.paraphrase_tokens(&tokens, rng);
        let changed = words.iter().zip(&tokens).any(|(w, t)| *w != t.text);
        if changed {
            join_tokens(&words)
        } else {
            sentence.to_string()
        }
    }

    /// One output word per input token.
    pub fn paraphrase_tokens<R: Rng + ?Sized>(&self, tokens: &[Token], rng: &mut R) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let Some(pos) = substitutable(token) else {
                out.push(token.text.clone());
                continue;
            };

            let valid = self.candidates(tokens, i);
            if valid.is_empty() {
                out.push(token.text.clone());
                continue;
            }

            let chance = if pos.is_substantive() {
                self.noun_verb_substitution
            } else {
                self.modifier_substitution
            };
            if roll(rng, chance) {
                let choice = &valid[rng.gen_range(0..valid.len())];
                trace!(word = %token.text, replacement = %choice, "substituted");
                out.push(match_initial_case(&token.text, choice));
            } else {
                out.push(token.text.clone());
            }
        }
        out
    }

    /// Candidates for `tokens[i]` that survive the meaning guard and
    /// agreement, excluding the word itself.
    pub fn candidates(&self, tokens: &[Token], i: usize) -> Vec<String> {
        let token = &tokens[i];
        let lower = token.text.to_lowercase();
        let prev = i.checked_sub(1).map(|p| &tokens[p]);
        let next = tokens.get(i + 1);

        let context: Vec<&str> = tokens[i.saturating_sub(2)..(i + 3).min(tokens.len())]
            .iter()
            .filter(|t| !is_punctuation(&t.text))
            .map(|t| t.text.as_str())
            .collect();

        let mut valid: Vec<String> = Vec::new();
        for candidate in self.resolver.resolve(&token.text, &token.tag, &context) {
            if !self.guard.accepts(&token.text, &candidate, &context) {
                continue;
            }
            let checked = check_agreement(
                &candidate,
                &token.tag,
                prev.map(|t| t.text.as_str()),
                next.map(|t| t.text.as_str()),
                prev.map(|t| t.tag.as_str()),
            );
            if !checked.is_empty() && checked.to_lowercase() != lower && !valid.contains(&checked) {
                valid.push(checked);
            }
        }
        valid
    }
}

fn is_punctuation(word: &str) -> bool {
    !word.chars().any(char::is_alphanumeric)
}

fn substitutable(token: &Token) -> Option<PartOfSpeech> {
    if is_punctuation(&token.text) || STOP_WORDS.contains(token.text.to_lowercase().as_str()) {
        return None;
    }
    PartOfSpeech::from_tag(&token.tag)
}
