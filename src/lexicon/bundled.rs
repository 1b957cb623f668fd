use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::morphology::{self, Inflection};
use super::{tagger, tokenize, Lexicon, PartOfSpeech, Token};
use crate::error::LexiconError;

static INVENTORY_JSON: &str = include_str!("../../data/lexicon.json");

static SHARED: Lazy<Arc<BundledLexicon>> = Lazy::new(|| {
    Arc::new(BundledLexicon::from_json(INVENTORY_JSON).expect("embedded sense inventory is valid"))
});

#[derive(Debug, Deserialize)]
struct Inventory {
    senses: Vec<SenseRecord>,
}

#[derive(Debug, Deserialize)]
struct SenseRecord {
    id: String,
    lemmas: Vec<String>,
    #[serde(default)]
    hypernym: Option<String>,
}

#[derive(Debug)]
struct Sense {
    id: String,
    pos: PartOfSpeech,
    lemmas: Vec<String>,
    hypernym: Option<usize>,
}

/// Sense inventory with hypernym links, plus the tokenizer and tagger that
/// read from it.
#[derive(Debug)]
pub struct BundledLexicon {
    senses: Vec<Sense>,
    by_id: HashMap<String, usize>,
    by_lemma: HashMap<(String, PartOfSpeech), Vec<usize>>,
}

impl BundledLexicon {
    /// The inventory compiled into the crate, built once per process.
    pub fn shared() -> Arc<BundledLexicon> {
        Arc::clone(&SHARED)
    }

    /// Build from a JSON inventory of the form
    /// `{"senses": [{"id": "dog.n.01", "lemmas": [...], "hypernym": "..."}]}`.
    /// Hypernyms must be declared before the senses that point at them.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let inventory: Inventory =
            serde_json::from_str(json).map_err(|e| LexiconError::Corrupt(e.to_string()))?;

        let mut senses: Vec<Sense> = Vec::with_capacity(inventory.senses.len());
        let mut by_id = HashMap::new();
        let mut by_lemma: HashMap<(String, PartOfSpeech), Vec<usize>> = HashMap::new();

        for record in inventory.senses {
            let pos = record
                .id
                .rsplit('.')
                .nth(1)
                .and_then(PartOfSpeech::from_code)
                .ok_or_else(|| LexiconError::Corrupt(format!("bad sense id {}", record.id)))?;
            let hypernym = match &record.hypernym {
                Some(h) => Some(*by_id.get(h).ok_or_else(|| {
                    LexiconError::Corrupt(format!("{} points at unknown hypernym {h}", record.id))
                })?),
                None => None,
            };
            if by_id.contains_key(&record.id) {
                return Err(LexiconError::Corrupt(format!("duplicate sense {}", record.id)));
            }

            let index = senses.len();
            by_id.insert(record.id.clone(), index);
            for lemma in &record.lemmas {
                by_lemma
                    .entry((lemma.to_lowercase(), pos))
                    .or_default()
                    .push(index);
            }
            senses.push(Sense {
                id: record.id,
                pos,
                lemmas: record.lemmas,
                hypernym,
            });
        }

        Ok(Self {
            senses,
            by_id,
            by_lemma,
        })
    }

    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }

    /// Every (part of speech, inflection) the inventory can read `word` as.
    pub(crate) fn readings(&self, word: &str) -> Vec<(PartOfSpeech, Inflection)> {
        let mut out = Vec::new();
        for pos in PartOfSpeech::ALL {
            for analysis in morphology::analyze(word, pos) {
                if self.by_lemma.contains_key(&(analysis.lemma.clone(), pos)) {
                    out.push((pos, analysis.inflection));
                }
            }
        }
        out
    }

    fn known_analyses(&self, word: &str, pos: PartOfSpeech) -> Vec<morphology::Analysis> {
        morphology::analyze(word, pos)
            .into_iter()
            .filter(|a| self.by_lemma.contains_key(&(a.lemma.clone(), pos)))
            .collect()
    }

    fn sense_indices(&self, word: &str) -> Vec<usize> {
        let mut out: Vec<usize> = Vec::new();
        for pos in PartOfSpeech::ALL {
            for analysis in self.known_analyses(word, pos) {
                if let Some(indices) = self.by_lemma.get(&(analysis.lemma, pos)) {
                    for &i in indices {
                        if !out.contains(&i) {
                            out.push(i);
                        }
                    }
                }
            }
        }
        out
    }

    /// Distance from `index` to each of its ancestors, itself included at 0.
    fn ancestors(&self, index: usize) -> Vec<(usize, usize)> {
        let mut out = vec![(index, 0)];
        let mut current = index;
        let mut depth = 0;
        while let Some(parent) = self.senses[current].hypernym {
            depth += 1;
            out.push((parent, depth));
            current = parent;
        }
        out
    }

    fn lookup(&self, id: &str) -> Result<usize, LexiconError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| LexiconError::UnknownSense(id.to_string()))
    }
}

impl Lexicon for BundledLexicon {
    fn sentences(&self, text: &str) -> Vec<String> {
        tokenize::split_sentences(text)
    }

    fn words(&self, sentence: &str) -> Vec<String> {
        tokenize::split_words(sentence)
    }

    fn tag(&self, words: &[String]) -> Vec<Token> {
        tagger::tag_words(self, words)
    }

    fn synonyms(&self, word: &str, pos: PartOfSpeech) -> Result<Vec<String>, LexiconError> {
        let surface = word.to_lowercase();
        let mut out: Vec<String> = Vec::new();

        for analysis in self.known_analyses(&surface, pos) {
            let Some(indices) = self.by_lemma.get(&(analysis.lemma.clone(), pos)) else {
                continue;
            };
            for &i in indices {
                for lemma in &self.senses[i].lemmas {
                    let lemma = lemma.to_lowercase();
                    if lemma.contains(['_', ' ']) || lemma == analysis.lemma {
                        continue;
                    }
                    let Some(form) = morphology::inflect(&lemma, analysis.inflection) else {
                        continue;
                    };
                    if form != surface && !out.contains(&form) {
                        out.push(form);
                    }
                }
            }
        }
        Ok(out)
    }

    fn senses(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        Ok(self
            .sense_indices(&word.to_lowercase())
            .into_iter()
            .map(|i| self.senses[i].id.clone())
            .collect())
    }

    fn similarity(&self, a: &str, b: &str) -> Result<Option<f64>, LexiconError> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        if a == b {
            return Ok(Some(1.0));
        }
        if self.senses[a].pos != self.senses[b].pos {
            return Ok(None);
        }

        let up_b = self.ancestors(b);
        let distance = self
            .ancestors(a)
            .into_iter()
            .filter_map(|(node, da)| {
                up_b.iter()
                    .find(|(other, _)| *other == node)
                    .map(|(_, db)| da + db)
            })
            .min();

        Ok(distance.map(|d| 1.0 / (d as f64 + 1.0)))
    }
}
