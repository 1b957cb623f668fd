use std::sync::Arc;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::HumanizeError;
use crate::lexicon::{BundledLexicon, Lexicon};
use crate::paraphrase::SentenceParaphraser;
use crate::patterns::{self, PatternCategory};
use crate::polish;
use crate::structure;
use crate::tuning::Tuning;

/// One step of the humanizing pipeline. [`Stage::PIPELINE`] lists them in
/// the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StructureAwareSubstitution,
    Paraphrase,
    AcademicSubstitution,
    Restructure,
    Flow,
    LengthVariation,
    PunctuationVariation,
    ProfessionalTone,
    GrammarCleanup,
    GrammarValidation,
    FinalAcademicSubstitution,
    FinalGrammarCleanup,
    FinalCapitalization,
}

impl Stage {
    pub const PIPELINE: [Stage; 13] = [
        Stage::StructureAwareSubstitution,
        Stage::Paraphrase,
        Stage::AcademicSubstitution,
        Stage::Restructure,
        Stage::Flow,
        Stage::LengthVariation,
        Stage::PunctuationVariation,
        Stage::ProfessionalTone,
        Stage::GrammarCleanup,
        Stage::GrammarValidation,
        Stage::FinalAcademicSubstitution,
        Stage::FinalGrammarCleanup,
        Stage::FinalCapitalization,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::StructureAwareSubstitution => "structure_aware_substitution",
            Stage::Paraphrase => "paraphrase",
            Stage::AcademicSubstitution => "academic_substitution",
            Stage::Restructure => "restructure",
            Stage::Flow => "flow",
            Stage::LengthVariation => "length_variation",
            Stage::PunctuationVariation => "punctuation_variation",
            Stage::ProfessionalTone => "professional_tone",
            Stage::GrammarCleanup => "grammar_cleanup",
            Stage::GrammarValidation => "grammar_validation",
            Stage::FinalAcademicSubstitution => "final_academic_substitution",
            Stage::FinalGrammarCleanup => "final_grammar_cleanup",
            Stage::FinalCapitalization => "final_capitalization",
        }
    }
}

/// The full text-to-text pipeline over one lexicon and one tuning table.
///
/// `Humanizer` is `Send + Sync`; the only interior mutability is the
/// synonym cache. Randomness is supplied per call.
pub struct Humanizer {
    lexicon: Arc<dyn Lexicon>,
    tuning: Tuning,
    paraphraser: SentenceParaphraser,
}

impl Humanizer {
    pub fn new(lexicon: Arc<dyn Lexicon>, tuning: Tuning) -> Self {
        let paraphraser = SentenceParaphraser::new(Arc::clone(&lexicon), &tuning);
        Self {
            lexicon,
            tuning,
            paraphraser,
        }
    }

    /// The embedded lexicon with default tuning.
    pub fn bundled() -> Self {
        Self::new(BundledLexicon::shared(), Tuning::DEFAULT)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    pub fn paraphraser(&self) -> &SentenceParaphraser {
        &self.paraphraser
    }

    /// Resolver candidates for `word` under a Penn tag such as `"NN"` or
    /// `"VB"`.
    pub fn synonyms(&self, word: &str, pos: &str) -> Vec<String> {
        self.paraphraser.resolver().resolve(word, pos, &[])
    }

    pub fn humanize<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<String, HumanizeError> {
        if text.trim().is_empty() {
            return Err(HumanizeError::EmptyInput);
        }
        debug!(chars = text.len(), "humanizing");

        let out = Stage::PIPELINE
            .iter()
            .fold(text.to_string(), |acc, &stage| self.run_stage(stage, &acc, rng));

        debug!(chars = out.len(), "humanized");
        Ok(out)
    }

    /// Run a single stage. Exposed so each stage can be exercised alone.
    pub fn run_stage<R: Rng + ?Sized>(&self, stage: Stage, text: &str, rng: &mut R) -> String {
        trace!(stage = stage.name(), "running stage");
        let lexicon = self.lexicon.as_ref();
        let tuning = &self.tuning;
        match stage {
            Stage::StructureAwareSubstitution => patterns::structure_aware_substitution(text, tuning, rng),
            Stage::Paraphrase => self.paraphrase_text(text, rng),
            Stage::AcademicSubstitution | Stage::FinalAcademicSubstitution => {
                patterns::apply_fixed(text, PatternCategory::Academic)
            }
            Stage::Restructure => structure::restructure(lexicon, text, tuning, rng),
            Stage::Flow => structure::add_flow(lexicon, text, tuning, rng),
            Stage::LengthVariation => structure::vary_length(lexicon, text, tuning, rng),
            Stage::PunctuationVariation => polish::vary_punctuation(lexicon, text, tuning, rng),
            Stage::ProfessionalTone => patterns::apply_fixed(text, PatternCategory::Tone),
            Stage::GrammarCleanup | Stage::FinalGrammarCleanup => polish::fix_grammar(text),
            Stage::GrammarValidation => {
                let issues = polish::validate_grammar(lexicon, text);
                if !issues.is_empty() {
                    debug!(count = issues.len(), "agreement issues left in place");
                }
                text.to_string()
            }
            Stage::FinalCapitalization => polish::capitalize_sentences(lexicon, text),
        }
    }

    /// Paraphrase every sentence longer than the minimum word count.
    fn paraphrase_text<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        self.lexicon
            .sentences(text)
            .iter()
            .map(|sentence| {
                if sentence.split_whitespace().count() > self.tuning.paraphrase_min_words {
                    self.paraphraser.paraphrase(sentence, rng)
                } else {
                    sentence.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
