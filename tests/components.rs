use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use prose_humanizer::agreement::check_agreement;
use prose_humanizer::guard::{MeaningGuard, MeaningScore};
use prose_humanizer::paraphrase::SentenceParaphraser;
use prose_humanizer::resolver::SynonymResolver;
use prose_humanizer::{BundledLexicon, Lexicon, LexiconError, PartOfSpeech, Token, Tuning};

/// Tokenizes like the bundled lexicon but cannot answer any lookup.
struct FailingLexicon {
    inner: Arc<BundledLexicon>,
}

impl FailingLexicon {
    fn shared() -> Arc<dyn Lexicon> {
        Arc::new(FailingLexicon {
            inner: BundledLexicon::shared(),
        })
    }
}

impl Lexicon for FailingLexicon {
    fn sentences(&self, text: &str) -> Vec<String> {
        self.inner.sentences(text)
    }

    fn words(&self, sentence: &str) -> Vec<String> {
        self.inner.words(sentence)
    }

    fn tag(&self, words: &[String]) -> Vec<Token> {
        self.inner.tag(words)
    }

    fn synonyms(&self, _word: &str, _pos: PartOfSpeech) -> Result<Vec<String>, LexiconError> {
        Err(LexiconError::Unavailable("offline".into()))
    }

    fn senses(&self, _word: &str) -> Result<Vec<String>, LexiconError> {
        Err(LexiconError::Unavailable("offline".into()))
    }

    fn similarity(&self, _a: &str, _b: &str) -> Result<Option<f64>, LexiconError> {
        Err(LexiconError::Unavailable("offline".into()))
    }
}

/// Tokenizes like the bundled lexicon and answers every synonym query with
/// the same fixed list.
struct FixedLexicon {
    inner: Arc<BundledLexicon>,
    synonyms: Vec<String>,
}

impl FixedLexicon {
    fn shared(synonyms: &[&str]) -> Arc<dyn Lexicon> {
        Arc::new(FixedLexicon {
            inner: BundledLexicon::shared(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        })
    }
}

impl Lexicon for FixedLexicon {
    fn sentences(&self, text: &str) -> Vec<String> {
        self.inner.sentences(text)
    }

    fn words(&self, sentence: &str) -> Vec<String> {
        self.inner.words(sentence)
    }

    fn tag(&self, words: &[String]) -> Vec<Token> {
        self.inner.tag(words)
    }

    fn synonyms(&self, _word: &str, _pos: PartOfSpeech) -> Result<Vec<String>, LexiconError> {
        Ok(self.synonyms.clone())
    }

    fn senses(&self, _word: &str) -> Result<Vec<String>, LexiconError> {
        Ok(Vec::new())
    }

    fn similarity(&self, _a: &str, _b: &str) -> Result<Option<f64>, LexiconError> {
        Ok(None)
    }
}

fn bundled() -> Arc<dyn Lexicon> {
    BundledLexicon::shared()
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

#[test]
fn resolver_returns_nothing_for_preserved_terms() {
    let resolver = SynonymResolver::new(bundled(), &Tuning::default());
    assert!(resolver.resolve("hypothesis", "NN", &[]).is_empty());
    assert!(resolver.resolve("Correlation", "NN", &[]).is_empty());
    assert_eq!(resolver.cache_len(), 0);
}

#[test]
fn resolver_returns_curated_entries_verbatim() {
    let resolver = SynonymResolver::new(bundled(), &Tuning::default());
    assert_eq!(
        resolver.resolve("Method", "NN", &[]),
        vec!["approach", "technique", "procedure", "methodology", "framework"]
    );
    // Curated answers do not go through the cache.
    assert_eq!(resolver.cache_len(), 0);
}

#[test]
fn resolver_needs_an_open_class_tag() {
    let resolver = SynonymResolver::new(bundled(), &Tuning::default());
    assert!(resolver.resolve("glad", "DT", &[]).is_empty());
    assert!(resolver.resolve("glad", ",", &[]).is_empty());
    assert_eq!(resolver.cache_len(), 0);
}

#[test]
fn resolver_caches_each_word_once() {
    let resolver = SynonymResolver::new(bundled(), &Tuning::default());
    let first = resolver.resolve("glad", "JJ", &[]);
    let second = resolver.resolve("Glad", "JJ", &[]);
    assert_eq!(first, second);
    assert_eq!(resolver.cache_len(), 1);
    assert!(resolver.cached("glad", PartOfSpeech::Adjective).is_some());
    assert!(resolver.cached("glad", PartOfSpeech::Noun).is_none());
    assert!(first.len() <= 7, "{first:?}");
    assert!(!first.iter().any(|c| c == "glad"));
}

#[test]
fn resolver_treats_lookup_failure_as_no_candidates() {
    let resolver = SynonymResolver::new(FailingLexicon::shared(), &Tuning::default());
    assert!(resolver.resolve("glad", "JJ", &[]).is_empty());
    assert_eq!(resolver.cache_len(), 0, "failures must not be cached");
    // Curated vocabulary does not need the lexicon.
    assert_eq!(resolver.resolve("use", "VB", &[]).len(), 5);
}

#[test]
fn resolver_caps_clean_candidates_at_seven() {
    let clean: Vec<String> = (0..12).map(|i| format!("c{i}")).collect();
    let clean: Vec<&str> = clean.iter().map(String::as_str).collect();
    let resolver = SynonymResolver::new(FixedLexicon::shared(&clean), &Tuning::default());
    assert_eq!(
        resolver.resolve("widget", "NN", &[]),
        vec!["c0", "c1", "c2", "c3", "c4", "c5", "c6"]
    );
}

#[test]
fn resolver_drops_informal_candidates() {
    let lexicon = FixedLexicon::shared(&["stuff", "gadget", "cool", "device", "thing"]);
    let resolver = SynonymResolver::new(lexicon, &Tuning::default());
    assert_eq!(resolver.resolve("widget", "NN", &[]), vec!["gadget", "device"]);
}

#[test]
fn resolver_falls_back_to_five_unfiltered_candidates() {
    let lexicon = FixedLexicon::shared(&["stuff", "cool", "thing", "nice", "good", "bad", "big"]);
    let resolver = SynonymResolver::new(lexicon, &Tuning::default());
    assert_eq!(
        resolver.resolve("widget", "NN", &[]),
        vec!["stuff", "cool", "thing", "nice", "good"]
    );
}

#[test]
fn resolver_skips_phrases_and_the_word_itself() {
    let lexicon = FixedLexicon::shared(&["Widget", "gizmo", "small part", "gizmo", "unit"]);
    let resolver = SynonymResolver::new(lexicon, &Tuning::default());
    assert_eq!(resolver.resolve("widget", "NN", &[]), vec!["gizmo", "unit"]);
}

// ---------------------------------------------------------------------------
// Meaning guard
// ---------------------------------------------------------------------------

#[test]
fn guard_accepts_identical_words_without_lookup() {
    let guard = MeaningGuard::new(FailingLexicon::shared(), &Tuning::default());
    assert!(guard.accepts("Result", "result", &[]));
    assert_eq!(guard.score("data", "DATA"), Ok(MeaningScore::SAME));
}

#[test]
fn guard_rejects_when_lexicon_fails() {
    let guard = MeaningGuard::new(FailingLexicon::shared(), &Tuning::default());
    assert!(!guard.accepts("glad", "happy", &[]));
    assert!(matches!(
        guard.score("glad", "happy"),
        Err(LexiconError::Unavailable(_))
    ));
}

#[test]
fn guard_accepts_shared_sense() {
    let guard = MeaningGuard::new(bundled(), &Tuning::default());
    assert_eq!(guard.score("glad", "happy"), Ok(MeaningScore::SAME));
    assert!(guard.accepts("method", "approach", &[]));
}

#[test]
fn guard_rejects_distant_and_unknown_words() {
    let guard = MeaningGuard::new(bundled(), &Tuning::default());
    let score = guard.score("dog", "justice").unwrap();
    assert!(score.0 < 0.1, "dog/justice scored {score:?}");
    assert!(!guard.accepts("dog", "justice", &[]));
    assert_eq!(guard.score("dog", "qzxv"), Ok(MeaningScore::UNRELATED));
    assert!(!guard.accepts("qzxv", "dog", &[]));
}

#[test]
fn guard_threshold_is_strict() {
    let tuning = Tuning {
        meaning_threshold: 1.0,
        ..Tuning::default()
    };
    let guard = MeaningGuard::new(bundled(), &tuning);
    assert!(!guard.accepts("glad", "happy", &[]), "score must exceed the threshold");
}

// ---------------------------------------------------------------------------
// Agreement
// ---------------------------------------------------------------------------

#[test]
fn agreement_keeps_initial_capital() {
    assert_eq!(check_agreement("Are", "VBP", Some("It"), None, Some("PRP")), "Is");
    assert_eq!(check_agreement("Is", "VBZ", Some("These"), None, Some("DT")), "Are");
}

#[test]
fn agreement_ignores_non_verbs_and_missing_context() {
    assert_eq!(check_agreement("are", "JJ", Some("it"), None, None), "are");
    assert_eq!(check_agreement("are", "VBP", None, None, None), "are");
    assert_eq!(check_agreement("", "VB", Some("it"), None, None), "");
}

// ---------------------------------------------------------------------------
// Paraphraser
// ---------------------------------------------------------------------------

fn forced() -> Tuning {
    Tuning {
        noun_verb_substitution: 1.0,
        modifier_substitution: 1.0,
        ..Tuning::deterministic()
    }
}

#[test]
fn paraphrase_keeps_token_count() {
    let lexicon = bundled();
    let paraphraser = SentenceParaphraser::new(Arc::clone(&lexicon), &forced());
    let tokens = lexicon.tokenize("We used a new method to analyze the data.");
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let words = paraphraser.paraphrase_tokens(&tokens, &mut rng);
        assert_eq!(words.len(), tokens.len());
        assert_eq!(words[0], "We");
        assert_eq!(words[2], "a");
        assert_eq!(words.last().map(String::as_str), Some("."));
    }
}

#[test]
fn paraphrase_forced_replaces_curated_noun() {
    let lexicon = bundled();
    let paraphraser = SentenceParaphraser::new(Arc::clone(&lexicon), &forced());
    let tokens = lexicon.tokenize("We used a new method to analyze the data.");
    let method = tokens.iter().position(|t| t.text == "method").unwrap();
    let curated = ["approach", "technique", "procedure", "methodology", "framework"];

    let mut rng = StdRng::seed_from_u64(4);
    let words = paraphraser.paraphrase_tokens(&tokens, &mut rng);
    assert!(curated.contains(&words[method].as_str()), "got {:?}", words[method]);
}

#[test]
fn paraphrase_candidates_exclude_the_word_itself() {
    let lexicon = bundled();
    let paraphraser = SentenceParaphraser::new(Arc::clone(&lexicon), &forced());
    let tokens = lexicon.tokenize("They were glad about it.");
    let glad = tokens.iter().position(|t| t.text == "glad").unwrap();
    let candidates = paraphraser.candidates(&tokens, glad);
    assert!(!candidates.iter().any(|c| c.eq_ignore_ascii_case("glad")));
}

#[test]
fn paraphrase_returns_sentence_verbatim_when_unchanged() {
    let paraphraser = SentenceParaphraser::new(bundled(), &Tuning::deterministic());
    let mut rng = StdRng::seed_from_u64(0);
    let sentence = "We  ran it ( twice ) .";
    assert_eq!(paraphraser.paraphrase(sentence, &mut rng), sentence);
}

#[test]
fn paraphrase_with_failing_lexicon_changes_nothing() {
    let lexicon = FailingLexicon::shared();
    let paraphraser = SentenceParaphraser::new(Arc::clone(&lexicon), &forced());
    let mut rng = StdRng::seed_from_u64(1);
    // The guard cannot vouch for anything, so nothing is replaced.
    let sentence = "The quick method was glad.";
    assert_eq!(paraphraser.paraphrase(sentence, &mut rng), sentence);
}
