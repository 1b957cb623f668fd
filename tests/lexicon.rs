use prose_humanizer::lexicon::tokenize::{join_tokens, split_sentences, split_words};
use prose_humanizer::{BundledLexicon, Lexicon, LexiconError, PartOfSpeech};

const SMALL_INVENTORY: &str = r#"{
  "senses": [
    {"id": "entity.n.01", "lemmas": ["entity"]},
    {"id": "animal.n.01", "lemmas": ["animal", "beast"], "hypernym": "entity.n.01"},
    {"id": "dog.n.01", "lemmas": ["dog", "domestic_dog", "hound"], "hypernym": "animal.n.01"},
    {"id": "cat.n.01", "lemmas": ["cat", "true cat"], "hypernym": "animal.n.01"},
    {"id": "quick.s.01", "lemmas": ["quick", "fast", "speedy"]}
  ]
}"#;

// ---------------------------------------------------------------------------
// Inventory loading
// ---------------------------------------------------------------------------

#[test]
fn embedded_inventory_loads() {
    let lexicon = BundledLexicon::shared();
    assert!(lexicon.sense_count() > 250, "only {} senses", lexicon.sense_count());
}

#[test]
fn small_inventory_builds() {
    let lexicon = BundledLexicon::from_json(SMALL_INVENTORY).unwrap();
    assert_eq!(lexicon.sense_count(), 5);
    assert_eq!(lexicon.senses("Hounds").unwrap(), vec!["dog.n.01"]);
    assert_eq!(lexicon.senses("speedy").unwrap(), vec!["quick.s.01"]);
}

#[test]
fn malformed_inventories_are_corrupt() {
    let cases = [
        "not json",
        r#"{"senses": [{"id": "dog.x.01", "lemmas": ["dog"]}]}"#,
        r#"{"senses": [{"id": "dog", "lemmas": ["dog"]}]}"#,
        r#"{"senses": [{"id": "dog.n.01", "lemmas": ["dog"], "hypernym": "animal.n.01"}]}"#,
        r#"{"senses": [{"id": "dog.n.01", "lemmas": ["dog"]}, {"id": "dog.n.01", "lemmas": ["hound"]}]}"#,
    ];
    for json in cases {
        assert!(
            matches!(BundledLexicon::from_json(json), Err(LexiconError::Corrupt(_))),
            "accepted {json}"
        );
    }
}

// ---------------------------------------------------------------------------
// Synonyms and senses
// ---------------------------------------------------------------------------

#[test]
fn synonyms_are_inflected_like_the_surface_word() {
    let lexicon = BundledLexicon::shared();
    assert_eq!(
        lexicon.synonyms("used", PartOfSpeech::Verb).unwrap(),
        vec!["utilized", "utilised", "applied", "employed"]
    );
    assert_eq!(
        lexicon.synonyms("uses", PartOfSpeech::Verb).unwrap(),
        vec!["utilizes", "utilises", "applies", "employs"]
    );
}

#[test]
fn synonyms_skip_compounds_and_the_lemma() {
    let lexicon = BundledLexicon::from_json(SMALL_INVENTORY).unwrap();
    assert_eq!(lexicon.synonyms("dog", PartOfSpeech::Noun).unwrap(), vec!["hound"]);
    assert_eq!(lexicon.synonyms("dogs", PartOfSpeech::Noun).unwrap(), vec!["hounds"]);
    assert!(lexicon.synonyms("cat", PartOfSpeech::Noun).unwrap().is_empty());
    assert!(lexicon.synonyms("dog", PartOfSpeech::Verb).unwrap().is_empty());
}

#[test]
fn satellite_senses_count_as_adjectives() {
    let lexicon = BundledLexicon::from_json(SMALL_INVENTORY).unwrap();
    assert_eq!(
        lexicon.synonyms("quick", PartOfSpeech::Adjective).unwrap(),
        vec!["fast", "speedy"]
    );
}

#[test]
fn senses_keep_inventory_order() {
    let lexicon = BundledLexicon::shared();
    assert_eq!(
        lexicon.senses("happy").unwrap(),
        vec!["happy.a.01", "glad.s.02", "felicitous.s.02"]
    );
    assert!(lexicon.senses("qzxv").unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Similarity
// ---------------------------------------------------------------------------

#[test]
fn similarity_follows_hypernym_paths() {
    let lexicon = BundledLexicon::from_json(SMALL_INVENTORY).unwrap();
    assert_eq!(lexicon.similarity("dog.n.01", "dog.n.01").unwrap(), Some(1.0));
    assert_eq!(lexicon.similarity("dog.n.01", "animal.n.01").unwrap(), Some(0.5));
    assert_eq!(lexicon.similarity("dog.n.01", "cat.n.01").unwrap(), Some(1.0 / 3.0));
    assert_eq!(lexicon.similarity("dog.n.01", "quick.s.01").unwrap(), None);
}

#[test]
fn similarity_in_embedded_inventory() {
    let lexicon = BundledLexicon::shared();
    let score = lexicon.similarity("dog.n.01", "justice.n.01").unwrap();
    assert_eq!(score, Some(1.0 / 17.0));
}

#[test]
fn similarity_of_unknown_sense_fails() {
    let lexicon = BundledLexicon::shared();
    assert_eq!(
        lexicon.similarity("dog.n.01", "nothing.n.99"),
        Err(LexiconError::UnknownSense("nothing.n.99".into()))
    );
}

// ---------------------------------------------------------------------------
// Tokenizing and tagging
// ---------------------------------------------------------------------------

#[test]
fn tags_a_simple_sentence() {
    let lexicon = BundledLexicon::shared();
    let tokens = lexicon.tokenize("We used a new method to analyze the data.");
    let tags: Vec<(&str, &str)> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.tag.as_str()))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("We", "PRP"),
            ("used", "VBD"),
            ("a", "DT"),
            ("new", "JJ"),
            ("method", "NN"),
            ("to", "TO"),
            ("analyze", "VB"),
            ("the", "DT"),
            ("data", "NN"),
            (".", "."),
        ]
    );
    assert!(tokens.iter().enumerate().all(|(i, t)| t.position == i));
}

#[test]
fn sentence_split_respects_abbreviations() {
    assert_eq!(
        split_sentences("See Fig. 3 for details. Results follow!  Done"),
        vec!["See Fig. 3 for details.", "Results follow!", "Done"]
    );
    assert_eq!(
        split_sentences("J. Smith ran it, e.g. twice. It worked."),
        vec!["J. Smith ran it, e.g. twice.", "It worked."]
    );
    assert_eq!(split_sentences("Values rose by 2.5 points. Then fell."), vec![
        "Values rose by 2.5 points.",
        "Then fell."
    ]);
    assert!(split_sentences("   ").is_empty());
}

#[test]
fn lone_capital_after_lowercase_word_ends_a_sentence() {
    assert_eq!(
        split_sentences("Patients took vitamin A. The dose was low."),
        vec!["Patients took vitamin A.", "The dose was low."]
    );
    assert_eq!(
        split_sentences("We chose plan b. It worked."),
        vec!["We chose plan b.", "It worked."]
    );
}

#[test]
fn name_initials_do_not_end_a_sentence() {
    assert_eq!(
        split_sentences("The work of J. R. Smith helped. So did John F. Kennedy."),
        vec!["The work of J. R. Smith helped.", "So did John F. Kennedy."]
    );
}

#[test]
fn sentence_split_keeps_closing_quotes() {
    assert_eq!(
        split_sentences("He said \"stop.\" We stopped."),
        vec!["He said \"stop.\"", "We stopped."]
    );
}

#[test]
fn words_and_punctuation_are_separate_tokens() {
    assert_eq!(
        split_words("It's well-known (2.5%) data..."),
        vec!["It's", "well-known", "(", "2.5", "%", ")", "data", "..."]
    );
}

#[test]
fn join_tokens_restores_spacing() {
    let tokens = ["He", "said", "\"", "hello", "\"", "(", "twice", ")", "."];
    assert_eq!(join_tokens(&tokens), "He said \"hello\" (twice).");
    assert_eq!(join_tokens(&["Yes", ",", "it", "works", "..."]), "Yes, it works...");
    assert_eq!(join_tokens::<&str>(&[]), "");
}
