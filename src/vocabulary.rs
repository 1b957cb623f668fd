//! Static vocabulary and phrase tables.
//!
//! Everything here is data. Regex sources are compiled by
//! [`crate::patterns`]; word sets are exposed as lazily built lookups.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// Curated research vocabulary
// ---------------------------------------------------------------------------

pub static RESEARCH_VOCABULARY: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let entries: &[(&'static str, &'static [&'static str])] = &[
            // Methodology
            ("method", &["approach", "technique", "procedure", "methodology", "framework"]),
            ("study", &["investigation", "research", "examination", "analysis", "inquiry"]),
            ("analyze", &["examine", "investigate", "assess", "evaluate", "scrutinize"]),
            ("show", &["demonstrate", "reveal", "indicate", "illustrate", "exhibit"]),
            ("find", &["discover", "identify", "determine", "establish", "ascertain"]),
            ("prove", &["demonstrate", "establish", "validate", "confirm", "substantiate"]),
            // Evaluative adjectives
            ("important", &["significant", "crucial", "vital", "essential", "paramount"]),
            ("big", &["substantial", "considerable", "significant", "extensive", "substantive"]),
            ("small", &["minimal", "negligible", "marginal", "limited", "modest"]),
            ("good", &["effective", "efficient", "superior", "optimal", "favorable"]),
            ("bad", &["inadequate", "insufficient", "suboptimal", "deficient", "inferior"]),
            // Everyday verbs
            ("use", &["employ", "utilize", "apply", "implement", "adopt"]),
            ("make", &["generate", "produce", "create", "construct", "fabricate"]),
            ("get", &["obtain", "acquire", "retrieve", "derive", "extract"]),
            ("help", &["facilitate", "enable", "assist", "support", "contribute"]),
            ("try", &["attempt", "endeavor", "strive", "seek", "pursue"]),
            ("look", &["examine", "investigate", "explore", "scrutinize", "assess"]),
            ("see", &["observe", "perceive", "detect", "identify", "recognize"]),
            ("think", &["consider", "contemplate", "hypothesize", "postulate", "theorize"]),
            ("know", &["understand", "comprehend", "recognize", "acknowledge", "appreciate"]),
        ];
        entries.iter().copied().collect()
    });

// ---------------------------------------------------------------------------
// Phrase patterns
// ---------------------------------------------------------------------------

pub type PhraseTable = &'static [(&'static str, &'static [&'static str])];

/// Research-paper register: abstract, methodology, results, discussion and
/// conclusion phrasing.
pub static RESEARCH_PATTERNS: PhraseTable = &[
    (r"\bThis paper\b", &["This study", "This research", "This investigation", "This work", "The present study"]),
    (r"\bWe propose\b", &["We present", "We introduce", "We develop", "We put forward", "We advance"]),
    (r"\bWe show\b", &["We demonstrate", "We reveal", "We establish", "We illustrate", "We prove"]),
    (r"\bOur results\b", &["The findings", "The outcomes", "The results", "The data", "The analysis"]),
    (r"\bWe found\b", &["We discovered", "We identified", "We determined", "We established", "We observed"]),
    (r"\bWe used\b", &["We employed", "We utilized", "We applied", "We implemented", "We adopted"]),
    (r"\bWe collected\b", &["We gathered", "We obtained", "We acquired", "We assembled"]),
    (r"\bWe measured\b", &["We quantified", "We assessed", "We evaluated", "We gauged", "We determined"]),
    (r"\bWe tested\b", &["We examined", "We evaluated", "We assessed", "We validated", "We verified"]),
    (r"\bThe results show\b", &["The results demonstrate", "The findings indicate", "The data reveal", "The analysis shows", "The outcomes illustrate"]),
    (r"\bIt was found\b", &["It was discovered", "It was identified", "It was determined", "It was established", "It was observed"]),
    (r"\bWe can see\b", &["It is evident", "It is apparent", "It is clear", "It is observable", "It is discernible"]),
    (r"\bThis means\b", &["This indicates", "This suggests", "This implies", "This denotes", "This signifies"]),
    (r"\bThis suggests\b", &["This indicates", "This implies", "This points to", "This demonstrates", "This reveals"]),
    (r"\bThis could be\b", &["This may be", "This might be", "This potentially is", "This could potentially be"]),
    (r"\bOne possible explanation\b", &["A potential explanation", "One plausible explanation", "A conceivable explanation", "One feasible explanation"]),
    (r"\bIt is possible that\b", &["It is plausible that", "It is conceivable that", "It is feasible that", "It may be that"]),
    (r"\bIn conclusion\b", &["In summary", "To conclude", "To summarize", "In essence", "Overall"]),
    (r"\bTo sum up\b", &["In summary", "To summarize", "In conclusion", "Overall", "In brief"]),
    (r"\bOur study shows\b", &["Our research demonstrates", "Our investigation reveals", "Our analysis indicates", "Our findings show"]),
];

/// Generic machine-writing connectives and filler.
pub static CLICHE_PATTERNS: PhraseTable = &[
    (r"\bIn conclusion\b", &["To summarize", "In summary", "Overall", "In essence", "To wrap up", "Summing up"]),
    (r"\bFurthermore\b", &["Additionally", "Moreover", "Also", "What's more", "Beyond that", "Plus"]),
    (r"\bHowever\b", &["Nevertheless", "Nonetheless", "Yet", "Still", "That said", "On the other hand"]),
    (r"\bTherefore\b", &["Thus", "Hence", "Consequently", "As a result", "So", "For this reason"]),
    (r"\bIt is important to note\b", &["It should be noted", "Notably", "Importantly", "It's worth noting", "Keep in mind", "Remember"]),
    (r"\bThis suggests\b", &["This indicates", "This implies", "This points to", "This shows", "This reveals", "This demonstrates"]),
    (r"\bIn order to\b", &["To", "So as to", "For the purpose of", "With the aim of"]),
    (r"\bDue to the fact that\b", &["Because", "Since", "As", "Given that"]),
    (r"\bIn the event that\b", &["If", "Should", "In case", "When"]),
    (r"\bAt this point in time\b", &["Now", "Currently", "At present", "Right now"]),
    (r"\bIt can be seen that\b", &["We can see", "It's clear", "Evidently", "Obviously"]),
    (r"\bIt is evident that\b", &["Clearly", "Obviously", "It's clear", "Plainly"]),
    (r"\bIn addition\b", &["Also", "Plus", "Moreover", "Additionally", "What's more"]),
    (r"\bOn the other hand\b", &["Conversely", "Alternatively", "In contrast", "Meanwhile"]),
    (r"\bAs a result\b", &["Consequently", "Therefore", "Thus", "So", "Hence"]),
    (r"\bFor instance\b", &["For example", "Such as", "Like", "Including"]),
    (r"\bIn other words\b", &["That is", "Namely", "To put it differently", "Simply put"]),
    (r"\bTo sum up\b", &["In summary", "Overall", "All in all", "In brief"]),
    (r"\bFirst and foremost\b", &["First", "Primarily", "Most importantly", "Above all"]),
    (r"\bLast but not least\b", &["Finally", "Lastly", "In conclusion", "To conclude"]),
];

/// Hedged and throat-clearing constructions rewritten into a firmer register.
pub static HEDGE_PATTERNS: PhraseTable = &[
    (r"\bIt is worth noting that\b", &["Notably", "Importantly", "It is noteworthy that", "It should be emphasized that"]),
    (r"\bIt should be emphasized that\b", &["It is crucial to note", "It is important to recognize", "It must be acknowledged that", "Significantly"]),
    (r"\bIt is crucial to understand that\b", &["It is vital to recognize", "One must understand", "It is essential to note", "Critically"]),
    (r"\bOne can observe that\b", &["It is evident", "It is apparent", "It can be observed that", "It is discernible"]),
    (r"\bIt becomes apparent that\b", &["It is clear", "It is evident", "It emerges that", "It is manifest"]),
    (r"\bIn the context of\b", &["Regarding", "Concerning", "Within the framework of", "In relation to"]),
    (r"\bWith regard to\b", &["Regarding", "Concerning", "Pertaining to", "In relation to"]),
    (r"\bIn terms of\b", &["Regarding", "Concerning", "With respect to", "Pertaining to"]),
    (r"\bIt is necessary to\b", &["It is essential to", "One must", "It is imperative to", "It is required to"]),
    (r"\bIt is essential to\b", &["It is crucial to", "It is vital to", "It is imperative to", "It is necessary to"]),
    (r"\bWe believe\b", &["We posit", "We propose", "We suggest", "We contend", "We argue"]),
    (r"\bWe think\b", &["We hypothesize", "We postulate", "We suggest", "We propose"]),
    (r"\bWe know\b", &["We understand", "We recognize", "It is established", "It is known"]),
];

/// Academic verb and noun forms. Deterministic: every rule always fires.
pub static ACADEMIC_RULES: &[(&str, &str)] = &[
    (r"\bwe see\b", "we observe"),
    (r"\bwe look\b", "we examine"),
    (r"\bwe find\b", "we identify"),
    (r"\bwe show\b", "we demonstrate"),
    (r"\bwe use\b", "we employ"),
    (r"\bwe make\b", "we construct"),
    (r"\bwe get\b", "we obtain"),
    (r"\bwe put\b", "we place"),
    (r"\bwe set\b", "we establish"),
    (r"\bwe give\b", "we provide"),
    (r"\bwe take\b", "we adopt"),
    (r"\bwe keep\b", "we maintain"),
    (r"\bwe let\b", "we allow"),
    (r"\bwe go\b", "we proceed"),
    (r"\bstuff\b", "material"),
    (r"\bthing\b", "element"),
    (r"\bthings\b", "elements"),
    (r"\bway\b", "method"),
    (r"\bways\b", "methods"),
];

/// Informal to academic register, applied unconditionally.
pub static TONE_LEXICON: &[(&str, &str)] = &[
    (r"\bgot\b", "obtained"),
    (r"\bget\b", "obtain"),
    (r"\bgets\b", "obtains"),
    (r"\bgetting\b", "obtaining"),
    (r"\breally\b", "significantly"),
    (r"\bvery\b", "considerably"),
    (r"\ba lot\b", "substantially"),
    (r"\blots of\b", "numerous"),
    (r"\bpretty\b", "fairly"),
    (r"\bkind of\b", "somewhat"),
    (r"\bsort of\b", "somewhat"),
    (r"\bmake sure\b", "ensure"),
    (r"\bfigure out\b", "determine"),
    (r"\bfind out\b", "ascertain"),
    (r"\blook at\b", "examine"),
    (r"\bcheck\b", "verify"),
    (r"\btry\b", "attempt"),
    (r"\buse\b", "employ"),
    (r"\busing\b", "employing"),
    (r"\bused\b", "employed"),
    (r"\bstart\b", "commence"),
    (r"\bbegin\b", "initiate"),
    (r"\bend\b", "conclude"),
    (r"\bfinish\b", "complete"),
    (r"\bgo\b", "proceed"),
    (r"\bgoes\b", "proceeds"),
    (r"\bwent\b", "proceeded"),
    (r"\bsay\b", "state"),
    (r"\bsays\b", "states"),
    (r"\bsaid\b", "stated"),
    (r"\btell\b", "indicate"),
    (r"\btells\b", "indicates"),
    (r"\btold\b", "indicated"),
    (r"\bthink\b", "contend"),
    (r"\bthinks\b", "contends"),
    (r"\bthought\b", "contended"),
    (r"\bknow\b", "recognize"),
    (r"\bknows\b", "recognizes"),
    (r"\bknown\b", "recognized"),
    (r"\bunderstand\b", "comprehend"),
    (r"\bunderstands\b", "comprehends"),
    (r"\bunderstood\b", "comprehended"),
    (r"\bwe did\b", "we conducted"),
    (r"\bwe made\b", "we created"),
    (r"\bwe got\b", "we obtained"),
    (r"\bwe used\b", "we employed"),
];

// ---------------------------------------------------------------------------
// Section-aware tense rules
// ---------------------------------------------------------------------------

pub struct SectionRule {
    pub section: &'static str,
    pub keywords: &'static [&'static str],
    pub rewrites: &'static [(&'static str, &'static str)],
}

pub static SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        section: "abstract",
        keywords: &["abstract", "summary"],
        rewrites: &[(r"\bwas\b", "is"), (r"\bwere\b", "are")],
    },
    SectionRule {
        section: "methodology",
        keywords: &["method", "methodology", "approach", "procedure", "design"],
        rewrites: &[(r"\bwe do\b", "we conducted")],
    },
    SectionRule {
        section: "results",
        keywords: &["result", "finding", "outcome", "data", "analysis"],
        rewrites: &[(r"\bwe show\b", "we demonstrated")],
    },
];

// ---------------------------------------------------------------------------
// Transitions and connectors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Addition,
    Contrast,
    Cause,
    Example,
    Emphasis,
    Time,
    Conclusion,
}

impl TransitionKind {
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            TransitionKind::Addition => &["Furthermore", "Moreover", "Additionally", "In addition", "Also", "Similarly", "Likewise"],
            TransitionKind::Contrast => &["However", "Nevertheless", "Nonetheless", "Conversely", "In contrast", "On the other hand", "Whereas"],
            TransitionKind::Cause => &["Therefore", "Thus", "Hence", "Consequently", "As a result", "Accordingly", "For this reason"],
            TransitionKind::Example => &["For instance", "For example", "Namely", "Specifically", "To illustrate", "In particular"],
            TransitionKind::Emphasis => &["Indeed", "In fact", "Notably", "Importantly", "Significantly", "Crucially", "Essentially"],
            TransitionKind::Time => &["Subsequently", "Thereafter", "Meanwhile", "Simultaneously", "Previously", "Initially"],
            TransitionKind::Conclusion => &["In conclusion", "To summarize", "In summary", "Overall", "In essence", "To conclude"],
        }
    }
}

/// Sentence openers that already read as a transition.
pub static EXISTING_TRANSITIONS: &[&str] = &[
    "however", "furthermore", "moreover", "additionally", "nevertheless", "meanwhile",
    "consequently", "therefore", "thus", "hence", "indeed", "specifically", "particularly",
    "notably", "importantly",
];

pub static CONTRAST_CUES: &[&str] = &["however", "although", "despite", "whereas"];

pub static CAUSE_CUES: &[&str] = &["because", "due to", "as a result", "therefore"];

pub static MERGE_CONNECTORS: &[&str] = &[
    ", and", ", while", ", whereas", ". Additionally,", ". Moreover,", ". Furthermore,",
];

pub static SPLIT_TRANSITIONS: &[&str] = &["Moreover,", "Additionally,", "Furthermore,", "Consequently,"];

/// Dropped when a long sentence is cut at them.
pub static SPLIT_CONJUNCTIONS: &[&str] = &["and"];

/// Kept at the head of the second half when a long sentence is cut at them.
pub static SPLIT_KEPT_CONJUNCTIONS: &[&str] = &["but", "or"];

pub static SPLIT_RELATIVES: &[&str] = &["which", "that", "who", "where"];

pub static PARENTHETICALS: &[&str] = &[
    "(as noted)", "(indeed)", "(clearly)", "(obviously)", "(naturally)", "(of course)",
];

pub static INTERJECTIONS: &[&str] = &[
    "This is significant.", "This matters.", "This is key.", "This stands out.", "This is crucial.",
];

// ---------------------------------------------------------------------------
// Word sets
// ---------------------------------------------------------------------------

fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Research terminology the resolver must never replace.
pub static PRESERVED_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "hypothesis", "hypotheses", "methodology", "methodological", "quantitative",
        "qualitative", "empirical", "theoretical", "framework", "paradigm", "ontology",
        "epistemology", "validity", "reliability", "replicability", "generalizability",
        "causality", "correlation", "statistical", "significance", "p-value",
        "confidence interval", "regression", "analysis", "variable", "variables", "dependent",
        "independent", "control", "experimental", "sample", "population", "data", "dataset",
        "findings", "results", "outcomes", "literature", "review", "citation", "references",
        "bibliography", "abstract", "introduction", "discussion", "conclusion", "appendix",
    ])
});

/// Informal register filtered out of knowledge-base candidates.
pub static INFORMAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "guy", "stuff", "thing", "gonna", "wanna", "gotta", "kinda", "sorta", "yeah", "yep",
        "nope", "cool", "awesome", "totally", "really", "very", "nice", "bad", "good", "big",
        "small", "huge", "tiny", "lots", "tons",
    ])
});

/// Function words the paraphraser never touches.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "this", "that", "these", "those", "of", "in", "on", "at", "to", "for",
    ])
});

pub static THIRD_PERSON_SINGULAR: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&["he", "she", "it", "this", "that", "one", "each", "every", "someone", "anyone"])
});

pub static PLURAL_SUBJECTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&["they", "we", "you", "these", "those", "people", "researchers", "studies"])
});

pub static SINGULAR_DETERMINERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| word_set(&["a", "an", "one", "each", "every"]));

pub static PLURAL_DETERMINERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| word_set(&["many", "several", "various", "multiple"]));

// ---------------------------------------------------------------------------
// Cleanup tables
// ---------------------------------------------------------------------------

/// Words whose initial "h" is silent and so take "an".
pub static SILENT_H_WORDS: &[&str] = &["hour", "honor", "honest", "heir"];

/// Vowel-initial prefixes pronounced with a leading consonant sound, which
/// take "a". Kept narrow: "unintended" and "unimportant" take "an".
pub static CONSONANT_SOUND_PREFIXES: &[&str] = &[
    "unique", "unit", "univers", "unif", "union", "unilateral", "usu", "use", "uti", "eu",
];

/// Whole words (or hyphenated first parts, "one-way") that take "a".
pub static CONSONANT_SOUND_WORDS: &[&str] = &["one", "once"];

pub static HOMOPHONE_FIXES: &[(&str, &str)] = &[
    (r"\btheir\s+is\b", "there is"),
    (r"\btheir\s+are\b", "there are"),
    (r"\byour\s+is\b", "you're"),
    (r"\byour\s+are\b", "you're"),
];
