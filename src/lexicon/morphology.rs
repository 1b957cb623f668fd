//! Lemmatization and re-inflection for the bundled lexicon.
//!
//! Lemmatization follows the detachment-rule approach: try the exception
//! tables first, then the surface form itself, then strip suffixes per part of
//! speech. Callers keep only the lemmas the sense inventory knows.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::PartOfSpeech;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inflection {
    Base,
    Plural,
    ThirdSingular,
    Past,
    PastParticiple,
    Gerund,
    Comparative,
    Superlative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub lemma: String,
    pub inflection: Inflection,
}

// (base, past, past participle)
static IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("cut", "cut", "cut"),
    ("do", "did", "done"),
    ("draw", "drew", "drawn"),
    ("fall", "fell", "fallen"),
    ("feel", "felt", "felt"),
    ("find", "found", "found"),
    ("get", "got", "got"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grow", "grew", "grown"),
    ("have", "had", "had"),
    ("hold", "held", "held"),
    ("know", "knew", "known"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("let", "let", "let"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("put", "put", "put"),
    ("read", "read", "read"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("set", "set", "set"),
    ("show", "showed", "shown"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("understand", "understood", "understood"),
    ("undertake", "undertook", "undertaken"),
    ("write", "wrote", "written"),
];

// (singular, plural)
static IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("hypothesis", "hypotheses"),
    ("index", "indices"),
    ("man", "men"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("thesis", "theses"),
    ("woman", "women"),
];

// (base, comparative, superlative)
static IRREGULAR_ADJECTIVES: &[(&str, &str, &str)] = &[
    ("bad", "worse", "worst"),
    ("good", "better", "best"),
    ("far", "further", "furthest"),
    ("little", "less", "least"),
    ("many", "more", "most"),
];

static THIRD_SINGULAR_EXCEPTIONS: &[(&str, &str)] = &[
    ("be", "is"),
    ("do", "does"),
    ("go", "goes"),
    ("have", "has"),
];

/// Multi-syllable verbs that still double their final consonant.
static DOUBLING_VERBS: &[&str] = &[
    "admit", "commit", "control", "occur", "omit", "permit", "prefer", "refer", "regret",
    "submit", "transfer",
];

static VERB_EXCEPTIONS: Lazy<HashMap<&'static str, Vec<(&'static str, Inflection)>>> =
    Lazy::new(|| {
        let mut m: HashMap<&'static str, Vec<(&'static str, Inflection)>> = HashMap::new();
        for &(base, past, participle) in IRREGULAR_VERBS {
            m.entry(past).or_default().push((base, Inflection::Past));
            if participle != past {
                m.entry(participle)
                    .or_default()
                    .push((base, Inflection::PastParticiple));
            }
        }
        for &(base, third) in THIRD_SINGULAR_EXCEPTIONS {
            m.entry(third)
                .or_default()
                .push((base, Inflection::ThirdSingular));
        }
        m
    });

static NOUN_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    IRREGULAR_NOUNS
        .iter()
        .map(|&(singular, plural)| (plural, singular))
        .collect()
});

static ADJECTIVE_EXCEPTIONS: Lazy<HashMap<&'static str, (&'static str, Inflection)>> =
    Lazy::new(|| {
        let mut m = HashMap::new();
        for &(base, comparative, superlative) in IRREGULAR_ADJECTIVES {
            m.insert(comparative, (base, Inflection::Comparative));
            m.insert(superlative, (base, Inflection::Superlative));
        }
        m
    });

const NOUN_RULES: &[(&str, &str)] = &[
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("s", ""),
];

const VERB_RULES: &[(&str, &str, Inflection)] = &[
    ("ies", "y", Inflection::ThirdSingular),
    ("es", "e", Inflection::ThirdSingular),
    ("es", "", Inflection::ThirdSingular),
    ("s", "", Inflection::ThirdSingular),
    ("ied", "y", Inflection::Past),
    ("ed", "e", Inflection::Past),
    ("ed", "", Inflection::Past),
    ("ying", "ie", Inflection::Gerund),
    ("ing", "e", Inflection::Gerund),
    ("ing", "", Inflection::Gerund),
];

const ADJECTIVE_RULES: &[(&str, &str, Inflection)] = &[
    ("ier", "y", Inflection::Comparative),
    ("iest", "y", Inflection::Superlative),
    ("er", "e", Inflection::Comparative),
    ("er", "", Inflection::Comparative),
    ("est", "e", Inflection::Superlative),
    ("est", "", Inflection::Superlative),
];

/// Every plausible (lemma, inflection) reading of `word` for `pos`, most
/// specific first. `word` must already be lower case.
pub fn analyze(word: &str, pos: PartOfSpeech) -> Vec<Analysis> {
    let mut out: Vec<Analysis> = Vec::new();
    let mut push = |lemma: String, inflection: Inflection| {
        if !lemma.is_empty() && !out.iter().any(|a| a.lemma == lemma && a.inflection == inflection) {
            out.push(Analysis { lemma, inflection });
        }
    };

    match pos {
        PartOfSpeech::Noun => {
            if let Some(singular) = NOUN_EXCEPTIONS.get(word) {
                push(singular.to_string(), Inflection::Plural);
            }
            push(word.to_string(), Inflection::Base);
            if !word.ends_with("ss") {
                for &(suffix, replacement) in NOUN_RULES {
                    if let Some(stem) = word.strip_suffix(suffix) {
                        push(format!("{stem}{replacement}"), Inflection::Plural);
                    }
                }
            }
        }
        PartOfSpeech::Verb => {
            if let Some(readings) = VERB_EXCEPTIONS.get(word) {
                for &(base, inflection) in readings {
                    push(base.to_string(), inflection);
                }
            }
            push(word.to_string(), Inflection::Base);
            for &(suffix, replacement, inflection) in VERB_RULES {
                if let Some(stem) = word.strip_suffix(suffix) {
                    if inflection == Inflection::ThirdSingular && word.ends_with("ss") {
                        continue;
                    }
                    push(format!("{stem}{replacement}"), inflection);
                    if let Some(undoubled) = undouble(stem) {
                        push(undoubled, inflection);
                    }
                }
            }
        }
        PartOfSpeech::Adjective => {
            if let Some(&(base, inflection)) = ADJECTIVE_EXCEPTIONS.get(word) {
                push(base.to_string(), inflection);
            }
            push(word.to_string(), Inflection::Base);
            for &(suffix, replacement, inflection) in ADJECTIVE_RULES {
                if let Some(stem) = word.strip_suffix(suffix) {
                    push(format!("{stem}{replacement}"), inflection);
                    if let Some(undoubled) = undouble(stem) {
                        push(undoubled, inflection);
                    }
                }
            }
        }
        PartOfSpeech::Adverb => push(word.to_string(), Inflection::Base),
    }
    out
}

/// "stopp" -> "stop"
fn undouble(stem: &str) -> Option<String> {
    let mut rev = stem.chars().rev();
    let (last, before) = (rev.next()?, rev.next()?);
    let doubled = last == before
        && last.is_ascii_alphabetic()
        && !is_vowel(last as u8)
        && last != 's'
        && rev.next().is_some();
    doubled.then(|| stem[..stem.len() - 1].to_string())
}

/// Put `lemma` into `inflection`. Returns `None` when the form would need a
/// periphrastic construction ("more robust") and so cannot stay one token.
pub fn inflect(lemma: &str, inflection: Inflection) -> Option<String> {
    match inflection {
        Inflection::Base => Some(lemma.to_string()),
        Inflection::Plural => Some(
            IRREGULAR_NOUNS
                .iter()
                .find(|(singular, _)| *singular == lemma)
                .map(|(_, plural)| plural.to_string())
                .unwrap_or_else(|| add_s(lemma)),
        ),
        Inflection::ThirdSingular => Some(
            THIRD_SINGULAR_EXCEPTIONS
                .iter()
                .find(|(base, _)| *base == lemma)
                .map(|(_, third)| third.to_string())
                .unwrap_or_else(|| add_s(lemma)),
        ),
        Inflection::Past | Inflection::PastParticiple => {
            if let Some(&(_, past, participle)) =
                IRREGULAR_VERBS.iter().find(|(base, _, _)| *base == lemma)
            {
                let form = if inflection == Inflection::Past { past } else { participle };
                return Some(form.to_string());
            }
            Some(if lemma.ends_with('e') {
                format!("{lemma}d")
            } else if ends_consonant_y(lemma) {
                format!("{}ied", &lemma[..lemma.len() - 1])
            } else if doubles_final_consonant(lemma) {
                format!("{lemma}{}ed", &lemma[lemma.len() - 1..])
            } else {
                format!("{lemma}ed")
            })
        }
        Inflection::Gerund => Some(if let Some(stem) = lemma.strip_suffix("ie") {
            format!("{stem}ying")
        } else if lemma.ends_with('e') && !lemma.ends_with("ee") && lemma.len() > 2 {
            format!("{}ing", &lemma[..lemma.len() - 1])
        } else if doubles_final_consonant(lemma) {
            format!("{lemma}{}ing", &lemma[lemma.len() - 1..])
        } else {
            format!("{lemma}ing")
        }),
        Inflection::Comparative | Inflection::Superlative => {
            if let Some(&(_, comparative, superlative)) =
                IRREGULAR_ADJECTIVES.iter().find(|(base, _, _)| *base == lemma)
            {
                let form = if inflection == Inflection::Comparative {
                    comparative
                } else {
                    superlative
                };
                return Some(form.to_string());
            }
            if syllables(lemma) > 2 {
                return None;
            }
            let suffix = if inflection == Inflection::Comparative { "er" } else { "est" };
            Some(if lemma.ends_with('e') {
                format!("{lemma}{}", &suffix[1..])
            } else if ends_consonant_y(lemma) {
                format!("{}i{suffix}", &lemma[..lemma.len() - 1])
            } else {
                format!("{lemma}{suffix}")
            })
        }
    }
}

fn add_s(word: &str) -> String {
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        format!("{word}es")
    } else if ends_consonant_y(word) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn ends_consonant_y(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes.len() >= 2 && bytes[bytes.len() - 1] == b'y' && !is_vowel(bytes[bytes.len() - 2])
}

fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut in_vowel = false;
    for b in word.bytes() {
        let v = is_vowel(b) || b == b'y';
        if v && !in_vowel {
            count += 1;
        }
        in_vowel = v;
    }
    count.max(1)
}

fn doubles_final_consonant(word: &str) -> bool {
    if DOUBLING_VERBS.contains(&word) {
        return true;
    }
    let bytes = word.as_bytes();
    let n = bytes.len();
    n >= 3
        && syllables(word) == 1
        && !is_vowel(bytes[n - 1])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
        && is_vowel(bytes[n - 2])
        && !is_vowel(bytes[n - 3])
}
