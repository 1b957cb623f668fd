//! Penn-style part-of-speech tagging for the bundled lexicon.
//!
//! Closed-class words come from a fixed table. Open-class words are tagged
//! from the sense inventory (which parts of speech the word can take, and in
//! which inflection), disambiguated by the previous tag. Anything the
//! inventory does not know falls back to suffix heuristics.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::bundled::BundledLexicon;
use super::morphology::Inflection;
use super::{PartOfSpeech, Token};

static CLOSED_CLASS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let groups: &[(&'static str, &[&'static str])] = &[
        ("DT", &[
            "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any",
            "no", "all", "both", "another", "either", "neither",
        ]),
        ("PRP", &["i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "itself", "themselves", "ourselves"]),
        ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
        ("IN", &[
            "of", "in", "on", "at", "for", "with", "by", "from", "about", "into", "over", "after",
            "before", "between", "through", "during", "without", "within", "under", "above",
            "across", "against", "among", "toward", "towards", "upon", "via", "since", "because",
            "although", "though", "whereas", "while", "if", "unless", "than", "as", "like",
            "despite", "per", "whether",
        ]),
        ("TO", &["to"]),
        ("CC", &["and", "or", "but", "nor", "yet", "so"]),
        ("MD", &["can", "could", "may", "might", "must", "shall", "should", "will", "would", "can't", "won't", "cannot"]),
        ("EX", &["there"]),
        ("WDT", &["which"]),
        ("WP", &["who", "whom", "what"]),
        ("WP$", &["whose"]),
        ("WRB", &["when", "where", "why", "how"]),
        ("VB", &["be"]),
        ("VBZ", &["is", "has", "does", "isn't", "doesn't", "hasn't"]),
        ("VBP", &["are", "am", "have", "do", "aren't", "don't", "haven't"]),
        ("VBD", &["was", "were", "had", "did", "wasn't", "weren't", "didn't"]),
        ("VBN", &["been"]),
        ("VBG", &["being", "having"]),
        ("RB", &[
            "not", "also", "very", "too", "only", "just", "then", "here", "now", "however",
            "therefore", "thus", "hence", "moreover", "furthermore", "additionally", "often",
            "never", "always", "still", "already", "even", "quite", "rather", "instead",
            "indeed", "n't",
        ]),
        ("JJ", &["many", "several", "various", "multiple", "other", "such", "same", "few", "own"]),
        ("JJR", &["more", "less"]),
        ("JJS", &["most", "least"]),
        ("CD", &["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"]),
    ];
    let mut m = HashMap::new();
    for &(tag, words) in groups {
        for &w in words {
            m.entry(w).or_insert(tag);
        }
    }
    m
});

const BE_HAVE_FORMS: &[&str] = &[
    "be", "is", "are", "am", "was", "were", "been", "being", "has", "have", "had", "having",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence", "ship", "ure", "ogy", "er", "or",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ary", "ian",
];

fn punctuation_tag(token: &str) -> Option<&'static str> {
    if token.chars().any(|c| c.is_alphanumeric()) {
        return None;
    }
    Some(match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ";" | ":" | "..." | "--" | "\u{2014}" | "-" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "'" | "\u{201C}" | "\u{201D}" => "''",
        "$" => "$",
        "#" => "#",
        _ => "SYM",
    })
}

fn is_number(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

pub fn tag_words(lexicon: &BundledLexicon, words: &[String]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(words.len());
    for (position, word) in words.iter().enumerate() {
        let (prev_word, prev_tag) = match tokens.last() {
            Some(t) => (Some(t.text.as_str()), Some(t.tag.as_str())),
            None => (None, None),
        };
        let tag = tag_one(lexicon, word, position, prev_word, prev_tag);
        tokens.push(Token {
            text: word.clone(),
            tag: tag.to_string(),
            position,
        });
    }
    tokens
}

fn tag_one(
    lexicon: &BundledLexicon,
    word: &str,
    position: usize,
    prev_word: Option<&str>,
    prev_tag: Option<&str>,
) -> &'static str {
    if let Some(tag) = punctuation_tag(word) {
        return tag;
    }
    if is_number(word) {
        return "CD";
    }
    let lower = word.to_lowercase();
    if let Some(&tag) = CLOSED_CLASS.get(lower.as_str()) {
        return tag;
    }

    let after_auxiliary = prev_word.is_some_and(|w| BE_HAVE_FORMS.contains(&w.to_lowercase().as_str()));
    let readings = lexicon.readings(&lower);
    let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());

    if readings.is_empty() {
        if capitalized && position > 0 {
            return "NNP";
        }
        return suffix_tag(&lower, prev_tag, after_auxiliary);
    }

    let has = |pos: PartOfSpeech| readings.iter().any(|(p, _)| *p == pos);
    let prev = prev_tag.unwrap_or("");

    let preferred: &[PartOfSpeech] = if matches!(prev, "TO" | "MD") {
        &[PartOfSpeech::Verb, PartOfSpeech::Adverb, PartOfSpeech::Noun, PartOfSpeech::Adjective]
    } else if matches!(prev, "PRP" | "WDT" | "WP" | "EX" | "NN" | "NNS" | "NNP") {
        &[PartOfSpeech::Verb, PartOfSpeech::Noun, PartOfSpeech::Adverb, PartOfSpeech::Adjective]
    } else if matches!(prev, "DT" | "PRP$" | "JJ" | "JJR" | "JJS" | "CD" | "IN" | "POS") {
        &[PartOfSpeech::Noun, PartOfSpeech::Adjective, PartOfSpeech::Verb, PartOfSpeech::Adverb]
    } else if prev.starts_with("VB") || prev == "RB" {
        &[PartOfSpeech::Adjective, PartOfSpeech::Verb, PartOfSpeech::Adverb, PartOfSpeech::Noun]
    } else {
        &[PartOfSpeech::Noun, PartOfSpeech::Verb, PartOfSpeech::Adjective, PartOfSpeech::Adverb]
    };

    let inflected_verb = readings.iter().any(|(p, infl)| {
        *p == PartOfSpeech::Verb
            && matches!(infl, Inflection::Past | Inflection::PastParticiple | Inflection::Gerund)
    });
    let pos = if lower.ends_with("ly") && has(PartOfSpeech::Adverb) {
        PartOfSpeech::Adverb
    } else if inflected_verb && !matches!(prev, "DT" | "PRP$" | "JJ") {
        PartOfSpeech::Verb
    } else {
        preferred.iter().copied().find(|p| has(*p)).unwrap_or(PartOfSpeech::Noun)
    };

    let inflection = readings
        .iter()
        .find(|(p, _)| *p == pos)
        .map(|(_, infl)| *infl)
        .unwrap_or(Inflection::Base);

    match pos {
        PartOfSpeech::Noun => {
            if capitalized && position > 0 {
                "NNP"
            } else if inflection == Inflection::Plural {
                "NNS"
            } else {
                "NN"
            }
        }
        PartOfSpeech::Verb => match inflection {
            Inflection::ThirdSingular => "VBZ",
            Inflection::Gerund => "VBG",
            Inflection::PastParticiple => "VBN",
            Inflection::Past if after_auxiliary => "VBN",
            Inflection::Past => "VBD",
            _ if matches!(prev, "TO" | "MD") || position == 0 => "VB",
            _ => "VBP",
        },
        PartOfSpeech::Adjective => match inflection {
            Inflection::Comparative => "JJR",
            Inflection::Superlative => "JJS",
            _ => "JJ",
        },
        PartOfSpeech::Adverb => "RB",
    }
}

fn suffix_tag(lower: &str, prev_tag: Option<&str>, after_auxiliary: bool) -> &'static str {
    let prev = prev_tag.unwrap_or("");
    if lower.ends_with("ly") {
        return "RB";
    }
    if lower.ends_with("ing") && lower.len() > 4 {
        return "VBG";
    }
    if lower.ends_with("ed") && lower.len() > 3 {
        return if after_auxiliary { "VBN" } else { "VBD" };
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "NN";
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if NOUN_SUFFIXES.iter().any(|s| stem.ends_with(s)) {
            return "NNS";
        }
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "JJ";
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && !lower.ends_with("is") {
        return if matches!(prev, "PRP" | "NN" | "NNP") { "VBZ" } else { "NNS" };
    }
    "NN"
}
