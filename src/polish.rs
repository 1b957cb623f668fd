//! Surface polish: punctuation variation, mechanical grammar cleanup,
//! report-only agreement validation and final capitalization.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::casing::{capitalize_first, match_initial_case};
use crate::lexicon::tokenize::period_is_abbreviation;
use crate::lexicon::Lexicon;
use crate::tuning::{pick, roll, Tuning};
use crate::vocabulary::{
    CONSONANT_SOUND_PREFIXES, CONSONANT_SOUND_WORDS, HOMOPHONE_FIXES, PARENTHETICALS, SILENT_H_WORDS,
};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.!?;:])").unwrap());

static ARTICLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([Aa]n?)\s+([A-Za-z][a-z][\w'-]*)").unwrap());

static CAPITALIZE_AFTER_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])\s+([a-z])").unwrap());

static TRAILING_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.!?])\s*$").unwrap());

static HOMOPHONE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    HOMOPHONE_FIXES
        .iter()
        .map(|&(pattern, replacement)| (Regex::new(&format!("(?i){pattern}")).unwrap(), replacement))
        .collect()
});

const SENTENCE_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':'];

// ---------------------------------------------------------------------------
// Punctuation variation
// ---------------------------------------------------------------------------

/// Occasional parentheticals, em dashes and exclamation marks.
pub fn vary_punctuation<R: Rng + ?Sized>(
    lexicon: &dyn Lexicon,
    text: &str,
    tuning: &Tuning,
    rng: &mut R,
) -> String {
    lexicon
        .sentences(text)
        .into_iter()
        .map(|sentence| vary_sentence_punctuation(&sentence, tuning, rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn vary_sentence_punctuation<R: Rng + ?Sized>(sentence: &str, tuning: &Tuning, rng: &mut R) -> String {
    let mut words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
    let count = words.len();
    let mut out = sentence.to_string();

    if roll(rng, tuning.parenthetical_probability) && count > tuning.parenthetical_min_words {
        let low = (count / 3).max(2);
        let high = (2 * count / 3).min(count - 2).max(low);
        let at = rng.gen_range(low..=high);
        if roll(rng, tuning.parenthetical_commit_probability) {
            words.insert(at, pick(rng, PARENTHETICALS).to_string());
            out = words.join(" ");
        }
    }

    if roll(rng, tuning.em_dash_probability) && count > tuning.em_dash_min_words {
        out = out.replacen(", ", " \u{2014} ", 1);
    }

    if roll(rng, tuning.exclamation_probability)
        && count > tuning.exclamation_min_words
        && out.ends_with('.')
        && !out.ends_with("..")
    {
        out.pop();
        out.push('!');
    }
    out
}

// ---------------------------------------------------------------------------
// Grammar cleanup
// ---------------------------------------------------------------------------

/// Mechanical cleanup: whitespace, spacing around punctuation, a/an,
/// capitals after sentence ends, a few homophone slips.
pub fn fix_grammar(text: &str) -> String {
    let mut out = WHITESPACE_RE.replace_all(text, " ").into_owned();
    out = SPACE_BEFORE_PUNCT_RE.replace_all(&out, "$1").into_owned();
    out = space_after_punctuation(&out);
    out = fix_articles(&out);
    out = capitalize_after_terminators(&out);
    for (regex, replacement) in HOMOPHONE_RULES.iter() {
        out = regex
            .replace_all(&out, |caps: &Captures| match_initial_case(&caps[0], replacement))
            .into_owned();
    }
    out = WHITESPACE_RE.replace_all(&out, " ").into_owned();
    out = TRAILING_PUNCT_RE.replace(&out, "$1").into_owned();
    out.trim().to_string()
}

/// Insert a space after sentence punctuation glued to the next word. Decimal
/// numbers ("3.5"), dotted abbreviations ("e.g.") and runs of punctuation
/// are left alone.
pub fn space_after_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if !SENTENCE_PUNCTUATION.contains(&c) {
            continue;
        }
        let Some(&next) = chars.get(i + 1) else {
            continue;
        };
        if next.is_whitespace() || !next.is_alphanumeric() {
            continue;
        }
        let prev = i.checked_sub(1).map(|p| chars[p]);
        if prev.is_some_and(|p| p.is_ascii_digit()) && next.is_ascii_digit() {
            continue;
        }
        if c == '.' && next.is_alphabetic() && chars.get(i + 2) == Some(&'.') {
            continue;
        }
        // Single-letter initials: "U.S", "J.Smith".
        let initial = i
            .checked_sub(2)
            .map_or(true, |p| !chars[p].is_alphanumeric());
        if c == '.' && prev.is_some_and(char::is_alphabetic) && initial {
            continue;
        }
        out.push(' ');
    }
    out
}

fn takes_an(word: &str) -> bool {
    let lower = word.to_lowercase();
    if SILENT_H_WORDS.iter().any(|h| lower.starts_with(h)) {
        return true;
    }
    if CONSONANT_SOUND_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return false;
    }
    let head = lower.split('-').next().unwrap_or("");
    if CONSONANT_SOUND_WORDS.contains(&head) {
        return false;
    }
    lower.starts_with(['a', 'e', 'i', 'o', 'u'])
}

/// "a" before vowel sounds becomes "an" and vice versa. The article keeps
/// its capitalization.
pub fn fix_articles(text: &str) -> String {
    ARTICLE_RE
        .replace_all(text, |caps: &Captures| {
            let article = &caps[1];
            let word = &caps[2];
            let wanted = if takes_an(word) { "an" } else { "a" };
            format!("{} {word}", match_initial_case(article, wanted))
        })
        .into_owned()
}

fn capitalize_after_terminators(text: &str) -> String {
    CAPITALIZE_AFTER_END_RE
        .replace_all(text, |caps: &Captures| {
            let whole = caps.get(0).map_or(0, |m| m.start());
            if &caps[1] == "." && period_is_abbreviation(&text[..whole], &caps[2]) {
                caps[0].to_string()
            } else {
                format!("{} {}", &caps[1], caps[2].to_uppercase())
            }
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Grammar validation
// ---------------------------------------------------------------------------

const VALIDATION_SINGULAR: &[&str] = &["he", "she", "it", "this", "that"];
const VALIDATION_PLURAL: &[&str] = &["they", "we", "you", "these", "those"];
const PLURAL_VERB_FORMS: &[&str] = &["are", "were", "have", "do"];
const SINGULAR_VERB_FORMS: &[&str] = &["is", "was", "has", "does"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubjectNumber {
    Singular,
    Plural,
}

/// A subject-verb pair that looks wrong. Reported, never corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgreementIssue {
    pub sentence: usize,
    pub position: usize,
    pub subject: String,
    pub verb: String,
    pub subject_number: SubjectNumber,
}

/// Scan every sentence for a singular subject before a plural verb form
/// and vice versa.
pub fn validate_grammar(lexicon: &dyn Lexicon, text: &str) -> Vec<AgreementIssue> {
    let mut issues = Vec::new();
    for (s, sentence) in lexicon.sentences(text).iter().enumerate() {
        let tokens = lexicon.tokenize(sentence);
        for pair in tokens.windows(2) {
            let (prev, token) = (&pair[0], &pair[1]);
            if !token.tag.starts_with("VB") {
                continue;
            }
            let subject = prev.text.to_lowercase();
            let verb = token.text.to_lowercase();
            let subject_number = if VALIDATION_SINGULAR.contains(&subject.as_str())
                && PLURAL_VERB_FORMS.contains(&verb.as_str())
            {
                SubjectNumber::Singular
            } else if VALIDATION_PLURAL.contains(&subject.as_str())
                && SINGULAR_VERB_FORMS.contains(&verb.as_str())
            {
                SubjectNumber::Plural
            } else {
                continue;
            };
            debug!(sentence = s, subject = %subject, verb = %verb, "possible agreement error");
            issues.push(AgreementIssue {
                sentence: s,
                position: token.position,
                subject,
                verb,
                subject_number,
            });
        }
    }
    issues
}

// ---------------------------------------------------------------------------
// Final capitalization
// ---------------------------------------------------------------------------

/// Capitalize the text and the first letter of every sentence.
pub fn capitalize_sentences(lexicon: &dyn Lexicon, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    lexicon
        .sentences(&capitalize_first(text))
        .iter()
        .map(|s| capitalize_first(s.trim()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
