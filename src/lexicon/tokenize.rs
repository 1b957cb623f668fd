use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*(?:\s+|$)"#).unwrap());

static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)+|\w+(?:[-'\u{2019}]\w+)*|\.\.\.|--|\S").unwrap()
});

static ABBREVIATIONS: &[&str] = &[
    "al.", "approx.", "cf.", "dr.", "e.g.", "eq.", "etc.", "fig.", "i.e.", "mr.", "mrs.", "ms.",
    "no.", "prof.", "vs.",
];

const OPENERS: &[&str] = &["(", "[", "{"];
const CLOSERS: &[&str] = &[
    ")", "]", "}", ",", ".", "!", "?", ";", ":", "%", "...", "'", "\u{2019}", "\u{201D}",
];

/// Split `text` into trimmed sentences, each keeping its terminal
/// punctuation. A terminator only ends a sentence when it is followed by
/// whitespace (or the end of the text), the next sentence does not open in
/// lower case, and the word it closes is not a known abbreviation.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(text) {
        if m.end() < text.len() {
            let next = text[m.end()..].chars().next();
            if next.is_some_and(|c| c.is_lowercase()) {
                continue;
            }
        }
        if m.as_str().starts_with('.') && period_is_abbreviation(&text[start..m.start()], &text[m.end()..]) {
            continue;
        }

        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = m.end();
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

/// Whether the period closing `before` belongs to an abbreviation or a
/// name initial rather than ending a sentence. `after` is the text that
/// follows the period.
pub(crate) fn period_is_abbreviation(before: &str, after: &str) -> bool {
    let mut words = before.split_whitespace().rev();
    let Some(word) = words.next() else {
        return false;
    };
    if ABBREVIATIONS.contains(&format!("{}.", word.to_lowercase()).as_str()) {
        return true;
    }
    is_initial(word, words.next(), after.split_whitespace().next())
}

/// A single capital inside a name: "J. Smith", "John F. Kennedy",
/// "J. R. Smith". The letter must sit next to another initial, or follow a
/// capitalized word (or nothing) and precede a capitalized word. "vitamin
/// A." is not an initial.
fn is_initial(word: &str, prev: Option<&str>, next: Option<&str>) -> bool {
    if !is_single_capital(word) {
        return false;
    }
    let dotted_initial = |w: &str| w.strip_suffix('.').is_some_and(is_single_capital);
    if prev.is_some_and(dotted_initial) || next.is_some_and(dotted_initial) {
        return true;
    }
    let capitalized = |w: &str| w.chars().next().is_some_and(char::is_uppercase);
    match prev {
        Some(p) if !capitalized(p) => false,
        _ => next.is_some_and(capitalized),
    }
}

fn is_single_capital(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Words, numbers and single punctuation marks, in order.
pub fn split_words(sentence: &str) -> Vec<String> {
    WORD_RE
        .find_iter(sentence)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reassemble tokens into prose: single spaces between words, nothing before
/// closing punctuation or after opening brackets, straight double quotes
/// alternating between opening and closing.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    let mut quote_open = false;
    let mut glue_next = true;

    for token in tokens {
        let token = token.as_ref();
        let is_quote = token == "\"";
        let closing = CLOSERS.contains(&token) || (is_quote && quote_open);

        if !glue_next && !closing {
            out.push(' ');
        }
        out.push_str(token);

        glue_next = OPENERS.contains(&token) || (is_quote && !quote_open);
        if is_quote {
            quote_open = !quote_open;
        }
    }
    out
}
