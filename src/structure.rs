//! Sentence-level rewriting: merging short neighbours, splitting long
//! sentences, inserting discourse transitions and breaking up uniform
//! sentence lengths.
//!
//! Word counts here are whitespace-separated words, not tokens.

use rand::Rng;
use tracing::trace;

use crate::casing::{capitalize_first, demote_sentence_start};
use crate::lexicon::Lexicon;
use crate::tuning::{pick, roll, Tuning};
use crate::vocabulary::{
    TransitionKind, CAUSE_CUES, CONTRAST_CUES, EXISTING_TRANSITIONS, INTERJECTIONS,
    MERGE_CONNECTORS, SPLIT_CONJUNCTIONS, SPLIT_KEPT_CONJUNCTIONS, SPLIT_RELATIVES,
    SPLIT_TRANSITIONS,
};

const TERMINATORS: &[char] = &['.', '!', '?'];

fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

fn bare(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

// ---------------------------------------------------------------------------
// Merge and split
// ---------------------------------------------------------------------------

/// Merge short sentences into their successor and split long ones.
pub fn restructure<R: Rng + ?Sized>(
    lexicon: &dyn Lexicon,
    text: &str,
    tuning: &Tuning,
    rng: &mut R,
) -> String {
    let sentences = lexicon.sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }

    let mut out: Vec<String> = Vec::with_capacity(sentences.len());
    let mut i = 0;
    while i < sentences.len() {
        let sentence = &sentences[i];
        let count = word_count(sentence);

        if count < tuning.merge_max_words
            && i + 1 < sentences.len()
            && roll(rng, tuning.merge_probability)
        {
            let next = &sentences[i + 1];
            if word_count(next) < tuning.merge_next_max_words {
                let connector = pick(rng, MERGE_CONNECTORS);
                trace!(connector, "merging sentences");
                out.push(merge_pair(sentence, next, connector));
                i += 2;
                continue;
            }
        }

        if count > tuning.split_min_words && roll(rng, tuning.split_probability) {
            let (first, second) = split_long(sentence, tuning, rng);
            trace!("splitting long sentence");
            out.push(first);
            out.push(second);
            i += 1;
            continue;
        }

        out.push(sentence.clone());
        i += 1;
    }
    out.join(" ")
}

/// Join `sentence` and `next` with `connector`, dropping the first
/// sentence's terminator and demoting the second's opening letter.
pub fn merge_pair(sentence: &str, next: &str, connector: &str) -> String {
    let head = sentence.trim().trim_end_matches(TERMINATORS);
    format!("{head}{connector} {}", demote_sentence_start(next.trim()))
}

/// Split a long sentence in two near its middle.
///
/// Within the window around the midpoint, and away from either edge, the
/// first word ending in a comma, a conjunction or a relative pronoun decides
/// the cut. "and" is dropped; "but", "or" and relative pronouns open the
/// second half, which then gets no extra transition. Without a candidate the
/// sentence is cut at the midpoint. The first half always ends in terminal
/// punctuation and the second half opens with a capital. A single word
/// cannot be split and comes back with an empty second half.
pub fn split_long<R: Rng + ?Sized>(sentence: &str, tuning: &Tuning, rng: &mut R) -> (String, String) {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < 2 {
        return (sentence.to_string(), String::new());
    }
    let (head, tail) = split_point(&words, tuning);
    let opens_with_connective = tail.first().is_some_and(|w| {
        let lower = bare(w);
        SPLIT_KEPT_CONJUNCTIONS.contains(&lower.as_str()) || SPLIT_RELATIVES.contains(&lower.as_str())
    });

    let mut first = head.join(" ");
    let mut second = capitalize_first(&tail.join(" "));
    if !opens_with_connective
        && roll(rng, tuning.split_transition_probability)
        && !first.trim_end_matches(['.', ',']).is_empty()
    {
        let transition = pick(rng, SPLIT_TRANSITIONS);
        second = format!("{transition} {}", demote_sentence_start(&second));
    }

    if !first.ends_with(TERMINATORS) {
        first = format!("{}.", first.trim_end_matches([',', ';', ':', '.']));
    }
    (first, second)
}

fn split_point<'a>(words: &'a [&'a str], tuning: &Tuning) -> (&'a [&'a str], &'a [&'a str]) {
    let n = words.len();
    let mid = n / 2;
    let start = mid.saturating_sub(tuning.split_window).max(1);
    let end = (mid + tuning.split_window).min(n);

    for j in start..end {
        if j <= tuning.split_margin || j + tuning.split_margin >= n {
            continue;
        }
        let word = words[j];
        if word.ends_with(',') {
            return (&words[..=j], &words[j + 1..]);
        }
        let lower = bare(word);
        if SPLIT_CONJUNCTIONS.contains(&lower.as_str()) {
            return (&words[..j], &words[j + 1..]);
        }
        if SPLIT_KEPT_CONJUNCTIONS.contains(&lower.as_str()) || SPLIT_RELATIVES.contains(&lower.as_str()) {
            return (&words[..j], &words[j..]);
        }
    }
    (&words[..mid], &words[mid..])
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// The transition category suggested by the previous sentence.
pub fn transition_kind<R: Rng + ?Sized>(previous: &str, tuning: &Tuning, rng: &mut R) -> TransitionKind {
    let previous = previous.to_lowercase();
    if CONTRAST_CUES.iter().any(|cue| previous.contains(cue)) {
        TransitionKind::Contrast
    } else if CAUSE_CUES.iter().any(|cue| previous.contains(cue)) {
        TransitionKind::Cause
    } else if roll(rng, tuning.flow_emphasis_probability) {
        TransitionKind::Emphasis
    } else {
        TransitionKind::Addition
    }
}

fn opens_with_transition(sentence: &str) -> bool {
    sentence
        .split_whitespace()
        .next()
        .is_some_and(|w| EXISTING_TRANSITIONS.contains(&bare(w).as_str()))
}

/// Prefix sentences after the first with a transition adverbial.
pub fn add_flow<R: Rng + ?Sized>(lexicon: &dyn Lexicon, text: &str, tuning: &Tuning, rng: &mut R) -> String {
    let sentences = lexicon.sentences(text);
    if sentences.len() < 2 {
        return text.to_string();
    }

    let mut out: Vec<String> = Vec::with_capacity(sentences.len());
    out.push(sentences[0].clone());
    for pair in sentences.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if !roll(rng, tuning.flow_probability) || opens_with_transition(current) {
            out.push(current.clone());
            continue;
        }
        let kind = transition_kind(previous, tuning, rng);
        let transition = pick(rng, kind.phrases());
        trace!(?kind, transition, "adding transition");
        out.push(format!("{transition}, {}", demote_sentence_start(current)));
    }
    out.join(" ")
}

// ---------------------------------------------------------------------------
// Length variation
// ---------------------------------------------------------------------------

/// When sentence lengths are too uniform, follow some longer sentences with
/// a short interjection. Never after the last sentence.
pub fn vary_length<R: Rng + ?Sized>(lexicon: &dyn Lexicon, text: &str, tuning: &Tuning, rng: &mut R) -> String {
    let sentences = lexicon.sentences(text);
    if sentences.len() < tuning.length_min_sentences {
        return text.to_string();
    }

    let lengths: Vec<usize> = sentences.iter().map(|s| word_count(s)).collect();
    let longest = lengths.iter().copied().max().unwrap_or(0);
    let shortest = lengths.iter().copied().min().unwrap_or(0);
    if longest - shortest >= tuning.length_spread_min {
        return text.to_string();
    }

    let last = sentences.len() - 1;
    let mut out: Vec<String> = Vec::with_capacity(sentences.len() + 2);
    for (i, sentence) in sentences.iter().enumerate() {
        out.push(sentence.clone());
        if roll(rng, tuning.interjection_probability)
            && lengths[i] > tuning.interjection_min_words
            && i < last
        {
            out.push(pick(rng, INTERJECTIONS).to_string());
        }
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::lexicon::BundledLexicon;

    fn forced() -> Tuning {
        Tuning {
            split_probability: 1.0,
            ..Tuning::deterministic()
        }
    }

    #[test]
    fn split_prefers_conjunction_near_middle() {
        let sentence = "one two three four five six seven eight nine ten eleven twelve thirteen \
                        fourteen fifteen sixteen and seventeen eighteen nineteen twenty twentyone \
                        twentytwo twentythree twentyfour twentyfive twentysix twentyseven \
                        twentyeight twentynine thirty thirtyone thirtytwo";
        let mut rng = StdRng::seed_from_u64(1);
        let (first, second) = split_long(sentence, &forced(), &mut rng);
        assert!(first.ends_with("sixteen."), "got {first:?}");
        assert!(second.starts_with("Seventeen"), "got {second:?}");
    }

    #[test]
    fn split_keeps_contrastive_conjunction_without_transition() {
        let words: Vec<String> = (0..16).map(|i| format!("w{i}")).collect();
        let sentence = format!("{} but {}", words.join(" "), words.join(" "));
        let tuning = Tuning {
            split_transition_probability: 1.0,
            ..forced()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let (first, second) = split_long(&sentence, &tuning, &mut rng);
        assert!(first.ends_with("w15."), "got {first:?}");
        assert!(second.starts_with("But w0"), "got {second:?}");
        assert_eq!(
            first.split_whitespace().count() + second.split_whitespace().count(),
            33
        );
    }

    #[test]
    fn split_adds_transition_after_dropped_and() {
        let words: Vec<String> = (0..16).map(|i| format!("item{i}")).collect();
        let sentence = format!("{} and {}", words.join(" "), words.join(" "));
        let tuning = Tuning {
            split_transition_probability: 1.0,
            ..forced()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let (first, second) = split_long(&sentence, &tuning, &mut rng);
        assert!(first.ends_with("item15."), "got {first:?}");
        assert!(
            SPLIT_TRANSITIONS.iter().any(|t| second.starts_with(&format!("{t} item0"))),
            "got {second:?}"
        );
    }

    #[test]
    fn split_keeps_relative_pronoun() {
        let words: Vec<String> = (0..16).map(|i| format!("w{i}")).collect();
        let sentence = format!("{} which {}", words.join(" "), words.join(" "));
        let mut rng = StdRng::seed_from_u64(1);
        let (first, second) = split_long(&sentence, &forced(), &mut rng);
        assert!(first.ends_with("w15."), "got {first:?}");
        assert!(second.starts_with("Which w0"), "got {second:?}");
    }

    #[test]
    fn merge_demotes_second_sentence() {
        assert_eq!(
            merge_pair("The model converged.", "The loss stayed flat.", ", and"),
            "The model converged, and the loss stayed flat."
        );
        assert_eq!(
            merge_pair("We ran it twice.", "I checked the logs.", ". Moreover,"),
            "We ran it twice. Moreover, I checked the logs."
        );
    }

    #[test]
    fn flow_skips_existing_transitions() {
        let lexicon = BundledLexicon::shared();
        let tuning = Tuning {
            flow_probability: 1.0,
            ..Tuning::deterministic()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let text = "The test failed. However, the retry passed.";
        assert_eq!(add_flow(lexicon.as_ref(), text, &tuning, &mut rng), text);
    }

    #[test]
    fn flow_uses_contrast_after_contrast_cue() {
        let lexicon = BundledLexicon::shared();
        let tuning = Tuning {
            flow_probability: 1.0,
            ..Tuning::deterministic()
        };
        let mut rng = StdRng::seed_from_u64(9);
        let out = add_flow(
            lexicon.as_ref(),
            "Although the data were noisy, the trend held. The model fit well.",
            &tuning,
            &mut rng,
        );
        let second = out.split(". ").nth(1).unwrap_or_default();
        assert!(
            TransitionKind::Contrast
                .phrases()
                .iter()
                .any(|p| second.starts_with(&format!("{p}, the model"))),
            "got {out:?}"
        );
    }

    #[test]
    fn length_variation_needs_three_sentences() {
        let lexicon = BundledLexicon::shared();
        let tuning = Tuning {
            interjection_probability: 1.0,
            ..Tuning::deterministic()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let text = "The first sentence has exactly nine words in it. The second one does too, more or less.";
        assert_eq!(vary_length(lexicon.as_ref(), text, &tuning, &mut rng), text);
    }

    #[test]
    fn length_variation_interjects_between_uniform_sentences() {
        let lexicon = BundledLexicon::shared();
        let tuning = Tuning {
            interjection_probability: 1.0,
            ..Tuning::deterministic()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let text = "The first sentence here has exactly ten words in it. \
                    The second sentence here has exactly ten words as well. \
                    The third sentence here has exactly ten words to finish.";
        let out = vary_length(lexicon.as_ref(), text, &tuning, &mut rng);
        let sentences = lexicon.sentences(&out);
        assert_eq!(sentences.len(), 5, "got {out:?}");
        assert!(INTERJECTIONS.contains(&sentences[1].as_str()));
        assert!(INTERJECTIONS.contains(&sentences[3].as_str()));
        assert!(sentences[4].starts_with("The third"));
    }
}
