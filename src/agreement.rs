//! Local subject-verb agreement for substituted words.
//!
//! Only the be/have/do families are remapped. Regular verbs and nouns pass
//! through unchanged: no "s" is appended or stripped and noun number is never
//! corrected.

use crate::casing::match_initial_case;
use crate::vocabulary::{
    PLURAL_DETERMINERS, PLURAL_SUBJECTS, SINGULAR_DETERMINERS, THIRD_PERSON_SINGULAR,
};

/// Adjust `candidate` (about to replace a word tagged `tag`) to agree with
/// the word before it. Always returns a non-empty string.
pub fn check_agreement(
    candidate: &str,
    tag: &str,
    prev_word: Option<&str>,
    _next_word: Option<&str>,
    _prev_tag: Option<&str>,
) -> String {
    if candidate.is_empty() {
        return candidate.to_string();
    }
    let prev = prev_word.map(str::to_lowercase);
    let prev = prev.as_deref();
    let lower = candidate.to_lowercase();

    if tag.starts_with("VB") {
        if prev.is_some_and(|p| THIRD_PERSON_SINGULAR.contains(p)) {
            let agreed = match lower.as_str() {
                "be" | "am" | "are" => Some("is"),
                "have" | "has" => Some("has"),
                "do" | "does" => Some("does"),
                _ => None,
            };
            if let Some(agreed) = agreed {
                return match_initial_case(candidate, agreed);
            }
            // No "s" is appended to other verbs.
            return candidate.to_string();
        }
        if prev.is_some_and(|p| PLURAL_SUBJECTS.contains(p)) {
            let agreed = match lower.as_str() {
                "is" => Some("are"),
                "has" => Some("have"),
                "does" => Some("do"),
                _ => None,
            };
            if let Some(agreed) = agreed {
                return match_initial_case(candidate, agreed);
            }
            // A trailing "s" is left in place.
            return candidate.to_string();
        }
    }

    if tag.starts_with("NN")
        && prev.is_some_and(|p| SINGULAR_DETERMINERS.contains(p) || PLURAL_DETERMINERS.contains(p))
    {
        // Noun number is not corrected after determiners.
        return candidate.to_string();
    }

    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_subject_takes_is() {
        assert_eq!(check_agreement("be", "VB", Some("it"), None, Some("PRP")), "is");
        assert_eq!(check_agreement("are", "VBP", Some("This"), None, Some("DT")), "is");
        assert_eq!(check_agreement("have", "VBP", Some("she"), None, Some("PRP")), "has");
        assert_eq!(check_agreement("do", "VBP", Some("each"), None, Some("DT")), "does");
    }

    #[test]
    fn plural_subject_takes_are() {
        assert_eq!(check_agreement("is", "VBZ", Some("they"), None, Some("PRP")), "are");
        assert_eq!(check_agreement("has", "VBZ", Some("Researchers"), None, Some("NNS")), "have");
        assert_eq!(check_agreement("does", "VBZ", Some("we"), None, Some("PRP")), "do");
    }

    #[test]
    fn regular_verbs_are_not_inflected() {
        assert_eq!(check_agreement("employ", "VBP", Some("it"), None, Some("PRP")), "employ");
        assert_eq!(check_agreement("employs", "VBZ", Some("they"), None, Some("PRP")), "employs");
    }

    #[test]
    fn nouns_after_determiners_pass_through() {
        assert_eq!(check_agreement("methods", "NN", Some("a"), None, Some("DT")), "methods");
        assert_eq!(check_agreement("method", "NNS", Some("several"), None, Some("JJ")), "method");
    }
}
