//! First-letter case helpers shared by every rewriting stage.

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().to_string() + chars.as_str(),
    }
}

/// Lower-case the opening letter of a sentence that is being demoted to a
/// clause, unless the first word is "I" or an acronym.
pub fn demote_sentence_start(s: &str) -> String {
    let first_word = s.split_whitespace().next().unwrap_or("");
    let word: String = first_word.chars().filter(|c| c.is_alphanumeric()).collect();
    let acronym = word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());
    let contraction = first_word.starts_with("I'") || first_word.starts_with("I\u{2019}");
    if word == "I" || contraction || acronym {
        s.to_string()
    } else {
        lowercase_first(s)
    }
}

/// `replacement` with its first letter in the case of `template`'s first
/// letter. The rest of `replacement` is left alone.
pub fn match_initial_case(template: &str, replacement: &str) -> String {
    match template.chars().next() {
        Some(c) if c.is_uppercase() => capitalize_first(replacement),
        Some(c) if c.is_lowercase() => lowercase_first(replacement),
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_initial_case() {
        assert_eq!(match_initial_case("This paper", "The present study"), "The present study");
        assert_eq!(match_initial_case("this paper", "The present study"), "the present study");
        assert_eq!(match_initial_case("We used", "we employed"), "We employed");
    }

    #[test]
    fn demotion_keeps_pronoun_i_and_acronyms() {
        assert_eq!(demote_sentence_start("The model converged."), "the model converged.");
        assert_eq!(demote_sentence_start("I agree."), "I agree.");
        assert_eq!(demote_sentence_start("NASA funded it."), "NASA funded it.");
    }
}
