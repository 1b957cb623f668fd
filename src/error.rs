use thiserror::Error;

/// Failure surfaced to callers of [`crate::humanize`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HumanizeError {
    #[error("no text provided")]
    EmptyInput,
}

/// Knowledge-base lookup failure. Never escapes the pipeline: the resolver
/// treats it as "no candidates", the meaning guard as "reject".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("lexicon unavailable: {0}")]
    Unavailable(String),
    #[error("unknown sense: {0}")]
    UnknownSense(String),
    #[error("corrupt sense inventory: {0}")]
    Corrupt(String),
}
