// Error types for keyword extraction.
//
// The library surfaces these as a typed enum so callers can tell bad input
// apart from a short result set. Application code (CLI, loader) wraps them
// in anyhow like everything else.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KeywordError {
    /// The corpus or the document set cannot be scored (e.g. it is empty).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer terms survived filtering than `top_n` asked for.
    /// Only returned under `ShortfallPolicy::Error`.
    #[error("requested {requested} keywords but only {available} terms are available")]
    InsufficientResults { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, KeywordError>;
