// Extractor and document traits — swap-ready abstractions.
//
// The default extractor uses TF-IDF, but anything that can turn a corpus and
// a reference document set into a keyword list can sit behind
// `KeywordExtractor` without changing callers.

use crate::error::Result;

/// A reference document that can report how often a term occurs in it.
pub trait Document {
    /// Occurrences of `term` in this document (0 when absent).
    fn term_frequency(&self, term: &str) -> usize;
}

/// Trait for extracting keywords from a corpus relative to a document set.
pub trait KeywordExtractor {
    /// Analyze `corpus` against `documents` and return the selected keywords.
    fn get_keywords(&self, corpus: &str, documents: &[&dyn Document]) -> Result<Vec<String>>;
}
