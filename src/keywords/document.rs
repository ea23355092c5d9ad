// Term-count documents: a `Document` backed by a precomputed index.
//
// Reference documents are built with the same analyzer as the corpus, so a
// term's frequency here is counted over the same token universe the
// extractor scores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::corpus::analyze_corpus;
use super::traits::Document;

/// A reference document represented by its term counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermCountDocument {
    /// Display name (file name or index key)
    pub name: String,
    /// Occurrences of each term in the document
    pub counts: HashMap<String, usize>,
}

impl TermCountDocument {
    /// Count the terms of `text` with the corpus analyzer.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            counts: analyze_corpus(text).word_counts,
        }
    }

    pub fn from_counts(name: impl Into<String>, counts: HashMap<String, usize>) -> Self {
        Self {
            name: name.into(),
            counts,
        }
    }
}

impl Document for TermCountDocument {
    fn term_frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }
}

impl Document for HashMap<String, usize> {
    fn term_frequency(&self, term: &str) -> usize {
        self.get(term).copied().unwrap_or(0)
    }
}

/// Borrow a slice of documents as trait objects for `KeywordExtractor`.
pub fn as_document_set<D: Document>(documents: &[D]) -> Vec<&dyn Document> {
    documents.iter().map(|d| d as &dyn Document).collect()
}
