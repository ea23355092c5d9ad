// JSON keyword report, the machine-readable counterpart of the terminal view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::keywords::corpus::CorpusAnalysis;
use crate::keywords::tfidf::{RankOrder, ScoredTerm};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    pub generated_at: DateTime<Utc>,
    /// Tokens in the corpus, duplicates included
    pub corpus_words: usize,
    pub distinct_terms: usize,
    pub document_count: usize,
    pub order: RankOrder,
    pub keywords: Vec<ScoredTerm>,
}

impl KeywordReport {
    pub fn new(
        analysis: &CorpusAnalysis,
        document_count: usize,
        order: RankOrder,
        keywords: Vec<ScoredTerm>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            corpus_words: analysis.total_words,
            distinct_terms: analysis.distinct_terms(),
            document_count,
            order,
            keywords,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
