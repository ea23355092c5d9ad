// TF-IDF keyword extraction.
//
// Every distinct corpus token is scored as
//
//   tf  = count(term) / total_words
//   idf = ln(documents / (1 + sum of document frequencies))
//   score = tf * idf
//
// then optionally filtered by a threshold, sorted by score and truncated to
// the first `top_n` terms. The sort is ascending, so by default the first
// `top_n` are the LOWEST-scoring terms. Callers that want the most
// distinctive terms opt into `RankOrder::Descending`.
//
// Working data (word counts, scores) lives only for the duration of a call,
// so one extractor can be shared freely between threads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::corpus::{analyze_corpus, CorpusAnalysis};
use super::traits::{Document, KeywordExtractor};
use crate::error::{KeywordError, Result};

/// Threshold and result size for the TF-IDF extractor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfIdfConfig {
    /// Minimum score a term needs to be kept. Non-positive disables filtering.
    pub threshold: f64,
    /// Maximum number of keywords returned. Non-positive selects nothing.
    pub top_n: i64,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            top_n: 10,
        }
    }
}

impl TfIdfConfig {
    /// A config with neither a threshold nor a result size carries no
    /// information and is replaced by the default.
    fn is_unset(&self) -> bool {
        self.threshold <= 0.0 && self.top_n <= 0
    }
}

/// What to do when fewer terms survive than `top_n` requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortfallPolicy {
    /// Return however many terms are available.
    #[default]
    Clamp,
    /// Fail with `KeywordError::InsufficientResults`.
    Error,
}

/// Direction of the score sort before truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    /// Lowest scores first.
    #[default]
    Ascending,
    /// Highest scores first.
    Descending,
}

/// A term together with its TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

/// TF-IDF based keyword extractor, the default `KeywordExtractor`.
#[derive(Debug, Clone, Default)]
pub struct TfIdfExtractor {
    config: TfIdfConfig,
    shortfall: ShortfallPolicy,
    order: RankOrder,
}

impl TfIdfExtractor {
    /// Build an extractor, falling back to the default config when none is
    /// given or when the given one has both fields non-positive.
    pub fn new(config: Option<TfIdfConfig>) -> Self {
        let config = match config {
            None => TfIdfConfig::default(),
            Some(cfg) if cfg.is_unset() => {
                warn!(
                    threshold = cfg.threshold,
                    top_n = cfg.top_n,
                    "TF-IDF config sets neither threshold nor top_n, using defaults"
                );
                TfIdfConfig::default()
            }
            Some(cfg) => cfg,
        };

        Self {
            config,
            shortfall: ShortfallPolicy::default(),
            order: RankOrder::default(),
        }
    }

    pub fn with_shortfall(mut self, shortfall: ShortfallPolicy) -> Self {
        self.shortfall = shortfall;
        self
    }

    pub fn with_order(mut self, order: RankOrder) -> Self {
        self.order = order;
        self
    }

    /// The resolved configuration in effect.
    pub fn config(&self) -> TfIdfConfig {
        self.config
    }

    pub fn order(&self) -> RankOrder {
        self.order
    }

    /// Run the full pipeline and return the selected terms with their scores.
    pub fn score_keywords(
        &self,
        corpus: &str,
        documents: &[&dyn Document],
    ) -> Result<Vec<ScoredTerm>> {
        validate_inputs(corpus, documents)?;

        let analysis = analyze_corpus(corpus);
        let mut scores: HashMap<String, f64> = analysis
            .word_counts
            .keys()
            .map(|term| (term.clone(), tf_idf(term, &analysis, documents)))
            .collect();

        debug!(
            terms = scores.len(),
            total_words = analysis.total_words,
            documents = documents.len(),
            "Scored corpus terms"
        );

        if self.config.threshold > 0.0 {
            scores = filter_by_threshold(scores, self.config.threshold);
            debug!(
                threshold = self.config.threshold,
                remaining = scores.len(),
                "Applied score threshold"
            );
        }

        let mut ranked = rank_terms(scores, self.order);
        let requested = usize::try_from(self.config.top_n).unwrap_or(0);

        if ranked.len() < requested {
            match self.shortfall {
                ShortfallPolicy::Clamp => {
                    debug!(
                        requested,
                        available = ranked.len(),
                        "Fewer terms than top_n, returning all"
                    );
                }
                ShortfallPolicy::Error => {
                    return Err(KeywordError::InsufficientResults {
                        requested,
                        available: ranked.len(),
                    });
                }
            }
        }

        ranked.truncate(requested);
        Ok(ranked)
    }
}

impl KeywordExtractor for TfIdfExtractor {
    fn get_keywords(&self, corpus: &str, documents: &[&dyn Document]) -> Result<Vec<String>> {
        let scored = self.score_keywords(corpus, documents)?;
        Ok(scored.into_iter().map(|s| s.term).collect())
    }
}

/// Reject inputs that would make the arithmetic meaningless
/// (zero tokens for TF, zero documents for IDF).
fn validate_inputs(corpus: &str, documents: &[&dyn Document]) -> Result<()> {
    if corpus.is_empty() {
        return Err(KeywordError::InvalidInput(
            "corpus is empty — nothing to extract keywords from".to_string(),
        ));
    }
    if documents.is_empty() {
        return Err(KeywordError::InvalidInput(
            "document set is empty — IDF needs at least one reference document".to_string(),
        ));
    }
    Ok(())
}

/// Relative frequency of `term` in the analyzed corpus.
pub fn term_frequency(term: &str, analysis: &CorpusAnalysis) -> f64 {
    analysis.count(term) as f64 / analysis.total_words as f64
}

/// `ln(D / (1 + F))` where D is the number of documents and F the summed
/// frequency of `term` across them.
pub fn inverse_document_frequency(term: &str, documents: &[&dyn Document]) -> f64 {
    // Summed as f64 so very large counts cannot overflow.
    let total_frequency: f64 = documents
        .iter()
        .map(|d| d.term_frequency(term) as f64)
        .sum();
    (documents.len() as f64 / (total_frequency + 1.0)).ln()
}

pub fn tf_idf(term: &str, analysis: &CorpusAnalysis, documents: &[&dyn Document]) -> f64 {
    term_frequency(term, analysis) * inverse_document_frequency(term, documents)
}

/// Keep only terms scoring at least `threshold`.
pub fn filter_by_threshold(scores: HashMap<String, f64>, threshold: f64) -> HashMap<String, f64> {
    scores
        .into_iter()
        .filter(|(_, score)| *score >= threshold)
        .collect()
}

/// Sort terms by score in the given direction, ties broken by term text.
pub fn rank_terms(scores: HashMap<String, f64>, order: RankOrder) -> Vec<ScoredTerm> {
    let mut ranked: Vec<ScoredTerm> = scores
        .into_iter()
        .map(|(term, score)| ScoredTerm { term, score })
        .collect();

    ranked.sort_by(|a, b| {
        let by_score = a
            .score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal);
        let by_score = match order {
            RankOrder::Ascending => by_score,
            RankOrder::Descending => by_score.reverse(),
        };
        by_score.then_with(|| a.term.cmp(&b.term))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::document::TermCountDocument;

    fn cat_document() -> TermCountDocument {
        TermCountDocument::from_counts("cats", [("cat".to_string(), 1)].into())
    }

    #[test]
    fn test_default_config() {
        let extractor = TfIdfExtractor::new(None);
        assert_eq!(extractor.config(), TfIdfConfig::default());
        assert_eq!(extractor.config().top_n, 10);
        assert_eq!(extractor.config().threshold, 0.0);
    }

    #[test]
    fn test_unset_config_replaced_by_default() {
        let extractor = TfIdfExtractor::new(Some(TfIdfConfig {
            threshold: -1.0,
            top_n: 0,
        }));
        assert_eq!(extractor.config(), TfIdfConfig::default());
    }

    #[test]
    fn test_partial_config_kept_as_is() {
        let cfg = TfIdfConfig {
            threshold: 0.0,
            top_n: 3,
        };
        assert_eq!(TfIdfExtractor::new(Some(cfg)).config(), cfg);

        let cfg = TfIdfConfig {
            threshold: 0.5,
            top_n: 0,
        };
        assert_eq!(TfIdfExtractor::new(Some(cfg)).config(), cfg);
    }

    #[test]
    fn test_cat_scenario_scores() {
        let analysis = analyze_corpus("the cat sat on the mat");
        let doc = cat_document();
        let docs: Vec<&dyn Document> = vec![&doc];

        let tf = term_frequency("cat", &analysis);
        let idf = inverse_document_frequency("cat", &docs);
        assert!((tf - 1.0 / 6.0).abs() < 1e-12);
        assert!((idf - (0.5f64).ln()).abs() < 1e-12);
        assert!((tf_idf("cat", &analysis, &docs) + 0.1155).abs() < 1e-4);
    }

    #[test]
    fn test_cat_scenario_order() {
        let doc = cat_document();
        let docs: Vec<&dyn Document> = vec![&doc];
        let keywords = TfIdfExtractor::new(None)
            .get_keywords("the cat sat on the mat", &docs)
            .unwrap();
        assert_eq!(keywords, vec!["cat", "mat", "on", "sat", "the"]);
    }

    #[test]
    fn test_descending_order_opt_in() {
        let doc = cat_document();
        let docs: Vec<&dyn Document> = vec![&doc];
        let keywords = TfIdfExtractor::new(None)
            .with_order(RankOrder::Descending)
            .get_keywords("the cat sat on the mat", &docs)
            .unwrap();
        assert_eq!(keywords, vec!["mat", "on", "sat", "the", "cat"]);
    }

    #[test]
    fn test_empty_document_set_is_invalid() {
        let result = TfIdfExtractor::new(None).get_keywords("some words", &[]);
        assert!(matches!(result, Err(KeywordError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_corpus_is_invalid() {
        let doc = cat_document();
        let docs: Vec<&dyn Document> = vec![&doc];
        let result = TfIdfExtractor::new(None).get_keywords("", &docs);
        assert!(matches!(result, Err(KeywordError::InvalidInput(_))));
    }

    #[test]
    fn test_shortfall_error_policy() {
        let doc = cat_document();
        let docs: Vec<&dyn Document> = vec![&doc];
        let result = TfIdfExtractor::new(None)
            .with_shortfall(ShortfallPolicy::Error)
            .get_keywords("a b c", &docs);
        assert_eq!(
            result,
            Err(KeywordError::InsufficientResults {
                requested: 10,
                available: 3
            })
        );
    }

    #[test]
    fn test_non_positive_top_n_selects_nothing() {
        let doc = cat_document();
        let docs: Vec<&dyn Document> = vec![&doc];
        let extractor = TfIdfExtractor::new(Some(TfIdfConfig {
            threshold: 0.01,
            top_n: -4,
        }));
        assert!(extractor.get_keywords("a b c", &docs).unwrap().is_empty());
    }

    #[test]
    fn test_filter_keeps_equal_scores() {
        let scores: HashMap<String, f64> = [
            ("low".to_string(), 0.1),
            ("edge".to_string(), 0.2),
            ("high".to_string(), 0.3),
        ]
        .into();
        let kept = filter_by_threshold(scores, 0.2);
        assert_eq!(kept.len(), 2);
        assert!(kept.contains_key("edge"));
        assert!(!kept.contains_key("low"));
    }

    #[test]
    fn test_rank_ties_broken_by_term() {
        let scores: HashMap<String, f64> = [
            ("b".to_string(), 0.0),
            ("a".to_string(), 0.0),
            ("c".to_string(), -1.0),
        ]
        .into();
        let ranked: Vec<String> = rank_terms(scores, RankOrder::Ascending)
            .into_iter()
            .map(|s| s.term)
            .collect();
        assert_eq!(ranked, vec!["c", "a", "b"]);
    }
}
