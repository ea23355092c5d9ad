// Corpus analysis — naive whitespace tokenization and word counts.
//
// Tokens are produced by splitting on the single space character and nothing
// else. Tabs, newlines and punctuation stay inside tokens, and consecutive
// spaces yield empty tokens which are counted like any other word. Scoring
// assumes exactly this token universe, so don't make it smarter.

use std::collections::HashMap;

/// Word counts and token total derived together from one corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusAnalysis {
    /// Occurrences of each distinct token
    pub word_counts: HashMap<String, usize>,
    /// Number of tokens, duplicates and empty tokens included
    pub total_words: usize,
}

impl CorpusAnalysis {
    /// How many times `term` occurs in the corpus.
    pub fn count(&self, term: &str) -> usize {
        self.word_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct_terms(&self) -> usize {
        self.word_counts.len()
    }

    /// Terms with their counts, most frequent first (ties by term text).
    pub fn counts_descending(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .word_counts
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }
}

/// Split `corpus` on single spaces and count every token.
///
/// Never fails. The empty string analyzes to one empty token.
pub fn analyze_corpus(corpus: &str) -> CorpusAnalysis {
    let mut word_counts: HashMap<String, usize> = HashMap::new();
    let mut total_words = 0;

    for word in corpus.split(' ') {
        *word_counts.entry(word.to_string()).or_insert(0) += 1;
        total_words += 1;
    }

    CorpusAnalysis {
        word_counts,
        total_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts_duplicates() {
        let analysis = analyze_corpus("the cat sat on the mat");
        assert_eq!(analysis.total_words, 6);
        assert_eq!(analysis.distinct_terms(), 5);
        assert_eq!(analysis.count("the"), 2);
        assert_eq!(analysis.count("cat"), 1);
        assert_eq!(analysis.count("dog"), 0);
    }

    #[test]
    fn test_empty_corpus_is_one_empty_token() {
        let analysis = analyze_corpus("");
        assert_eq!(analysis.total_words, 1);
        assert_eq!(analysis.count(""), 1);
    }

    #[test]
    fn test_repeated_spaces_yield_empty_tokens() {
        let analysis = analyze_corpus("a  b ");
        // "a", "", "b", ""
        assert_eq!(analysis.total_words, 4);
        assert_eq!(analysis.count(""), 2);
        assert_eq!(analysis.count("a"), 1);
    }

    #[test]
    fn test_only_spaces_split() {
        let analysis = analyze_corpus("one\ttwo three\nfour");
        assert_eq!(analysis.total_words, 2);
        assert_eq!(analysis.count("one\ttwo"), 1);
        assert_eq!(analysis.count("three\nfour"), 1);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let analysis = analyze_corpus("x y x z  y x");
        let sum: usize = analysis.word_counts.values().sum();
        assert_eq!(sum, analysis.total_words);
    }

    #[test]
    fn test_counts_descending_order() {
        let analysis = analyze_corpus("b a b c a b");
        let counts = analysis.counts_descending();
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }
}
