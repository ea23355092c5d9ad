// Colored terminal output for keyword lists and corpus statistics.

use colored::Colorize;

use crate::keywords::corpus::CorpusAnalysis;
use crate::keywords::tfidf::{RankOrder, ScoredTerm};

/// Display a ranked keyword list in the terminal.
pub fn display_keywords(keywords: &[ScoredTerm], order: RankOrder) {
    if keywords.is_empty() {
        println!("No keywords selected. Try a lower --threshold or a larger --top-n.");
        return;
    }

    let direction = match order {
        RankOrder::Ascending => "lowest score first",
        RankOrder::Descending => "highest score first",
    };
    println!(
        "\n{}",
        format!("=== Keywords ({} terms, {direction}) ===", keywords.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<32} {:>10}",
        "Rank".dimmed(),
        "Term".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(50).dimmed());

    for (i, keyword) in keywords.iter().enumerate() {
        let score = format!("{:>10.4}", keyword.score);
        let colored_score = if keyword.score > 0.0 {
            score.green()
        } else if keyword.score < 0.0 {
            score.dimmed()
        } else {
            score.normal()
        };
        println!(
            "  {:>4}. {:<32} {}",
            i + 1,
            display_term(&keyword.term),
            colored_score
        );
    }
    println!();
}

/// Display the token counts of an analyzed corpus, most frequent first.
pub fn display_analysis(analysis: &CorpusAnalysis, limit: usize) {
    println!(
        "\n{}",
        format!(
            "=== Corpus: {} tokens, {} distinct ===",
            analysis.total_words,
            analysis.distinct_terms()
        )
        .bold()
    );
    println!();

    let counts = analysis.counts_descending();
    for (term, count) in counts.iter().take(limit) {
        println!("  {:>6}  {}", count, display_term(term));
    }
    if counts.len() > limit {
        println!(
            "  {}",
            format!("... {} more", counts.len() - limit).dimmed()
        );
    }
    println!();
}

/// Empty tokens come from repeated spaces; make them visible.
fn display_term(term: &str) -> String {
    if term.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        term.escape_debug().to_string()
    }
}
