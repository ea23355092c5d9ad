use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use tfidf_keywords::config::Config;
use tfidf_keywords::keywords::corpus::analyze_corpus;
use tfidf_keywords::keywords::document::as_document_set;
use tfidf_keywords::keywords::tfidf::{RankOrder, ShortfallPolicy, TfIdfConfig, TfIdfExtractor};
use tfidf_keywords::output::report::KeywordReport;
use tfidf_keywords::output::terminal;

/// tfidf-keywords: corpus-relative keyword extraction.
///
/// Scores every word of a text against a reference document set with TF-IDF
/// and prints the selected keywords.
#[derive(Parser)]
#[command(name = "tfidf-keywords", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract keywords from a text against a document set
    Extract {
        /// Text to analyze, used verbatim (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file (trailing line endings are dropped, as for stdin)
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Document set: a directory of text files or a JSON term-count index
        #[arg(long)]
        docs: Option<PathBuf>,

        /// Minimum score to keep a term (non-positive disables filtering)
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Maximum number of keywords to return
        #[arg(long, allow_negative_numbers = true)]
        top_n: Option<i64>,

        /// Fail instead of returning fewer than --top-n keywords
        #[arg(long)]
        strict: bool,

        /// Rank highest scores first instead of lowest
        #[arg(long)]
        highest: bool,

        /// Print a JSON report instead of the terminal table
        #[arg(long)]
        json: bool,
    },

    /// Show how a text is tokenized and counted
    Analyze {
        /// Text to analyze, used verbatim (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file (trailing line endings are dropped, as for stdin)
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// How many terms to list (default: 25)
        #[arg(long, default_value = "25")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tfidf_keywords=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            text,
            file,
            docs,
            threshold,
            top_n,
            strict,
            highest,
            json,
        } => {
            let mut config = Config::load()?;
            if docs.is_some() {
                config.docs_path = docs;
            }
            if threshold.is_some() {
                config.threshold = threshold;
            }
            if top_n.is_some() {
                config.top_n = top_n;
            }

            let docs_path = config.require_docs()?.clone();
            let corpus = read_corpus(text, file.as_deref())?;

            let documents = tfidf_keywords::loader::load_documents(&docs_path)?;
            let document_set = as_document_set(&documents);

            let extractor = build_extractor(config.tfidf_config(), strict, highest);
            let resolved = extractor.config();
            info!(
                threshold = resolved.threshold,
                top_n = resolved.top_n,
                documents = document_set.len(),
                "Extracting keywords"
            );

            let keywords = extractor.score_keywords(&corpus, &document_set)?;

            if json {
                let report = KeywordReport::new(
                    &analyze_corpus(&corpus),
                    document_set.len(),
                    extractor.order(),
                    keywords,
                );
                println!("{}", report.to_json()?);
            } else {
                terminal::display_keywords(&keywords, extractor.order());
                if !highest {
                    println!(
                        "{}",
                        "Ranked lowest score first. Use --highest for the most distinctive terms."
                            .dimmed()
                    );
                }
            }
        }

        Commands::Analyze { text, file, limit } => {
            let corpus = read_corpus(text, file.as_deref())?;
            let analysis = analyze_corpus(&corpus);
            terminal::display_analysis(&analysis, limit);
        }
    }

    Ok(())
}

fn build_extractor(config: Option<TfIdfConfig>, strict: bool, highest: bool) -> TfIdfExtractor {
    let shortfall = if strict {
        ShortfallPolicy::Error
    } else {
        ShortfallPolicy::Clamp
    };
    let order = if highest {
        RankOrder::Descending
    } else {
        RankOrder::Ascending
    };
    TfIdfExtractor::new(config)
        .with_shortfall(shortfall)
        .with_order(order)
}

/// Take the corpus from the positional argument, a file, or stdin, in that order.
///
/// File and stdin input lose their trailing line endings; a positional
/// argument is used verbatim.
fn read_corpus(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read corpus from stdin")?;
            buf
        }
    };
    Ok(trim_line_endings(raw))
}

/// Drop trailing `\n`/`\r` so the final line ending doesn't become part of
/// the last token.
fn trim_line_endings(mut text: String) -> String {
    let trimmed_len = text.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    text.truncate(trimmed_len);
    text
}
