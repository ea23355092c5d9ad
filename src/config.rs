use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::keywords::tfidf::TfIdfConfig;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override anything set here.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Minimum TF-IDF score to keep a term (KEYWORDS_THRESHOLD)
    pub threshold: Option<f64>,
    /// Maximum number of keywords to return (KEYWORDS_TOP_N)
    pub top_n: Option<i64>,
    /// Default document set: a directory of text files or a JSON index (KEYWORDS_DOCS)
    pub docs_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything is optional. A variable that is set but malformed is an
    /// error rather than being silently ignored.
    pub fn load() -> Result<Self> {
        Ok(Self {
            threshold: parse_var("KEYWORDS_THRESHOLD")?,
            top_n: parse_var("KEYWORDS_TOP_N")?,
            docs_path: env::var("KEYWORDS_DOCS")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }

    /// The extractor config, or None when neither field is set so the
    /// extractor applies its own defaults.
    pub fn tfidf_config(&self) -> Option<TfIdfConfig> {
        if self.threshold.is_none() && self.top_n.is_none() {
            return None;
        }
        let defaults = TfIdfConfig::default();
        Some(TfIdfConfig {
            threshold: self.threshold.unwrap_or(defaults.threshold),
            top_n: self.top_n.unwrap_or(defaults.top_n),
        })
    }

    /// Check that a document set is configured.
    /// Call this before any operation that needs IDF scoring.
    pub fn require_docs(&self) -> Result<&PathBuf> {
        match &self.docs_path {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No document set configured. Pass --docs <path> or set KEYWORDS_DOCS\n\
                 to a directory of text files or a JSON term-count index."
            ),
        }
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("{name} has an invalid value: {raw:?}"))?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
