// Document set loading — turns files on disk into reference documents.
//
// Two layouts are supported:
//   - a directory of text files, one document per file
//   - a JSON index: { "<doc name>": { "<term>": <count>, ... }, ... }

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::keywords::document::TermCountDocument;

/// Load a document set from a directory or a JSON index file.
pub fn load_documents(path: &Path) -> Result<Vec<TermCountDocument>> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_index(path)
    }
}

/// Read every regular file in `dir` (non-recursive, sorted by file name)
/// as one document. Unreadable files are skipped with a warning.
pub fn load_dir(dir: &Path) -> Result<Vec<TermCountDocument>> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read document directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Documents [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match fs::read_to_string(path) {
            Ok(text) => documents.push(TermCountDocument::from_text(name, &text)),
            Err(e) => {
                warn!(
                    file = %path.display(),
                    error = %e,
                    "Failed to read document, skipping"
                );
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        dir = %dir.display(),
        documents = documents.len(),
        skipped = paths.len() - documents.len(),
        "Loaded document set"
    );

    Ok(documents)
}

/// Parse a JSON term-count index. Documents come back ordered by name.
pub fn load_index(path: &Path) -> Result<Vec<TermCountDocument>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document index {}", path.display()))?;
    let documents = parse_index(&json)
        .with_context(|| format!("Invalid document index {}", path.display()))?;

    info!(
        index = %path.display(),
        documents = documents.len(),
        "Loaded document index"
    );

    Ok(documents)
}

/// Parse the JSON index format from a string.
pub fn parse_index(json: &str) -> Result<Vec<TermCountDocument>> {
    let index: BTreeMap<String, HashMap<String, usize>> = serde_json::from_str(json)?;
    Ok(index
        .into_iter()
        .map(|(name, counts)| TermCountDocument::from_counts(name, counts))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::traits::Document;

    #[test]
    fn test_parse_index_orders_by_name() {
        let json = r#"{ "b": { "cat": 2 }, "a": { "dog": 1 } }"#;
        let docs = parse_index(json).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name, "a");
        assert_eq!(docs[1].term_frequency("cat"), 2);
    }

    #[test]
    fn test_parse_index_rejects_negative_counts() {
        let json = r#"{ "a": { "cat": -1 } }"#;
        assert!(parse_index(json).is_err());
    }

    #[test]
    fn test_load_missing_index_fails() {
        let missing = std::env::temp_dir().join("tfidf_keywords_no_such_index.json");
        assert!(load_documents(&missing).is_err());
    }
}
