// tfidf-keywords: corpus-relative keyword extraction
//
// This is the library root. `keywords` holds the scoring pipeline; the
// remaining modules support the command-line front end.

pub mod config;
pub mod error;
pub mod keywords;
pub mod loader;
pub mod output;
