// Keyword extraction — corpus analysis, TF-IDF scoring and ranking.

pub mod corpus;
pub mod document;
pub mod tfidf;
pub mod traits;
