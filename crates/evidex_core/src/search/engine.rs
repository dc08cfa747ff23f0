//! Substring search engine.
//!
//! # Responsibility
//! - Validate query text and produce the matching corpus subsequence.
//! - Apply optional app/deleted/limit filters after matching.
//!
//! # Invariants
//! - Blank queries are rejected with `SearchError::EmptyQuery`.
//! - No match is an empty `Ok`, never an error.
//! - A record whose text contains the query (case-insensitive) is always
//!   matched before filters apply.

use crate::model::record::{App, Record};
use crate::search::synonyms::expansions_for;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SearchResult<T> = Result<T, SearchError>;

/// Query validation error surfaced to the caller as a user warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    EmptyQuery,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "please enter a search query"),
        }
    }
}

impl Error for SearchError {}

/// Search options for corpus queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// User query text, English, Hindi or Hinglish.
    pub text: String,
    /// Optional originating-app filter.
    pub app: Option<App>,
    /// Whether records recovered from deleted storage are returned.
    pub include_deleted: bool,
    /// Maximum number of hits; `None` returns every match.
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Creates a query with no filters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            app: None,
            include_deleted: true,
            limit: None,
        }
    }
}

/// Returns records matching `query` in corpus order.
pub fn search<'a>(query: &str, corpus: &'a [Record]) -> SearchResult<Vec<&'a Record>> {
    search_with(&SearchQuery::new(query), corpus)
}

/// Returns records matching `query` in corpus order, with filters applied.
pub fn search_with<'a>(
    query: &SearchQuery,
    corpus: &'a [Record],
) -> SearchResult<Vec<&'a Record>> {
    let needle = normalize_query(&query.text)?;
    let expansions = expansions_for(&needle);

    let hits = corpus
        .iter()
        .filter(|record| matches_record(record, &needle, &expansions))
        .filter(|record| query.app.as_ref().map_or(true, |app| &record.app == app))
        .filter(|record| query.include_deleted || !record.deleted)
        .take(query.limit.unwrap_or(usize::MAX))
        .collect();

    Ok(hits)
}

/// Returns whether one record matches an already-lowercased needle.
pub fn matches_record(record: &Record, needle: &str, expansions: &[&str]) -> bool {
    let text = record.text.to_lowercase();
    if text.contains(needle) {
        return true;
    }
    if contains_any(&record.tags, needle) || contains_any(&record.participants, needle) {
        return true;
    }
    expansions.iter().any(|expansion| text.contains(expansion))
}

fn contains_any(values: &[String], needle: &str) -> bool {
    values
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

fn normalize_query(text: &str) -> SearchResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::normalize_query;
    use super::SearchError;

    #[test]
    fn normalize_rejects_whitespace() {
        assert_eq!(normalize_query(" \t\n"), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_query("  UPI Transfer ").unwrap(), "upi transfer");
    }
}
