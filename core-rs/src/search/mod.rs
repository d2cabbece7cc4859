//! Search result handling
//!
//! A full-text search returns one [`SearchResult`] per distinct label. A
//! label shared by several terms is a "word" with multiple meanings and leads
//! to a disambiguation page; a label with a single term leads straight to it.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of suggestions shown under the search bar
pub const SUGGESTION_LIMIT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub label: String,
    /// Label with the matched part marked up by the search index
    pub display_text: String,
    /// Several terms share this label
    pub is_word: bool,
    /// IRIs of the terms carrying the label
    pub items: Vec<String>,
}

/// Outcome of an exact label lookup on the search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchOutcome {
    /// No result carries the searched label
    Miss { label: String },
    /// The label names several terms
    Disambiguation { label: String, items: Vec<String> },
    /// The label names exactly one term
    DirectHit { label: String, iri: String },
}

/// Where confirming a search bar input should lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SearchTarget {
    /// Free text not matching any suggestion: full search page
    Search(String),
    /// Disambiguation page for a shared label
    Disambiguation(String),
    /// Detail page of one term
    Term(String),
}

/// First `limit` results, in the order the index returned them
pub fn suggestions(results: &[SearchResult], limit: usize) -> &[SearchResult] {
    &results[..results.len().min(limit)]
}

/// Resolve the searched label against the results (case-sensitive)
pub fn resolve_search(results: &[SearchResult], label: &str) -> SearchOutcome {
    let outcome = match results.iter().find(|r| r.label == label) {
        None => SearchOutcome::Miss {
            label: label.to_string(),
        },
        Some(found) if found.is_word => SearchOutcome::Disambiguation {
            label: found.label.clone(),
            items: found.items.clone(),
        },
        Some(found) => match found.items.first() {
            Some(iri) => SearchOutcome::DirectHit {
                label: found.label.clone(),
                iri: iri.clone(),
            },
            None => SearchOutcome::Miss {
                label: label.to_string(),
            },
        },
    };

    debug!(label, ?outcome, "resolved search");
    outcome
}

/// Resolve a confirmed search bar input (case-insensitive label match)
///
/// Labels differing only in case collapse to one entry; the last result wins.
pub fn route_for_input(results: &[SearchResult], input: &str) -> SearchTarget {
    let wanted = input.to_lowercase();

    match results.iter().rev().find(|r| r.label.to_lowercase() == wanted) {
        Some(found) if found.is_word => SearchTarget::Disambiguation(found.label.clone()),
        Some(found) => match found.items.first() {
            Some(iri) => SearchTarget::Term(iri.clone()),
            None => SearchTarget::Search(input.to_string()),
        },
        None => SearchTarget::Search(input.to_string()),
    }
}
