//! Display helpers: search snippets, hierarchy row positions, label
//! highlighting for filtered term lists.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// Length the search index cuts definition snippets at
pub const SNIPPET_LENGTH: usize = 100;

/// Styled definition snippet for a search hit
///
/// Empty unless the match was found in the definition. A snippet that reached
/// [`SNIPPET_LENGTH`] was truncated by the index and gets an ellipsis.
///
/// ```
/// use slovnik_core::display::generate_styled_snippet;
///
/// assert_eq!(generate_styled_snippet("short text", true), "<i> - short text</i>");
/// assert_eq!(generate_styled_snippet("anything", false), "");
/// ```
pub fn generate_styled_snippet(text: &str, is_match_in_definition: bool) -> String {
    styled_snippet_with_limit(text, is_match_in_definition, SNIPPET_LENGTH)
}

/// [`generate_styled_snippet`] with an explicit truncation threshold
pub fn styled_snippet_with_limit(text: &str, is_match_in_definition: bool, limit: usize) -> String {
    if !is_match_in_definition {
        return String::new();
    }

    if text.chars().count() < limit {
        format!("<i> - {}</i>", text)
    } else {
        format!("<i> - {}</i>&hellip;", text)
    }
}

/// Where a row sits in a list of relation items; selects the connector drawn
/// between hierarchy rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationPosition {
    OnlyOne,
    First,
    Middle,
    Last,
    Unknown,
}

impl RelationPosition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnlyOne => "ONLY_ONE",
            Self::First => "FIRST",
            Self::Middle => "MIDDLE",
            Self::Last => "LAST",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for RelationPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of the zero-based `index` in a list of `size` items
///
/// An empty list or an index past the end is `Unknown`.
pub fn get_relation_position(index: usize, size: usize) -> RelationPosition {
    if size == 1 {
        RelationPosition::OnlyOne
    } else if size > 1 && index == 0 {
        RelationPosition::First
    } else if size > 1 && index + 1 < size {
        RelationPosition::Middle
    } else if size > 1 && index + 1 == size {
        RelationPosition::Last
    } else {
        RelationPosition::Unknown
    }
}

/// Wrap the first case-insensitive occurrence of `searched` in `<em>`
///
/// An empty search, or one that does not occur in the label, returns the
/// label unchanged.
pub fn highlight_match(label: &str, searched: &str) -> String {
    if searched.is_empty() {
        return label.to_string();
    }

    let pattern = match RegexBuilder::new(&regex::escape(searched))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return label.to_string(),
    };

    match pattern.find(label) {
        Some(found) => format!(
            "{}<em>{}</em>{}",
            &label[..found.start()],
            found.as_str(),
            &label[found.end()..]
        ),
        None => label.to_string(),
    }
}

/// Anything listed by label in a filterable window
pub trait Labeled {
    fn iri(&self) -> &str;
    fn label(&self) -> &str;
}

impl Labeled for crate::term::VocabularyTerm {
    fn iri(&self) -> &str {
        &self.iri
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for crate::term::Vocabulary {
    fn iri(&self) -> &str {
        &self.iri
    }

    fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.iri)
    }
}

/// Filtered list row with its label already highlighted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedEntry {
    pub iri: String,
    pub label: String,
}

/// Keep items whose label contains `filter` (case-insensitive) and highlight
/// the match; an empty filter keeps everything. Order is preserved.
pub fn filter_by_label<T: Labeled>(items: &[T], filter: &str) -> Vec<HighlightedEntry> {
    let needle = filter.to_lowercase();

    items
        .iter()
        .filter(|item| needle.is_empty() || item.label().to_lowercase().contains(&needle))
        .map(|item| HighlightedEntry {
            iri: item.iri().to_string(),
            label: highlight_match(item.label(), filter),
        })
        .collect()
}
