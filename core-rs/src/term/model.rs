//! Read-only term records materialized from CONSTRUCT results

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ontology::graph::TermGraph;
use crate::ontology::schema::Schema;

/// Vocabulary a term belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vocabulary {
    pub iri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Vocabulary {
    fn from_graph(graph: &TermGraph, schema: &Schema, iri: &str, language: Option<&str>) -> Self {
        Self {
            iri: iri.to_string(),
            title: graph.literal(iri, &schema.title, language),
        }
    }

    /// Every vocabulary in a `vocabularies` query result, ordered by IRI
    pub fn list_from_graph(graph: &TermGraph, schema: &Schema, language: Option<&str>) -> Vec<Self> {
        graph
            .subjects_of_type(&schema.rdf_type, &schema.vocabulary)
            .map(|iri| Self::from_graph(graph, schema, iri, language))
            .collect()
    }
}

/// A vocabulary term
///
/// Nested `parent_terms` / `sub_terms` use the same shape but only carry the
/// base fields (label, vocabulary, definition); their own hierarchy lists stay
/// empty because the detail query does not reach further.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub iri: String,
    pub label: String,
    pub vocabulary: Vocabulary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default)]
    pub alt_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub parent_terms: Vec<Term>,
    #[serde(default)]
    pub sub_terms: Vec<Term>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Term {
    /// Build the term rooted at `iri` from a `term_detail` result
    ///
    /// Returns `None` when the graph lacks the header fields (label and
    /// vocabulary), i.e. the term does not exist in the store.
    pub fn from_graph(graph: &TermGraph, schema: &Schema, iri: &str, language: Option<&str>) -> Option<Self> {
        let mut term = Self::base_from_graph(graph, schema, iri, language)?;

        term.alt_labels = graph.literals(iri, &schema.alt_label);
        term.source = graph
            .first_iri(iri, &schema.source)
            .or_else(|| graph.literal(iri, &schema.source, language));
        term.parent_terms = Self::nested(graph, schema, iri, &schema.broader, language);
        term.sub_terms = Self::nested(graph, schema, iri, &schema.narrower, language);
        term.types = graph.iris(iri, &schema.rdf_type);

        Some(term)
    }

    fn base_from_graph(graph: &TermGraph, schema: &Schema, iri: &str, language: Option<&str>) -> Option<Self> {
        let label = graph.literal(iri, &schema.pref_label, language)?;
        let vocabulary_iri = graph.first_iri(iri, &schema.in_vocabulary)?;

        Some(Self {
            iri: iri.to_string(),
            label,
            vocabulary: Vocabulary::from_graph(graph, schema, &vocabulary_iri, language),
            definition: graph.literal(iri, &schema.definition, language),
            alt_labels: Vec::new(),
            source: None,
            parent_terms: Vec::new(),
            sub_terms: Vec::new(),
            types: Vec::new(),
        })
    }

    fn nested(graph: &TermGraph, schema: &Schema, iri: &str, predicate: &str, language: Option<&str>) -> Vec<Self> {
        graph
            .iris(iri, predicate)
            .iter()
            .filter_map(|related| {
                let term = Self::base_from_graph(graph, schema, related, language);
                if term.is_none() {
                    warn!(term = iri, related = related.as_str(), "skipping related term without label or vocabulary");
                }
                term
            })
            .collect()
    }
}

/// Term as listed in a vocabulary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyTerm {
    pub iri: String,
    pub label: String,
}

impl VocabularyTerm {
    /// Terms of a `vocabulary_terms` query result, sorted by label
    pub fn list_from_graph(graph: &TermGraph, schema: &Schema, language: Option<&str>) -> Vec<Self> {
        let mut terms: Vec<Self> = graph
            .subjects_of_type(&schema.rdf_type, &schema.concept)
            .filter_map(|iri| {
                graph
                    .literal(iri, &schema.pref_label, language)
                    .map(|label| Self {
                        iri: iri.to_string(),
                        label,
                    })
            })
            .collect();

        terms.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()).then_with(|| a.iri.cmp(&b.iri)));
        terms
    }
}

/// One side of a relation: the related term and its vocabulary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationItem {
    pub iri: String,
    pub label: String,
    pub vocabulary: String,
}

/// Domain / range neighbourhood of a term or property
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermRelations {
    pub iri: String,
    #[serde(default)]
    pub domain: Vec<RelationItem>,
    #[serde(default)]
    pub range: Vec<RelationItem>,
}

impl TermRelations {
    /// Read a `term_relations` or `property_relations` result anchored at `iri`
    pub fn from_graph(graph: &TermGraph, schema: &Schema, iri: &str, language: Option<&str>) -> Self {
        Self {
            iri: iri.to_string(),
            domain: Self::items(graph, schema, iri, &schema.domain, language),
            range: Self::items(graph, schema, iri, &schema.range, language),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty() && self.range.is_empty()
    }

    fn items(graph: &TermGraph, schema: &Schema, iri: &str, predicate: &str, language: Option<&str>) -> Vec<RelationItem> {
        graph
            .iris(iri, predicate)
            .into_iter()
            .filter_map(|related| {
                let label = graph.literal(&related, &schema.pref_label, language);
                let vocabulary = graph.first_iri(&related, &schema.in_vocabulary);
                match (label, vocabulary) {
                    (Some(label), Some(vocabulary)) => Some(RelationItem {
                        iri: related,
                        label,
                        vocabulary,
                    }),
                    _ => {
                        warn!(anchor = iri, related = related.as_str(), "skipping relation item without label or vocabulary");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Types asserted on `iri` in a `term_types` result
pub fn types_from_graph(graph: &TermGraph, schema: &Schema, iri: &str) -> Vec<String> {
    graph.iris(iri, &schema.rdf_type)
}
