//! Term classification used to branch the detail view

use crate::ontology::schema::Schema;
use crate::ontology::query::SparqlQuery;

use super::model::Term;

/// Whether the term is a property (object property, relation type or
/// attribute type). Decides which relation query describes it.
pub fn is_property(term: &Term, schema: &Schema) -> bool {
    let markers = schema.property_types();
    term.types.iter().any(|t| markers.contains(&t.as_str()))
}

/// True when nothing beyond the header (label, vocabulary) would render:
/// no broader or narrower terms, no definition, no source. Empty strings
/// count as absent.
pub fn is_term_empty(term: &Term) -> bool {
    term.parent_terms.is_empty()
        && term.sub_terms.is_empty()
        && term.definition.as_deref().map_or(true, str::is_empty)
        && term.source.as_deref().map_or(true, str::is_empty)
}

/// Relation query matching the term's kind
pub fn relations_query(term: &Term, schema: &Schema) -> SparqlQuery {
    if is_property(term, schema) {
        SparqlQuery::property_relations(schema, &term.iri)
    } else {
        SparqlQuery::term_relations(schema, &term.iri)
    }
}
