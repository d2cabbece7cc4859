//! # slovnik-core - vocabulary browser core
//!
//! Non-presentational core of a browser for SKOS vocabularies published as
//! linked data. It builds the SPARQL CONSTRUCT queries that recover a term's
//! neighbourhood, maps CONSTRUCT results into typed records and answers the
//! questions the detail view branches on.
//!
//! ## Modelling idioms
//!
//! A term relates to other terms either through plain `rdfs:domain` /
//! `rdfs:range` on a property, or through OWL existential restrictions on two
//! relational roles (`má-vztažený-prvek-1/2`) of a relation class. The
//! relation queries cover both idioms from both sides.
//!
//! ## Layout
//!
//! ```text
//!   Schema ──► SparqlQuery ──► (remote endpoint | VocabularyStore)
//!                                          │
//!                                          ▼
//!                        TermGraph ──► Term / TermRelations
//!                                          │
//!                                          ▼
//!                          classify / display / search
//! ```

pub mod config;
pub mod display;
pub mod errors;
pub mod ontology;
pub mod search;
pub mod term;

pub use config::BrowserConfig;
pub use display::{
    filter_by_label, generate_styled_snippet, get_relation_position, highlight_match,
    HighlightedEntry, RelationPosition,
};
pub use errors::SlovnikError;
pub use ontology::{Schema, SparqlQuery, TermGraph, VocabularyStore};
pub use search::{resolve_search, route_for_input, SearchOutcome, SearchResult, SearchTarget};
pub use term::{is_property, is_term_empty, RelationItem, Term, TermRelations, Vocabulary, VocabularyTerm};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
