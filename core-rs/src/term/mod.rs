/**
 * term module
 *
 * - model: Term / Vocabulary / TermRelations records read from CONSTRUCT results
 * - classify: property and emptiness checks driving the detail view
 */

pub mod classify;
pub mod model;

pub use classify::{is_property, is_term_empty, relations_query};
pub use model::{types_from_graph, RelationItem, Term, TermRelations, Vocabulary, VocabularyTerm};
