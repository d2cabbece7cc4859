/**
 * ontology module
 *
 * - namespaces: well-known vocabulary IRIs
 * - schema: explicit IRI configuration passed to every builder
 * - query: SPARQL CONSTRUCT builders
 * - graph: triple index over CONSTRUCT results
 * - library: local oxigraph store evaluating the builders' queries
 */

pub mod graph;
pub mod library;
pub mod namespaces;
pub mod query;
pub mod schema;

pub use graph::{Object, TermGraph};
pub use library::VocabularyStore;
pub use query::{bind_iri, SparqlQuery};
pub use schema::Schema;
