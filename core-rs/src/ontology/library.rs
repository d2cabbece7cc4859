/**
 * library.rs
 * Local oxigraph store evaluating the CONSTRUCT queries built in query.rs
 */

use oxigraph::io::RdfFormat;
use oxigraph::model::{Subject, Term as RdfTerm};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{Result, SlovnikError};
use crate::term::classify::relations_query;
use crate::term::model::{types_from_graph, Term, TermRelations, Vocabulary, VocabularyTerm};

use super::graph::{Object, TermGraph};
use super::query::SparqlQuery;
use super::schema::Schema;

/// In-memory vocabulary store
pub struct VocabularyStore {
    store: Store,
    schema: Schema,
    language: Option<String>,
}

impl VocabularyStore {
    pub fn new(schema: Schema) -> Result<Self> {
        let store = Store::new()
            .map_err(|e| SlovnikError::Store(e.to_string()))?;

        Ok(Self {
            store,
            schema,
            language: None,
        })
    }

    /// Prefer labels and definitions in `language` when several are present
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Load Turtle text into the default graph
    pub fn load_turtle(&self, content: &str) -> Result<()> {
        self.store
            .load_from_reader(RdfFormat::Turtle, content.as_bytes())
            .map_err(|e| SlovnikError::Load(e.to_string()))?;

        Ok(())
    }

    /// Load a Turtle file into the default graph
    pub fn load_file(&self, path: &Path) -> Result<()> {
        info!(path = %path.display(), "loading vocabulary data");

        if !path.exists() {
            return Err(SlovnikError::FileNotFound(path.display().to_string()));
        }

        if path.is_dir() {
            return Err(SlovnikError::Load(format!("Path is a directory: {}", path.display())));
        }

        let content = fs::read_to_string(path)?;

        self.store
            .load_from_reader(RdfFormat::Turtle, content.as_bytes())
            .map_err(|e| SlovnikError::Load(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Number of quads in the store
    pub fn len(&self) -> Result<usize> {
        self.store
            .len()
            .map_err(|e| SlovnikError::Store(e.to_string()))
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.store
            .is_empty()
            .map_err(|e| SlovnikError::Store(e.to_string()))
    }

    /// Evaluate a CONSTRUCT query and index the resulting triples
    pub fn construct(&self, query: &SparqlQuery) -> Result<TermGraph> {
        let results = self
            .store
            .query(query.as_str())
            .map_err(|e| SlovnikError::Query(e.to_string()))?;

        let triples = match results {
            QueryResults::Graph(triples) => triples,
            QueryResults::Solutions(_) | QueryResults::Boolean(_) => {
                return Err(SlovnikError::Query(
                    "Expected a CONSTRUCT query".to_string(),
                ));
            }
        };

        let mut graph = TermGraph::new();

        for triple in triples {
            let triple = triple.map_err(|e| SlovnikError::Query(e.to_string()))?;

            let subject = match &triple.subject {
                Subject::NamedNode(node) => node.as_str().to_string(),
                Subject::BlankNode(node) => node.to_string(),
                #[allow(unreachable_patterns)]
                _ => continue,
            };

            let object = match &triple.object {
                RdfTerm::NamedNode(node) => Object::Iri(node.as_str().to_string()),
                RdfTerm::BlankNode(node) => Object::Blank(node.to_string()),
                RdfTerm::Literal(literal) => Object::Literal {
                    value: literal.value().to_string(),
                    language: literal.language().map(str::to_string),
                },
                #[allow(unreachable_patterns)]
                _ => continue,
            };

            graph.insert(subject, triple.predicate.as_str(), object);
        }

        debug!(triples = graph.len(), "constructed graph");
        Ok(graph)
    }

    /// Full term record with its types
    pub fn term(&self, iri: &str) -> Result<Term> {
        let graph = self.construct(&SparqlQuery::term_detail(&self.schema, iri))?;

        let mut term = Term::from_graph(&graph, &self.schema, iri, self.language())
            .ok_or_else(|| SlovnikError::TermNotFound(iri.to_string()))?;

        term.types = self.term_types(iri)?;
        Ok(term)
    }

    /// Non-blank types asserted on a term
    pub fn term_types(&self, iri: &str) -> Result<Vec<String>> {
        let graph = self.construct(&SparqlQuery::term_types(&self.schema, iri))?;
        let mut types = types_from_graph(&graph, &self.schema, iri);

        // The CONSTRUCT template always asserts the concept class; keep it
        // only when the data asserts it too.
        if !self.asserts_type(iri, &self.schema.concept)? {
            types.retain(|t| t != &self.schema.concept);
        }

        Ok(types)
    }

    /// Relations of a fetched term, through the query matching its kind
    pub fn relations(&self, term: &Term) -> Result<TermRelations> {
        let graph = self.construct(&relations_query(term, &self.schema))?;
        Ok(TermRelations::from_graph(&graph, &self.schema, &term.iri, self.language()))
    }

    pub fn term_relations(&self, iri: &str) -> Result<TermRelations> {
        let graph = self.construct(&SparqlQuery::term_relations(&self.schema, iri))?;
        Ok(TermRelations::from_graph(&graph, &self.schema, iri, self.language()))
    }

    pub fn property_relations(&self, iri: &str) -> Result<TermRelations> {
        let graph = self.construct(&SparqlQuery::property_relations(&self.schema, iri))?;
        Ok(TermRelations::from_graph(&graph, &self.schema, iri, self.language()))
    }

    pub fn vocabulary_terms(&self, vocabulary_iri: &str) -> Result<Vec<VocabularyTerm>> {
        let graph = self.construct(&SparqlQuery::vocabulary_terms(&self.schema, vocabulary_iri))?;
        Ok(VocabularyTerm::list_from_graph(&graph, &self.schema, self.language()))
    }

    pub fn vocabularies(&self) -> Result<Vec<Vocabulary>> {
        let graph = self.construct(&SparqlQuery::vocabularies(&self.schema))?;
        Ok(Vocabulary::list_from_graph(&graph, &self.schema, self.language()))
    }

    fn asserts_type(&self, iri: &str, type_iri: &str) -> Result<bool> {
        let query = format!(
            "ASK {{ {} {} {} }}",
            super::query::bind_iri(iri),
            super::query::bind_iri(&self.schema.rdf_type),
            super::query::bind_iri(type_iri)
        );

        match self.store.query(query.as_str()) {
            Ok(QueryResults::Boolean(result)) => Ok(result),
            Ok(_) => Err(SlovnikError::Query("Expected ASK result".to_string())),
            Err(e) => Err(SlovnikError::Query(e.to_string())),
        }
    }
}
