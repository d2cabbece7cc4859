//! In-memory index over the triples returned by a CONSTRUCT query
//!
//! Subjects, predicates and objects are kept in ordered maps so every list
//! read back from the graph comes out in a stable order.

use std::collections::{BTreeMap, BTreeSet};

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Object {
    Iri(String),
    /// Blank node in `_:id` form, as used for blank subjects
    Blank(String),
    Literal {
        value: String,
        language: Option<String>,
    },
}

impl Object {
    pub fn literal(value: impl Into<String>) -> Self {
        Object::Literal {
            value: value.into(),
            language: None,
        }
    }

    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Object::Literal {
            value: value.into(),
            language: Some(language.into()),
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Object::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermGraph {
    statements: BTreeMap<String, BTreeMap<String, BTreeSet<Object>>>,
    len: usize,
}

impl TermGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one triple; duplicates are ignored
    pub fn insert(&mut self, subject: impl Into<String>, predicate: impl Into<String>, object: Object) {
        let inserted = self
            .statements
            .entry(subject.into())
            .or_default()
            .entry(predicate.into())
            .or_default()
            .insert(object);

        if inserted {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains_subject(&self, subject: &str) -> bool {
        self.statements.contains_key(subject)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.statements.keys().map(String::as_str)
    }

    pub fn objects<'a>(&'a self, subject: &str, predicate: &str) -> impl Iterator<Item = &'a Object> {
        self.statements
            .get(subject)
            .and_then(|predicates| predicates.get(predicate))
            .into_iter()
            .flatten()
    }

    /// IRI objects of `subject predicate ?o`
    pub fn iris(&self, subject: &str, predicate: &str) -> Vec<String> {
        self.objects(subject, predicate)
            .filter_map(Object::as_iri)
            .map(str::to_string)
            .collect()
    }

    pub fn first_iri(&self, subject: &str, predicate: &str) -> Option<String> {
        self.objects(subject, predicate)
            .find_map(Object::as_iri)
            .map(str::to_string)
    }

    /// Literal values of `subject predicate ?o`, any language
    pub fn literals(&self, subject: &str, predicate: &str) -> Vec<String> {
        self.objects(subject, predicate)
            .filter_map(|object| match object {
                Object::Literal { value, .. } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// One literal value, preferring `language` (exact tag, then same primary
    /// subtag, so `cs` also picks `cs-CZ`), then an untagged literal, then the
    /// first literal in order
    pub fn literal(&self, subject: &str, predicate: &str, language: Option<&str>) -> Option<String> {
        let candidates: Vec<(&str, Option<&str>)> = self
            .objects(subject, predicate)
            .filter_map(|object| match object {
                Object::Literal { value, language } => Some((value.as_str(), language.as_deref())),
                _ => None,
            })
            .collect();

        let preferred = language.and_then(|wanted| {
            candidates
                .iter()
                .find(|(_, lang)| lang.is_some_and(|l| l.eq_ignore_ascii_case(wanted)))
                .or_else(|| {
                    candidates.iter().find(|(_, lang)| {
                        lang.is_some_and(|l| primary_subtag(l).eq_ignore_ascii_case(primary_subtag(wanted)))
                    })
                })
        });

        preferred
            .or_else(|| candidates.iter().find(|(_, lang)| lang.is_none()))
            .or_else(|| candidates.first())
            .map(|(value, _)| value.to_string())
    }

    pub fn has_type(&self, subject: &str, rdf_type: &str, type_iri: &str) -> bool {
        self.objects(subject, rdf_type)
            .any(|object| object.as_iri() == Some(type_iri))
    }

    /// Subjects carrying `rdf_type type_iri`
    pub fn subjects_of_type<'a>(&'a self, rdf_type: &'a str, type_iri: &'a str) -> impl Iterator<Item = &'a str> {
        self.subjects()
            .filter(move |subject| self.has_type(subject, rdf_type, type_iri))
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}
