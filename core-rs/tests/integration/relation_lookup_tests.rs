//! Integration tests for relation lookup
//!
//! Runs the relation queries against an in-memory store holding both
//! modelling idioms:
//! - `řídí`: object property with plain rdfs:domain / rdfs:range
//! - `vlastní`: relation class with existential restrictions on the two
//!   relational roles
//! - `dohled`: concept pointing at its members through the roles directly

use slovnik_core::{get_relation_position, RelationPosition, Schema, SparqlQuery, TermRelations, VocabularyStore};
use std::collections::BTreeSet;

// ==================== Test Helper Functions ====================

const VOCABULARY: &str = "https://example.org/slovník/doprava";
const VEHICLE: &str = "https://example.org/slovník/doprava/pojem/vozidlo";
const CAR: &str = "https://example.org/slovník/doprava/pojem/automobil";
const PERSON: &str = "https://example.org/slovník/doprava/pojem/osoba";
const OWNS: &str = "https://example.org/slovník/doprava/pojem/vlastní";
const DRIVES: &str = "https://example.org/slovník/doprava/pojem/řídí";
const SUPERVISION: &str = "https://example.org/slovník/doprava/pojem/dohled";

const FIXTURE: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix dct: <http://purl.org/dc/terms/> .
@prefix pdp: <http://onto.fel.cvut.cz/ontologies/slovník/agendový/popis-dat/pojem/> .
@prefix z: <https://slovník.gov.cz/základní/pojem/> .
@prefix v: <https://example.org/slovník/doprava/pojem/> .

<https://example.org/slovník/doprava> a pdp:slovník ;
    dct:title "Doprava"@cs .

v:vozidlo a skos:Concept ;
    skos:prefLabel "Vozidlo"@cs ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> .

v:automobil a skos:Concept ;
    skos:prefLabel "Automobil"@cs ;
    skos:broader v:vozidlo ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> .

v:osoba a skos:Concept ;
    skos:prefLabel "Osoba"@cs ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> .

v:vlastní a skos:Concept, z:typ-vztahu ;
    skos:prefLabel "Vlastní"@cs ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> ;
    rdfs:subClassOf [
        a owl:Restriction ;
        owl:onProperty z:má-vztažený-prvek-1 ;
        owl:someValuesFrom v:osoba
    ] , [
        a owl:Restriction ;
        owl:onProperty z:má-vztažený-prvek-2 ;
        owl:someValuesFrom v:vozidlo
    ] .

v:řídí a skos:Concept, owl:ObjectProperty ;
    skos:prefLabel "Řídí"@cs ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> ;
    rdfs:domain v:osoba ;
    rdfs:range v:vozidlo .

v:dohled a skos:Concept ;
    skos:prefLabel "Dohled"@cs ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> ;
    z:má-vztažený-prvek-1 v:osoba ;
    z:má-vztažený-prvek-2 v:vozidlo .
"#;

fn create_store() -> VocabularyStore {
    let store = VocabularyStore::new(Schema::default()).unwrap();
    store.load_turtle(FIXTURE).unwrap();
    store
}

fn iris(items: &[slovnik_core::RelationItem]) -> BTreeSet<&str> {
    items.iter().map(|item| item.iri.as_str()).collect()
}

// ==================== Term Relations ====================

/// Test: a term used as the first element is found through all three idioms
#[test]
fn test_term_relations_domain_side() {
    let store = create_store();
    let relations = store.term_relations(PERSON).unwrap();

    assert_eq!(relations.iri, PERSON);
    assert_eq!(iris(&relations.domain), BTreeSet::from([OWNS, DRIVES, SUPERVISION]));
    assert!(relations.range.is_empty());
}

/// Test: a term used as the second element is found through all three idioms
#[test]
fn test_term_relations_range_side() {
    let store = create_store();
    let relations = store.term_relations(VEHICLE).unwrap();

    assert!(relations.domain.is_empty());
    assert_eq!(iris(&relations.range), BTreeSet::from([OWNS, DRIVES, SUPERVISION]));
}

/// Test: relation items carry the related term's label and vocabulary
#[test]
fn test_relation_items_carry_label_and_vocabulary() {
    let store = create_store();
    let relations = store.term_relations(PERSON).unwrap();

    let drives = relations
        .domain
        .iter()
        .find(|item| item.iri == DRIVES)
        .expect("řídí should be listed");

    assert_eq!(drives.label, "Řídí");
    assert_eq!(drives.vocabulary, VOCABULARY);
}

/// Test: a term without relations yields an empty record
#[test]
fn test_term_without_relations() {
    let store = create_store();
    let relations = store.term_relations(CAR).unwrap();

    assert_eq!(relations, TermRelations { iri: CAR.to_string(), ..Default::default() });
    assert!(relations.is_empty());
}

/// Test: unknown IRIs are not an error, just empty
#[test]
fn test_unknown_term_relations_empty() {
    let store = create_store();
    let relations = store
        .term_relations("https://example.org/slovník/doprava/pojem/neexistuje")
        .unwrap();

    assert!(relations.is_empty());
}

// ==================== Property Relations ====================

/// Test: relation class resolves its roles through restrictions
#[test]
fn test_property_relations_through_restrictions() {
    let store = create_store();
    let relations = store.property_relations(OWNS).unwrap();

    assert_eq!(iris(&relations.domain), BTreeSet::from([PERSON]));
    assert_eq!(iris(&relations.range), BTreeSet::from([VEHICLE]));
    assert_eq!(relations.domain[0].label, "Osoba");
    assert_eq!(relations.range[0].label, "Vozidlo");
}

/// Test: object property resolves plain rdfs:domain / rdfs:range
#[test]
fn test_property_relations_plain_domain_range() {
    let store = create_store();
    let relations = store.property_relations(DRIVES).unwrap();

    assert_eq!(iris(&relations.domain), BTreeSet::from([PERSON]));
    assert_eq!(iris(&relations.range), BTreeSet::from([VEHICLE]));
}

/// Test: relations() picks the property query for typed properties
#[test]
fn test_relations_dispatch_by_type() {
    let store = create_store();

    // typ-vztahu marks a property
    let owns = store.relations(&store.term(OWNS).unwrap()).unwrap();
    assert_eq!(iris(&owns.domain), BTreeSet::from([PERSON]));
    assert_eq!(iris(&owns.range), BTreeSet::from([VEHICLE]));

    // plain concept: term query
    let person = store.relations(&store.term(PERSON).unwrap()).unwrap();
    assert_eq!(person.domain.len(), 3);
    assert_eq!(person.iri, PERSON);
}

/// Test: queries built with a schema whose roles point elsewhere find nothing
#[test]
fn test_schema_overrides_change_matching() {
    let mut schema = Schema::default();
    schema.related_element_1 = "https://example.org/jiný-prvek-1".to_string();
    schema.related_element_2 = "https://example.org/jiný-prvek-2".to_string();

    let store = VocabularyStore::new(schema).unwrap();
    store.load_turtle(FIXTURE).unwrap();

    // only the plain rdfs:domain idiom is left
    let relations = store.term_relations(PERSON).unwrap();
    assert_eq!(iris(&relations.domain), BTreeSet::from([DRIVES]));
}

/// Test: the raw CONSTRUCT graph uses the anchor as subject
#[test]
fn test_constructed_graph_anchor() {
    let store = create_store();
    let schema = Schema::default();

    let graph = store
        .construct(&SparqlQuery::term_relations(&schema, VEHICLE))
        .unwrap();

    assert!(graph.contains_subject(VEHICLE));
    assert_eq!(graph.iris(VEHICLE, &schema.range).len(), 3);
}

// ==================== Row Positions ====================

/// Test: rendering a relation list assigns connectors in order
#[test]
fn test_relation_rows_positions() {
    let store = create_store();
    let relations = store.term_relations(PERSON).unwrap();
    let size = relations.domain.len();

    let positions: Vec<RelationPosition> = (0..size)
        .map(|index| get_relation_position(index, size))
        .collect();

    assert_eq!(
        positions,
        vec![RelationPosition::First, RelationPosition::Middle, RelationPosition::Last]
    );
}
