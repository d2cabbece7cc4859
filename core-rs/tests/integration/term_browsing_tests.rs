//! Integration tests for browsing terms
//!
//! Covers the path from a config file on disk to the detail view:
//! - loading configured Turtle files into the store
//! - vocabulary listing and label filtering
//! - term detail with hierarchy, language preference and classification
//! - search result resolution

use slovnik_core::config::CONFIG_FILE_NAME;
use slovnik_core::search::suggestions;
use slovnik_core::{
    filter_by_label, generate_styled_snippet, is_property, is_term_empty, resolve_search, route_for_input,
    BrowserConfig, Schema, SearchOutcome, SearchResult, SearchTarget, SlovnikError, VocabularyStore,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ==================== Test Helper Functions ====================

const VOCABULARY: &str = "https://example.org/slovník/doprava";
const VEHICLE: &str = "https://example.org/slovník/doprava/pojem/vozidlo";
const CAR: &str = "https://example.org/slovník/doprava/pojem/automobil";
const TRUCK: &str = "https://example.org/slovník/doprava/pojem/nákladní-automobil";
const DRIVES: &str = "https://example.org/slovník/doprava/pojem/řídí";

const FIXTURE: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix dct: <http://purl.org/dc/terms/> .
@prefix pdp: <http://onto.fel.cvut.cz/ontologies/slovník/agendový/popis-dat/pojem/> .
@prefix v: <https://example.org/slovník/doprava/pojem/> .

<https://example.org/slovník/doprava> a pdp:slovník ;
    dct:title "Doprava"@cs, "Transport"@en .

<https://example.org/slovník/jiný> a pdp:slovník .

v:vozidlo a skos:Concept ;
    skos:prefLabel "Vozidlo"@cs, "Vehicle"@en ;
    skos:definition "Prostředek určený k přepravě osob nebo věcí."@cs ;
    skos:altLabel "Dopravní prostředek"@cs ;
    dct:source "Zákon č. 56/2001 Sb."@cs ;
    skos:narrower v:automobil ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> .

v:automobil a skos:Concept ;
    skos:prefLabel "Automobil"@cs ;
    skos:broader v:vozidlo ;
    skos:narrower v:nákladní-automobil ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> .

v:nákladní-automobil a skos:Concept ;
    skos:prefLabel "Nákladní automobil"@cs ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> .

v:řídí a skos:Concept, owl:ObjectProperty ;
    skos:prefLabel "Řídí"@cs ;
    pdp:je-pojmem-ze-slovníku <https://example.org/slovník/doprava> .
"#;

/// Write the fixture and a config listing it; returns the config path
fn create_browser_dir(root: &Path, language: &str) -> std::path::PathBuf {
    fs::create_dir_all(root.join("data")).unwrap();
    fs::write(root.join("data/doprava.ttl"), FIXTURE).unwrap();

    let config = format!(
        r#"apiVersion: slovnik/v1
kind: Browser
metadata:
  name: test-browser
spec:
  language: {}
  data:
    - data/doprava.ttl
"#,
        language
    );

    let path = root.join(CONFIG_FILE_NAME);
    fs::write(&path, config).unwrap();
    path
}

fn open_store(config: &BrowserConfig) -> VocabularyStore {
    let store = VocabularyStore::new(config.spec.schema.clone())
        .unwrap()
        .with_language(config.spec.language.clone());

    for file in &config.spec.data {
        store.load_file(file).unwrap();
    }
    store
}

fn create_store(language: &str) -> (TempDir, VocabularyStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = create_browser_dir(temp_dir.path(), language);
    let config = BrowserConfig::load(&path).unwrap();
    let store = open_store(&config);
    (temp_dir, store)
}

// ==================== Config → Store ====================

/// Test: data paths in the config resolve next to the config file
#[test]
fn test_config_data_files_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_browser_dir(temp_dir.path(), "cs");

    let config = BrowserConfig::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(config.spec.data, vec![temp_dir.path().join("data/doprava.ttl")]);
    assert_eq!(config.language(), Some("cs"));

    let store = open_store(&config);
    assert!(!store.is_empty().unwrap());
    assert!(path.exists());
}

/// Test: a config pointing at a missing data file fails on load_file
#[test]
fn test_config_missing_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = BrowserConfig::new("missing-data");
    config.spec.data.push(temp_dir.path().join("missing.ttl"));

    let store = VocabularyStore::new(Schema::default()).unwrap();
    let result = store.load_file(&config.spec.data[0]);
    assert!(matches!(result, Err(SlovnikError::FileNotFound(_))));
}

// ==================== Vocabulary Listing ====================

/// Test: vocabularies are listed with their titles in the preferred language
#[test]
fn test_list_vocabularies() {
    let (_temp_dir, store) = create_store("en");
    let vocabularies = store.vocabularies().unwrap();

    assert_eq!(vocabularies.len(), 2);
    let transport = vocabularies.iter().find(|v| v.iri == VOCABULARY).unwrap();
    assert_eq!(transport.title.as_deref(), Some("Transport"));

    let untitled = vocabularies.iter().find(|v| v.iri != VOCABULARY).unwrap();
    assert_eq!(untitled.title, None);
}

/// Test: vocabulary terms come back sorted by label
#[test]
fn test_vocabulary_terms_sorted() {
    let (_temp_dir, store) = create_store("cs");
    let terms = store.vocabulary_terms(VOCABULARY).unwrap();

    let labels: Vec<&str> = terms.iter().map(|t| t.label.as_str()).collect();
    // lowercase codepoint order: "ř" sorts after ASCII letters
    assert_eq!(labels, vec!["Automobil", "Nákladní automobil", "Vozidlo", "Řídí"]);
}

/// Test: filtering the term list highlights the matched part
#[test]
fn test_vocabulary_terms_filter() {
    let (_temp_dir, store) = create_store("cs");
    let terms = store.vocabulary_terms(VOCABULARY).unwrap();

    let filtered = filter_by_label(&terms, "AUTO");
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].iri, CAR);
    assert_eq!(filtered[0].label, "<em>Auto</em>mobil");
    assert_eq!(filtered[1].iri, TRUCK);
    assert_eq!(filtered[1].label, "Nákladní <em>auto</em>mobil");

    assert!(filter_by_label(&terms, "loď").is_empty());
}

/// Test: an empty vocabulary lists nothing
#[test]
fn test_vocabulary_without_terms() {
    let (_temp_dir, store) = create_store("cs");
    assert!(store.vocabulary_terms("https://example.org/slovník/jiný").unwrap().is_empty());
}

// ==================== Term Detail ====================

/// Test: term detail carries every optional field and both hierarchy sides
#[test]
fn test_term_detail() {
    let (_temp_dir, store) = create_store("cs");
    let term = store.term(CAR).unwrap();

    assert_eq!(term.label, "Automobil");
    assert_eq!(term.vocabulary.iri, VOCABULARY);
    assert_eq!(term.vocabulary.title.as_deref(), Some("Doprava"));
    assert_eq!(term.parent_terms.len(), 1);
    assert_eq!(term.parent_terms[0].iri, VEHICLE);
    assert_eq!(term.parent_terms[0].label, "Vozidlo");
    assert_eq!(term.sub_terms.len(), 1);
    assert_eq!(term.sub_terms[0].iri, TRUCK);
    assert_eq!(term.definition, None);
    assert!(!is_term_empty(&term));
}

/// Test: language preference selects labels, definitions and titles
#[test]
fn test_term_detail_language_preference() {
    let (_cs_dir, cs_store) = create_store("cs");
    let (_en_dir, en_store) = create_store("en");

    let cs = cs_store.term(VEHICLE).unwrap();
    let en = en_store.term(VEHICLE).unwrap();

    assert_eq!(cs.label, "Vozidlo");
    assert_eq!(en.label, "Vehicle");
    assert_eq!(en.vocabulary.title.as_deref(), Some("Transport"));
    // no English definition: falls back to the Czech one
    assert_eq!(en.definition, cs.definition);
    assert_eq!(cs.alt_labels, vec!["Dopravní prostředek".to_string()]);
    assert_eq!(cs.source.as_deref(), Some("Zákon č. 56/2001 Sb."));
}

/// Test: a leaf term without definition or source is empty
#[test]
fn test_empty_term() {
    let (_temp_dir, store) = create_store("cs");
    let truck = store.term(TRUCK).unwrap();

    assert!(truck.parent_terms.is_empty());
    assert!(is_term_empty(&truck));
}

/// Test: classification uses the types fetched with the term
#[test]
fn test_term_classification() {
    let (_temp_dir, store) = create_store("cs");
    let schema = store.schema().clone();

    assert!(is_property(&store.term(DRIVES).unwrap(), &schema));
    assert!(!is_property(&store.term(VEHICLE).unwrap(), &schema));
}

/// Test: unknown terms are reported
#[test]
fn test_term_not_found() {
    let (_temp_dir, store) = create_store("cs");
    let result = store.term("https://example.org/slovník/doprava/pojem/loď");
    assert!(matches!(result, Err(SlovnikError::TermNotFound(_))));
}

// ==================== Search ====================

fn search_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            label: "automobil".to_string(),
            display_text: "<em>auto</em>mobil".to_string(),
            is_word: true,
            items: vec![CAR.to_string(), "https://example.org/jiný/automobil".to_string()],
        },
        SearchResult {
            label: "Nákladní automobil".to_string(),
            display_text: "Nákladní <em>auto</em>mobil".to_string(),
            is_word: false,
            items: vec![TRUCK.to_string()],
        },
    ]
}

/// Test: search results lead to disambiguation, detail or the search page
#[test]
fn test_search_resolution() {
    let results = search_results();

    assert_eq!(
        resolve_search(&results, "automobil"),
        SearchOutcome::Disambiguation {
            label: "automobil".to_string(),
            items: results[0].items.clone(),
        }
    );
    assert_eq!(
        resolve_search(&results, "Nákladní automobil"),
        SearchOutcome::DirectHit {
            label: "Nákladní automobil".to_string(),
            iri: TRUCK.to_string(),
        }
    );
    assert_eq!(
        route_for_input(&results, "NÁKLADNÍ AUTOMOBIL"),
        SearchTarget::Term(TRUCK.to_string())
    );
    assert_eq!(
        route_for_input(&results, "auto"),
        SearchTarget::Search("auto".to_string())
    );
}

/// Test: a direct hit resolves to a term the store can describe
#[test]
fn test_search_hit_opens_term() {
    let (_temp_dir, store) = create_store("cs");
    let results = search_results();

    let config = BrowserConfig::new("search");
    assert_eq!(suggestions(&results, config.spec.suggestion_limit).len(), 2);

    match resolve_search(&results, "Nákladní automobil") {
        SearchOutcome::DirectHit { iri, .. } => {
            let term = store.term(&iri).unwrap();
            assert_eq!(term.label, "Nákladní automobil");
        }
        other => panic!("Expected direct hit, got {:?}", other),
    }
}

/// Test: snippets only render for definition matches
#[test]
fn test_definition_snippet() {
    let (_temp_dir, store) = create_store("cs");
    let definition = store.term(VEHICLE).unwrap().definition.unwrap();

    assert_eq!(
        generate_styled_snippet(&definition, true),
        "<i> - Prostředek určený k přepravě osob nebo věcí.</i>"
    );
    assert_eq!(generate_styled_snippet(&definition, false), "");
}
