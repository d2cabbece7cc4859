/// Example: Describe a term from a local Turtle dump
///
/// Loads a vocabulary dump into the in-memory store, prints the term detail
/// and its relation rows the way the detail view lays them out.
///
/// Usage:
///   cargo run --example describe_term <data.ttl> <term IRI>

use slovnik_core::{get_relation_position, is_property, is_term_empty, Schema, VocabularyStore};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example describe_term <data.ttl> <term IRI>");
        std::process::exit(1);
    }

    let store = VocabularyStore::new(Schema::default())?.with_language(Some("cs".to_string()));
    store.load_file(&PathBuf::from(&args[1]))?;

    let term = store.term(&args[2])?;
    println!("{} ({})", term.label, term.vocabulary.title.as_deref().unwrap_or(&term.vocabulary.iri));

    if let Some(definition) = &term.definition {
        println!("  {}", definition);
    }

    if is_term_empty(&term) {
        println!("  (no definition, source or hierarchy)");
    }

    for parent in &term.parent_terms {
        println!("  ↑ {}", parent.label);
    }
    for child in &term.sub_terms {
        println!("  ↓ {}", child.label);
    }

    let relations = store.relations(&term)?;
    let kind = if is_property(&term, store.schema()) { "property" } else { "term" };
    println!("\nRelations ({}):", kind);

    for (name, items) in [("domain", &relations.domain), ("range", &relations.range)] {
        for (index, item) in items.iter().enumerate() {
            println!(
                "  {:<6} {:<8} {} <{}>",
                name,
                get_relation_position(index, items.len()).as_str(),
                item.label,
                item.iri
            );
        }
    }

    Ok(())
}
