//! slovnik - vocabulary browser CLI
//!
//! Prints the SPARQL queries the browser sends and evaluates them against
//! local Turtle data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, Level};

use slovnik_core::config::CONFIG_FILE_NAME;
use slovnik_core::display::styled_snippet_with_limit;
use slovnik_core::search::suggestions;
use slovnik_core::{
    filter_by_label, get_relation_position, is_property, is_term_empty, route_for_input, BrowserConfig,
    SearchResult, SparqlQuery, Term, TermRelations, VocabularyStore,
};

#[derive(Parser)]
#[command(name = "slovnik")]
#[command(version)]
#[command(about = "Vocabulary browser core: SPARQL queries and term inspection", long_about = None)]
struct Cli {
    /// Browser config file (defaults to ./.slovnik.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a query without executing it
    Query {
        #[arg(value_enum)]
        kind: QueryKind,
        /// Term, property or vocabulary IRI (not used by `vocabularies`)
        iri: Option<String>,
    },
    /// Fetch a term with its types and relations from local data
    Describe {
        iri: String,
        /// Turtle files to load (in addition to spec.data)
        #[arg(long)]
        data: Vec<PathBuf>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the terms of a vocabulary from local data
    Terms {
        vocabulary: String,
        #[arg(long)]
        data: Vec<PathBuf>,
        /// Keep only labels containing this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// Format a search snippet
    Snippet {
        text: String,
        /// The match was found in the definition
        #[arg(long)]
        definition: bool,
    },
    /// Position of a row in a list of relation items
    Position { index: usize, size: usize },
    /// Suggestions and destination for search bar input
    Search {
        input: String,
        /// JSON array of full-text search results
        #[arg(long)]
        results: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum QueryKind {
    TermRelations,
    PropertyRelations,
    TermTypes,
    Term,
    Vocabulary,
    Vocabularies,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TermReport {
    term: Term,
    is_property: bool,
    is_empty: bool,
    relations: TermRelations,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let schema = &config.spec.schema;

    match cli.command {
        Commands::Query { kind, iri } => {
            let require_iri = || iri.clone().context("this query needs an IRI argument");

            let query = match kind {
                QueryKind::TermRelations => SparqlQuery::term_relations(schema, &require_iri()?),
                QueryKind::PropertyRelations => SparqlQuery::property_relations(schema, &require_iri()?),
                QueryKind::TermTypes => SparqlQuery::term_types(schema, &require_iri()?),
                QueryKind::Term => SparqlQuery::term_detail(schema, &require_iri()?),
                QueryKind::Vocabulary => SparqlQuery::vocabulary_terms(schema, &require_iri()?),
                QueryKind::Vocabularies => SparqlQuery::vocabularies(schema),
            };

            print!("{}", query);
        }

        Commands::Describe { iri, data, pretty } => {
            let store = open_store(&config, &data)?;

            let term = store.term(&iri)?;
            let relations = store.relations(&term)?;

            let report = TermReport {
                is_property: is_property(&term, schema),
                is_empty: is_term_empty(&term),
                term,
                relations,
            };

            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }

        Commands::Terms {
            vocabulary,
            data,
            filter,
        } => {
            let store = open_store(&config, &data)?;
            let terms = store.vocabulary_terms(&vocabulary)?;

            let entries = filter_by_label(&terms, filter.as_deref().unwrap_or(""));
            let total = entries.len();
            for (index, entry) in entries.iter().enumerate() {
                debug!(position = %get_relation_position(index, total), "row");
                println!("{}\t{}", entry.iri, entry.label);
            }
        }

        Commands::Snippet { text, definition } => {
            println!(
                "{}",
                styled_snippet_with_limit(&text, definition, config.spec.snippet_length)
            );
        }

        Commands::Position { index, size } => {
            println!("{}", get_relation_position(index, size));
        }

        Commands::Search { input, results } => {
            let content = fs::read_to_string(&results)
                .with_context(|| format!("failed to read {}", results.display()))?;
            let results: Vec<SearchResult> = serde_json::from_str(&content)
                .with_context(|| format!("invalid search results in {}", results.display()))?;

            for suggestion in suggestions(&results, config.spec.suggestion_limit) {
                println!("{}", suggestion.display_text);
            }
            println!("{}", serde_json::to_string(&route_for_input(&results, &input))?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<BrowserConfig> {
    if let Some(path) = path {
        return BrowserConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    if local.exists() {
        debug!(path = %local.display(), "using local config");
        return BrowserConfig::load(&local)
            .with_context(|| format!("failed to load config {}", local.display()));
    }

    Ok(BrowserConfig::new("slovnik"))
}

fn open_store(config: &BrowserConfig, extra: &[PathBuf]) -> Result<VocabularyStore> {
    let store = VocabularyStore::new(config.spec.schema.clone())?
        .with_language(config.spec.language.clone());

    let files: Vec<&PathBuf> = config.spec.data.iter().chain(extra).collect();
    if files.is_empty() {
        anyhow::bail!("no data files: pass --data or list them under spec.data");
    }

    for file in files {
        store.load_file(file)?;
    }

    Ok(store)
}
