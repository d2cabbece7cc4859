//! Error types for slovnik-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlovnikError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Graph store error: {0}")]
    Store(String),

    #[error("Failed to load RDF data: {0}")]
    Load(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Term not found: {0}")]
    TermNotFound(String),
}

pub type Result<T> = std::result::Result<T, SlovnikError>;
