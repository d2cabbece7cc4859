/**
 * config.rs
 * Parser for .slovnik.yaml browser configuration files
 *
 * Format:
 * ```yaml
 * apiVersion: slovnik/v1
 * kind: Browser
 * metadata:
 *   name: vocabulary-browser
 * spec:
 *   language: cs
 *   snippetLength: 100
 *   suggestionLimit: 7
 *   data:
 *     - vocabularies/zakladni.ttl
 *   schema:
 *     relatedElement1: https://slovník.gov.cz/základní/pojem/má-vztažený-prvek-1
 * ```
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::display::SNIPPET_LENGTH;
use crate::errors::SlovnikError;
use crate::ontology::schema::Schema;
use crate::search::SUGGESTION_LIMIT;

pub const API_VERSION: &str = "slovnik/v1";
pub const KIND: &str = "Browser";
pub const CONFIG_FILE_NAME: &str = ".slovnik.yaml";

/// .slovnik.yaml file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowserConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: BrowserSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSpec {
    /// Preferred language of labels and definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Turtle files loaded into the local store, relative to the config file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<PathBuf>,
    #[serde(default)]
    pub schema: Schema,
}

fn default_snippet_length() -> usize {
    SNIPPET_LENGTH
}

fn default_suggestion_limit() -> usize {
    SUGGESTION_LIMIT
}

impl Default for BrowserSpec {
    fn default() -> Self {
        Self {
            language: None,
            snippet_length: SNIPPET_LENGTH,
            suggestion_limit: SUGGESTION_LIMIT,
            data: Vec::new(),
            schema: Schema::default(),
        }
    }
}

impl BrowserConfig {
    /// Load a browser config from `path`
    ///
    /// Relative `spec.data` entries are resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SlovnikError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SlovnikError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(path)?;

        let mut config: BrowserConfig = serde_yaml::from_str(&content)?;

        config.validate()?;

        if let Some(base) = path.parent() {
            config.spec.data = config
                .spec
                .data
                .into_iter()
                .map(|file| if file.is_relative() { base.join(file) } else { file })
                .collect();
        }

        Ok(config)
    }

    /// Load `.slovnik.yaml` from a directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, SlovnikError> {
        Self::load(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Ensures:
    /// - apiVersion is "slovnik/v1" and kind is "Browser"
    /// - metadata.name is non-empty
    /// - snippet length and suggestion limit are positive
    /// - no schema IRI is blank
    pub fn validate(&self) -> Result<(), SlovnikError> {
        if self.api_version != API_VERSION {
            return Err(SlovnikError::ValidationError(format!(
                "Invalid apiVersion: expected '{}', got '{}'",
                API_VERSION, self.api_version
            )));
        }

        if self.kind != KIND {
            return Err(SlovnikError::ValidationError(format!(
                "Invalid kind: expected '{}', got '{}'",
                KIND, self.kind
            )));
        }

        if self.metadata.name.trim().is_empty() {
            return Err(SlovnikError::ValidationError(
                "metadata.name cannot be empty".to_string(),
            ));
        }

        if self.spec.snippet_length == 0 {
            return Err(SlovnikError::ValidationError(
                "spec.snippetLength must be positive".to_string(),
            ));
        }

        if self.spec.suggestion_limit == 0 {
            return Err(SlovnikError::ValidationError(
                "spec.suggestionLimit must be positive".to_string(),
            ));
        }

        let blank = self.spec.schema.blank_fields();
        if !blank.is_empty() {
            return Err(SlovnikError::ValidationError(format!(
                "spec.schema has blank IRIs: {}",
                blank.join(", ")
            )));
        }

        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SlovnikError> {
        let yaml = serde_yaml::to_string(self)?;

        fs::write(path.as_ref(), yaml)?;

        Ok(())
    }

    pub fn new(name: impl Into<String>) -> Self {
        BrowserConfig {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: Metadata { name: name.into() },
            spec: BrowserSpec::default(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.spec.language.as_deref()
    }
}
