//! Read-only character data sources.
//!
//! The browser never fetches or filters data itself; it receives a snapshot
//! from a [`CharacterSource`] at startup.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::types::Character;

/// Sample dataset compiled into the binary.
const BUNDLED: &str = include_str!("../../data/characters.json");

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Cannot read dataset `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset is not valid character JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can hand over the character collection.
pub trait CharacterSource {
    fn characters(&self) -> Result<Vec<Character>, DataError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Accepted dataset layouts: a bare array or an API page.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Page { results: Vec<Character> },
    List(Vec<Character>),
}

/// Decode a dataset from JSON text.
pub fn parse_characters(text: &str) -> Result<Vec<Character>, DataError> {
    let doc: Document = serde_json::from_str(text)?;
    Ok(match doc {
        Document::Page { results } => results,
        Document::List(list) => list,
    })
}

/// The bundled sample dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl CharacterSource for BundledSource {
    fn characters(&self) -> Result<Vec<Character>, DataError> {
        parse_characters(BUNDLED)
    }

    fn describe(&self) -> String {
        "bundled sample".to_string()
    }
}

/// A JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CharacterSource for JsonFileSource {
    fn characters(&self) -> Result<Vec<Character>, DataError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_characters(&text)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Pick the file source when a path is configured, the bundled sample
/// otherwise.
pub fn source_for(data_file: Option<&Path>) -> Box<dyn CharacterSource> {
    match data_file {
        Some(p) => Box::new(JsonFileSource::new(p)),
        None => Box::new(BundledSource),
    }
}

/// Load the collection and log its size.
pub fn load(source: &dyn CharacterSource) -> Result<Vec<Character>, DataError> {
    let chars = source.characters()?;
    tracing::info!(source = %source.describe(), count = chars.len(), "characters loaded");
    Ok(chars)
}
