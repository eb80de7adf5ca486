//! Error types for eu5wikilib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole table or section.
///
/// Cell- and note-level problems never surface here; they degrade to empty
/// output instead.
#[derive(Error, Debug)]
pub enum WikiError {
    /// A generator needs an entity collection that the data dump lacks
    #[error("entity collection '{0}' is missing from the game data")]
    MissingCollection(&'static str),

    /// The data dump is not valid JSON or does not match the entity model
    #[error("malformed game data: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two groups in one generation pass produced the same section key
    #[error("duplicate section key: {0}")]
    DuplicateSection(String),

    /// A page has no begin/end marker pair for the section
    #[error("section '{0}' not found in document")]
    SectionMarkerNotFound(String),

    /// A page has a begin marker without an end marker (or vice versa)
    #[error("unbalanced markers for section '{0}'")]
    UnbalancedSectionMarkers(String),

    /// Unknown generator name
    #[error("unknown table '{0}'")]
    UnknownTable(String),
}
