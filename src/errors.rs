/*!
 * Error types for the amerbrit application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Input validation failures reported by the translation engine.
///
/// The `Display` output of each variant is the exact message returned to
/// callers in the `error` field of a translation result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The text or the locale was not provided at all
    #[error("Required field(s) missing")]
    MissingField,

    /// The text was provided but is empty
    #[error("No text to translate")]
    EmptyText,

    /// The locale is not one of the supported directions
    #[error("Invalid value for locale field")]
    InvalidLocale,
}

/// Errors that can occur while loading or compiling dictionaries
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read
    #[error("Failed to read dictionary '{}': {source}", .path.display())]
    Io {
        /// Path of the dictionary file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary is not a JSON object of string values
    #[error("Failed to parse dictionary '{name}': {source}")]
    Parse {
        /// File path or bundled dictionary name
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A source term could not be turned into a match pattern
    #[error("Failed to build match pattern for '{term}': {source}")]
    Pattern {
        /// Source term the pattern was built from
        term: String,
        #[source]
        source: regex::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from dictionary loading
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error from input validation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
