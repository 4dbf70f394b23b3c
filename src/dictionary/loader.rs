use log::debug;
use std::fs;
use std::path::Path;

use super::{Dictionaries, DictionaryMapping};
use crate::app_config::DictionaryConfig;
use crate::errors::DictionaryError;

const BUNDLED_AMERICAN_ONLY: &str = include_str!("../../data/dictionaries/american-only.json");
const BUNDLED_BRITISH_ONLY: &str = include_str!("../../data/dictionaries/british-only.json");
const BUNDLED_SPELLING: &str =
    include_str!("../../data/dictionaries/american-to-british-spelling.json");
const BUNDLED_TITLES: &str =
    include_str!("../../data/dictionaries/american-to-british-titles.json");

/// Parse a dictionary from JSON text
///
/// The JSON must be an object of string values. Keys starting with `@`
/// are metadata and are skipped:
/// ```json
/// {
///     "@metadata": { ... },
///     "parking lot": "car park"
/// }
/// ```
///
/// `name` only appears in error messages.
pub fn parse_dictionary(name: &str, content: &str) -> Result<DictionaryMapping, DictionaryError> {
    serde_json::from_str(content).map_err(|source| DictionaryError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Load a dictionary from a single JSON file
pub fn load_dictionary_from_file(path: &Path) -> Result<DictionaryMapping, DictionaryError> {
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping = parse_dictionary(&path.display().to_string(), &content)?;
    debug!("Loaded {} entries from {}", mapping.len(), path.display());
    Ok(mapping)
}

impl Dictionaries {
    /// The dictionaries compiled into the binary
    pub fn bundled() -> Result<Self, DictionaryError> {
        Ok(Self::new(
            parse_dictionary("american-only", BUNDLED_AMERICAN_ONLY)?,
            parse_dictionary("british-only", BUNDLED_BRITISH_ONLY)?,
            parse_dictionary("american-to-british-spelling", BUNDLED_SPELLING)?,
            parse_dictionary("american-to-british-titles", BUNDLED_TITLES)?,
        ))
    }

    /// Load the dictionaries named by the configuration.
    ///
    /// Falls back to the bundled data when no directory is configured.
    pub fn load(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let Some(directory) = &config.directory else {
            debug!("No dictionary directory configured, using bundled dictionaries");
            return Self::bundled();
        };

        Ok(Self::new(
            load_dictionary_from_file(&directory.join(&config.american_only))?,
            load_dictionary_from_file(&directory.join(&config.british_only))?,
            load_dictionary_from_file(&directory.join(&config.american_to_british_spelling))?,
            load_dictionary_from_file(&directory.join(&config.american_to_british_titles))?,
        ))
    }
}
