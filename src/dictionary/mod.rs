/*!
 * Dialect dictionaries.
 *
 * This module holds the four static mappings the translation engine works from:
 *
 * - American-only terms (American term -> British term)
 * - British-only terms (British term -> American term)
 * - American to British spelling variants
 * - American to British titles
 *
 * The British to American spelling and title mappings are derived by
 * inverting the American to British ones.
 */

use log::warn;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub mod loader;

pub use loader::{load_dictionary_from_file, parse_dictionary};

/// Insertion-ordered mapping from a source-dialect string to its
/// target-dialect equivalent.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the entry at its original position, so iteration order is always the
/// order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl DictionaryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(source, target)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Swap keys and values.
    ///
    /// Values are expected to be unique. When two entries share a value, the
    /// later entry's key wins and the inverted entry stays at the position of
    /// the first one. Collisions are logged, never rejected.
    pub fn invert(&self) -> DictionaryMapping {
        let mut inverted = DictionaryMapping::new();
        for (key, value) in self.iter() {
            if let Some(previous) = inverted.insert(value, key) {
                warn!(
                    "Dictionary value '{}' is shared by '{}' and '{}'; keeping '{}'",
                    value, previous, key, key
                );
            }
        }
        inverted
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DictionaryMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = DictionaryMapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl Serialize for DictionaryMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A dictionary value as it appears in a data file
#[derive(Deserialize)]
#[allow(dead_code)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Other(IgnoredAny),
}

struct DictionaryVisitor;

impl<'de> Visitor<'de> for DictionaryVisitor {
    type Value = DictionaryMapping;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping terms to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = DictionaryMapping::new();
        while let Some(key) = access.next_key::<String>()? {
            let value = access.next_value::<RawValue>()?;

            // Metadata entries such as "@metadata"
            if key.starts_with('@') {
                continue;
            }

            match value {
                RawValue::Text(text) => {
                    mapping.insert(key, text);
                }
                RawValue::Other(_) => {
                    return Err(de::Error::custom(format!(
                        "value for '{}' is not a string",
                        key
                    )));
                }
            }
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for DictionaryMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictionaryVisitor)
    }
}

/// The four dictionaries a translator is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    pub american_only: DictionaryMapping,
    pub british_only: DictionaryMapping,
    pub american_to_british_spelling: DictionaryMapping,
    pub american_to_british_titles: DictionaryMapping,
}

impl Dictionaries {
    pub fn new(
        american_only: DictionaryMapping,
        british_only: DictionaryMapping,
        american_to_british_spelling: DictionaryMapping,
        american_to_british_titles: DictionaryMapping,
    ) -> Self {
        Self {
            american_only,
            british_only,
            american_to_british_spelling,
            american_to_british_titles,
        }
    }

    pub fn british_to_american_spelling(&self) -> DictionaryMapping {
        self.american_to_british_spelling.invert()
    }

    pub fn british_to_american_titles(&self) -> DictionaryMapping {
        self.american_to_british_titles.invert()
    }
}
