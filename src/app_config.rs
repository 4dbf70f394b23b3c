use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::translation::{Highlighter, TranslationDirection};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Where the four dictionaries come from
    #[serde(default)]
    pub dictionaries: DictionaryConfig,

    /// Direction used when a command does not name one
    #[serde(default)]
    pub default_locale: Option<TranslationDirection>,

    /// Markers wrapped around translated spans
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Dictionary source configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DictionaryConfig {
    /// Directory holding the dictionary files; the bundled data is used when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// American-only terms file name
    #[serde(default = "default_american_only")]
    pub american_only: String,

    /// British-only terms file name
    #[serde(default = "default_british_only")]
    pub british_only: String,

    /// American to British spelling file name
    #[serde(default = "default_american_to_british_spelling")]
    pub american_to_british_spelling: String,

    /// American to British titles file name
    #[serde(default = "default_american_to_british_titles")]
    pub american_to_british_titles: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            directory: None,
            american_only: default_american_only(),
            british_only: default_british_only(),
            american_to_british_spelling: default_american_to_british_spelling(),
            american_to_british_titles: default_american_to_british_titles(),
        }
    }
}

/// Highlight marker configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HighlightConfig {
    /// Marker inserted before a replacement
    #[serde(default = "default_highlight_open")]
    pub open: String,

    /// Marker inserted after a replacement
    #[serde(default = "default_highlight_close")]
    pub close: String,
}

impl HighlightConfig {
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(&self.open, &self.close)
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: default_highlight_open(),
            close: default_highlight_close(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_american_only() -> String {
    "american-only.json".to_string()
}

fn default_british_only() -> String {
    "british-only.json".to_string()
}

fn default_american_to_british_spelling() -> String {
    "american-to-british-spelling.json".to_string()
}

fn default_american_to_british_titles() -> String {
    "american-to-british-titles.json".to_string()
}

fn default_highlight_open() -> String {
    Highlighter::DEFAULT_OPEN.to_string()
}

fn default_highlight_close() -> String {
    Highlighter::DEFAULT_CLOSE.to_string()
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Load a configuration file, writing the default one first if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        log::warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let files = [
            ("american_only", &self.dictionaries.american_only),
            ("british_only", &self.dictionaries.british_only),
            ("american_to_british_spelling", &self.dictionaries.american_to_british_spelling),
            ("american_to_british_titles", &self.dictionaries.american_to_british_titles),
        ];
        for (field, file_name) in files {
            if file_name.trim().is_empty() {
                return Err(anyhow!("Dictionary file name for '{}' must not be empty", field));
            }
        }

        if let Some(dir) = &self.dictionaries.directory {
            if !dir.is_dir() {
                return Err(anyhow!("Dictionary directory does not exist: {}", dir.display()));
            }
        }

        if self.highlight.open.is_empty() || self.highlight.close.is_empty() {
            return Err(anyhow!("Highlight markers must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            dictionaries: DictionaryConfig::default(),
            default_locale: None,
            highlight: HighlightConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
