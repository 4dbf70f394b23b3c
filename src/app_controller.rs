use log::{debug, info};
use std::path::Path;

use crate::app_config::Config;
use crate::dictionary::Dictionaries;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::translation::{TranslationRequest, TranslationResult, Translator};

// @module: Application controller for dialect translation

/// Main application controller: owns the configuration and the translator built from it
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translator built from the configured dictionaries
    translator: Translator,
}

impl Controller {
    /// Create a new controller with the default configuration (bundled dictionaries)
    pub fn new_for_test() -> Result<Self, AppError> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let dictionaries = Dictionaries::load(&config.dictionaries)?;
        debug!(
            "Dictionaries loaded: {} american-only, {} british-only, {} spelling, {} titles",
            dictionaries.american_only.len(),
            dictionaries.british_only.len(),
            dictionaries.american_to_british_spelling.len(),
            dictionaries.american_to_british_titles.len()
        );

        let translator = Translator::new(dictionaries)?.with_highlighter(config.highlight.highlighter());
        info!("Translator ready");

        Ok(Self { config, translator })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// The locale to use: the explicit one, else the configured default
    pub fn resolve_locale(&self, locale: Option<&str>) -> Option<String> {
        locale
            .map(str::to_string)
            .or_else(|| self.config.default_locale.map(|direction| direction.to_string()))
    }

    /// Translate text, falling back to the configured default locale
    pub fn translate(&self, text: Option<&str>, locale: Option<&str>) -> TranslationResult {
        let locale = self.resolve_locale(locale);
        self.translator.translate(text, locale.as_deref())
    }

    /// Translate a request exactly as received; no default locale is applied
    pub fn handle_request(&self, request: &TranslationRequest) -> TranslationResult {
        self.translator.translate_request(request)
    }

    /// Parse a JSON request and translate it
    pub fn handle_request_json(&self, json: &str) -> Result<TranslationResult, AppError> {
        let request: TranslationRequest = serde_json::from_str(json)
            .map_err(|e| AppError::Unknown(format!("Invalid translation request: {}", e)))?;
        Ok(self.handle_request(&request))
    }

    /// Translate the content of a text file
    pub fn translate_file(&self, path: &Path, locale: Option<&str>) -> Result<TranslationResult, AppError> {
        if !FileManager::file_exists(path) {
            return Err(AppError::File(format!("Input file does not exist: {}", path.display())));
        }
        let content = FileManager::read_to_string(path)?;
        Ok(self.translate(Some(FileManager::trim_trailing_newline(&content)), locale))
    }
}
