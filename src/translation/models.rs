/*!
 * Types crossing the translation engine boundary.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TranslationError;

/// Which dialect is the source and which is the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationDirection {
    AmericanToBritish,
    BritishToAmerican,
}

impl TranslationDirection {
    pub const ALL: [TranslationDirection; 2] = [Self::AmericanToBritish, Self::BritishToAmerican];

    // @returns: Locale identifier as used in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmericanToBritish => "american-to-british",
            Self::BritishToAmerican => "british-to-american",
        }
    }
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationDirection {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or(TranslationError::InvalidLocale)
    }
}

/// A translation request as received from a caller.
///
/// Both fields may be missing; the engine reports which one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            locale: Some(locale.into()),
        }
    }
}

/// A successful translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// The unmodified input
    pub text: String,
    /// The highlighted translation, or the "nothing to translate" message
    pub translation: String,
}

/// Outcome of a translation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationResult {
    Error { error: String },
    Success(Translation),
}

impl TranslationResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(error.as_str()),
            Self::Success(_) => None,
        }
    }

    pub fn translation(&self) -> Option<&str> {
        match self {
            Self::Error { .. } => None,
            Self::Success(success) => Some(success.translation.as_str()),
        }
    }
}

impl From<Result<Translation, TranslationError>> for TranslationResult {
    fn from(result: Result<Translation, TranslationError>) -> Self {
        match result {
            Ok(translation) => Self::Success(translation),
            Err(error) => Self::Error {
                error: error.to_string(),
            },
        }
    }
}
