/*!
 * # amerbrit - American and British English translator
 *
 * A Rust library that rewrites English text between American and British
 * conventions and highlights every change.
 *
 * ## Features
 *
 * - Vocabulary that only exists in one dialect (`parking lot` / `car park`)
 * - Spelling variants (`color` / `colour`)
 * - Honorific titles (`Mr.` / `Mr`), only in front of a capitalized name
 * - Time notation (`12:30` / `12.30`)
 * - Replacements wrapped in `<span class="highlight">...</span>` markers
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `dictionary`: The four dialect dictionaries, their loading and inversion
 * - `translation`: The translation engine:
 *   - `translation::core`: Validation and orchestration (`Translator`)
 *   - `translation::matcher`: Term, title and time span matching
 *   - `translation::compositor`: Span deduplication and substitution
 *   - `translation::models`: Request and result types
 * - `file_utils`: File and stdin reading
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dictionary;
pub mod errors;
pub mod file_utils;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use dictionary::{Dictionaries, DictionaryMapping};
pub use errors::{AppError, DictionaryError, TranslationError};
pub use translation::{
    Highlighter, NO_TRANSLATION_NEEDED, Translation, TranslationDirection, TranslationRequest,
    TranslationResult, Translator,
};
