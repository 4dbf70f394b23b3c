/*!
 * American/British English translation engine.
 *
 * - `core`: The `Translator` orchestrating validation, matching and composition
 * - `matcher`: Term, title and time span matchers
 * - `compositor`: Span deduplication and right-to-left substitution
 * - `models`: Request, result and direction types
 */

// Re-export main types for easier usage
pub use self::compositor::Highlighter;
pub use self::core::{NO_TRANSLATION_NEEDED, Translator};
pub use self::matcher::{MatchCategory, MatchSpan, SpanMatcher};
pub use self::models::{Translation, TranslationDirection, TranslationRequest, TranslationResult};

// Submodules
pub mod compositor;
pub mod core;
pub mod matcher;
pub mod models;
