/*!
 * Span matching.
 *
 * Each matcher scans a text for one category of dialect-specific content and
 * reports candidate replacements as byte-offset spans:
 *
 * - `TermMatcher`: whole-word, case-insensitive dictionary terms (terms and spelling)
 * - `TitleMatcher`: honorific titles directly followed by a capitalized word
 * - `TimeMatcher`: `h:mm` / `h.mm` time notation
 *
 * Word boundaries are ASCII: only `[0-9A-Za-z_]` counts as a word character,
 * so an accented letter next to a term does not block the match.
 * Overlaps between spans are not resolved here.
 */

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dictionary::DictionaryMapping;
use crate::errors::DictionaryError;

/// American time notation, `12:30`
static AMERICAN_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)([0-9]{1,2}):([0-9]{2})(?-u:\b)").expect("Invalid American time regex")
});

/// British time notation, `12.30`
static BRITISH_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)([0-9]{1,2})\.([0-9]{2})(?-u:\b)").expect("Invalid British time regex")
});

/// Kind of content a span was matched as, in pooling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchCategory {
    Term,
    Spelling,
    Title,
    Time,
}

/// A range of the source text identified for replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// The matched source text
    pub original: String,
    /// Text to insert in its place
    pub replacement: String,
    pub category: MatchCategory,
}

impl MatchSpan {
    pub fn new(
        start: usize,
        end: usize,
        original: impl Into<String>,
        replacement: impl Into<String>,
        category: MatchCategory,
    ) -> Self {
        Self {
            start,
            end,
            original: original.into(),
            replacement: replacement.into(),
            category,
        }
    }

    pub fn key(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// True when the two spans share at least one byte
    pub fn overlaps(&self, other: &MatchSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Finds candidate replacement spans of one category
pub trait SpanMatcher: Send + Sync {
    fn category(&self) -> MatchCategory;

    fn find_spans(&self, text: &str) -> Vec<MatchSpan>;
}

/// A source term with its compiled pattern
#[derive(Debug, Clone)]
struct CompiledEntry {
    pattern: Regex,
    replacement: String,
}

/// Skip empty keys and compile the rest in dictionary order
fn compile_entries(
    mapping: &DictionaryMapping,
    build_pattern: impl Fn(&str) -> String,
) -> Result<Vec<CompiledEntry>, DictionaryError> {
    let mut entries = Vec::with_capacity(mapping.len());
    for (source, target) in mapping.iter() {
        if source.is_empty() {
            warn!("Skipping empty dictionary key (maps to '{}')", target);
            continue;
        }

        let pattern = Regex::new(&build_pattern(&regex::escape(source))).map_err(|source_err| {
            DictionaryError::Pattern {
                term: source.to_string(),
                source: source_err,
            }
        })?;
        entries.push(CompiledEntry {
            pattern,
            replacement: target.to_string(),
        });
    }
    Ok(entries)
}

/// Whole-word, case-insensitive dictionary matching.
///
/// The replacement is the dictionary value verbatim; the case of the
/// matched text is not carried over.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    category: MatchCategory,
    entries: Vec<CompiledEntry>,
}

impl TermMatcher {
    pub fn new(mapping: &DictionaryMapping, category: MatchCategory) -> Result<Self, DictionaryError> {
        let entries = compile_entries(mapping, |term| format!(r"(?i)(?-u:\b){}(?-u:\b)", term))?;
        Ok(Self { category, entries })
    }
}

impl SpanMatcher for TermMatcher {
    fn category(&self) -> MatchCategory {
        self.category
    }

    fn find_spans(&self, text: &str) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        for entry in &self.entries {
            for found in entry.pattern.find_iter(text) {
                spans.push(MatchSpan::new(
                    found.start(),
                    found.end(),
                    found.as_str(),
                    entry.replacement.as_str(),
                    self.category,
                ));
            }
        }
        spans
    }
}

/// Honorific title matching.
///
/// A title matches case-insensitively at a word start, but only when it is
/// followed by one whitespace character and an uppercase letter. The
/// following word is not part of the span.
#[derive(Debug, Clone)]
pub struct TitleMatcher {
    entries: Vec<CompiledEntry>,
}

impl TitleMatcher {
    pub fn new(mapping: &DictionaryMapping) -> Result<Self, DictionaryError> {
        let entries = compile_entries(mapping, |title| format!(r"(?-u:\b)(?i:({}))\s\p{{Lu}}", title))?;
        Ok(Self { entries })
    }
}

/// Capitalize the replacement if the matched title starts uppercase
pub fn match_capitalization(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if starts_upper => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}

impl SpanMatcher for TitleMatcher {
    fn category(&self) -> MatchCategory {
        MatchCategory::Title
    }

    fn find_spans(&self, text: &str) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        for entry in &self.entries {
            let mut at = 0;
            while let Some(captures) = entry.pattern.captures_at(text, at) {
                let Some(title) = captures.get(1) else {
                    break;
                };
                spans.push(MatchSpan::new(
                    title.start(),
                    title.end(),
                    title.as_str(),
                    match_capitalization(title.as_str(), &entry.replacement),
                    MatchCategory::Title,
                ));
                // Resume right after the title so the lookahead word can start a new match
                at = title.end();
            }
        }
        spans
    }
}

/// Time notation of one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `12:30`
    American,
    /// `12.30`
    British,
}

impl TimeFormat {
    pub fn separator(&self) -> char {
        match self {
            Self::American => ':',
            Self::British => '.',
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::American => &AMERICAN_TIME_REGEX,
            Self::British => &BRITISH_TIME_REGEX,
        }
    }
}

/// Rewrites times from one notation to the other; digits are unchanged
#[derive(Debug, Clone, Copy)]
pub struct TimeMatcher {
    source: TimeFormat,
    target: TimeFormat,
}

impl TimeMatcher {
    pub fn new(source: TimeFormat, target: TimeFormat) -> Self {
        Self { source, target }
    }
}

impl SpanMatcher for TimeMatcher {
    fn category(&self) -> MatchCategory {
        MatchCategory::Time
    }

    fn find_spans(&self, text: &str) -> Vec<MatchSpan> {
        self.source
            .pattern()
            .captures_iter(text)
            .filter_map(|captures| {
                let whole = captures.get(0)?;
                let hours = captures.get(1)?.as_str();
                let minutes = captures.get(2)?.as_str();
                Some(MatchSpan::new(
                    whole.start(),
                    whole.end(),
                    whole.as_str(),
                    format!("{}{}{}", hours, self.target.separator(), minutes),
                    MatchCategory::Time,
                ))
            })
            .collect()
    }
}
