/*!
 * Span conflict resolution and text composition.
 *
 * Pooled spans are deduplicated by exact range, then substituted into the
 * text from the rightmost span to the leftmost so that the offsets of the
 * spans still waiting to be applied stay valid.
 */

use log::warn;
use std::collections::HashSet;

use super::matcher::MatchSpan;

/// Markup wrapped around every replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Highlighter {
    pub const DEFAULT_OPEN: &'static str = r#"<span class="highlight">"#;
    pub const DEFAULT_CLOSE: &'static str = "</span>";

    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn wrap(&self, replacement: &str) -> String {
        format!("{}{}{}", self.open, replacement, self.close)
    }

    /// Remove every highlight marker, leaving the plain translated text
    pub fn strip(&self, highlighted: &str) -> String {
        highlighted.replace(&self.open, "").replace(&self.close, "")
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OPEN, Self::DEFAULT_CLOSE)
    }
}

/// Keep the first span seen for each exact `(start, end)` range
pub fn deduplicate(spans: Vec<MatchSpan>) -> Vec<MatchSpan> {
    let mut seen = HashSet::new();
    spans
        .into_iter()
        .filter(|span| seen.insert(span.key()))
        .collect()
}

/// Pairs of distinct spans that share bytes.
///
/// Deduplication only removes identical ranges, so these survive into
/// composition and produce garbled output.
pub fn find_partial_overlaps(spans: &[MatchSpan]) -> Vec<(&MatchSpan, &MatchSpan)> {
    let mut overlaps = Vec::new();
    for (i, first) in spans.iter().enumerate() {
        for second in &spans[i + 1..] {
            if first.key() != second.key() && first.overlaps(second) {
                overlaps.push((first, second));
            }
        }
    }
    overlaps
}

/// Substitute highlighted replacements into `text`.
///
/// Returns `None` when there is nothing to substitute. Spans are applied in
/// descending start order against the progressively edited buffer, the longer
/// span first when two share a start; a span
/// whose offsets no longer fall on character boundaries of that buffer is
/// skipped.
pub fn compose(text: &str, spans: &[MatchSpan], highlighter: &Highlighter) -> Option<String> {
    if spans.is_empty() {
        return None;
    }

    for (first, second) in find_partial_overlaps(spans) {
        warn!(
            "Overlapping translations '{}' ({}..{}) and '{}' ({}..{})",
            first.original, first.start, first.end, second.original, second.start, second.end
        );
    }

    let mut ordered: Vec<&MatchSpan> = spans.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut result = text.to_string();
    for span in ordered {
        let in_bounds = span.start <= span.end && span.end <= result.len();
        if !in_bounds || !result.is_char_boundary(span.start) || !result.is_char_boundary(span.end) {
            warn!(
                "Skipping translation of '{}' at {}..{}: range no longer valid",
                span.original, span.start, span.end
            );
            continue;
        }
        result.replace_range(span.start..span.end, &highlighter.wrap(&span.replacement));
    }

    Some(result)
}
