/*!
 * Core translation engine.
 *
 * `Translator` validates a request, runs every matcher of the requested
 * direction over the text, resolves the pooled spans and composes the
 * highlighted translation.
 */

use log::debug;

use super::compositor::{self, Highlighter};
use super::matcher::{
    MatchCategory, MatchSpan, SpanMatcher, TermMatcher, TimeFormat, TimeMatcher, TitleMatcher,
};
use super::models::{Translation, TranslationDirection, TranslationRequest, TranslationResult};
use crate::dictionary::{Dictionaries, DictionaryMapping};
use crate::errors::{DictionaryError, TranslationError};

/// Returned as the translation when no span matched
pub const NO_TRANSLATION_NEEDED: &str = "Everything looks good to me!";

/// The matchers of one direction, in pooling order
struct DirectionMatchers {
    matchers: Vec<Box<dyn SpanMatcher>>,
}

impl DirectionMatchers {
    fn build(
        terms: &DictionaryMapping,
        spelling: &DictionaryMapping,
        titles: &DictionaryMapping,
        time: TimeMatcher,
    ) -> Result<Self, DictionaryError> {
        let matchers: Vec<Box<dyn SpanMatcher>> = vec![
            Box::new(TermMatcher::new(terms, MatchCategory::Term)?),
            Box::new(TermMatcher::new(spelling, MatchCategory::Spelling)?),
            Box::new(TitleMatcher::new(titles)?),
            Box::new(time),
        ];
        Ok(Self { matchers })
    }

    fn find_spans(&self, text: &str) -> Vec<MatchSpan> {
        self.matchers
            .iter()
            .flat_map(|matcher| matcher.find_spans(text))
            .collect()
    }
}

/// American/British English translator.
///
/// All patterns for both directions are compiled at construction and never
/// change afterwards, so a `Translator` can be shared between threads.
pub struct Translator {
    american_to_british: DirectionMatchers,
    british_to_american: DirectionMatchers,
    highlighter: Highlighter,
}

impl Translator {
    /// Build a translator from the four dictionaries
    pub fn new(dictionaries: Dictionaries) -> Result<Self, DictionaryError> {
        let american_to_british = DirectionMatchers::build(
            &dictionaries.american_only,
            &dictionaries.american_to_british_spelling,
            &dictionaries.american_to_british_titles,
            TimeMatcher::new(TimeFormat::American, TimeFormat::British),
        )?;
        let british_to_american = DirectionMatchers::build(
            &dictionaries.british_only,
            &dictionaries.british_to_american_spelling(),
            &dictionaries.british_to_american_titles(),
            TimeMatcher::new(TimeFormat::British, TimeFormat::American),
        )?;

        Ok(Self {
            american_to_british,
            british_to_american,
            highlighter: Highlighter::default(),
        })
    }

    /// Use different highlight markers
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Translate, reporting validation failures as an error result
    pub fn translate(&self, text: Option<&str>, locale: Option<&str>) -> TranslationResult {
        self.try_translate(text, locale).into()
    }

    pub fn translate_request(&self, request: &TranslationRequest) -> TranslationResult {
        self.translate(request.text.as_deref(), request.locale.as_deref())
    }

    /// Validate the inputs, then translate.
    ///
    /// Checks run in order and the first failure wins: missing text, empty
    /// text, missing locale (an empty locale counts as missing), unknown locale.
    pub fn try_translate(
        &self,
        text: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Translation, TranslationError> {
        let text = text.ok_or(TranslationError::MissingField)?;
        if text.is_empty() {
            return Err(TranslationError::EmptyText);
        }

        let locale = locale
            .filter(|locale| !locale.is_empty())
            .ok_or(TranslationError::MissingField)?;
        let direction: TranslationDirection = locale.parse()?;

        Ok(self.translate_text(text, direction))
    }

    /// Translate text whose direction is already known
    pub fn translate_text(&self, text: &str, direction: TranslationDirection) -> Translation {
        let spans = self.find_spans(text, direction);
        debug!("{} span(s) to translate {}", spans.len(), direction);

        let translation = compositor::compose(text, &spans, &self.highlighter)
            .unwrap_or_else(|| NO_TRANSLATION_NEEDED.to_string());

        Translation {
            text: text.to_string(),
            translation,
        }
    }

    /// All spans for a direction, pooled in category order and deduplicated
    pub fn find_spans(&self, text: &str, direction: TranslationDirection) -> Vec<MatchSpan> {
        let matchers = match direction {
            TranslationDirection::AmericanToBritish => &self.american_to_british,
            TranslationDirection::BritishToAmerican => &self.british_to_american,
        };
        compositor::deduplicate(matchers.find_spans(text))
    }
}
