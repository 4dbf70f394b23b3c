/*!
 * End-to-end properties of the translation engine on the bundled dictionaries
 */

use anyhow::Result;
use amerbrit::translation::compositor::find_partial_overlaps;
use amerbrit::{Dictionaries, TranslationDirection, Translator};

fn bundled_translator() -> Result<Translator> {
    Ok(Translator::new(Dictionaries::bundled()?)?)
}

/// Translate and drop the highlight markers
fn plain(translator: &Translator, text: &str, direction: TranslationDirection) -> String {
    let translation = translator.translate_text(text, direction);
    translator.highlighter().strip(&translation.translation)
}

/// Spelling and time substitutions survive a round trip
#[test]
fn test_round_trip_withSpellingAndTime_shouldRestoreOriginal() -> Result<()> {
    let translator = bundled_translator()?;
    let dictionaries = Dictionaries::bundled()?;

    for (american, british) in dictionaries.american_to_british_spelling.iter() {
        let there = plain(&translator, american, TranslationDirection::AmericanToBritish);
        assert_eq!(there, british);
        let back = plain(&translator, &there, TranslationDirection::BritishToAmerican);
        assert_eq!(back, american, "round trip of '{}'", american);
    }

    let there = plain(&translator, "10:45", TranslationDirection::AmericanToBritish);
    assert_eq!(there, "10.45");
    assert_eq!(plain(&translator, &there, TranslationDirection::BritishToAmerican), "10:45");
    Ok(())
}

/// Terms present in both one-way dictionaries survive a round trip
#[test]
fn test_round_trip_withPairedTerms_shouldRestoreOriginal() -> Result<()> {
    let translator = bundled_translator()?;
    let dictionaries = Dictionaries::bundled()?;

    let mut checked = 0;
    for (american, british) in dictionaries.american_only.iter() {
        if dictionaries.british_only.get(british) != Some(american) {
            continue;
        }
        let there = plain(&translator, american, TranslationDirection::AmericanToBritish);
        assert_eq!(there, british);
        let back = plain(&translator, &there, TranslationDirection::BritishToAmerican);
        assert_eq!(back, american, "round trip of '{}'", american);
        checked += 1;
    }
    assert!(checked > 10);
    Ok(())
}

/// Running the same translation twice gives the same answer
#[test]
fn test_translate_twice_shouldBeIdempotent() -> Result<()> {
    let translator = bundled_translator()?;
    let text = "Mr. Smith left his cell phone in the parking lot at 7:05, what a color!";

    for locale in ["american-to-british", "british-to-american"] {
        let first = translator.translate(Some(text), Some(locale));
        let second = translator.translate(Some(text), Some(locale));
        assert_eq!(first, second);
    }
    Ok(())
}

/// The bundled vocabulary never yields overlapping spans
#[test]
fn test_bundled_vocabulary_shouldNotProduceOverlappingSpans() -> Result<()> {
    let translator = bundled_translator()?;
    let dictionaries = Dictionaries::bundled()?;

    let american: Vec<&str> = dictionaries
        .american_only
        .iter()
        .chain(dictionaries.american_to_british_spelling.iter())
        .map(|(source, _)| source)
        .collect();
    let british_spelling = dictionaries.british_to_american_spelling();
    let british: Vec<&str> = dictionaries
        .british_only
        .iter()
        .chain(british_spelling.iter())
        .map(|(source, _)| source)
        .collect();

    for (words, title, direction) in [
        (american, "Dr.", TranslationDirection::AmericanToBritish),
        (british, "Dr", TranslationDirection::BritishToAmerican),
    ] {
        let text = format!("{} Watson said {} at 10:30 or 10.30.", title, words.join(", then "));
        let spans = translator.find_spans(&text, direction);

        assert!(spans.len() >= words.len() + 2);
        assert!(find_partial_overlaps(&spans).is_empty(), "{} overlaps", direction);

        let translation = translator.translate_text(&text, direction).translation;
        let opened = translation.matches(translator.highlighter().open()).count();
        assert_eq!(opened, spans.len());
    }
    Ok(())
}

/// A longer passage with every category in it
#[test]
fn test_translate_withMixedPassage_shouldTranslateEveryCategory() -> Result<()> {
    let translator = bundled_translator()?;
    let result = translator.translate_text(
        "Mrs. Hudson put the zucchini in the trash can at 6:30 and apologized.",
        TranslationDirection::AmericanToBritish,
    );

    assert_eq!(
        translator.highlighter().strip(&result.translation),
        "Mrs Hudson put the courgette in the bin at 6.30 and apologized."
    );
    Ok(())
}
