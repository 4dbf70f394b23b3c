/*!
 * Tests for dictionary loading and inversion
 */

use anyhow::Result;
use std::collections::HashSet;
use amerbrit::app_config::DictionaryConfig;
use amerbrit::dictionary::{load_dictionary_from_file, DictionaryMapping};
use amerbrit::{Dictionaries, DictionaryError};
use crate::common;

/// Test loading a single fixture file
#[test]
fn test_load_dictionary_from_file_withFixture_shouldKeepFileOrder() -> Result<()> {
    let path = common::test_resource_path("dictionaries/american-to-british-spelling.json");
    let mapping = load_dictionary_from_file(&path)?;

    let keys: Vec<&str> = mapping.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["favor", "favorite", "color", "center"]);
    assert_eq!(mapping.get("color"), Some("colour"));
    Ok(())
}

/// Test loading all four dictionaries from a configured directory
#[test]
fn test_dictionaries_load_withDirectory_shouldReadAllFiles() -> Result<()> {
    let dictionaries = Dictionaries::load(&common::fixture_dictionary_config())?;

    assert_eq!(dictionaries.american_only.get("popsicle"), Some("ice lolly"));
    assert_eq!(dictionaries.british_only.get("bin"), Some("trash can"));
    assert_eq!(dictionaries.american_to_british_titles.get("dr."), Some("doctor"));
    assert_eq!(dictionaries.british_to_american_titles().get("doctor"), Some("dr."));
    assert_eq!(dictionaries.british_to_american_spelling().get("centre"), Some("center"));
    Ok(())
}

/// Test that no directory means the bundled dictionaries
#[test]
fn test_dictionaries_load_withoutDirectory_shouldUseBundledData() -> Result<()> {
    let loaded = Dictionaries::load(&DictionaryConfig::default())?;
    assert_eq!(loaded, Dictionaries::bundled()?);
    assert!(!loaded.american_only.is_empty());
    Ok(())
}

/// Test custom file names within a directory
#[test]
fn test_dictionaries_load_withMissingFile_shouldReportPath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "american-only.json", r#"{"soccer": "football"}"#)?;

    let config = DictionaryConfig {
        directory: Some(temp_dir.path().to_path_buf()),
        ..DictionaryConfig::default()
    };
    let err = Dictionaries::load(&config).unwrap_err();

    assert!(matches!(err, DictionaryError::Io { .. }));
    assert!(err.to_string().contains("british-only.json"));
    Ok(())
}

/// Test that a malformed dictionary is rejected with its file name
#[test]
fn test_load_dictionary_from_file_withNestedValue_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "broken.json",
        r#"{"color": "colour", "gray": ["grey"]}"#,
    )?;

    let err = load_dictionary_from_file(&path).unwrap_err();
    assert!(matches!(err, DictionaryError::Parse { .. }));
    let message = err.to_string();
    assert!(message.contains("broken.json"));
    Ok(())
}

/// The bundled invertible dictionaries must not lose entries when inverted
#[test]
fn test_bundled_invertible_dictionaries_shouldHaveUniqueValues() -> Result<()> {
    let dictionaries = Dictionaries::bundled()?;
    for mapping in [
        &dictionaries.american_to_british_spelling,
        &dictionaries.american_to_british_titles,
    ] {
        let values: HashSet<&str> = mapping.iter().map(|(_, value)| value).collect();
        assert_eq!(values.len(), mapping.len());
        assert_eq!(mapping.invert().len(), mapping.len());
    }
    Ok(())
}

/// Inverting twice gives back the original when values are unique
#[test]
fn test_invert_twice_withUniqueValues_shouldRestoreMapping() {
    let mapping: DictionaryMapping = [("color", "colour"), ("center", "centre")].into_iter().collect();
    assert_eq!(mapping.invert().invert(), mapping);
}
