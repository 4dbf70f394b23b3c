/*!
 * Tests running the amerbrit binary
 */

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use amerbrit::TranslationResult;
use crate::common::{self, highlighted};

fn run_cli(config_path: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_amerbrit"))
        .arg("--config-path")
        .arg(config_path)
        .args(args)
        .output()?)
}

/// Test translating text given on the command line
#[test]
fn test_translate_command_withText_shouldPrintHighlightedTranslation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let output = run_cli(
        &config_path,
        &["translate", "-l", "american-to-british", "I ate a popsicle yesterday."],
    )?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.trim_end(), format!("I ate a {} yesterday.", highlighted("ice lolly")));
    // A default config is written on first use
    assert!(config_path.exists());
    Ok(())
}

/// Test plain output without markers
#[test]
fn test_translate_command_withPlainFlag_shouldStripMarkers() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = run_cli(
        &temp_dir.path().join("conf.json"),
        &["translate", "--locale", "british-to-american", "--plain", "Mr Bond queued at 4.30."],
    )?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?.trim_end(), "Mr. Bond queued at 4:30.");
    Ok(())
}

/// Test that a validation failure exits with an error
#[test]
fn test_translate_command_withoutLocale_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = run_cli(&temp_dir.path().join("conf.json"), &["translate", "--json", "Hello"])?;

    assert!(!output.status.success());
    let result: TranslationResult = serde_json::from_slice(&output.stdout)?;
    assert_eq!(result.error(), Some("Required field(s) missing"));
    Ok(())
}

/// Test answering a JSON request from a file
#[test]
fn test_request_command_withRequestFile_shouldPrintJsonResult() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let request_path = common::create_test_file(
        temp_dir.path(),
        "request.json",
        r#"{"text": "The meeting is at 12:30.", "locale": "american-to-british"}"#,
    )?;

    let output = run_cli(
        &temp_dir.path().join("conf.json"),
        &["request", request_path.to_str().unwrap_or_default()],
    )?;

    assert!(output.status.success());
    let result: TranslationResult = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        result.translation(),
        Some(format!("The meeting is at {}.", highlighted("12.30")).as_str())
    );
    Ok(())
}

/// Test that the configured dictionaries are used
#[test]
fn test_translate_command_withDictionaryDirectory_shouldUseConfiguredDictionaries() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::fixture_config();
    let config_path =
        common::create_test_file(temp_dir.path(), "conf.json", &serde_json::to_string(&config)?)?;

    let output = run_cli(&config_path, &["translate", "-l", "american-to-british", "Dr. Grant"])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?.trim_end(),
        format!("{} Grant", highlighted("Doctor"))
    );
    Ok(())
}

/// Test that generating completions never touches the config file
#[test]
fn test_completions_command_shouldPrintScriptWithoutCreatingConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let output = run_cli(&config_path, &["completions", "bash"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("amerbrit"));
    assert!(!config_path.exists());
    Ok(())
}
