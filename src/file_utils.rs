use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

// @module: File and stream utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a whole text file
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Read from a file when a path is given, otherwise from standard input
    pub fn read_file_or_stdin(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => Self::read_to_string(path),
            None => Self::read_stdin(),
        }
    }

    /// Drop a single trailing line break (as left by `echo` or an editor)
    pub fn trim_trailing_newline(content: &str) -> &str {
        content
            .strip_suffix("\r\n")
            .or_else(|| content.strip_suffix('\n'))
            .unwrap_or(content)
    }
}
