// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local file text source adapter.
//!
//! This module provides the adapter that reads configuration text, such as
//! `env.json`, from the local filesystem.

use crate::domain::{ExtractError, Result};
use crate::ports::TextSource;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration file (10MB).
/// Keeps the text scan bounded.
const MAX_SOURCE_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default configuration file name, looked up relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = "env.json";

/// Text source adapter for a file on the local filesystem.
///
/// Every call to [`read_text`](TextSource::read_text) performs one existence
/// check and at most one read. Nothing is cached, so edits to the file are
/// picked up by the next extraction.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the file
/// is scanned as opaque text.
///
/// # Examples
///
/// ```rust,no_run
/// use reskey::adapters::LocalFileSource;
/// use reskey::ports::TextSource;
///
/// let source = LocalFileSource::new("../../env.json");
/// match source.read_text() {
///     Ok(Some(text)) => println!("read {} bytes", text.len()),
///     Ok(None) => println!("no env file"),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    /// Path to the file, as given
    file_path: PathBuf,
    /// Size cap in bytes
    max_size: u64,
}

impl LocalFileSource {
    /// Creates a source for the given path.
    ///
    /// The path is not checked here; a missing file is reported by
    /// [`read_text`](TextSource::read_text) as `Ok(None)`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            max_size: MAX_SOURCE_FILE_SIZE,
        }
    }

    /// Overrides the size cap.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn display_name(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
    }

    /// Reads the whole file. A file removed since the size check is still
    /// just missing.
    fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.file_path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.source_error(
                format!("Failed to read configuration file: {}", self.display_name()),
                e,
            )),
        }
    }

    fn source_error(&self, message: String, source: io::Error) -> ExtractError {
        ExtractError::SourceError {
            source_name: "file".to_string(),
            message,
            source: Some(Box::new(source)),
        }
    }
}

impl Default for LocalFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_FILE)
    }
}

impl TextSource for LocalFileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn location(&self) -> &Path {
        &self.file_path
    }

    fn read_text(&self) -> Result<Option<String>> {
        let metadata = match fs::metadata(&self.file_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(self.source_error(
                    format!("Failed to read file metadata: {}", self.display_name()),
                    e,
                ))
            }
        };

        if metadata.len() > self.max_size {
            return Err(ExtractError::SourceError {
                source_name: "file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    self.max_size
                ),
                source: None,
            });
        }

        Ok(self
            .read_bytes()?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }
}
