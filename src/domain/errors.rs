// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the key extraction crate.
//!
//! Extraction itself never fails towards the caller (see
//! [`KeyExtractor`](crate::service::KeyExtractor)), but the ports it is built
//! from do, and so do name validation and resource writing. All of those
//! report through [`ExtractError`].

use thiserror::Error;

/// The main error type for extraction and resource generation.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
///
/// # Examples
///
/// ```
/// use reskey::domain::errors::ExtractError;
///
/// fn lookup_name(raw: &str) -> Result<String, ExtractError> {
///     if raw.is_empty() {
///         return Err(ExtractError::InvalidKeyName {
///             name: raw.to_string(),
///             reason: "key name must not be empty".to_string(),
///         });
///     }
///     Ok(raw.to_string())
/// }
///
/// assert!(lookup_name("").is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// A lookup key name was rejected.
    #[error("Invalid key name '{name}': {reason}")]
    InvalidKeyName {
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A resource name was rejected.
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName {
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A `KEY[=RESOURCE]` binding could not be parsed.
    #[error("Invalid binding '{binding}': {reason}")]
    InvalidBinding {
        /// The raw binding text
        binding: String,
        /// Why it was rejected
        reason: String,
    },

    /// A text source failed to produce its content.
    #[error("Text source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that failed
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The lookup pattern for a key could not be compiled.
    #[error("Failed to build lookup pattern for key '{key}': {source}")]
    PatternError {
        /// The key the pattern was built for
        key: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A resource could not be represented in the requested output format.
    #[error("Cannot write resource '{name}' as {format}: {message}")]
    ResourceError {
        /// The resource name
        name: String,
        /// The output format
        format: String,
        /// The error message
        message: String,
    },

    /// Serializing resources failed.
    #[cfg(feature = "json")]
    #[error("Failed to serialize resources: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// An I/O error occurred while writing output.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExtractError {
    /// Returns a short, stable message suitable for a single log line.
    ///
    /// For source failures this includes the underlying error text, which is
    /// what the extraction warning reports.
    pub fn diagnostic(&self) -> String {
        match self {
            ExtractError::SourceError {
                message,
                source: Some(source),
                ..
            } => format!("{}: {}", message, source),
            other => other.to_string(),
        }
    }
}

/// A specialized Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
