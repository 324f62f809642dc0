// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text source trait definition.
//!
//! This module defines the `TextSource` trait, the port through which the
//! extractor obtains the raw text it scans. The file adapter is the production
//! implementation; tests plug in in-memory and failing sources.

use crate::domain::Result;
use std::path::Path;

/// A trait for sources of raw configuration text.
///
/// A source distinguishes three outcomes:
///
/// - `Ok(Some(text))`: the configuration exists and was read
/// - `Ok(None)`: the configuration does not exist, which is an expected,
///   silent state (for example a CI machine without secrets)
/// - `Err(ExtractError)`: the configuration exists but could not be read
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so an extractor can be shared.
///
/// # Examples
///
/// ```rust
/// use reskey::ports::TextSource;
/// use reskey::domain::Result;
/// use std::path::Path;
///
/// struct Inline(&'static str);
///
/// impl TextSource for Inline {
///     fn name(&self) -> &str {
///         "inline"
///     }
///
///     fn location(&self) -> &Path {
///         Path::new("<inline>")
///     }
///
///     fn read_text(&self) -> Result<Option<String>> {
///         Ok(Some(self.0.to_string()))
///     }
/// }
///
/// let source = Inline(r#"{"GMAP_API_KEY": "abc"}"#);
/// assert!(source.read_text().unwrap().is_some());
/// ```
pub trait TextSource: Send + Sync {
    /// Returns a short identifier for logging and error messages.
    fn name(&self) -> &str;

    /// Returns where the text comes from.
    ///
    /// This is recorded as the `source_path` of every extraction result.
    fn location(&self) -> &Path;

    /// Reads the full text of the configuration.
    ///
    /// Each call performs a fresh read; sources must not cache content
    /// between calls.
    fn read_text(&self) -> Result<Option<String>>;
}
