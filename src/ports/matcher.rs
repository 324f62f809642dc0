// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key matcher trait definition.
//!
//! This module defines the `KeyMatcher` trait, which locates the value of a
//! key inside raw configuration text. Matchers work on text, not on parsed
//! documents, so content that is not well-formed around the key is still
//! searchable.

use crate::domain::{KeyName, Result};

/// A trait for finding a key's value in configuration text.
///
/// # Examples
///
/// ```rust
/// use reskey::ports::KeyMatcher;
/// use reskey::domain::{KeyName, Result};
///
/// /// Matches `KEY=value` lines.
/// struct DotEnvMatcher;
///
/// impl KeyMatcher for DotEnvMatcher {
///     fn find(&self, text: &str, key: &KeyName) -> Result<Option<String>> {
///         let prefix = format!("{}=", key);
///         Ok(text
///             .lines()
///             .find_map(|line| line.strip_prefix(prefix.as_str()))
///             .map(str::to_string))
///     }
///
///     fn syntax(&self) -> &str {
///         "dotenv"
///     }
/// }
///
/// let key = KeyName::new("TOKEN").unwrap();
/// let value = DotEnvMatcher.find("A=1\nTOKEN=xyz\n", &key).unwrap();
/// assert_eq!(value.as_deref(), Some("xyz"));
/// ```
pub trait KeyMatcher: Send + Sync {
    /// Searches `text` for `key` and returns the first value found.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The key was found
    /// * `Ok(None)` - The text does not contain the key
    /// * `Err(ExtractError)` - The matcher could not run for this key
    fn find(&self, text: &str, key: &KeyName) -> Result<Option<String>>;

    /// Returns a short name for the text shape this matcher understands.
    fn syntax(&self) -> &str;
}
