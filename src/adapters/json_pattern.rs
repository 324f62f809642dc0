// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern-based matcher for JSON-shaped text.

use crate::domain::{ExtractError, KeyName, Result};
use crate::ports::KeyMatcher;
use regex::Regex;

/// Finds `"KEY" : "value"` pairs in JSON-like text.
///
/// The text is never deserialized. A regular expression looks for the quoted
/// key, optional whitespace on either side of the colon, and a quoted,
/// non-empty value. The first occurrence wins.
///
/// Some consequences of matching text rather than parsing JSON:
///
/// - a syntactically broken document still yields keys that look right
/// - `"KEY": ""` does not match, so an empty value is treated as absent
/// - escaped quotes inside a value end the capture early
/// - the key may appear at any nesting depth
///
/// # Examples
///
/// ```rust
/// use reskey::adapters::JsonPatternMatcher;
/// use reskey::domain::KeyName;
/// use reskey::ports::KeyMatcher;
///
/// let matcher = JsonPatternMatcher::new();
/// let key = KeyName::new("GMAP_API_KEY").unwrap();
///
/// let value = matcher.find(r#"{ "GMAP_API_KEY" : "abc123", }"#, &key).unwrap();
/// assert_eq!(value.as_deref(), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonPatternMatcher;

impl JsonPatternMatcher {
    /// Creates a new matcher.
    pub fn new() -> Self {
        JsonPatternMatcher
    }

    /// Builds the lookup pattern for one key.
    ///
    /// The key is escaped, so regex metacharacters in it match literally.
    pub fn pattern_for(key: &KeyName) -> Result<Regex> {
        let pattern = format!(r#""{}"\s*:\s*"([^"]+)""#, regex::escape(key.as_str()));
        Regex::new(&pattern).map_err(|e| ExtractError::PatternError {
            key: key.to_string(),
            source: e,
        })
    }
}

impl KeyMatcher for JsonPatternMatcher {
    fn find(&self, text: &str, key: &KeyName) -> Result<Option<String>> {
        let re = Self::pattern_for(key)?;
        Ok(re
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string()))
    }

    fn syntax(&self) -> &str {
        "json"
    }
}
