// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup key newtype.
//!
//! A `KeyName` is the identifier searched for in a configuration file, for
//! example `GMAP_API_KEY`. It wraps a `String` so lookup keys cannot be mixed
//! up with values or resource names.

use crate::domain::errors::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, non-empty lookup key.
///
/// Matching is case-sensitive, so `GMAP_API_KEY` and `gmap_api_key` are
/// different keys.
///
/// # Examples
///
/// ```
/// use reskey::domain::KeyName;
///
/// let key = KeyName::new("GMAP_API_KEY").unwrap();
/// assert_eq!(key.as_str(), "GMAP_API_KEY");
///
/// assert!(KeyName::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyName(String);

impl KeyName {
    /// Creates a new `KeyName`, rejecting empty names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExtractError::InvalidKeyName {
                name,
                reason: "key name must not be empty".to_string(),
            });
        }
        Ok(KeyName(name))
    }

    /// Wraps a name known to be non-empty.
    pub(crate) fn new_unchecked(name: &str) -> Self {
        debug_assert!(!name.is_empty());
        KeyName(name.to_string())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `KeyName` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for KeyName {
    type Error = ExtractError;

    fn try_from(s: String) -> Result<Self> {
        KeyName::new(s)
    }
}

impl TryFrom<&str> for KeyName {
    type Error = ExtractError;

    fn try_from(s: &str) -> Result<Self> {
        KeyName::new(s)
    }
}

impl FromStr for KeyName {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        KeyName::new(s)
    }
}

impl From<KeyName> for String {
    fn from(key: KeyName) -> Self {
        key.0
    }
}

impl AsRef<str> for KeyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
