// SPDX-License-Identifier: MIT OR Apache-2.0

//! The result of a single key extraction.

use crate::domain::{KeyName, ResourceName, StringResource};
use std::path::{Path, PathBuf};

/// The outcome of looking up one key in one configuration source.
///
/// An `ExtractedKey` is built fresh for every extraction and never changes
/// afterwards. A key that was not found always carries an empty value: the
/// fields are private and the only constructors are [`ExtractedKey::found`]
/// and [`ExtractedKey::not_found`].
///
/// # Examples
///
/// ```
/// use reskey::domain::{ExtractedKey, KeyName};
///
/// let key = KeyName::new("GMAP_API_KEY").unwrap();
/// let missing = ExtractedKey::not_found("env.json", key);
///
/// assert!(!missing.is_found());
/// assert_eq!(missing.value(), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedKey {
    source_path: PathBuf,
    key_name: KeyName,
    value: String,
    found: bool,
}

impl ExtractedKey {
    /// Creates a result for a key whose value was located.
    pub fn found(
        source_path: impl Into<PathBuf>,
        key_name: KeyName,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            key_name,
            value: value.into(),
            found: true,
        }
    }

    /// Creates an empty result for a key that could not be located.
    pub fn not_found(source_path: impl Into<PathBuf>, key_name: KeyName) -> Self {
        Self {
            source_path: source_path.into(),
            key_name,
            value: String::new(),
            found: false,
        }
    }

    /// Location of the configuration the key was looked up in.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// The key that was looked up.
    pub fn key_name(&self) -> &KeyName {
        &self.key_name
    }

    /// The extracted value, or `""` when the key was not found.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the key was located.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Publishes the value under the given resource name.
    pub fn into_resource(self, name: ResourceName) -> StringResource {
        StringResource::new(name, self.value)
    }
}
