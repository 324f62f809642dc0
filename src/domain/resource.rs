// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource names, key bindings and the string resources handed downstream.

use crate::domain::errors::{ExtractError, Result};
use crate::domain::KeyName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A name under which a string resource is published.
///
/// Names follow the identifier shape Android accepts for resources:
/// an ASCII letter or underscore, then letters, digits, underscores or dots.
///
/// # Examples
///
/// ```
/// use reskey::domain::ResourceName;
///
/// assert!(ResourceName::new("GMAP_KEY").is_ok());
/// assert!(ResourceName::new("9lives").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Creates a new `ResourceName`, validating its shape.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mut chars = name.chars();

        let reason = match chars.next() {
            None => Some("resource name must not be empty"),
            Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                Some("resource name must start with a letter or underscore")
            }
            Some(_) if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') => {
                Some("resource name may only contain letters, digits, '_' and '.'")
            }
            Some(_) => None,
        };

        match reason {
            Some(reason) => Err(ExtractError::InvalidResourceName {
                name,
                reason: reason.to_string(),
            }),
            None => Ok(ResourceName(name)),
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceName {
    type Error = ExtractError;

    fn try_from(s: String) -> Result<Self> {
        ResourceName::new(s)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pairs a lookup key with the resource name its value is published as.
///
/// The textual form is `KEY=RESOURCE`, or just `KEY` when the resource keeps
/// the key's name.
///
/// # Examples
///
/// ```
/// use reskey::domain::ResourceBinding;
///
/// let binding: ResourceBinding = "GMAP_API_KEY=GMAP_KEY".parse().unwrap();
/// assert_eq!(binding.key().as_str(), "GMAP_API_KEY");
/// assert_eq!(binding.resource().as_str(), "GMAP_KEY");
///
/// let same: ResourceBinding = "MAPBOX_TOKEN".parse().unwrap();
/// assert_eq!(same.resource().as_str(), "MAPBOX_TOKEN");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceBinding {
    key: KeyName,
    resource: ResourceName,
}

impl ResourceBinding {
    /// Creates a binding from already validated parts.
    pub fn new(key: KeyName, resource: ResourceName) -> Self {
        Self { key, resource }
    }

    /// The Google Maps binding the Android app build has always used.
    pub fn gmap() -> Self {
        Self {
            key: KeyName::new_unchecked(DEFAULT_KEY),
            resource: ResourceName(DEFAULT_RESOURCE.to_string()),
        }
    }

    /// Returns the lookup key.
    pub fn key(&self) -> &KeyName {
        &self.key
    }

    /// Returns the resource name.
    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// Checks that no two bindings publish the same resource name.
    ///
    /// Resource pipelines reject duplicate names, so the first repeated
    /// binding is reported as invalid.
    pub fn ensure_distinct(bindings: &[ResourceBinding]) -> Result<()> {
        let mut seen = HashSet::new();
        for binding in bindings {
            if !seen.insert(binding.resource()) {
                return Err(ExtractError::InvalidBinding {
                    binding: binding.to_string(),
                    reason: format!("resource '{}' is already bound", binding.resource()),
                });
            }
        }
        Ok(())
    }
}

/// Lookup key of the default binding.
pub const DEFAULT_KEY: &str = "GMAP_API_KEY";

/// Resource name of the default binding.
pub const DEFAULT_RESOURCE: &str = "GMAP_KEY";

impl FromStr for ResourceBinding {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, resource) = match s.split_once('=') {
            Some((key, resource)) => (key, resource),
            None => (s, s),
        };

        let invalid = |e: ExtractError| ExtractError::InvalidBinding {
            binding: s.to_string(),
            reason: e.to_string(),
        };

        let key = KeyName::new(key).map_err(invalid)?;
        let resource = ResourceName::new(resource).map_err(invalid)?;
        Ok(Self { key, resource })
    }
}

impl fmt::Display for ResourceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.resource)
    }
}

/// A named string value ready for a resource pipeline.
///
/// The value is always present; a key that was not found becomes an empty
/// string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringResource {
    name: ResourceName,
    value: String,
}

impl StringResource {
    /// Creates a new string resource.
    pub fn new(name: ResourceName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Returns the resource name.
    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    /// Returns the resource value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_valid() {
        for name in ["GMAP_KEY", "_private", "maps.api_key", "a1"] {
            assert!(ResourceName::new(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_resource_name_invalid() {
        for name in ["", "1key", "-key", "key-name", "key name", "ключ"] {
            let result = ResourceName::new(name);
            assert!(
                matches!(result, Err(ExtractError::InvalidResourceName { .. })),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_binding_with_resource() {
        let binding: ResourceBinding = "GMAP_API_KEY=GMAP_KEY".parse().unwrap();
        assert_eq!(binding.key().as_str(), "GMAP_API_KEY");
        assert_eq!(binding.resource().as_str(), "GMAP_KEY");
        assert_eq!(binding.to_string(), "GMAP_API_KEY=GMAP_KEY");
    }

    #[test]
    fn test_binding_without_resource() {
        let binding: ResourceBinding = "SENTRY_DSN".parse().unwrap();
        assert_eq!(binding.key().as_str(), "SENTRY_DSN");
        assert_eq!(binding.resource().as_str(), "SENTRY_DSN");
    }

    #[test]
    fn test_binding_key_may_be_any_text() {
        // The key only needs to be non-empty, the resource must be an identifier.
        let binding: ResourceBinding = "maps-key=MAPS_KEY".parse().unwrap();
        assert_eq!(binding.key().as_str(), "maps-key");
    }

    #[test]
    fn test_binding_splits_on_first_equals() {
        let result = "A=B=C".parse::<ResourceBinding>();
        assert!(matches!(result, Err(ExtractError::InvalidBinding { .. })));
    }

    #[test]
    fn test_binding_rejects_empty_parts() {
        assert!("=GMAP_KEY".parse::<ResourceBinding>().is_err());
        assert!("GMAP_API_KEY=".parse::<ResourceBinding>().is_err());
        assert!("".parse::<ResourceBinding>().is_err());
    }

    #[test]
    fn test_binding_bare_key_must_be_valid_resource() {
        let err = "maps-key".parse::<ResourceBinding>().unwrap_err();
        assert!(err.to_string().contains("maps-key"));
    }

    #[test]
    fn test_gmap_binding() {
        let binding = ResourceBinding::gmap();
        assert_eq!(binding.key().as_str(), DEFAULT_KEY);
        assert_eq!(binding.resource().as_str(), DEFAULT_RESOURCE);
        assert_eq!(
            binding,
            "GMAP_API_KEY=GMAP_KEY".parse::<ResourceBinding>().unwrap()
        );
    }

    #[test]
    fn test_ensure_distinct() {
        let bindings: Vec<ResourceBinding> = ["GMAP_API_KEY=GMAP_KEY", "GMAP_API_KEY=MAPS_KEY"]
            .iter()
            .map(|b| b.parse().unwrap())
            .collect();
        assert!(ResourceBinding::ensure_distinct(&bindings).is_ok());
        assert!(ResourceBinding::ensure_distinct(&[]).is_ok());
    }

    #[test]
    fn test_ensure_distinct_rejects_repeated_resource() {
        let bindings: Vec<ResourceBinding> = ["GMAP_API_KEY=GMAP_KEY", "OTHER=GMAP_KEY"]
            .iter()
            .map(|b| b.parse().unwrap())
            .collect();

        let err = ResourceBinding::ensure_distinct(&bindings).unwrap_err();
        match err {
            ExtractError::InvalidBinding { binding, reason } => {
                assert_eq!(binding, "OTHER=GMAP_KEY");
                assert!(reason.contains("GMAP_KEY"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_string_resource() {
        let resource = StringResource::new(ResourceName::new("GMAP_KEY").unwrap(), "abc123");
        assert_eq!(resource.name().as_str(), "GMAP_KEY");
        assert_eq!(resource.value(), "abc123");
    }
}
