// SPDX-License-Identifier: MIT OR Apache-2.0

//! The key extractor service.
//!
//! `KeyExtractor` ties a [`TextSource`] to a [`KeyMatcher`] and is the point
//! where failures stop: whatever goes wrong while reading, callers always get
//! an [`ExtractedKey`] back.

use crate::adapters::{JsonPatternMatcher, LocalFileSource};
use crate::domain::{ExtractedKey, KeyName, ResourceBinding, StringResource};
use crate::ports::{KeyMatcher, TextSource};
use std::path::Path;

/// Extracts key values from a configuration source.
///
/// Extraction never returns an error. A missing source yields empty,
/// not-found results silently. A source that exists but cannot be read
/// yields the same empty results plus one `WARN` event carrying the failure
/// message. Nothing is cached; each call reads the source again.
///
/// # Examples
///
/// ```rust
/// use reskey::domain::KeyName;
/// use reskey::service::KeyExtractor;
///
/// let extractor = KeyExtractor::for_file("/definitely/not/here/env.json");
/// let key = KeyName::new("GMAP_API_KEY").unwrap();
///
/// let extracted = extractor.extract(&key);
/// assert!(!extracted.is_found());
/// assert_eq!(extracted.value(), "");
/// ```
pub struct KeyExtractor {
    source: Box<dyn TextSource>,
    matcher: Box<dyn KeyMatcher>,
}

impl KeyExtractor {
    /// Creates a new extractor builder.
    pub fn builder() -> KeyExtractorBuilder {
        KeyExtractorBuilder::new()
    }

    /// Creates an extractor that scans the file at `path` for JSON-style pairs.
    pub fn for_file<P: AsRef<Path>>(path: P) -> Self {
        Self::builder().with_file(path).build()
    }

    /// Returns the configured text source.
    pub fn source(&self) -> &dyn TextSource {
        self.source.as_ref()
    }

    /// Looks up a single key.
    pub fn extract(&self, key: &KeyName) -> ExtractedKey {
        match self.load(key.as_str()) {
            Some(text) => self.match_key(&text, key),
            None => ExtractedKey::not_found(self.source.location(), key.clone()),
        }
    }

    /// Looks up several keys against one read of the source.
    ///
    /// Results are returned in the order of `keys`. If the read fails, a
    /// single warning is emitted and every result is empty.
    pub fn extract_all<'a, I>(&self, keys: I) -> Vec<ExtractedKey>
    where
        I: IntoIterator<Item = &'a KeyName>,
    {
        let keys: Vec<&KeyName> = keys.into_iter().collect();
        let described = keys
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        match self.load(&described) {
            Some(text) => keys.into_iter().map(|k| self.match_key(&text, k)).collect(),
            None => keys
                .into_iter()
                .map(|k| ExtractedKey::not_found(self.source.location(), k.clone()))
                .collect(),
        }
    }

    /// Extracts every binding and publishes each value under its resource name.
    pub fn resolve(&self, bindings: &[ResourceBinding]) -> Vec<StringResource> {
        self.extract_all(bindings.iter().map(ResourceBinding::key))
            .into_iter()
            .zip(bindings)
            .map(|(extracted, binding)| extracted.into_resource(binding.resource().clone()))
            .collect()
    }

    /// Reads the source, converting failures into a warning.
    fn load(&self, keys: &str) -> Option<String> {
        let location = self.source.location();

        match self.source.read_text() {
            Ok(Some(text)) => Some(text),
            Ok(None) => {
                tracing::debug!(
                    "Configuration '{}' not found, using empty value for {}",
                    location.display(),
                    keys
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    source = self.source.name(),
                    "Failed to read {} from {}: {}",
                    keys,
                    location.display(),
                    e.diagnostic()
                );
                None
            }
        }
    }

    fn match_key(&self, text: &str, key: &KeyName) -> ExtractedKey {
        let location = self.source.location();

        match self.matcher.find(text, key) {
            Ok(Some(value)) => {
                tracing::debug!(
                    "Found {} in '{}' ({} chars)",
                    key,
                    location.display(),
                    value.chars().count()
                );
                ExtractedKey::found(location, key.clone(), value)
            }
            Ok(None) => {
                tracing::debug!(
                    "No {} value for {} in '{}'",
                    self.matcher.syntax(),
                    key,
                    location.display()
                );
                ExtractedKey::not_found(location, key.clone())
            }
            Err(e) => {
                tracing::warn!("Failed to match {} in {}: {}", key, location.display(), e);
                ExtractedKey::not_found(location, key.clone())
            }
        }
    }
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for constructing a `KeyExtractor`.
///
/// Defaults to `env.json` in the working directory and the JSON pattern
/// matcher.
///
/// # Examples
///
/// ```rust
/// use reskey::adapters::{JsonPatternMatcher, LocalFileSource};
/// use reskey::service::KeyExtractorBuilder;
///
/// let extractor = KeyExtractorBuilder::new()
///     .with_source(Box::new(LocalFileSource::new("config/env.json").with_max_size(4096)))
///     .with_matcher(Box::new(JsonPatternMatcher::new()))
///     .build();
///
/// assert_eq!(extractor.source().location().to_str(), Some("config/env.json"));
/// ```
pub struct KeyExtractorBuilder {
    source: Option<Box<dyn TextSource>>,
    matcher: Option<Box<dyn KeyMatcher>>,
}

impl KeyExtractorBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            source: None,
            matcher: None,
        }
    }

    /// Sets the text source.
    pub fn with_source(mut self, source: Box<dyn TextSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Reads from a local file.
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_source(Box::new(LocalFileSource::new(path)))
    }

    /// Sets the key matcher.
    pub fn with_matcher(mut self, matcher: Box<dyn KeyMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Builds the extractor.
    pub fn build(self) -> KeyExtractor {
        KeyExtractor {
            source: self
                .source
                .unwrap_or_else(|| Box::new(LocalFileSource::default())),
            matcher: self
                .matcher
                .unwrap_or_else(|| Box::new(JsonPatternMatcher::new())),
        }
    }
}

impl Default for KeyExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Looks up `key` in the JSON-like file at `path`.
///
/// Shorthand for `KeyExtractor::for_file(path).extract(key)`.
///
/// # Examples
///
/// ```rust
/// use reskey::domain::KeyName;
///
/// let key = KeyName::new("GMAP_API_KEY").unwrap();
/// let extracted = reskey::extract("missing/env.json", &key);
/// assert_eq!(extracted.value(), "");
/// ```
pub fn extract<P: AsRef<Path>>(path: P, key: &KeyName) -> ExtractedKey {
    KeyExtractor::for_file(path).extract(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExtractError, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StaticSource {
        text: Option<&'static str>,
        reads: Arc<AtomicUsize>,
    }

    impl TextSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        fn location(&self) -> &Path {
            Path::new("static.json")
        }

        fn read_text(&self) -> Result<Option<String>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.map(str::to_string))
        }
    }

    struct FailingSource;

    impl TextSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn location(&self) -> &Path {
            Path::new("failing.json")
        }

        fn read_text(&self) -> Result<Option<String>> {
            Err(ExtractError::SourceError {
                source_name: "failing".to_string(),
                message: "permission denied".to_string(),
                source: None,
            })
        }
    }

    struct FailingMatcher;

    impl KeyMatcher for FailingMatcher {
        fn find(&self, _text: &str, key: &KeyName) -> Result<Option<String>> {
            Err(ExtractError::PatternError {
                key: key.to_string(),
                source: regex::Regex::new("(").unwrap_err(),
            })
        }

        fn syntax(&self) -> &str {
            "failing"
        }
    }

    fn extractor(text: Option<&'static str>) -> (KeyExtractor, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let source = StaticSource {
            text,
            reads: Arc::clone(&reads),
        };
        (
            KeyExtractor::builder().with_source(Box::new(source)).build(),
            reads,
        )
    }

    fn key(name: &str) -> KeyName {
        KeyName::new(name).unwrap()
    }

    #[test]
    fn test_extract_found() {
        let (extractor, _) = extractor(Some(r#"{"GMAP_API_KEY": "abc123"}"#));
        let extracted = extractor.extract(&key("GMAP_API_KEY"));

        assert!(extracted.is_found());
        assert_eq!(extracted.value(), "abc123");
        assert_eq!(extracted.source_path(), Path::new("static.json"));
    }

    #[test]
    fn test_extract_missing_source() {
        let (extractor, _) = extractor(None);
        let extracted = extractor.extract(&key("GMAP_API_KEY"));

        assert!(!extracted.is_found());
        assert_eq!(extracted.value(), "");
    }

    #[test]
    fn test_extract_key_absent() {
        let (extractor, _) = extractor(Some(r#"{"OTHER_KEY": "xyz"}"#));
        let extracted = extractor.extract(&key("GMAP_API_KEY"));

        assert!(!extracted.is_found());
        assert_eq!(extracted.value(), "");
    }

    #[test]
    fn test_extract_failing_source_is_empty() {
        let extractor = KeyExtractor::builder()
            .with_source(Box::new(FailingSource))
            .build();
        let extracted = extractor.extract(&key("GMAP_API_KEY"));

        assert!(!extracted.is_found());
        assert_eq!(extracted.value(), "");
        assert_eq!(extracted.source_path(), Path::new("failing.json"));
    }

    #[test]
    fn test_extract_failing_matcher_is_empty() {
        let (extractor, _) = extractor(Some(r#"{"K": "v"}"#));
        let extractor = KeyExtractor {
            matcher: Box::new(FailingMatcher),
            ..extractor
        };

        let extracted = extractor.extract(&key("K"));
        assert!(!extracted.is_found());
    }

    #[test]
    fn test_extract_reads_every_time() {
        let (extractor, reads) = extractor(Some(r#"{"K": "v"}"#));

        let first = extractor.extract(&key("K"));
        let second = extractor.extract(&key("K"));

        assert_eq!(first, second);
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_extract_all_reads_once() {
        let (extractor, reads) = extractor(Some(r#"{"A": "1", "C": "3"}"#));
        let keys = [key("A"), key("B"), key("C")];

        let results = extractor.extract_all(&keys);

        assert_eq!(reads.load(Ordering::SeqCst), 1);
        let values: Vec<_> = results.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec!["1", "", "3"]);
        let found: Vec<_> = results.iter().map(|r| r.is_found()).collect();
        assert_eq!(found, vec![true, false, true]);
    }

    #[test]
    fn test_extract_all_failing_source() {
        let extractor = KeyExtractor::builder()
            .with_source(Box::new(FailingSource))
            .build();
        let keys = [key("A"), key("B")];

        let results = extractor.extract_all(&keys);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.is_found() && r.value().is_empty()));
    }

    #[test]
    fn test_extract_all_empty() {
        let (extractor, _) = extractor(Some("{}"));
        assert!(extractor.extract_all(Vec::<&KeyName>::new()).is_empty());
    }

    #[test]
    fn test_resolve_bindings() {
        let (extractor, _) = extractor(Some(r#"{"GMAP_API_KEY": "abc123"}"#));
        let bindings = vec![
            ResourceBinding::gmap(),
            "SENTRY_DSN".parse::<ResourceBinding>().unwrap(),
        ];

        let resources = extractor.resolve(&bindings);

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name().as_str(), "GMAP_KEY");
        assert_eq!(resources[0].value(), "abc123");
        assert_eq!(resources[1].name().as_str(), "SENTRY_DSN");
        assert_eq!(resources[1].value(), "");
    }

    #[test]
    fn test_default_extractor_uses_env_json() {
        let extractor = KeyExtractor::default();
        assert_eq!(extractor.source().location(), Path::new("env.json"));
        assert_eq!(extractor.source().name(), "file");
    }

    #[test]
    fn test_extract_free_function_missing_file() {
        let extracted = extract("/nonexistent/env.json", &key("GMAP_API_KEY"));
        assert!(!extracted.is_found());
        assert_eq!(extracted.source_path(), Path::new("/nonexistent/env.json"));
    }
}
