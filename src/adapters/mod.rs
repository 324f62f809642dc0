// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! Text sources, the JSON pattern matcher and the resource writers for each
//! supported output format live here.

#[cfg(feature = "android")]
pub mod android_values;
#[cfg(feature = "cargo")]
pub mod cargo_env;
pub mod json_pattern;
pub mod local_file;
pub mod text_output;

// Re-export adapters based on feature flags
#[cfg(feature = "android")]
pub use android_values::AndroidValuesWriter;
#[cfg(feature = "cargo")]
pub use cargo_env::CargoEnvWriter;
pub use json_pattern::JsonPatternMatcher;
pub use local_file::{LocalFileSource, DEFAULT_ENV_FILE};
#[cfg(feature = "json")]
pub use text_output::JsonWriter;
pub use text_output::PlainWriter;

#[cfg(any(feature = "android", feature = "json"))]
use crate::domain::{ExtractError, Result, StringResource};

/// Rejects a resource list that repeats a name.
///
/// Keyed formats (Android resources, JSON objects) cannot hold the same name
/// twice.
#[cfg(any(feature = "android", feature = "json"))]
pub(crate) fn ensure_unique_names(resources: &[StringResource], format: &str) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for resource in resources {
        if !seen.insert(resource.name()) {
            return Err(ExtractError::ResourceError {
                name: resource.name().to_string(),
                format: format.to_string(),
                message: "duplicate resource name".to_string(),
            });
        }
    }
    Ok(())
}
