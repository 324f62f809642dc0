// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extract keys from local JSON env files into generated string resources.
//!
//! Mobile and native builds often keep API keys out of version control in a
//! small JSON file (`env.json`) next to the project. This crate finds a key's
//! value in that file and hands it to a build pipeline as a named string
//! resource, for example the Android `@string/GMAP_KEY` resource read by the
//! manifest.
//!
//! Extraction never fails the build:
//!
//! - a missing file quietly yields an empty value
//! - an unreadable file yields an empty value and one `tracing` warning
//! - a file without the key yields an empty value
//!
//! The file is scanned as text with a `"KEY" : "value"` pattern, not parsed
//! as JSON, so a file that is broken elsewhere still produces its keys.
//!
//! # Architecture
//!
//! - **Domain Layer**: `KeyName`, `ExtractedKey`, resource names, bindings, errors
//! - **Ports**: `TextSource`, `KeyMatcher`, `ResourceWriter`
//! - **Adapters**: local files, the JSON pattern matcher, output formats
//! - **Service**: `KeyExtractor`, which wires a source to a matcher
//!
//! # Feature Flags
//!
//! - `android`: Android `values` XML writer (default)
//! - `cargo`: Cargo build-script directive writer (default)
//! - `json`: JSON writer (default)
//! - `cli`: the `reskey` binary (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use reskey::prelude::*;
//!
//! # fn main() -> reskey::domain::Result<()> {
//! let extractor = KeyExtractor::for_file("../../env.json");
//! let resources = extractor.resolve(&[ResourceBinding::gmap()]);
//!
//! // Always a string, empty when the key is unavailable.
//! assert_eq!(resources[0].name().as_str(), "GMAP_KEY");
//! # Ok(())
//! # }
//! ```
//!
//! # Build scripts
//!
//! ```rust,no_run
//! use reskey::adapters::CargoEnvWriter;
//! use reskey::prelude::*;
//!
//! # fn main() -> reskey::domain::Result<()> {
//! let resources = KeyExtractor::for_file("env.json").resolve(&[ResourceBinding::gmap()]);
//! CargoEnvWriter::new()
//!     .rerun_if_changed("env.json")
//!     .write(&resources, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
#[cfg(feature = "cli")]
pub mod cli;
pub mod domain;
pub mod ports;
pub mod service;

pub use service::extract;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ExtractError, ExtractedKey, KeyName, ResourceBinding, ResourceName, Result,
        StringResource,
    };
    pub use crate::ports::{KeyMatcher, ResourceWriter, TextSource};
    pub use crate::service::{KeyExtractor, KeyExtractorBuilder};

    pub use crate::adapters::{JsonPatternMatcher, LocalFileSource, PlainWriter};
    // Re-export writers based on feature flags
    #[cfg(feature = "android")]
    pub use crate::adapters::AndroidValuesWriter;
    #[cfg(feature = "cargo")]
    pub use crate::adapters::CargoEnvWriter;
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonWriter;
}
