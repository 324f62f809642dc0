// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the key extractor.

pub mod extractor;

// Re-export commonly used types
pub use extractor::{extract, KeyExtractor, KeyExtractorBuilder};
