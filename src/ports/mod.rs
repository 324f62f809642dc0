// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the extractor and the outside world:
//! where text comes from, how a key is located in it, and how the resulting
//! resources are rendered. Adapters implement them.

pub mod matcher;
pub mod resource_writer;
pub mod text_source;

// Re-export commonly used types
pub use matcher::KeyMatcher;
pub use resource_writer::ResourceWriter;
pub use text_source::TextSource;
