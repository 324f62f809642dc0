// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! Lookup keys, resource names, bindings and extraction results live here,
//! independent of where configuration text comes from or how resources are
//! rendered.

pub mod errors;
pub mod extracted_key;
pub mod key_name;
pub mod resource;

// Re-export commonly used types
pub use errors::{ExtractError, Result};
pub use extracted_key::ExtractedKey;
pub use key_name::KeyName;
pub use resource::{ResourceBinding, ResourceName, StringResource};
