// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text and JSON writers.

use crate::domain::{Result, StringResource};
use crate::ports::ResourceWriter;
use std::io;

/// Writes one `NAME=value` line per resource.
///
/// Values are written as-is. This is meant for humans and for shell pipelines
/// that read a single value with `cut -d= -f2-`.
#[derive(Debug, Clone, Default)]
pub struct PlainWriter;

impl ResourceWriter for PlainWriter {
    fn format_name(&self) -> &str {
        "plain"
    }

    fn write(&self, resources: &[StringResource], out: &mut dyn io::Write) -> Result<()> {
        for resource in resources {
            writeln!(out, "{}={}", resource.name(), resource.value())?;
        }
        Ok(())
    }
}

/// Writes resources as a JSON object, preserving binding order.
///
/// # Examples
///
/// ```rust
/// use reskey::adapters::JsonWriter;
/// use reskey::domain::{ResourceName, StringResource};
/// use reskey::ports::ResourceWriter;
///
/// let resources = vec![StringResource::new(ResourceName::new("GMAP_KEY").unwrap(), "abc")];
/// let json = JsonWriter::new().render(&resources).unwrap();
/// assert_eq!(json, "{\n  \"GMAP_KEY\": \"abc\"\n}\n");
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Default)]
pub struct JsonWriter;

#[cfg(feature = "json")]
impl JsonWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        JsonWriter
    }
}

#[cfg(feature = "json")]
impl ResourceWriter for JsonWriter {
    fn format_name(&self) -> &str {
        "json"
    }

    fn write(&self, resources: &[StringResource], out: &mut dyn io::Write) -> Result<()> {
        use serde::ser::{SerializeMap, Serializer};

        super::ensure_unique_names(resources, self.format_name())?;

        // Serialize as a map directly so binding order survives without
        // depending on serde_json's map ordering.
        {
            let mut ser = serde_json::Serializer::pretty(&mut *out);
            let mut map = (&mut ser).serialize_map(Some(resources.len()))?;
            for resource in resources {
                map.serialize_entry(resource.name(), resource.value())?;
            }
            map.end()?;
        }

        writeln!(out)?;
        Ok(())
    }
}
