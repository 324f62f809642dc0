// SPDX-License-Identifier: MIT OR Apache-2.0

//! Android `res/values` XML writer.

use crate::domain::{Result, StringResource};
use crate::ports::ResourceWriter;
use std::io;

/// Writes resources as an Android `values` resource file.
///
/// The output is equivalent to what a Gradle `resValue("string", NAME, value)`
/// declaration generates, so it can be dropped into `res/values/` (or a
/// generated resource directory) and referenced as `@string/NAME` from the
/// manifest.
///
/// # Examples
///
/// ```rust
/// use reskey::adapters::AndroidValuesWriter;
/// use reskey::domain::{ResourceName, StringResource};
/// use reskey::ports::ResourceWriter;
///
/// let resources = vec![StringResource::new(ResourceName::new("GMAP_KEY").unwrap(), "abc")];
/// let xml = AndroidValuesWriter::new().render(&resources).unwrap();
/// assert!(xml.contains(r#"<string name="GMAP_KEY" translatable="false">abc</string>"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AndroidValuesWriter;

impl AndroidValuesWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        AndroidValuesWriter
    }
}

impl ResourceWriter for AndroidValuesWriter {
    fn format_name(&self) -> &str {
        "android-xml"
    }

    fn write(&self, resources: &[StringResource], out: &mut dyn io::Write) -> Result<()> {
        super::ensure_unique_names(resources, self.format_name())?;

        write!(
            out,
            concat!(
                r#"<?xml version="1.0" encoding="utf-8"?>"#, "\n",
                r#"<resources>"#, "\n",
                r#"    <!-- Generated by reskey. Do not edit. -->"#, "\n",
            ),
        )?;

        for resource in resources {
            writeln!(
                out,
                r#"    <string name="{}" translatable="false">{}</string>"#,
                resource.name(),
                escape_android_string(resource.value()),
            )?;
        }

        writeln!(out, "</resources>")?;
        Ok(())
    }
}

/// Escapes a value for use as the text of an Android `<string>` element.
///
/// Android string syntax is applied first (backslash, quotes, a leading `@`
/// or `?`, newlines and tabs), then XML PCDATA escaping.
pub fn escape_android_string(input: &str) -> String {
    let mut v = String::with_capacity(input.len());

    for (i, c) in input.chars().enumerate() {
        match c {
            '\\' => v.push_str("\\\\"),
            '\'' => v.push_str("\\'"),
            '"' => v.push_str("\\\""),
            '\n' => v.push_str("\\n"),
            '\t' => v.push_str("\\t"),
            '@' | '?' if i == 0 => {
                v.push('\\');
                v.push(c);
            }
            '&' => v.push_str("&amp;"),
            '<' => v.push_str("&lt;"),
            '>' => v.push_str("&gt;"),
            _ => v.push(c),
        }
    }

    v
}
