// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource writer trait definition.
//!
//! A `ResourceWriter` renders resolved string resources in the format a
//! particular build system consumes.

use crate::domain::{Result, StringResource};
use std::io;

/// A trait for rendering string resources.
///
/// Writers receive resources in binding order and must preserve it.
///
/// # Examples
///
/// ```rust
/// use reskey::ports::ResourceWriter;
/// use reskey::domain::{Result, ResourceName, StringResource};
/// use std::io;
///
/// struct ShellExports;
///
/// impl ResourceWriter for ShellExports {
///     fn format_name(&self) -> &str {
///         "shell"
///     }
///
///     fn write(&self, resources: &[StringResource], out: &mut dyn io::Write) -> Result<()> {
///         for resource in resources {
///             writeln!(out, "export {}='{}'", resource.name(), resource.value())?;
///         }
///         Ok(())
///     }
/// }
///
/// let resources = vec![StringResource::new(ResourceName::new("GMAP_KEY").unwrap(), "abc")];
/// let mut out = Vec::new();
/// ShellExports.write(&resources, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "export GMAP_KEY='abc'\n");
/// ```
pub trait ResourceWriter {
    /// Returns the name of the output format, as used on the command line.
    fn format_name(&self) -> &str;

    /// Writes all resources to `out`.
    fn write(&self, resources: &[StringResource], out: &mut dyn io::Write) -> Result<()>;

    /// Renders all resources into a `String`.
    fn render(&self, resources: &[StringResource]) -> Result<String> {
        let mut buf = Vec::new();
        self.write(resources, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
