// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cargo build-script directive writer.

use crate::domain::{ExtractError, Result, StringResource};
use crate::ports::ResourceWriter;
use std::io;
use std::path::{Path, PathBuf};

/// Writes resources as `cargo:` directives for a build script's stdout.
///
/// Each resource becomes `cargo:rustc-env=NAME=value`, readable from the
/// crate with `env!("NAME")`. When a source path is set, a
/// `cargo:rerun-if-changed` line is written first so the build script runs
/// again after the configuration file changes.
///
/// Directives are line-oriented, so values containing a line break are
/// rejected.
///
/// # Examples
///
/// ```rust
/// use reskey::adapters::CargoEnvWriter;
/// use reskey::domain::{ResourceName, StringResource};
/// use reskey::ports::ResourceWriter;
///
/// let writer = CargoEnvWriter::new().rerun_if_changed("env.json");
/// let resources = vec![StringResource::new(ResourceName::new("GMAP_KEY").unwrap(), "abc")];
///
/// assert_eq!(
///     writer.render(&resources).unwrap(),
///     "cargo:rerun-if-changed=env.json\ncargo:rustc-env=GMAP_KEY=abc\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CargoEnvWriter {
    rerun_path: Option<PathBuf>,
}

impl CargoEnvWriter {
    /// Creates a writer without a rerun trigger.
    pub fn new() -> Self {
        Self { rerun_path: None }
    }

    /// Emits `cargo:rerun-if-changed` for the given path.
    pub fn rerun_if_changed(mut self, path: impl AsRef<Path>) -> Self {
        self.rerun_path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl ResourceWriter for CargoEnvWriter {
    fn format_name(&self) -> &str {
        "cargo"
    }

    fn write(&self, resources: &[StringResource], out: &mut dyn io::Write) -> Result<()> {
        // Validate everything first so a rejected value leaves no partial output.
        for resource in resources {
            if resource.value().contains(['\n', '\r']) {
                return Err(ExtractError::ResourceError {
                    name: resource.name().to_string(),
                    format: self.format_name().to_string(),
                    message: "value contains a line break".to_string(),
                });
            }
        }

        if let Some(path) = &self.rerun_path {
            writeln!(out, "cargo:rerun-if-changed={}", path.display())?;
        }

        for resource in resources {
            writeln!(out, "cargo:rustc-env={}={}", resource.name(), resource.value())?;
        }

        Ok(())
    }
}
