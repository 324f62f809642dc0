// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line front end for the `reskey` binary.
//!
//! Flags fall back to environment variables, so a build system can configure
//! the tool without changing its invocation:
//!
//! - `RESKEY_ENV_FILE`: the configuration file
//! - `RESKEY_FORMAT`: the output format
//! - `RESKEY_LOG_LEVEL`: the log level when `RUST_LOG` is not set

use crate::adapters::{
    AndroidValuesWriter, CargoEnvWriter, JsonPatternMatcher, JsonWriter, LocalFileSource,
    PlainWriter, DEFAULT_ENV_FILE,
};
use crate::domain::{ResourceBinding, Result};
use crate::ports::ResourceWriter;
use crate::service::KeyExtractor;
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "reskey",
    version,
    about = "Extract keys from a local JSON env file into generated string resources"
)]
pub struct Arguments {
    /// Configuration file to scan
    #[arg(short = 'f', long, env = "RESKEY_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Key to extract, optionally renamed: KEY or KEY=RESOURCE (repeatable)
    #[arg(short = 'b', long = "bind", value_name = "KEY[=RESOURCE]")]
    pub bindings: Vec<ResourceBinding>,

    /// Output format
    #[arg(long, value_enum, env = "RESKEY_FORMAT", default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RESKEY_LOG_LEVEL", value_parser = clap::value_parser!(Level))]
    pub log_level: Option<Level>,

    /// Verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    /// The bindings to resolve, falling back to `GMAP_API_KEY=GMAP_KEY`.
    ///
    /// Fails when two bindings publish the same resource name.
    pub fn effective_bindings(&self) -> Result<Vec<ResourceBinding>> {
        if self.bindings.is_empty() {
            return Ok(vec![ResourceBinding::gmap()]);
        }
        ResourceBinding::ensure_distinct(&self.bindings)?;
        Ok(self.bindings.clone())
    }

    /// The log level implied by the flags.
    pub fn level(&self) -> Level {
        if let Some(level) = self.log_level {
            level
        } else if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `NAME=value` lines
    Plain,
    /// A JSON object
    Json,
    /// An Android `values` resource file
    AndroidXml,
    /// Cargo build-script directives
    Cargo,
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output was written, whether or not the keys were found.
    Success,
    /// Output could not be produced.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level comes from the arguments.
pub fn init_logging(args: &Arguments) {
    // An empty RUST_LOG counts as unset, otherwise it would silence warnings.
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(format!("reskey={}", args.level())),
    };

    // A second init (for example in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr),
        )
        .try_init();
}

fn writer_for(format: OutputFormat, env_file: &Path) -> Box<dyn ResourceWriter> {
    match format {
        OutputFormat::Plain => Box::new(PlainWriter),
        OutputFormat::Json => Box::new(JsonWriter::new()),
        OutputFormat::AndroidXml => Box::new(AndroidValuesWriter::new()),
        OutputFormat::Cargo => Box::new(CargoEnvWriter::new().rerun_if_changed(env_file)),
    }
}

/// Runs the tool with parsed arguments.
///
/// The resources are rendered fully before anything is written, so a
/// rendering error leaves no partial output file behind.
pub fn run(args: &Arguments) -> Result<()> {
    let extractor = KeyExtractor::builder()
        .with_source(Box::new(LocalFileSource::new(&args.env_file)))
        .with_matcher(Box::new(JsonPatternMatcher::new()))
        .build();

    let bindings = args.effective_bindings()?;
    let resources = extractor.resolve(&bindings);

    let writer = writer_for(args.format, &args.env_file);
    let rendered = writer.render(&resources)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered.as_bytes())?;
            tracing::info!(
                "Wrote {} resource(s) as {} to {}",
                resources.len(),
                writer.format_name(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Installs logging, runs the tool and maps the outcome to an exit status.
pub fn run_cli(args: Arguments) -> ExitStatus {
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitStatus::Success,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("Error: {}", err);
            ExitStatus::Error
        }
    }
}
