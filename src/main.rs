// SPDX-License-Identifier: MIT OR Apache-2.0

use std::process::ExitCode;

use clap::Parser;
use reskey::cli::{run_cli, Arguments};

fn main() -> ExitCode {
    let args = Arguments::parse();
    run_cli(args).into()
}
