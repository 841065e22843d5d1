//! ## redactguard-cli
//! **Command-line entrypoint for the masking engine**
//!
//! Masks a file or stdin in one shot, or incrementally through
//! `redactguard_core::MaskingReader`, against patterns given on the
//! command line, a pattern file, and/or a YAML settings file.

use clap::Parser;

mod commands;
mod error;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    commands::run(cli)?;
    Ok(())
}
