//! Questionator: Trivia Question Converter
//!
//! Reads a CSV/TSV question table and writes game data JSON to stdout and
//! to the output file.

use anyhow::Result;
use clap::Parser;

use questionator::cli::{run_convert, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    run_convert(&config)?;

    Ok(())
}
