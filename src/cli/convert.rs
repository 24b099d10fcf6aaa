//! Question table to game data JSON conversion

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::ProgressBar;

use crate::pipeline::{load_records, map_records, ConvertError, GameData};
use crate::report::{to_json, write_json, ConvertSummary};
use crate::utils::{create_spinner, finish_with_success, print_config, print_info, print_success};

use super::Config;

/// Read, parse and map the configured input file.
///
/// Has no output side effects, so it can be driven directly from tests.
pub fn convert(config: &Config) -> Result<GameData, ConvertError> {
    let records = load_records(&config.input, config.delimiter)?;
    Ok(map_records(&records))
}

/// Run the full conversion: map the input, print the JSON to stdout and
/// write the same JSON to the output file.
///
/// The output file is only written after the whole input has been parsed.
pub fn run_convert(config: &Config) -> Result<ConvertSummary> {
    let start = Instant::now();

    if !config.quiet {
        print_config(&config.input, &config.output, config.delimiter.name());
    }

    let spinner = if config.quiet {
        ProgressBar::hidden()
    } else {
        create_spinner("Parsing question table...")
    };
    let data = match convert(config) {
        Ok(data) => data,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    finish_with_success(
        &spinner,
        &format!("Parsed {} question(s)", data.questions.len()),
    );

    let json = to_json(&data)?;

    {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json).context("Failed to print game data to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    }

    write_json(&config.output, &json)?;

    let summary = ConvertSummary::new(&data, config.output.clone(), start.elapsed());
    if !config.quiet {
        print_success(&format!("Game data written to {}", config.output.display()));
        if summary.unanswered > 0 {
            print_info(&format!(
                "{} question(s) have no complete answer pair",
                summary.unanswered
            ));
        }
        summary.display();
    }

    Ok(summary)
}
