//! Command-line argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Questionator - Convert a CSV/TSV table of trivia questions into game data JSON
#[derive(Parser, Debug)]
#[command(name = "questionator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path and name of the CSV (or TSV) file to parse
    #[arg(short, long, visible_alias = "in", default_value = "questions.csv")]
    pub input: PathBuf,

    /// Path and name of the JSON file to write
    #[arg(short, long, visible_alias = "out", default_value = "gamedata.json")]
    pub output: PathBuf,

    /// Use tabs as the field delimiter (commas are the default).
    /// Also accepts an explicit value, e.g. `--tabs=false` or `-t=1`.
    #[arg(
        short,
        long,
        visible_alias = "tab",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_switch
    )]
    pub tabs: bool,

    /// Suppress status output on stderr. The JSON is still printed to stdout.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Field separator of the input table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn from_tabs(tabs: bool) -> Self {
        if tabs {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
        }
    }
}

/// Immutable run configuration, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: Delimiter,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("questions.csv"),
            output: PathBuf::from("gamedata.json"),
            delimiter: Delimiter::Comma,
            quiet: false,
        }
    }
}

impl Cli {
    /// Freeze the parsed flags into a run configuration
    pub fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
            delimiter: Delimiter::from_tabs(self.tabs),
            quiet: self.quiet,
        }
    }
}

/// Parser for boolean switches given an explicit value
fn parse_switch(s: &str) -> Result<bool, String> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(format!("'{}' is not a valid boolean", s)),
    }
}
