//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;

use questionator::cli::{Config, Delimiter};
use tempfile::TempDir;

/// A small comma separated question table covering the common row shapes:
/// complete pairs, a question without answers, padding and a quoted field.
pub const SAMPLE_CSV: &str = "\
Capital of France?,Paris,1,London,0
Name a primary colour,Red,30,Blue,25,Yellow,20,,
Pick a number
\"Largest planet, by mass?\",Jupiter,1,Saturn,0
";

/// Same content as [`SAMPLE_CSV`] with tabs instead of commas
pub const SAMPLE_TSV: &str = "\
Capital of France?\tParis\t1\tLondon\t0
Name a primary colour\tRed\t30\tBlue\t25\tYellow\t20\t\t
Pick a number
Largest planet, by mass?\tJupiter\t1\tSaturn\t0
";

/// Write `contents` to `name` inside a fresh temporary directory
pub fn create_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Build a config for `input`, writing `gamedata.json` next to it
pub fn config_for(input: &std::path::Path, delimiter: Delimiter) -> Config {
    let output = input.with_file_name("gamedata.json");
    Config {
        input: input.to_path_buf(),
        output,
        delimiter,
        quiet: true,
    }
}
