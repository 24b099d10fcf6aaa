//! Terminal styling for status output
//!
//! Everything here writes to stderr; stdout carries only the JSON document.

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static SPLIT: Emoji<'_, '_> = Emoji("✂️  ", "");

/// Print the configuration card
pub fn print_config(input: &Path, output: &Path, delimiter: &str) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    eprintln!("    ┌{}┐", line);
    eprintln!(
        "    │ {}{}│",
        style("⚙️  Questionator").cyan().bold(),
        " ".repeat(box_width - 19)
    );
    eprintln!("    ├{}┤", line);
    eprintln!(
        "    │  {} Input:     {:<36}│",
        FOLDER,
        truncate_path(input, 35)
    );
    eprintln!(
        "    │  {} Output:    {:<36}│",
        SAVE,
        truncate_path(output, 35)
    );
    eprintln!(
        "    │  {} Delimiter: {:<36}│",
        SPLIT,
        style(delimiter).yellow()
    );
    eprintln!("    └{}┘", line);
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("    {} {}", INFO, message);
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
