//! Conversion summary report

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::GameData;

/// Summary of a finished conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertSummary {
    pub questions: usize,
    pub answers: usize,
    /// Questions that ended up with no complete answer
    pub unanswered: usize,
    pub output: PathBuf,
    pub elapsed: Duration,
}

impl ConvertSummary {
    pub fn new(data: &GameData, output: PathBuf, elapsed: Duration) -> Self {
        Self {
            questions: data.questions.len(),
            answers: data.answer_count(),
            unanswered: data.questions.iter().filter(|q| q.answers.is_empty()).count(),
            output,
            elapsed,
        }
    }

    /// Render the summary table to stderr, keeping stdout for the JSON document
    pub fn display(&self) {
        eprintln!();
        eprintln!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        eprintln!("    {}", style("─".repeat(50)).dim());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("❓ Questions"), Cell::new(self.questions)]);
        table.add_row(vec![
            Cell::new("✅ Answers"),
            Cell::new(self.answers)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("⚠️  Without answers"),
            Cell::new(self.unanswered).fg(if self.unanswered == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("💾 Output"),
            Cell::new(self.output.display()),
        ]);
        table.add_row(vec![
            Cell::new("⏱️  Time"),
            Cell::new(format!("{:.2?}", self.elapsed)),
        ]);

        for line in table.to_string().lines() {
            eprintln!("    {}", line);
        }
    }
}
