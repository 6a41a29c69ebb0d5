//! Run summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::rename::{EntryOutcome, EntryStatus};

/// Per-status counts for a batch run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    /// Entries whose file was moved to a new name
    pub renamed: usize,
    /// Identity entries whose file was present
    pub unchanged: usize,
    pub would_rename: usize,
    pub missing: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[EntryOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome.status {
                EntryStatus::Renamed if outcome.entry.is_identity() => summary.unchanged += 1,
                EntryStatus::Renamed => summary.renamed += 1,
                EntryStatus::WouldRename => summary.would_rename += 1,
                EntryStatus::Missing => summary.missing += 1,
                EntryStatus::Failed => summary.failed += 1,
            }
        }

        summary
    }

    /// Entries whose source file was found
    pub fn found(&self) -> usize {
        self.renamed + self.unchanged + self.would_rename + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn display(&self, dry_run: bool) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RENAME SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Entries Processed"), Cell::new(self.total)]);

        if dry_run {
            table.add_row(vec![
                Cell::new("🔍 Would Rename"),
                Cell::new(self.would_rename).fg(Color::Cyan),
            ]);
        } else {
            table.add_row(vec![
                Cell::new("✅ Renamed"),
                Cell::new(self.renamed)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("🟰 Unchanged"), Cell::new(self.unchanged)]);
        }

        table.add_row(vec![
            Cell::new("⚠️  Not Found"),
            Cell::new(self.missing).fg(if self.missing == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("❌ Failed"),
            Cell::new(self.failed).fg(if self.failed == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
