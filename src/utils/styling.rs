//! Terminal styling utilities for status lines, banner and configuration card

use console::{style, Emoji};
use std::path::Path;

use crate::rename::{EntryOutcome, EntryStatus, FailurePolicy};

// Emoji icons with fallbacks for terminals that don't support them
pub static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[x] ");
pub static PREVIEW: Emoji<'_, '_> = Emoji("🔍 ", "[?] ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TABLE: Emoji<'_, '_> = Emoji("📋 ", "");
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
pub static MODE: Emoji<'_, '_> = Emoji("🔧 ", "");
pub static STOP: Emoji<'_, '_> = Emoji("🛑 ", "");

const ARROW: &str = "→";

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("camelrename").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("kebab-case element thumbnails → camelCase").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Rows of the configuration card between the header and the bottom border
pub fn config_rows(directory: &Path, entries: usize, dry_run: bool, policy: FailurePolicy) -> Vec<String> {
    let mode = if dry_run { "dry run" } else { "rename" };
    let on_failure = match policy {
        FailurePolicy::Continue => "report and continue",
        FailurePolicy::Abort => "stop the batch",
    };

    vec![
        format!(
            "│  {}Directory:  {:<37}│",
            FOLDER,
            truncate_path(directory, 37)
        ),
        format!("│  {}Entries:    {:<37}│", TABLE, style(entries).yellow()),
        format!("│  {}Mode:       {:<37}│", MODE, style(mode).yellow()),
        format!("│  {}On failure: {:<37}│", STOP, style(on_failure).yellow()),
    ]
}

/// Print configuration card
pub fn print_config(directory: &Path, entries: usize, dry_run: bool, policy: FailurePolicy) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style(format!("{}Configuration", GEAR)).cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    for row in config_rows(directory, entries, dry_run, policy) {
        println!("    {}", row);
    }
    println!("    └{}┘", line);
    println!();
}

/// Format the status line for a processed entry
pub fn format_outcome(outcome: &EntryOutcome) -> String {
    let entry = &outcome.entry;
    match outcome.status {
        EntryStatus::Renamed => format!(
            "{}{} {} {}",
            SUCCESS,
            entry.source,
            style(ARROW).dim(),
            style(entry.target).green()
        ),
        EntryStatus::WouldRename => format!(
            "{}{} {} {} {}",
            PREVIEW,
            entry.source,
            style(ARROW).dim(),
            style(entry.target).cyan(),
            style("(would rename)").dim()
        ),
        EntryStatus::Missing => format!(
            "{}{} {}",
            WARNING,
            style(entry.source).yellow(),
            style("not found").yellow()
        ),
        EntryStatus::Failed => format!(
            "{}{} {} {} {}",
            FAILURE,
            style(entry.source).red(),
            style(ARROW).dim(),
            entry.target,
            style(format!(
                "failed: {}",
                outcome.error.as_deref().unwrap_or("unknown error")
            ))
            .red()
        ),
    }
}

/// Print the status line for a processed entry
pub fn print_outcome(outcome: &EntryOutcome) {
    println!("    {}", format_outcome(outcome));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print the final completion message
pub fn print_completion(dry_run: bool) {
    let message = if dry_run {
        "Dry run complete, no files were changed"
    } else {
        "Rename complete!"
    };
    println!();
    println!("    {}{}", ROCKET, style(message).green().bold());
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}
