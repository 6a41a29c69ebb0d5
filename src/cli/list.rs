//! `list` subcommand - print the rename table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::rename::RenameEntry;

/// Build the table shown by `camelrename list`
pub fn build_table(entries: &[RenameEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Identity").add_attribute(Attribute::Bold),
    ]);

    for (index, entry) in entries.iter().enumerate() {
        let identity = if entry.is_identity() {
            Cell::new("yes").fg(Color::DarkGrey)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(entry.source),
            Cell::new(entry.target).fg(Color::Green),
            identity,
        ]);
    }

    table
}

/// Print the rename table
pub fn run_list(entries: &[RenameEntry]) {
    let identity = entries.iter().filter(|e| e.is_identity()).count();

    println!(
        "\n {} Rename table",
        style("◆").cyan().bold()
    );
    println!(
        "   {} entries, {} already camelCase",
        style(entries.len()).yellow(),
        style(identity).yellow()
    );
    println!();

    for line in build_table(entries).to_string().lines() {
        println!("   {}", line);
    }
    println!();
}
