//! camelrename: Element Thumbnail Renamer
//!
//! Renames the element SVG thumbnails in the current directory from
//! kebab-case to camelCase using a fixed rename table.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use camelrename::cli::{run_list, Cli, Commands};
use camelrename::rename::{run_batch, RENAME_TABLE};
use camelrename::report::{export_run_report, RunReport, RunSummary};
use camelrename::utils::{
    print_banner, print_completion, print_config, print_info, print_outcome, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::List => {
                run_list(RENAME_TABLE);
                Ok(())
            }
        };
    }

    // Table names are always resolved against the working directory
    let directory = Path::new(".");
    let resolved = std::env::current_dir().context("Failed to resolve the current directory")?;
    let options = cli.run_options();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&resolved, RENAME_TABLE.len(), options.dry_run, options.policy);

    let mut processed = Vec::with_capacity(RENAME_TABLE.len());
    let aborted = run_batch(directory, RENAME_TABLE, &options, |outcome| {
        print_outcome(outcome);
        processed.push(outcome.clone());
    })
    .err();

    let summary = RunSummary::from_outcomes(&processed);
    if !cli.no_summary {
        summary.display(options.dry_run);
    }

    // Written before any failure is surfaced so partial runs are still recorded
    if let Some(report_path) = &cli.report {
        let report = RunReport::new(&resolved, &options, &processed);
        export_run_report(&report, report_path)?;
        println!();
        print_success(&format!("Report written to {}", report_path.display()));
    }

    if let Some(err) = aborted {
        let name = err.source_name().to_string();
        return Err(anyhow::Error::new(err).context(format!(
            "Stopped at '{}', later entries were not processed",
            name
        )));
    }

    if summary.found() == 0 {
        println!();
        print_info("None of the files in the rename table were found in this directory");
    }

    if summary.has_failures() {
        anyhow::bail!(
            "{} of {} rename(s) failed",
            summary.failed,
            summary.found()
        );
    }

    print_completion(options.dry_run);

    Ok(())
}
