//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::rename::{FailurePolicy, RunOptions};

/// camelrename - Rename element SVG thumbnails in the current directory
/// from kebab-case to camelCase using a fixed rename table
#[derive(Parser, Debug)]
#[command(name = "camelrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Check which files would be renamed without touching anything
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Stop at the first failed rename instead of reporting it and continuing.
    /// Entries after the failure are left unprocessed.
    #[arg(long, default_value = "false")]
    pub fail_fast: bool,

    /// Skip the summary table printed after the per-file lines
    #[arg(long, default_value = "false")]
    pub no_summary: bool,

    /// Write a JSON report of every entry's outcome to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the rename table without touching the file system
    List,
}

impl Cli {
    /// Failure policy selected on the command line
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        }
    }

    /// Batch settings derived from the flags
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            policy: self.failure_policy(),
        }
    }
}
