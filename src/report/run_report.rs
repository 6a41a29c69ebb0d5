//! JSON run report export
//!
//! Records what happened to every table entry in a batch run, along with
//! when and where the run happened.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::rename::{EntryOutcome, EntryStatus, FailurePolicy, RunOptions};
use crate::report::RunSummary;

/// Metadata about the run
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    pub camelrename_version: String,
    /// Directory the table was applied to
    pub directory: String,
    pub dry_run: bool,
    pub failure_policy: FailurePolicy,
}

/// A single entry's outcome
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    pub source: String,
    pub target: String,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&EntryOutcome> for EntryRecord {
    fn from(outcome: &EntryOutcome) -> Self {
        Self {
            source: outcome.entry.source.to_string(),
            target: outcome.entry.target.to_string(),
            status: outcome.status,
            error: outcome.error.clone(),
        }
    }
}

/// Complete run report
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub metadata: RunMetadata,
    pub summary: RunSummary,
    pub entries: Vec<EntryRecord>,
}

impl RunReport {
    pub fn new(directory: &Path, options: &RunOptions, outcomes: &[EntryOutcome]) -> Self {
        Self {
            metadata: RunMetadata {
                timestamp: Utc::now().to_rfc3339(),
                camelrename_version: env!("CARGO_PKG_VERSION").to_string(),
                directory: directory.display().to_string(),
                dry_run: options.dry_run,
                failure_policy: options.policy,
            },
            summary: RunSummary::from_outcomes(outcomes),
            entries: outcomes.iter().map(EntryRecord::from).collect(),
        }
    }
}

/// Export the run report to a JSON file
pub fn export_run_report(report: &RunReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize run report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write run report to {}", output_path.display()))?;

    Ok(())
}
