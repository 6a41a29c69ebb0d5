//! Batch renamer - walks the rename table in order and renames what exists

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::error::RenameError;
use super::table::RenameEntry;

/// What to do when a rename (or existence check) fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report the failed entry and keep going
    #[default]
    Continue,
    /// Stop at the first failure, leaving later entries unprocessed
    Abort,
}

/// Settings for a single batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Check existence only, never touch the file system
    pub dry_run: bool,
    pub policy: FailurePolicy,
}

/// Result of processing one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Renamed,
    WouldRename,
    Missing,
    Failed,
}

/// A processed entry together with its status
#[derive(Debug, Clone)]
pub struct EntryOutcome {
    pub entry: RenameEntry,
    pub status: EntryStatus,
    /// I/O error text for failed entries
    pub error: Option<String>,
}

impl EntryOutcome {
    fn new(entry: RenameEntry, status: EntryStatus) -> Self {
        Self {
            entry,
            status,
            error: None,
        }
    }

    fn failed(entry: RenameEntry, err: &RenameError) -> Self {
        Self {
            entry,
            status: EntryStatus::Failed,
            error: Some(err.io_error().to_string()),
        }
    }
}

/// Process a single entry relative to `dir`.
///
/// Returns `Missing` when nothing named `entry.source` exists. Otherwise
/// renames it to `entry.target` in the same directory (or only reports
/// `WouldRename` in dry-run mode).
pub fn process_entry(
    dir: &Path,
    entry: &RenameEntry,
    dry_run: bool,
) -> Result<EntryStatus, RenameError> {
    let from = dir.join(entry.source);

    let exists = from.try_exists().map_err(|error| RenameError::Probe {
        name: entry.source.to_string(),
        error,
    })?;

    if !exists {
        return Ok(EntryStatus::Missing);
    }

    if dry_run {
        return Ok(EntryStatus::WouldRename);
    }

    let to = dir.join(entry.target);
    fs::rename(&from, &to).map_err(|error| RenameError::Rename {
        from: entry.source.to_string(),
        to: entry.target.to_string(),
        error,
    })?;

    Ok(EntryStatus::Renamed)
}

/// Run the batch over `entries` in order.
///
/// `on_outcome` is called once per processed entry, in table order, as soon
/// as the entry is done. Missing sources never stop the batch. Failures stop
/// it only under [`FailurePolicy::Abort`], in which case the failed entry is
/// still passed to `on_outcome` before the error is returned.
pub fn run_batch<F>(
    dir: &Path,
    entries: &[RenameEntry],
    options: &RunOptions,
    mut on_outcome: F,
) -> Result<Vec<EntryOutcome>, RenameError>
where
    F: FnMut(&EntryOutcome),
{
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries {
        let outcome = match process_entry(dir, entry, options.dry_run) {
            Ok(status) => EntryOutcome::new(*entry, status),
            Err(err) => {
                let outcome = EntryOutcome::failed(*entry, &err);
                on_outcome(&outcome);
                if options.policy == FailurePolicy::Abort {
                    return Err(err);
                }
                outcomes.push(outcome);
                continue;
            }
        };

        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CHEV: RenameEntry = RenameEntry::new("chev-up.svg", "chevUp.svg");
    const HERO: RenameEntry = RenameEntry::new("hero.svg", "hero.svg");

    #[test]
    fn test_process_entry_renames_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chev-up.svg"), "<svg/>").unwrap();

        let status = process_entry(dir.path(), &CHEV, false).unwrap();

        assert_eq!(status, EntryStatus::Renamed);
        assert!(!dir.path().join("chev-up.svg").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("chevUp.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn test_process_entry_missing_file() {
        let dir = TempDir::new().unwrap();

        let status = process_entry(dir.path(), &CHEV, false).unwrap();

        assert_eq!(status, EntryStatus::Missing);
        assert!(!dir.path().join("chevUp.svg").exists());
    }

    #[test]
    fn test_process_entry_identity() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hero.svg"), "hero").unwrap();

        let status = process_entry(dir.path(), &HERO, false).unwrap();

        assert_eq!(status, EntryStatus::Renamed);
        assert_eq!(fs::read_to_string(dir.path().join("hero.svg")).unwrap(), "hero");
    }

    #[test]
    fn test_process_entry_dry_run_leaves_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chev-up.svg"), "<svg/>").unwrap();

        let status = process_entry(dir.path(), &CHEV, true).unwrap();

        assert_eq!(status, EntryStatus::WouldRename);
        assert!(dir.path().join("chev-up.svg").exists());
        assert!(!dir.path().join("chevUp.svg").exists());
    }

    #[test]
    fn test_default_policy_is_continue() {
        assert_eq!(RunOptions::default().policy, FailurePolicy::Continue);
        assert!(!RunOptions::default().dry_run);
    }
}
