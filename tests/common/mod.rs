//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use camelrename::rename::{RenameEntry, RENAME_TABLE};
use tempfile::TempDir;

/// Contents written to a fixture file, unique per name so renames can be traced
pub fn fixture_contents(name: &str) -> String {
    format!("<svg data-name=\"{}\"/>", name)
}

/// Create an empty scratch directory
pub fn empty_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Create a scratch directory containing the given files
pub fn dir_with_files(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        write_fixture(dir.path(), name);
    }
    dir
}

/// Create a scratch directory containing every source file in the rename table
pub fn dir_with_all_sources() -> TempDir {
    let sources: Vec<&str> = RENAME_TABLE.iter().map(|e| e.source).collect();
    dir_with_files(&sources)
}

pub fn write_fixture(dir: &Path, name: &str) {
    fs::write(dir.join(name), fixture_contents(name)).unwrap();
}

/// Sorted file names in a directory
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Assert that `entry.source` was moved to `entry.target` with its contents intact
pub fn assert_renamed(dir: &Path, entry: &RenameEntry) {
    let target = dir.join(entry.target);
    assert!(target.exists(), "{} should exist", entry.target);
    if !entry.is_identity() {
        assert!(
            !dir.join(entry.source).exists(),
            "{} should be gone",
            entry.source
        );
    }
    assert_eq!(
        fs::read_to_string(target).unwrap(),
        fixture_contents(entry.source),
        "{} should carry the contents of {}",
        entry.target,
        entry.source
    );
}
