//! Tests for run summaries, JSON report export and the table listing

mod common;

use std::fs;

use camelrename::cli::list::build_table;
use camelrename::rename::*;
use camelrename::report::*;
use common::*;
use serde_json::Value;

#[test]
fn test_summary_for_partial_directory() {
    let dir = dir_with_files(&["hero.svg", "chev-up.svg", "list-2-dark.svg"]);

    let outcomes = run_batch(dir.path(), RENAME_TABLE, &RunOptions::default(), |_| {}).unwrap();
    let summary = RunSummary::from_outcomes(&outcomes);

    assert_eq!(summary.total, RENAME_TABLE.len());
    assert_eq!(summary.renamed, 2);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.missing, RENAME_TABLE.len() - 3);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.found(), 3);
}

#[test]
fn test_export_run_report() {
    let dir = dir_with_files(&["chev-up.svg"]);
    let entries = [
        RenameEntry::new("chev-up.svg", "chevUp.svg"),
        RenameEntry::new("dark-layer.svg", "darkLayer.svg"),
    ];
    let options = RunOptions::default();
    let outcomes = run_batch(dir.path(), &entries, &options, |_| {}).unwrap();

    let out_dir = empty_dir();
    let report_path = out_dir.path().join("report.json");
    let report = RunReport::new(dir.path(), &options, &outcomes);
    export_run_report(&report, &report_path).unwrap();

    let json: Value = serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(json["metadata"]["dry_run"], false);
    assert_eq!(json["metadata"]["failure_policy"], "continue");
    assert_eq!(
        json["metadata"]["camelrename_version"],
        env!("CARGO_PKG_VERSION")
    );
    assert!(json["metadata"]["timestamp"].as_str().unwrap().contains('T'));

    assert_eq!(json["summary"]["renamed"], 1);
    assert_eq!(json["summary"]["missing"], 1);

    let records = json["entries"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["source"], "chev-up.svg");
    assert_eq!(records[0]["target"], "chevUp.svg");
    assert_eq!(records[0]["status"], "renamed");
    assert_eq!(records[1]["status"], "missing");
    assert!(records[1].get("error").is_none());
}

#[test]
fn test_report_records_dry_run_and_failures() {
    let dir = dir_with_files(&["chev-up.svg", "zz-left.svg"]);
    fs::create_dir(dir.path().join("zigzagLeft.svg")).unwrap();
    fs::write(dir.path().join("zigzagLeft.svg").join("keep"), "x").unwrap();

    let entries = [
        RenameEntry::new("chev-up.svg", "chevUp.svg"),
        RenameEntry::new("zz-left.svg", "zigzagLeft.svg"),
    ];

    let dry = RunOptions {
        dry_run: true,
        ..Default::default()
    };
    let outcomes = run_batch(dir.path(), &entries, &dry, |_| {}).unwrap();
    let report = RunReport::new(dir.path(), &dry, &outcomes);
    assert!(report.metadata.dry_run);
    assert_eq!(report.summary.would_rename, 2);
    assert!(report
        .entries
        .iter()
        .all(|r| r.status == EntryStatus::WouldRename));

    let outcomes = run_batch(dir.path(), &entries, &RunOptions::default(), |_| {}).unwrap();
    let report = RunReport::new(dir.path(), &RunOptions::default(), &outcomes);
    assert_eq!(report.summary.renamed, 1);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.entries[1].status, EntryStatus::Failed);
    assert!(report.entries[1].error.is_some());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = empty_dir();
    let report = RunReport::new(dir.path(), &RunOptions::default(), &[]);

    let result = export_run_report(&report, &dir.path().join("no/such/dir/report.json"));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to write run report"));
}

#[test]
fn test_list_table_has_a_row_per_entry() {
    let table = build_table(RENAME_TABLE);
    let rendered = table.to_string();

    assert_eq!(table.row_iter().count(), RENAME_TABLE.len());
    assert!(rendered.contains("button-secondary-left-dark.svg"));
    assert!(rendered.contains("buttonSecondaryLeft-dark.svg"));
}
