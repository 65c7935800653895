//! E2E tests for the manifest writer

use masmcp_eval::layout::OutputLayout;
use masmcp_eval::manifest::{read_manifest, write_manifest, MANIFEST_VERSION};
use masmcp_eval::report::{emit_tables, TableId};
use std::fs;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_manifest_after_tables_reports_both_present() {
    let temp_dir = TempDir::new().unwrap();
    let layout = OutputLayout::new(temp_dir.path());
    emit_tables(&layout).unwrap();

    let (path, manifest) = write_manifest(&layout).unwrap();

    assert_eq!(manifest.version, MANIFEST_VERSION);
    assert!(manifest.tables.table_3);
    assert!(manifest.tables.table_4);
    assert_eq!(read_manifest(&path).unwrap().tables, manifest.tables);
}

#[test]
fn test_manifest_on_empty_dir_reports_both_absent() {
    let temp_dir = TempDir::new().unwrap();
    let layout = OutputLayout::new(temp_dir.path());

    let (_, manifest) = write_manifest(&layout).unwrap();

    assert!(!manifest.tables.table_3);
    assert!(!manifest.tables.table_4);
}

/// Removing one table after emission is reflected on the next run.
#[test]
fn test_manifest_tracks_missing_table() {
    let temp_dir = TempDir::new().unwrap();
    let layout = OutputLayout::new(temp_dir.path());
    emit_tables(&layout).unwrap();
    fs::remove_file(layout.table_path(TableId::AggregatedKpis)).unwrap();

    let (_, manifest) = write_manifest(&layout).unwrap();

    assert!(!manifest.tables.table_3);
    assert!(manifest.tables.table_4);
}

#[test]
fn test_manifest_timestamp_increases() {
    let temp_dir = TempDir::new().unwrap();
    let layout = OutputLayout::new(temp_dir.path());

    let (_, first) = write_manifest(&layout).unwrap();
    thread::sleep(Duration::from_millis(20));
    let (path, second) = write_manifest(&layout).unwrap();

    assert!(second.timestamp > first.timestamp);
    assert!(read_manifest(&path).unwrap().timestamp > first.timestamp);
}

/// The manifest is fully replaced, never merged with the previous file.
#[test]
fn test_manifest_overwrites_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let layout = OutputLayout::new(temp_dir.path());
    fs::write(
        layout.manifest_path(),
        r#"{"version": "old", "timestamp": 0, "tables": {"table_3": true, "table_4": true}, "extra": 1}"#,
    )
    .unwrap();

    write_manifest(&layout).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(layout.manifest_path()).unwrap()).unwrap();
    assert_eq!(raw["version"], "v0-scaffold");
    assert_eq!(raw["tables"]["table_3"], false);
    assert!(raw.get("extra").is_none());
    assert_eq!(raw.as_object().unwrap().len(), 3);
}
