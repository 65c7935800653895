//! Full runs: tables then manifest, and manifest alone

use masmcp_eval::layout::OutputLayout;
use masmcp_eval::manifest::write_manifest;
use masmcp_eval::report::emit_tables;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_tables_then_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let layout = OutputLayout::new(&out);

    emit_tables(&layout).expect("Should emit tables");
    assert!(out.join("tables/table_3_aggregated_kpis.csv").is_file());
    assert!(out.join("tables/table_4_ablation.csv").is_file());

    write_manifest(&layout).expect("Should write manifest");
    let json = fs::read_to_string(out.join("manifest.json")).unwrap();
    assert!(json.contains("\"table_3\": true"));
    assert!(json.contains("\"table_4\": true"));
}

#[test]
fn test_manifest_alone_creates_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let out2 = temp_dir.path().join("out2");
    assert!(!out2.exists());

    write_manifest(&OutputLayout::new(&out2)).expect("Should write manifest");

    assert!(out2.is_dir());
    assert!(!out2.join("tables").exists());
    let json = fs::read_to_string(out2.join("manifest.json")).unwrap();
    assert!(json.contains("\"table_3\": false"));
    assert!(json.contains("\"table_4\": false"));
}
