//! Run manifest: which report tables exist in an output directory.
//!
//! The manifest only records existence. Table contents are never read, so a
//! truncated or corrupt table still reports `true`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::layout::OutputLayout;
use crate::report::TableId;

pub const MANIFEST_VERSION: &str = "v0-scaffold";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub timestamp: f64,
    pub tables: TablePresence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePresence {
    pub table_3: bool,
    pub table_4: bool,
}

impl TablePresence {
    pub fn get(&self, table: TableId) -> bool {
        match table {
            TableId::AggregatedKpis => self.table_3,
            TableId::Ablation => self.table_4,
        }
    }
}

impl Manifest {
    /// Build a manifest from the current state of `layout` at time `now`.
    pub fn probe(layout: &OutputLayout, now: DateTime<Utc>) -> Self {
        let exists = |table: TableId| layout.table_path(table).exists();
        Self {
            version: MANIFEST_VERSION.to_string(),
            timestamp: epoch_seconds(now),
            tables: TablePresence {
                table_3: exists(TableId::AggregatedKpis),
                table_4: exists(TableId::Ablation),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(EvalError::Serialize)
    }
}

fn epoch_seconds(now: DateTime<Utc>) -> f64 {
    now.timestamp_micros() as f64 / 1_000_000.0
}

/// Probe the tables, ensure the output directory exists and replace
/// `manifest.json` with the new record.
pub fn write_manifest(layout: &OutputLayout) -> Result<(PathBuf, Manifest)> {
    // Probe first: creating the root must not influence the flags.
    let manifest = Manifest::probe(layout, Utc::now());
    layout.ensure_root()?;

    let path = layout.manifest_path();
    fs::write(&path, manifest.to_json()?).map_err(|e| EvalError::io(&path, e))?;

    tracing::info!(
        path = %path.display(),
        table_3 = manifest.tables.table_3,
        table_4 = manifest.tables.table_4,
        "manifest written"
    );
    Ok((path, manifest))
}

pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| EvalError::parse(path, e))
}
