//! Fixed evaluation tables
//!
//! The values are the published placeholder figures for the study. Nothing
//! here is computed from input data.

mod table;

pub use table::{Cell, ReportTable, Row, TABLE_WIDTH};

use std::path::PathBuf;

use crate::error::Result;
use crate::layout::OutputLayout;

/// Identifies one of the two report tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// Table 3: aggregated KPIs per baseline.
    AggregatedKpis,
    /// Table 4: ablation of the MAS/MCP configuration.
    Ablation,
}

impl TableId {
    pub const ALL: [TableId; 2] = [TableId::AggregatedKpis, TableId::Ablation];

    pub fn file_name(self) -> &'static str {
        match self {
            TableId::AggregatedKpis => "table_3_aggregated_kpis.csv",
            TableId::Ablation => "table_4_ablation.csv",
        }
    }

    /// Key used for this table in `manifest.json`.
    pub fn manifest_key(self) -> &'static str {
        match self {
            TableId::AggregatedKpis => "table_3",
            TableId::Ablation => "table_4",
        }
    }

    pub fn table(self) -> &'static ReportTable {
        match self {
            TableId::AggregatedKpis => &AGGREGATED_KPIS,
            TableId::Ablation => &ABLATION,
        }
    }
}

pub const AGGREGATED_KPIS: ReportTable = ReportTable {
    id: TableId::AggregatedKpis,
    columns: [
        "Metric",
        "B1 (ad hoc)",
        "B2 (MAS w/o MCP)",
        "B3 (MAS MCP)",
        "Δ B3 vs B1",
    ],
    rows: &[
        [
            Cell::Text("TTI (h, median, n=10)"),
            Cell::Float(9.1),
            Cell::Float(7.0),
            Cell::Float(5.6),
            Cell::Text("-38%"),
        ],
        [
            Cell::Text("Latency P95 (s)"),
            Cell::Float(1.52),
            Cell::Float(1.33),
            Cell::Float(1.14),
            Cell::Text("-25%"),
        ],
        [
            Cell::Text("Ext. effect failures (%)"),
            Cell::Float(6.8),
            Cell::Float(4.3),
            Cell::Float(2.7),
            Cell::Text("-60%"),
        ],
        [
            Cell::Text("Cost €/1k min"),
            Cell::Float(21.6),
            Cell::Float(19.8),
            Cell::Float(18.1),
            Cell::Text("-16%"),
        ],
    ],
};

pub const ABLATION: ReportTable = ReportTable {
    id: TableId::Ablation,
    columns: [
        "Configuration",
        "TTI (h)",
        "P95 (s)",
        "Ext. visible failures (%)",
        "Min >1000 ppm",
    ],
    rows: &[
        [
            Cell::Text("MAS MCP without tracing"),
            Cell::Float(5.5),
            Cell::Float(1.12),
            Cell::Float(2.8),
            Cell::Int(24),
        ],
        [
            Cell::Text("MAS MCP without policies"),
            Cell::Float(5.6),
            Cell::Float(1.15),
            Cell::Float(4.9),
            Cell::Int(22),
        ],
        [
            Cell::Text("MAS MCP w/o MCP (HTTP tools)"),
            Cell::Float(7.0),
            Cell::Float(1.33),
            Cell::Float(4.3),
            Cell::Int(29),
        ],
    ],
};

/// Paths written by [`emit_tables`].
#[derive(Debug, Clone)]
pub struct EmittedTables {
    pub tables_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Create `tables/` and `figures/` under `layout` and write both tables.
///
/// Each table is written with a single `fs::write`. If the second write
/// fails the first table stays on disk.
pub fn emit_tables(layout: &OutputLayout) -> Result<EmittedTables> {
    layout.ensure_report_dirs()?;

    let mut files = Vec::with_capacity(TableId::ALL.len());
    for id in TableId::ALL {
        let path = layout.table_path(id);
        id.table().write_to(&path)?;
        files.push(path);
    }

    tracing::info!(out = %layout.root().display(), tables = files.len(), "emitted report tables");

    Ok(EmittedTables {
        tables_dir: layout.tables_dir(),
        files,
    })
}
