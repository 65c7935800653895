//! Output directory layout
//!
//! Every path the tools write lives under one output root:
//!
//! ```text
//! <out>/tables/table_3_aggregated_kpis.csv
//! <out>/tables/table_4_ablation.csv
//! <out>/figures/
//! <out>/manifest.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EvalError, Result};
use crate::report::TableId;

pub const TABLES_DIR: &str = "tables";
pub const FIGURES_DIR: &str = "figures";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.root.join(TABLES_DIR)
    }

    pub fn figures_dir(&self) -> PathBuf {
        self.root.join(FIGURES_DIR)
    }

    pub fn table_path(&self, table: TableId) -> PathBuf {
        self.tables_dir().join(table.file_name())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Create the root directory if missing. Succeeds when it already exists.
    pub fn ensure_root(&self) -> Result<()> {
        ensure_dir(&self.root)
    }

    /// Create `tables/` and `figures/` (and the root) if missing.
    pub fn ensure_report_dirs(&self) -> Result<()> {
        ensure_dir(&self.tables_dir())?;
        ensure_dir(&self.figures_dir())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| EvalError::io(path, e))?;
    tracing::debug!(path = %path.display(), "directory ready");
    Ok(())
}
