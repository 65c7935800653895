use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::layout::OutputLayout;
use crate::manifest::write_manifest;
use crate::report::TableId;

/// Record which report tables exist under `out` in `manifest.json`.
pub fn execute(out: &Path) -> Result<()> {
    let layout = OutputLayout::new(out);
    let (path, manifest) = write_manifest(&layout)
        .with_context(|| format!("Failed to write manifest under {}", out.display()))?;

    for table in TableId::ALL {
        let mark = if manifest.tables.get(table) {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!("  {} {}", mark, table.file_name());
    }

    println!(
        "Consistency check complete. See {}",
        path.display().to_string().cyan()
    );

    Ok(())
}
