//! Fixed-width report tables and their CSV rendering

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{EvalError, Result};

use super::TableId;

/// Every report table has five columns: a label and four values.
pub const TABLE_WIDTH: usize = 5;

pub type Row = [Cell; TABLE_WIDTH];

/// A single literal cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Text(&'static str),
    Float(f64),
    Int(i64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            // Debug keeps the fractional part on whole floats ("7.0").
            Cell::Float(v) => write!(f, "{v:?}"),
            Cell::Int(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReportTable {
    pub id: TableId,
    pub columns: [&'static str; TABLE_WIDTH],
    pub rows: &'static [Row],
}

impl ReportTable {
    /// Render the header and rows as CSV, one `\n`-terminated line each.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_record(&mut out, self.columns.iter().map(|c| c.to_string()));
        for row in self.rows {
            push_record(&mut out, row.iter().map(Cell::to_string));
        }
        out
    }

    /// Write the rendered table to `path` in one write call, replacing any
    /// previous content.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv()).map_err(|e| EvalError::io(path, e))?;
        tracing::debug!(
            table = self.id.manifest_key(),
            rows = self.rows.len(),
            path = %path.display(),
            "wrote table"
        );
        Ok(())
    }
}

fn push_record(out: &mut String, fields: impl Iterator<Item = String>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(&field));
    }
    out.push('\n');
}

/// Quote a field only when it contains a separator, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
