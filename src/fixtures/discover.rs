//! Glob-based fixture discovery

use std::path::Path;

use glob::{glob_with, MatchOptions, Pattern};

use crate::error::{EvalError, Result};

use super::{FixtureFile, FixtureFormat};

/// List files in `dir` (not recursive) whose names match the format's glob,
/// in sorted path order. Hidden files (leading `.`) never match.
pub fn discover(dir: &Path, format: FixtureFormat) -> Result<Vec<FixtureFile>> {
    if !dir.is_dir() {
        return Err(EvalError::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let dir_str = dir.to_str().ok_or_else(|| EvalError::NonUtf8Path {
        path: dir.to_path_buf(),
    })?;
    let escaped = Pattern::escape(dir_str);
    let full_pattern = Path::new(&escaped).join(format.pattern());
    let pattern_str = full_pattern.to_string_lossy().into_owned();

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let paths = glob_with(&pattern_str, options).map_err(|source| EvalError::Pattern {
        pattern: pattern_str.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            EvalError::io(path, e.into_error())
        })?;
        if path.is_file() {
            files.push(FixtureFile { path, format });
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::debug!(
        dir = %dir.display(),
        pattern = format.pattern(),
        count = files.len(),
        "discovered fixtures"
    );
    Ok(files)
}
