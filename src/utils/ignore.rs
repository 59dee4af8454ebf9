//! `.binderlensignore` support
//!
//! One pattern per line, `#` starts a comment. Patterns are matched against
//! workspace-relative Unix-style paths:
//! - `dir/` ignores that directory (as a whole path component) and its contents
//! - `*.ext` ignores files by suffix
//! - anything else ignores paths containing it
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the ignore file looked up at the workspace root
pub const IGNORE_FILE_NAME: &str = ".binderlensignore";

/// Load ignore patterns from the workspace root; no file means no patterns
pub fn load_ignore_patterns(workspace_path: &Path) -> Result<Vec<String>> {
    let ignore_file = workspace_path.join(IGNORE_FILE_NAME);

    if !ignore_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read {}", ignore_file.display()))?;

    let patterns: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if !patterns.is_empty() {
        debug!("Loaded {} ignore patterns from {}", patterns.len(), IGNORE_FILE_NAME);
    }

    Ok(patterns)
}

/// Check if a path matches any of the ignore patterns
pub fn is_ignored_by_pattern(path: &Path, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy().replace('\\', "/");

    patterns.iter().any(|pattern| {
        if let Some(dir_name) = pattern.strip_suffix('/') {
            // Whole components only: "gen/" must not match "regen/"
            path_str.split('/').any(|component| component == dir_name)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            path_str.ends_with(suffix)
        } else {
            path_str.contains(pattern.as_str())
        }
    })
}
