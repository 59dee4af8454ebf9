// Utilities shared by the manager and the Python bindings

use anyhow::Result;
use std::path::Path;

/// File utilities
pub mod file_utils {
    use super::*;
    use anyhow::Context;
    use std::fs;
    use std::path::PathBuf;

    /// Check if a file has a supported language extension
    pub fn is_supported_file(path: &Path) -> bool {
        crate::language::detect_language(path).is_some()
    }

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Supported source files under `root`, sorted.
    ///
    /// Unreadable directory entries are skipped.
    pub fn discover_source_files(root: &Path) -> Result<Vec<PathBuf>> {
        let base = glob::Pattern::escape(&root.to_string_lossy());
        let pattern = format!("{}/**/*", base);

        let mut files: Vec<PathBuf> = glob::glob(&pattern)
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file() && is_supported_file(path))
            .collect();

        files.sort();
        Ok(files)
    }
}

/// Path conversion utilities (absolute ↔ relative Unix-style)
pub mod paths;

/// File ignore pattern utilities (.binderlensignore support)
pub mod ignore;
