// Workspace-relative path handling
//
// Reports identify files by a relative path with `/` separators, whatever the
// host platform, so that ids and JSON output stay stable across machines.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Path of `absolute` relative to `workspace_root`, with `/` separators.
///
/// Both paths are canonicalized when they exist (macOS `/var` vs
/// `/private/var`); otherwise they are compared as given.
pub fn to_relative_unix_style(absolute: &Path, workspace_root: &Path) -> Result<String> {
    let (path, root) = match (absolute.canonicalize(), workspace_root.canonicalize()) {
        (Ok(path), Ok(root)) => (path, root),
        _ => (absolute.to_path_buf(), workspace_root.to_path_buf()),
    };

    let path = strip_unc_prefix(&path);
    let root = strip_unc_prefix(&root);

    let relative = path.strip_prefix(&root).with_context(|| {
        format!(
            "File path '{}' is not within workspace root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let segments = relative
        .components()
        .map(|component| {
            component
                .as_os_str()
                .to_str()
                .context("Path contains invalid UTF-8")
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(segments.join("/"))
}

/// Canonicalized Windows paths carry a `\\?\` prefix that plain ones lack
#[cfg(windows)]
fn strip_unc_prefix(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    match text.strip_prefix(r"\\?\") {
        Some(stripped) => PathBuf::from(stripped),
        None => path.to_path_buf(),
    }
}

#[cfg(not(windows))]
fn strip_unc_prefix(path: &Path) -> PathBuf {
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let workspace = PathBuf::from("/home/dev/editor");
        let absolute = PathBuf::from("/home/dev/editor/src/main/java/app/ui/EditorView.java");

        let result = to_relative_unix_style(&absolute, &workspace).unwrap();

        assert_eq!(result, "src/main/java/app/ui/EditorView.java");
        assert!(!result.contains('\\'));
    }

    #[test]
    fn test_unicode_and_spaces() {
        let workspace = PathBuf::from("/home/dev/my projects/エディタ");
        let absolute = PathBuf::from("/home/dev/my projects/エディタ/src/画面 View.java");

        let result = to_relative_unix_style(&absolute, &workspace).unwrap();
        assert_eq!(result, "src/画面 View.java");
    }

    #[test]
    fn test_root_level_file() {
        let workspace = PathBuf::from("/home/dev/editor");
        let absolute = PathBuf::from("/home/dev/editor/Main.java");

        assert_eq!(
            to_relative_unix_style(&absolute, &workspace).unwrap(),
            "Main.java"
        );
    }

    #[test]
    fn test_file_outside_workspace_rejected() {
        let workspace = PathBuf::from("/home/dev/editor");
        let outside = PathBuf::from("/etc/passwd");

        let err = to_relative_unix_style(&outside, &workspace).unwrap_err();
        assert!(err.to_string().contains("not within workspace"));
    }

    #[test]
    fn test_existing_paths_are_canonicalized() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let nested = temp_dir.path().join("src");
        std::fs::create_dir_all(&nested).unwrap();
        let file = nested.join("A.java");
        std::fs::write(&file, "class A {}").unwrap();

        let through_dot = temp_dir.path().join("src/./A.java");
        assert_eq!(
            to_relative_unix_style(&through_dot, temp_dir.path()).unwrap(),
            "src/A.java"
        );
    }
}
