//! Language Support - tree-sitter configuration
//!
//! Binder analysis only understands Java. All parser setup goes through here.

use crate::error::{ExtractorError, Result};
use std::path::Path;
use tree_sitter::{Parser, Tree};

/// tree-sitter Java grammar
pub fn java_language() -> tree_sitter::Language {
    tree_sitter_java::LANGUAGE.into()
}

/// Detect language from file extension
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "java" => Some("java"),
        _ => None,
    }
}

/// Detect language from a path's extension
pub fn detect_language(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
}

/// Parse Java source into a tree-sitter tree
pub fn parse_java(content: &str, file_path: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&java_language())?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| ExtractorError::Parse(file_path.to_string()))?;

    if tree.root_node().has_error() {
        tracing::debug!("Syntax errors in {}; analysing the recovered tree", file_path);
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language(Path::new("src/ui/Panel.java")), Some("java"));
        assert_eq!(detect_language(Path::new("build.gradle")), None);
        assert_eq!(detect_language(Path::new("README")), None);
    }

    #[test]
    fn test_parse_java() {
        let tree = parse_java("class A { void f() { g(); } }", "A.java").unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }
}
