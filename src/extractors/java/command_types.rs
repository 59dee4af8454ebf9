//! Command type discovery
//!
//! A type is a Command when it extends or implements a marker type (such as
//! `Command`) or another type already known to be a Command. Resolution runs to
//! a fixpoint over every declaration gathered from the analysed sources, so
//! hierarchy order across files does not matter. Names are simple names only.

use super::helpers;
use super::JavaNode;
use crate::extractors::base::tree_methods::collect_all;
use crate::extractors::base::SourceNode;
use crate::extractors::commands::CommandTypeSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// A class, interface, enum or record with its direct supertypes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub supertypes: Vec<String>,
}

/// Every type declaration in a compilation unit, nested ones included
pub fn declared_types(root: JavaNode<'_>) -> Vec<TypeDeclaration> {
    let source = root.source();
    collect_all(root, |node: &JavaNode| {
        matches!(
            node.raw_kind(),
            "class_declaration" | "interface_declaration" | "enum_declaration" | "record_declaration"
        )
    })
    .into_iter()
    .filter_map(|declaration| {
        let name = declaration.name()?;
        let node = declaration.ts_node();

        let mut supertypes = Vec::new();
        match node.kind() {
            "interface_declaration" => {
                supertypes.extend(helpers::extract_extended_interfaces(source, node));
            }
            _ => {
                supertypes.extend(helpers::extract_superclass(source, node));
                supertypes.extend(helpers::extract_implemented_interfaces(source, node));
            }
        }

        Some(TypeDeclaration { name, supertypes })
    })
    .collect()
}

/// Close `markers` over the declaration hierarchy
pub fn resolve_command_types<S: AsRef<str>>(
    declarations: &[TypeDeclaration],
    markers: &[S],
) -> CommandTypeSet {
    let mut known: BTreeSet<String> = markers.iter().map(|m| m.as_ref().to_string()).collect();

    loop {
        let mut changed = false;
        for declaration in declarations {
            if known.contains(&declaration.name) {
                continue;
            }
            if declaration.supertypes.iter().any(|s| known.contains(s)) {
                known.insert(declaration.name.clone());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    debug!(
        "Resolved {} command types from {} declarations",
        known.len(),
        declarations.len()
    );
    CommandTypeSet::new(known)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::parse_java;

    fn declarations(source: &str) -> Vec<TypeDeclaration> {
        let tree = parse_java(source, "Types.java").unwrap();
        declared_types(JavaNode::root(&tree, source))
    }

    #[test]
    fn test_declared_types_collects_supertypes() {
        let decls = declarations(
            r#"
interface Undoable extends Command, Serializable {}
abstract class CommandImpl implements Command {}
class SaveCommand extends CommandImpl implements Undoable {
    static class Nested extends io.app.Base<String> {}
}
enum Mode implements Command { ON }
"#,
        );

        let find = |name: &str| decls.iter().find(|d| d.name == name).unwrap();
        assert_eq!(find("Undoable").supertypes, vec!["Command", "Serializable"]);
        assert_eq!(find("CommandImpl").supertypes, vec!["Command"]);
        assert_eq!(find("SaveCommand").supertypes, vec!["CommandImpl", "Undoable"]);
        assert_eq!(find("Nested").supertypes, vec!["Base"]);
        assert_eq!(find("Mode").supertypes, vec!["Command"]);
    }

    #[test]
    fn test_resolution_is_transitive_and_order_independent() {
        let decls = vec![
            TypeDeclaration {
                name: "ExportPdf".to_string(),
                supertypes: vec!["ExportCommand".to_string()],
            },
            TypeDeclaration {
                name: "ExportCommand".to_string(),
                supertypes: vec!["CommandImpl".to_string()],
            },
            TypeDeclaration {
                name: "Widget".to_string(),
                supertypes: vec!["Node".to_string()],
            },
        ];

        let types = resolve_command_types(&decls, &["CommandImpl"]);
        assert!(types.contains("CommandImpl"));
        assert!(types.contains("ExportCommand"));
        assert!(types.contains("ExportPdf"));
        assert!(!types.contains("Widget"));
        assert_eq!(types.len(), 3);
    }

    #[test]
    fn test_unrelated_names_are_not_commands() {
        let decls = declarations("class CommandLine {} class Commands extends Object {}");
        let types = resolve_command_types(&decls, &["Command"]);
        assert_eq!(types.iter().collect::<Vec<_>>(), vec!["Command"]);
    }
}
