/// Binder call-site enumeration
///
/// A binder site is the outermost call of a fluent chain whose innermost call
/// has a binder-like name (`buttonBinder(...)`, `nodeBinder(...)`,
/// `anonCmdBinder(...)`). `.on(...).bind()` suffixes are part of the site.
use super::JavaNode;
use crate::extractors::base::tree_methods::collect_all;
use crate::extractors::base::{NodeKind, SourceNode};
use crate::extractors::commands::unwind;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Default binder name pattern: lower camel case ending in `Binder`
pub static DEFAULT_BINDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][A-Za-z0-9_]*Binder$").expect("binder pattern is a valid regex")
});

/// A binder invocation chain found in a compilation unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinderSite<'tree> {
    /// Outermost call of the chain; extraction starts here
    pub invocation: JavaNode<'tree>,
    /// Innermost call, whose name identified the binder
    pub binder: JavaNode<'tree>,
}

impl BinderSite<'_> {
    pub fn binder_name(&self) -> String {
        self.binder.name().unwrap_or_default()
    }
}

/// Invocation that sits as the first child of an enclosing invocation
fn is_chained(node: &JavaNode<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        parent.kind() == NodeKind::Invocation && parent.first_child() == Some(*node)
    })
}

/// Binder sites under `root`, in document order
pub fn find_binder_sites<'tree>(root: JavaNode<'tree>, pattern: &Regex) -> Vec<BinderSite<'tree>> {
    collect_all(root, |node: &JavaNode| {
        node.kind() == NodeKind::Invocation && !is_chained(node)
    })
    .into_iter()
    .filter_map(|invocation| match unwind(invocation) {
        Some(chain) => {
            let name = chain.innermost.name()?;
            pattern.is_match(&name).then_some(BinderSite {
                invocation,
                binder: chain.innermost,
            })
        }
        None => {
            warn!(
                "Skipping invocation chain at line {}: too deeply nested",
                invocation.ts_node().start_position().row + 1
            );
            None
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::parse_java;

    const VIEW: &str = r#"
class View {
    View() {
        buttonBinder(() -> new Save()).on(saveButton).bind();
    }

    void configure() {
        nodeBinder(canvas, () -> new Draw()).when(i -> ready).bind();
        anonCmdBinder(() -> { clear(); }).on(reset).bind();
        helper.binderFactory().create();
        list.stream().map(x -> x).collect(toList());
        outer(textInputBinder(() -> new Rename()));
    }
}
"#;

    fn sites(source: &str) -> Vec<(String, String)> {
        let tree = parse_java(source, "View.java").unwrap();
        let root = JavaNode::root(&tree, source);
        find_binder_sites(root, &DEFAULT_BINDER_PATTERN)
            .into_iter()
            .map(|site| (site.binder_name(), site.invocation.name().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn test_finds_outermost_call_of_each_binder_chain() {
        let found = sites(VIEW);
        assert_eq!(
            found,
            vec![
                ("buttonBinder".to_string(), "bind".to_string()),
                ("nodeBinder".to_string(), "bind".to_string()),
                ("anonCmdBinder".to_string(), "bind".to_string()),
                ("textInputBinder".to_string(), "outer".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_pattern() {
        assert!(DEFAULT_BINDER_PATTERN.is_match("buttonBinder"));
        assert!(DEFAULT_BINDER_PATTERN.is_match("anonCmdBinder"));
        assert!(!DEFAULT_BINDER_PATTERN.is_match("Binder"));
        assert!(!DEFAULT_BINDER_PATTERN.is_match("binderFactory"));
        assert!(!DEFAULT_BINDER_PATTERN.is_match("ButtonBinder"));
    }
}
