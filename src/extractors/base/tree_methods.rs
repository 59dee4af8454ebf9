// Tree navigation and search over any SourceNode tree
//
// Traversals are iterative so that deep fluent chains or generated code cannot
// blow the call stack. Every search is parameterized by a predicate closure;
// the small predicate builders at the bottom compose with `both`.

use super::node::{NodeKind, SourceNode};
use crate::extractors::commands::CommandTypeSet;
use tracing::debug;

/// Hard limit on tree depth followed by searches and ancestor walks
pub const MAX_TREE_DEPTH: usize = 4096;

/// Pre-order walk of `root`'s subtree (root included), calling `visitor` on each node.
/// Returning `false` from the visitor stops the walk.
pub fn walk_tree<N, F>(root: N, visitor: &mut F)
where
    N: SourceNode,
    F: FnMut(&N) -> bool,
{
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if !visitor(&node) {
            return;
        }

        if depth >= MAX_TREE_DEPTH {
            debug!("Tree walk truncated at depth {}", depth);
            continue;
        }

        // Reverse so the first child is popped first (document order)
        for child in node.children().into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }
}

/// First node in document order matching `predicate`
pub fn find_first<N, P>(root: N, predicate: P) -> Option<N>
where
    N: SourceNode,
    P: Fn(&N) -> bool,
{
    let mut found = None;
    walk_tree(root, &mut |node: &N| {
        if predicate(node) {
            found = Some(*node);
            false
        } else {
            true
        }
    });
    found
}

/// All nodes matching `predicate`, in document order
pub fn collect_all<N, P>(root: N, predicate: P) -> Vec<N>
where
    N: SourceNode,
    P: Fn(&N) -> bool,
{
    let mut nodes = Vec::new();
    walk_tree(root, &mut |node: &N| {
        if predicate(node) {
            nodes.push(*node);
        }
        true
    });
    nodes
}

/// Nearest strict ancestor matching `predicate`
pub fn find_ancestor<N, P>(node: N, predicate: P) -> Option<N>
where
    N: SourceNode,
    P: Fn(&N) -> bool,
{
    let mut current = node.parent();
    let mut steps = 0;
    while let Some(parent) = current {
        if predicate(&parent) {
            return Some(parent);
        }
        steps += 1;
        if steps >= MAX_TREE_DEPTH {
            debug!("Ancestor walk abandoned after {} steps", steps);
            return None;
        }
        current = parent.parent();
    }
    None
}

/// Nearest strict ancestor of the given kind
pub fn find_parent_of_kind<N: SourceNode>(node: N, kind: NodeKind) -> Option<N> {
    find_ancestor(node, kind_is::<N>(kind))
}

// ========================================================================
// Predicate builders
// ========================================================================

pub fn kind_is<N: SourceNode>(kind: NodeKind) -> impl Fn(&N) -> bool {
    move |node: &N| node.kind() == kind
}

/// Node sits in a constructor declared directly by `class`, not by a class nested in it
pub fn in_constructor_of<N: SourceNode>(class: N) -> impl Fn(&N) -> bool {
    move |node: &N| {
        find_parent_of_kind(*node, NodeKind::ConstructorDeclaration)
            .and_then(|constructor| find_parent_of_kind(constructor, NodeKind::ClassDeclaration))
            .is_some_and(|owner| owner == class)
    }
}

/// Node references at least one Command type
pub fn references_any<N: SourceNode>(types: &CommandTypeSet) -> impl Fn(&N) -> bool + '_ {
    move |node: &N| types.contains_any(node.referenced_types())
}

pub fn both<N, A, B>(a: A, b: B) -> impl Fn(&N) -> bool
where
    N: SourceNode,
    A: Fn(&N) -> bool,
    B: Fn(&N) -> bool,
{
    move |node: &N| a(node) && b(node)
}
