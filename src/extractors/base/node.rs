// Source node abstraction
//
// The command extractor never talks to tree-sitter directly. It walks any tree
// that can answer these questions, which keeps the heuristics testable against
// hand-built trees as well as parsed Java.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a syntax node, as far as binder analysis cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Invocation,
    Lambda,
    VariableReference,
    MethodReference,
    ConstructorCall,
    Block,
    LocalVariable,
    ClassDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    FieldAccess,
    Other,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Invocation => "invocation",
            NodeKind::Lambda => "lambda",
            NodeKind::VariableReference => "variable_reference",
            NodeKind::MethodReference => "method_reference",
            NodeKind::ConstructorCall => "constructor_call",
            NodeKind::Block => "block",
            NodeKind::LocalVariable => "local_variable",
            NodeKind::ClassDeclaration => "class_declaration",
            NodeKind::MethodDeclaration => "method_declaration",
            NodeKind::ConstructorDeclaration => "constructor_declaration",
            NodeKind::FieldAccess => "field_access",
            NodeKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Role a node plays inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Argument of an invocation or constructor call
    Argument,
    /// Receiver of an invocation (`target.call()`)
    Target,
    /// Body of a lambda, method or constructor
    Body,
    /// Initial value of a variable
    Initializer,
    Other,
}

/// Read-only view of a node in an already-parsed tree.
///
/// Implementations must be cheap to copy; a node is a handle, not an owner.
/// Equality is node identity within one tree.
/// `children()` returns direct children in document order and
/// `referenced_types()` returns simple type names found anywhere in the
/// subtree, deduplicated in first-occurrence order.
pub trait SourceNode: Copy + PartialEq {
    fn kind(&self) -> NodeKind;

    fn role(&self) -> NodeRole;

    fn parent(&self) -> Option<Self>;

    fn children(&self) -> Vec<Self>;

    fn referenced_types(&self) -> Vec<String>;

    /// Callee name of an invocation, or the declared name of a variable,
    /// class, method or constructor
    fn name(&self) -> Option<String>;

    fn text(&self) -> String;

    fn first_child(&self) -> Option<Self> {
        self.children().into_iter().next()
    }
}
