/// Java support for binder analysis
///
/// - `JavaNode`: tree-sitter Java node presented as a `SourceNode`
/// - helpers: type-name utilities and supertype extraction
/// - command_types: Command type discovery across compilation units
/// - binders: binder call-site enumeration
pub mod binders;
pub mod command_types;
mod helpers;

pub use binders::{find_binder_sites, BinderSite};
pub use command_types::{declared_types, resolve_command_types, TypeDeclaration};
pub use helpers::simple_type_name;

use crate::extractors::base::{NodeKind, NodeRole, SourceNode};
use std::collections::HashSet;
use tree_sitter::{Node, Tree};

/// A tree-sitter Java node plus the source it was parsed from.
///
/// The view is shaped for binder analysis rather than mirroring the grammar:
/// - `argument_list` is transparent, so arguments are direct children of their call
/// - parentheses and casts are transparent around their operand, so
///   `(Supplier<Command>) () -> ...` is a lambda in its call's argument slot
/// - comments are skipped
/// - an invocation's callee name and type arguments are attributes, not children
/// - a `variable_declarator` inside a local declaration is the local variable node
#[derive(Debug, Clone, Copy)]
pub struct JavaNode<'tree> {
    node: Node<'tree>,
    source: &'tree str,
}

// Nodes of one tree share one source; compare its address, not its text
impl PartialEq for JavaNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && std::ptr::eq(self.source, other.source)
    }
}

impl Eq for JavaNode<'_> {}

impl<'tree> JavaNode<'tree> {
    pub fn new(node: Node<'tree>, source: &'tree str) -> Self {
        Self { node, source }
    }

    pub fn root(tree: &'tree Tree, source: &'tree str) -> Self {
        Self::new(tree.root_node(), source)
    }

    /// Underlying tree-sitter node
    pub fn ts_node(&self) -> Node<'tree> {
        self.node
    }

    /// Source text the tree was parsed from
    pub fn source(&self) -> &'tree str {
        self.source
    }

    /// Grammar node kind (e.g. "method_invocation")
    pub fn raw_kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn contains(&self, other: &JavaNode<'_>) -> bool {
        self.node.start_byte() <= other.node.start_byte()
            && other.node.end_byte() <= self.node.end_byte()
    }

    fn wrap(&self, node: Node<'tree>) -> Self {
        Self::new(node, self.source)
    }

    fn node_text(&self, node: Node<'tree>) -> &'tree str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or_default()
    }

    fn push_children(&self, node: Node<'tree>, out: &mut Vec<Self>) {
        let is_invocation = node.kind() == "method_invocation";
        let callee = if is_invocation {
            node.child_by_field_name("name")
        } else {
            None
        };

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.is_extra() || Some(child) == callee {
                continue;
            }
            if is_invocation && child.kind() == "type_arguments" {
                continue;
            }
            if is_transparent(child.kind()) {
                self.push_children(child, out);
                continue;
            }
            out.push(self.wrap(operand(child)));
        }
    }
}

/// Wrapper kinds whose children are presented as children of the wrapper's parent
fn is_transparent(kind: &str) -> bool {
    kind == "argument_list"
}

fn is_field(parent: Node<'_>, field: &str, child: Node<'_>) -> bool {
    parent.child_by_field_name(field) == Some(child)
}

/// Expression inside any parentheses and casts wrapping `node`
fn operand(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    loop {
        let inner = match current.kind() {
            "parenthesized_expression" => {
                let mut cursor = current.walk();
                let inner = current
                    .named_children(&mut cursor)
                    .find(|child| !child.is_extra());
                inner
            }
            "cast_expression" => current.child_by_field_name("value"),
            _ => None,
        };
        match inner {
            Some(inner) => current = inner,
            None => return current,
        }
    }
}

/// `child` is the operand of a wrapper that `operand` looks through
fn is_wrapped_by(parent: Node<'_>, child: Node<'_>) -> bool {
    match parent.kind() {
        "parenthesized_expression" => true,
        "cast_expression" => is_field(parent, "value", child),
        _ => false,
    }
}

/// Grammar parent of `node` with wrappers skipped, plus the node that fills
/// the slot in that parent (`node` itself or its outermost wrapper)
fn logical_parent(node: Node<'_>) -> Option<(Node<'_>, Node<'_>)> {
    let mut slot = node;
    let mut parent = node.parent()?;
    while is_wrapped_by(parent, slot) {
        slot = parent;
        parent = parent.parent()?;
    }
    Some((slot, parent))
}

fn classify(node: Node<'_>) -> NodeKind {
    match node.kind() {
        "method_invocation" => NodeKind::Invocation,
        "lambda_expression" => NodeKind::Lambda,
        "method_reference" => NodeKind::MethodReference,
        "object_creation_expression" => NodeKind::ConstructorCall,
        "block" => NodeKind::Block,
        "class_declaration" => NodeKind::ClassDeclaration,
        "method_declaration" => NodeKind::MethodDeclaration,
        "constructor_declaration" | "compact_constructor_declaration" => {
            NodeKind::ConstructorDeclaration
        }
        "field_access" => NodeKind::FieldAccess,
        "identifier" => {
            // Declared names (class, method, variable, parameter) are not reads
            let declares = node
                .parent()
                .is_some_and(|parent| is_field(parent, "name", node));
            if declares {
                NodeKind::Other
            } else {
                NodeKind::VariableReference
            }
        }
        "variable_declarator" => {
            let local = node
                .parent()
                .is_some_and(|parent| parent.kind() == "local_variable_declaration");
            if local {
                NodeKind::LocalVariable
            } else {
                NodeKind::Other
            }
        }
        _ => NodeKind::Other,
    }
}

impl<'tree> SourceNode for JavaNode<'tree> {
    fn kind(&self) -> NodeKind {
        classify(self.node)
    }

    fn role(&self) -> NodeRole {
        let (slot, parent) = match logical_parent(self.node) {
            Some(found) => found,
            None => return NodeRole::Other,
        };

        match parent.kind() {
            "argument_list" => NodeRole::Argument,
            "method_invocation" if is_field(parent, "object", slot) => NodeRole::Target,
            "lambda_expression" | "method_declaration" | "constructor_declaration"
                if is_field(parent, "body", slot) =>
            {
                NodeRole::Body
            }
            "variable_declarator" if is_field(parent, "value", slot) => NodeRole::Initializer,
            _ => NodeRole::Other,
        }
    }

    fn parent(&self) -> Option<Self> {
        let (_, mut parent) = logical_parent(self.node)?;
        while is_transparent(parent.kind()) {
            let (_, above) = logical_parent(parent)?;
            parent = above;
        }
        Some(self.wrap(parent))
    }

    fn children(&self) -> Vec<Self> {
        let mut children = Vec::new();
        self.push_children(self.node, &mut children);
        children
    }

    fn referenced_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        let mut push = |name: &str| {
            if !name.is_empty() && seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        };

        let mut stack = vec![self.node];
        while let Some(node) = stack.pop() {
            match node.kind() {
                "type_identifier" => push(self.node_text(node)),
                "scoped_type_identifier" => {
                    // Qualified type: only the last segment is the simple name
                    push(simple_type_name(self.node_text(node)));
                    continue;
                }
                "method_reference" => {
                    // `SaveCommand::new` parses its receiver as an expression
                    let mut cursor = node.walk();
                    let receiver = node
                        .named_children(&mut cursor)
                        .find(|child| !child.is_extra());
                    if let Some(receiver) = receiver {
                        if matches!(
                            receiver.kind(),
                            "identifier" | "field_access" | "scoped_identifier"
                        ) {
                            push(simple_type_name(self.node_text(receiver)));
                        }
                    }
                }
                _ => {}
            }

            let mut cursor = node.walk();
            let children: Vec<Node> = node.named_children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }

        names
    }

    fn name(&self) -> Option<String> {
        self.node
            .child_by_field_name("name")
            .map(|name| self.node_text(name).to_string())
    }

    fn text(&self) -> String {
        self.node_text(self.node).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::tree_methods::{collect_all, find_first, kind_is};
    use crate::language::parse_java;

    const PANEL: &str = r#"
class Panel {
    void bind() {
        Supplier<Command> s = () -> new SaveCommand(/* inline */ doc);
        buttonBinder(s).on(save).bind();
        binder(SaveCommand::new);
        other(com.app.cmds.UndoCommand::new, this.field);
    }
}
"#;

    fn call<'a>(root: JavaNode<'a>, name: &str) -> JavaNode<'a> {
        find_first(root, |n: &JavaNode| {
            n.kind() == NodeKind::Invocation && n.name().as_deref() == Some(name)
        })
        .unwrap()
    }

    #[test]
    fn test_invocation_children_are_receiver_then_arguments() {
        let tree = parse_java(PANEL, "Panel.java").unwrap();
        let root = JavaNode::root(&tree, PANEL);

        let on = call(root, "on");
        let children = on.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].kind(), NodeKind::Invocation);
        assert_eq!(children[0].role(), NodeRole::Target);
        assert_eq!(children[0].name().as_deref(), Some("buttonBinder"));
        assert_eq!(children[1].text(), "save");
        assert_eq!(children[1].role(), NodeRole::Argument);
        assert_eq!(children[1].kind(), NodeKind::VariableReference);
    }

    #[test]
    fn test_argument_parent_skips_argument_list() {
        let tree = parse_java(PANEL, "Panel.java").unwrap();
        let root = JavaNode::root(&tree, PANEL);

        let binder = call(root, "buttonBinder");
        let argument = binder.children()[0];
        assert_eq!(argument.text(), "s");
        assert_eq!(argument.parent(), Some(binder));
    }

    #[test]
    fn test_comments_are_not_children() {
        let tree = parse_java(PANEL, "Panel.java").unwrap();
        let root = JavaNode::root(&tree, PANEL);

        let constructor = find_first(root, kind_is::<JavaNode>(NodeKind::ConstructorCall)).unwrap();
        let texts: Vec<String> = constructor.children().iter().map(|c| c.text()).collect();
        assert_eq!(texts, vec!["SaveCommand".to_string(), "doc".to_string()]);
    }

    #[test]
    fn test_local_variable_and_lambda_roles() {
        let tree = parse_java(PANEL, "Panel.java").unwrap();
        let root = JavaNode::root(&tree, PANEL);

        let local = find_first(root, kind_is::<JavaNode>(NodeKind::LocalVariable)).unwrap();
        assert_eq!(local.name().as_deref(), Some("s"));

        let lambda = find_first(root, kind_is::<JavaNode>(NodeKind::Lambda)).unwrap();
        assert_eq!(lambda.role(), NodeRole::Initializer);
        assert_eq!(lambda.parent(), Some(local));
    }

    #[test]
    fn test_declaration_names_are_not_variable_reads() {
        let tree = parse_java(PANEL, "Panel.java").unwrap();
        let root = JavaNode::root(&tree, PANEL);

        let reads: Vec<String> = collect_all(root, kind_is::<JavaNode>(NodeKind::VariableReference))
            .iter()
            .map(|n| n.text())
            .collect();
        assert!(!reads.contains(&"Panel".to_string()));
        assert!(!reads.contains(&"bind".to_string()));
        assert!(reads.contains(&"s".to_string()));
    }

    #[test]
    fn test_method_reference_receivers_are_referenced_types() {
        let tree = parse_java(PANEL, "Panel.java").unwrap();
        let root = JavaNode::root(&tree, PANEL);

        let references = collect_all(root, kind_is::<JavaNode>(NodeKind::MethodReference));
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].referenced_types(), vec!["SaveCommand".to_string()]);
        assert_eq!(references[1].referenced_types(), vec!["UndoCommand".to_string()]);

        let field = call(root, "other").children()[1];
        assert_eq!(field.kind(), NodeKind::FieldAccess);
    }

    #[test]
    fn test_referenced_types_are_deduplicated_in_order() {
        let source = "class A { void f() { Supplier<Cmd> s = () -> new Cmd(new Doc(), new Cmd(null)); } }";
        let tree = parse_java(source, "A.java").unwrap();
        let root = JavaNode::root(&tree, source);

        let local = find_first(root, kind_is::<JavaNode>(NodeKind::LocalVariable)).unwrap();
        let lambda = find_first(local, kind_is::<JavaNode>(NodeKind::Lambda)).unwrap();
        assert_eq!(
            lambda.referenced_types(),
            vec!["Cmd".to_string(), "Doc".to_string()]
        );

        let declaration = local.parent().unwrap();
        assert_eq!(
            declaration.referenced_types(),
            vec!["Supplier".to_string(), "Cmd".to_string(), "Doc".to_string()]
        );
    }

    #[test]
    fn test_casts_and_parentheses_are_transparent() {
        let source = r#"
class Menu {
    void bind() {
        buttonBinder((Supplier<Command>) () -> new SaveCommand()).bind();
        nodeBinder(((s))).bind();
        Supplier<Command> t = (Supplier<Command>) (() -> new UndoCommand());
    }
}
"#;
        let tree = parse_java(source, "Menu.java").unwrap();
        let root = JavaNode::root(&tree, source);

        let button = call(root, "buttonBinder");
        let cast_lambda = button.children()[0];
        assert_eq!(cast_lambda.kind(), NodeKind::Lambda);
        assert_eq!(cast_lambda.role(), NodeRole::Argument);
        assert_eq!(cast_lambda.parent(), Some(button));

        let node = call(root, "nodeBinder");
        let variable = node.children()[0];
        assert_eq!(variable.kind(), NodeKind::VariableReference);
        assert_eq!(variable.text(), "s");
        assert_eq!(variable.role(), NodeRole::Argument);
        assert_eq!(variable.parent(), Some(node));

        let local = find_first(root, kind_is::<JavaNode>(NodeKind::LocalVariable)).unwrap();
        let initializer = find_first(local, kind_is::<JavaNode>(NodeKind::Lambda)).unwrap();
        assert_eq!(initializer.role(), NodeRole::Initializer);
        assert_eq!(initializer.parent(), Some(local));
    }

    #[test]
    fn test_equality_is_per_tree_not_per_text() {
        let first = String::from("class A {}");
        let second = first.clone();
        let tree_a = parse_java(&first, "A.java").unwrap();
        let tree_b = parse_java(&second, "A.java").unwrap();

        let a = JavaNode::root(&tree_a, &first);
        assert_eq!(a, JavaNode::root(&tree_a, &first));
        assert_ne!(a, JavaNode::root(&tree_b, &second));
        // Same tree, different backing text
        assert_ne!(a, JavaNode::new(tree_a.root_node(), &second));
    }
}
