/// Helper functions for Java type declarations
/// Handles supertype lists and type-name normalisation
use tree_sitter::Node;

/// Simple name of a possibly qualified or generic type (`a.b.Foo<T>[]` -> `Foo`)
pub fn simple_type_name(text: &str) -> &str {
    let base = text.split('<').next().unwrap_or(text).trim();
    let base = base.trim_end_matches("[]").trim();
    base.rsplit('.').next().unwrap_or(base).trim()
}

fn node_text<'a>(source: &'a str, node: &Node) -> &'a str {
    source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or_default()
}

/// Simple names of the types listed in a `type_list` child of `wrapper`
fn type_list_names(source: &str, wrapper: Node) -> Vec<String> {
    wrapper
        .children(&mut wrapper.walk())
        .find(|c| c.kind() == "type_list")
        .map(|type_list_node| {
            type_list_node
                .children(&mut type_list_node.walk())
                .filter(|c| {
                    matches!(
                        c.kind(),
                        "type_identifier" | "generic_type" | "scoped_type_identifier"
                    )
                })
                .map(|c| simple_type_name(node_text(source, &c)).to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Extract superclass from a class declaration node
pub(super) fn extract_superclass(source: &str, node: Node) -> Option<String> {
    let superclass_node = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "superclass")?;

    let type_node = superclass_node
        .children(&mut superclass_node.walk())
        .find(|c| {
            matches!(
                c.kind(),
                "type_identifier" | "generic_type" | "scoped_type_identifier"
            )
        })?;

    Some(simple_type_name(node_text(source, &type_node)).to_string())
}

/// Extract implemented interfaces from a class/enum/record
pub(super) fn extract_implemented_interfaces(source: &str, node: Node) -> Vec<String> {
    node.children(&mut node.walk())
        .find(|c| c.kind() == "super_interfaces")
        .map(|interfaces_node| type_list_names(source, interfaces_node))
        .unwrap_or_default()
}

/// Extract extended interfaces from an interface declaration
pub(super) fn extract_extended_interfaces(source: &str, node: Node) -> Vec<String> {
    node.children(&mut node.walk())
        .find(|c| c.kind() == "extends_interfaces")
        .map(|extends_node| type_list_names(source, extends_node))
        .unwrap_or_default()
}
