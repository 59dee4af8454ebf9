// Hand-built trees for shapes a parser never produces (cycles, huge chains)

use crate::extractors::base::{NodeKind, NodeRole, SourceNode};

#[derive(Debug, Clone)]
pub(super) struct MockData {
    pub kind: NodeKind,
    pub role: NodeRole,
    pub name: Option<String>,
    pub text: String,
    pub types: Vec<String>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

#[derive(Debug, Default)]
pub(super) struct MockTree {
    nodes: Vec<MockData>,
}

impl MockTree {
    pub fn add(&mut self, kind: NodeKind, role: NodeRole, text: &str) -> usize {
        self.nodes.push(MockData {
            kind,
            role,
            name: None,
            text: text.to_string(),
            types: Vec::new(),
            parent: None,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    pub fn attach(&mut self, parent: usize, child: usize) {
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    pub fn set_name(&mut self, index: usize, name: &str) {
        self.nodes[index].name = Some(name.to_string());
    }

    pub fn set_types(&mut self, index: usize, types: &[&str]) {
        self.nodes[index].types = types.iter().map(|t| t.to_string()).collect();
    }

    pub fn node(&self, index: usize) -> MockNode<'_> {
        MockNode { tree: self, index }
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct MockNode<'a> {
    tree: &'a MockTree,
    pub index: usize,
}

impl PartialEq for MockNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl<'a> MockNode<'a> {
    fn data(&self) -> &'a MockData {
        &self.tree.nodes[self.index]
    }
}

impl<'a> SourceNode for MockNode<'a> {
    fn kind(&self) -> NodeKind {
        self.data().kind
    }

    fn role(&self) -> NodeRole {
        self.data().role
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|index| self.tree.node(index))
    }

    fn children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&index| self.tree.node(index))
            .collect()
    }

    fn referenced_types(&self) -> Vec<String> {
        self.data().types.clone()
    }

    fn name(&self) -> Option<String> {
        self.data().name.clone()
    }

    fn text(&self) -> String {
        self.data().text.clone()
    }
}
