//! Tree node
//!
//! Children are owned by their parent; there are no back references. The
//! builder tracks ancestry only while the tree is under construction.

use super::range::Span;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Grammar node kind, serialized as `type`
    #[serde(rename = "type")]
    pub kind: String,
    /// Present only when the dump distinguished a field/name from the kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absent when the position text did not parse
    #[serde(flatten)]
    pub span: Option<Span>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            span: None,
            children: Vec::new(),
        }
    }

    /// Set the name, unless it only repeats the kind.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name == self.kind { None } else { Some(name) };
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// The name as printed in the dump: the explicit name, or the kind.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.kind)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order traversal, including `self`
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Height of the subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// All nodes of the given kind, in pre-order
    pub fn find_by_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.iter().filter(move |node| node.kind == kind)
    }
}

/// Pre-order iterator over a subtree
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
