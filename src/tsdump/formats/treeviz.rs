//! Treeviz formatter
//!
//! One line per node, two spaces per level of nesting:
//!
//! ```text
//! module 0:0-2:0
//!   function "foo" 0:0-1:3
//!     identifier "foo" 0:9-0:12
//! ```

use super::registry::{FormatError, Formatter};
use crate::tsdump::ast::Node;

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str(root))
    }

    fn description(&self) -> &str {
        "One line per node, indented by depth"
    }
}

pub fn to_treeviz_str(root: &Node) -> String {
    let mut output = String::new();
    write_node(&mut output, root, 0);
    output
}

fn write_node(output: &mut String, node: &Node, level: usize) {
    output.push_str(&"  ".repeat(level));
    output.push_str(&node.kind);
    if let Some(name) = &node.name {
        output.push_str(&format!(" {:?}", name));
    }
    if let Some(span) = &node.span {
        output.push_str(&format!(" {}", span));
    }
    output.push('\n');

    for child in &node.children {
        write_node(output, child, level + 1);
    }
}
