//! Dump formatter
//!
//! Re-emits the tree in the tree-sitter dump grammar the decoder reads:
//!
//! ```text
//! <indent><type>: <name> [<row>, <col>] - [<row>, <col>]
//! ```
//!
//! Unnamed nodes print their kind as the name. Nodes without a span print no
//! position text, and such lines decode to no node, so only fully positioned
//! trees survive a dump/decode cycle.

use super::registry::{FormatError, Formatter};
use crate::tsdump::ast::{Node, Span};
use crate::tsdump::decoding::DEFAULT_INDENT_WIDTH;

pub struct DumpFormatter;

impl Formatter for DumpFormatter {
    fn name(&self) -> &str {
        "dump"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(to_dump_str(root))
    }

    fn description(&self) -> &str {
        "Tree-sitter dump text, as read by the decoder"
    }
}

pub fn to_dump_str(root: &Node) -> String {
    let mut output = String::new();
    write_node(&mut output, root, 0);
    output
}

/// Format one dump line without indentation or newline.
pub fn format_line(kind: &str, name: &str, span: Option<&Span>) -> String {
    match span {
        Some(span) => format!("{}: {} {}", kind, name, format_span(span)),
        None => format!("{}: {}", kind, name),
    }
}

/// `[r, c] - [r, c]`
pub fn format_span(span: &Span) -> String {
    format!(
        "[{}, {}] - [{}, {}]",
        span.start_row, span.start_col, span.end_row, span.end_col
    )
}

fn write_node(output: &mut String, node: &Node, level: usize) {
    output.push_str(&" ".repeat(level * DEFAULT_INDENT_WIDTH));
    output.push_str(&format_line(
        &node.kind,
        node.display_name(),
        node.span.as_ref(),
    ));
    output.push('\n');

    for child in &node.children {
        write_node(output, child, level + 1);
    }
}
