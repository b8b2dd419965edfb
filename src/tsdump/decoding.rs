//! Line decoder
//!
//! Turns one line of a tree-sitter dump into a [`DecodedLine`]. A dump line has
//! the shape:
//!
//! ```text
//! <indent><type>: <name> [<row>, <col>] - [<row>, <col>]
//! ```
//!
//! Decoding steps:
//!
//! 1. Depth is the count of leading whitespace characters divided by the
//!    indent width (2 in tree-sitter output); odd remainders are truncated.
//! 2. The trimmed line is split on its first colon into type and remainder.
//! 3. The trimmed remainder is split on its first space into name and
//!    position text.
//! 4. The position text goes through [`Span::parse`]. A failed parse keeps
//!    the line, without a span.
//!
//! Lines missing the colon or the space carry no node and decode to `None`.
//! Names containing spaces are not supported: the first space always ends the
//! name.

pub mod span;

pub use span::SpanParseError;

use crate::tsdump::ast::Span;

/// Width of one indentation level in tree-sitter dumps
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// One dump line, decoded. Consumed by the tree builder right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    pub depth: usize,
    pub kind: String,
    pub name: String,
    pub span: Option<Span>,
}

impl DecodedLine {
    pub fn new(depth: usize, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: kind.into(),
            name: name.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// Decodes dump lines with a fixed indent width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDecoder {
    indent_width: usize,
}

impl LineDecoder {
    /// A zero width is treated as 1.
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_width: indent_width.max(1),
        }
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Decode a single line, or `None` when it carries no node.
    pub fn decode(&self, line: &str) -> Option<DecodedLine> {
        let depth = leading_whitespace(line) / self.indent_width;

        let (type_token, remainder) = line.trim().split_once(':')?;
        let kind = type_token.trim();

        let (name_token, position_text) = remainder.trim().split_once(' ')?;
        let name = name_token.trim();

        Some(DecodedLine {
            depth,
            kind: kind.to_string(),
            name: name.to_string(),
            span: Span::parse(position_text),
        })
    }
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

/// Decode a line using the default indent width.
pub fn decode_line(line: &str) -> Option<DecodedLine> {
    LineDecoder::default().decode(line)
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
