//! Tree builder
//!
//! Rebuilds the tree from decoded lines using nothing but their depth.
//!
//! # Logic
//!
//! 1. The stack starts with a synthetic wrapper at depth -1, above any root.
//! 2. For each line, unwind: while its depth is <= the last indent and the
//!    stack holds more than the wrapper, close the top entry and decrement the
//!    last indent by one.
//! 3. The new node is pushed; it is attached to the entry below it (its
//!    nearest open ancestor) when it is closed.
//! 4. The last indent becomes the node's depth.
//!
//! Dedents may skip several levels at once (a deep leaf followed by a shallow
//! cousin), so the unwind loop keeps popping until the top is the right parent.
//!
//! Nodes are owned by the stack while open and moved into their parent's
//! children when closed, so the finished tree needs no parent pointers.

use crate::tsdump::ast::Node;
use crate::tsdump::decoding::{DecodedLine, LineDecoder, DEFAULT_INDENT_WIDTH};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, trace, warn};

/// Kind given to the synthetic wrapper sitting above the real root
const WRAPPER_KIND: &str = "<root>";

/// What to do with a non-blank line that decodes to no node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Drop the line and keep going
    #[default]
    Skip,
    /// Fail the conversion with [`BuildError::MalformedLine`]
    Strict,
}

/// Undecodable lines are skipped unless a caller opts into `Strict`.
pub const DEFAULT_LINE_POLICY: LinePolicy = LinePolicy::Skip;

/// Errors that can occur while building a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No line produced a node
    EmptyTree,
    /// A line carried no node under [`LinePolicy::Strict`] (1-based line number)
    MalformedLine { line_number: usize, content: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyTree => write!(f, "No parseable tree in source"),
            BuildError::MalformedLine {
                line_number,
                content,
            } => write!(f, "Malformed line {}: '{}'", line_number, content),
        }
    }
}

impl std::error::Error for BuildError {}

/// Incremental tree builder fed with decoded lines in source order
#[derive(Debug)]
pub struct TreeBuilder {
    stack: Vec<(Node, isize)>,
    last_indent: isize,
    pushed: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![(Node::new(WRAPPER_KIND), -1)],
            last_indent: -1,
            pushed: 0,
        }
    }

    /// Number of lines pushed so far
    pub fn len(&self) -> usize {
        self.pushed
    }

    pub fn is_empty(&self) -> bool {
        self.pushed == 0
    }

    pub fn push(&mut self, line: DecodedLine) {
        let mut node = Node::new(line.kind).with_name(line.name);
        node.span = line.span;
        let depth = line.depth as isize;

        while depth <= self.last_indent && self.stack.len() > 1 {
            self.close_top();
            self.last_indent -= 1;
        }
        trace!(depth, open = self.stack.len(), kind = %node.kind, "attaching node");

        self.stack.push((node, depth));
        self.last_indent = depth;
        self.pushed += 1;
    }

    /// Finish and return the first root node.
    ///
    /// Extra nodes that ended up at root level are dropped with a warning; use
    /// [`TreeBuilder::finish_all`] to keep them.
    pub fn finish(self) -> Result<Node, BuildError> {
        let mut roots = self.finish_all().into_iter();
        let root = roots.next().ok_or(BuildError::EmptyTree)?;

        let dropped = roots.count();
        if dropped > 0 {
            warn!(dropped, "ignoring extra root-level nodes after the first root");
        }
        Ok(root)
    }

    /// Finish and return every node attached directly to the wrapper.
    pub fn finish_all(mut self) -> Vec<Node> {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack
            .pop()
            .map(|(wrapper, _)| wrapper.children)
            .unwrap_or_default()
    }

    /// Pop the top entry into its parent's children. The wrapper is never popped.
    fn close_top(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        if let Some((node, _)) = self.stack.pop() {
            if let Some((parent, _)) = self.stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a tree from decoded lines in source order.
pub fn build_tree<I>(lines: I) -> Result<Node, BuildError>
where
    I: IntoIterator<Item = DecodedLine>,
{
    let mut builder = TreeBuilder::new();
    for line in lines {
        builder.push(line);
    }
    builder.finish()
}

/// Options for a whole-text conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub indent_width: usize,
    pub line_policy: LinePolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            line_policy: DEFAULT_LINE_POLICY,
        }
    }
}

/// Converts whole dump texts into trees
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Decode every line of `source` and build the tree.
    ///
    /// Blank lines are ignored under both policies.
    pub fn convert(&self, source: &str) -> Result<Node, BuildError> {
        let decoder = LineDecoder::new(self.options.indent_width);
        let mut builder = TreeBuilder::new();
        let mut skipped = 0usize;

        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decoder.decode(line) {
                Some(decoded) => builder.push(decoded),
                None => match self.options.line_policy {
                    LinePolicy::Skip => {
                        debug!(line_number = index + 1, content = line, "skipping line without a node");
                        skipped += 1;
                    }
                    LinePolicy::Strict => {
                        return Err(BuildError::MalformedLine {
                            line_number: index + 1,
                            content: line.to_string(),
                        });
                    }
                },
            }
        }

        debug!(nodes = builder.len(), skipped, "decoded dump");
        builder.finish()
    }
}

/// Convert a dump text with the default options.
pub fn convert(source: &str) -> Result<Node, BuildError> {
    Converter::default().convert(source)
}
