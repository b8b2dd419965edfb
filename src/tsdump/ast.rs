//! The recovered syntax tree
//!
//! A [`Node`] is one element of the tree-sitter tree: its grammar kind, the
//! optional field/name the dump printed next to it, the source [`Span`] it
//! covers and its children, in source order.

pub mod node;
pub mod range;

pub use node::{Node, NodeIter};
pub use range::{Position, Span};
