//! # tsdump
//!
//! Converts the indentation-based syntax tree dump printed by tree-sitter into
//! a nested tree of typed nodes with source positions.
//!
//! File Layout
//!
//! src/tsdump
//!   ├── ast          The recovered tree (Node) and position spans
//!   ├── decoding     Line decoder: one dump line into a DecodedLine
//!   ├── building     Tree builder: DecodedLines into a rooted Node
//!   ├── formats      Serializers for the recovered tree (json, yaml, treeviz, dump)
//!   ├── config       Layered configuration (embedded defaults + user files)
//!   └── processor    File in, formatted text out, with the boundary error taxonomy
//!
//! The input looks like:
//!
//! ```text
//! module: module [0, 0] - [2, 0]
//!   function: foo [0, 0] - [1, 3]
//!     identifier: foo [0, 9] - [0, 12]
//! ```

pub mod tsdump;

pub use tsdump::ast::{Node, Position, Span};
pub use tsdump::building::{convert, BuildError, ConvertOptions, Converter, LinePolicy};
pub use tsdump::decoding::{decode_line, DecodedLine};
