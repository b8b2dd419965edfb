//! Position and span types for source locations
//!
//! Tree-sitter reports locations as zero-based (row, column) points. A [`Span`]
//! is the half-open range between two of them, compared row-major.
//!
//! Spans serialize as four flat integer fields (`row_start`, `row_end`,
//! `col_start`, `col_end`) so that a node carrying one reads as
//! `{"type": ..., "row_start": 0, ...}` once flattened into it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) point in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A source range, start inclusive and end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "row_start")]
    pub start_row: usize,
    #[serde(rename = "row_end")]
    pub end_row: usize,
    #[serde(rename = "col_start")]
    pub start_col: usize,
    #[serde(rename = "col_end")]
    pub end_col: usize,
}

impl Span {
    /// Arguments follow the dump order: start row, start column, end row, end column.
    pub fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_row, self.start_col)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_row, self.end_col)
    }

    /// Whether start <= end in row-major order. The decoder never checks this.
    pub fn is_well_formed(&self) -> bool {
        self.start() <= self.end()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}
