use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location of a node.
///
/// Line and column values are 1-based. A node never spans lines in the
/// grammar's token model, so a single line plus a column range is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            line,
            start_col,
            end_col,
        }
    }

    /// Create a zero-width position at a single column.
    pub fn point(line: u32, col: u32) -> Self {
        Self::new(line, col, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.start_col)
    }
}
