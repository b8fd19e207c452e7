//! Grid position representation
//!
//! A position addresses a single cell of a drawing by column and row.
//! `Null` stands for "no position" and is its own variant so it can
//! never be mistaken for a real coordinate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate, or the `Null` position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridPosition {
    /// No position
    #[default]
    Null,
    /// A concrete cell
    At { column: i32, row: i32 },
}

impl GridPosition {
    /// The origin
    pub const ZERO: GridPosition = GridPosition::At { column: 0, row: 0 };

    /// No position
    pub const NULL: GridPosition = GridPosition::Null;

    /// Create a position at the given column and row
    pub const fn new(column: i32, row: i32) -> Self {
        GridPosition::At { column, row }
    }

    /// Parse the `"column,row"` form.
    ///
    /// Brackets are stripped. Anything that does not split into exactly two
    /// numeric tokens yields `Null` instead of an error.
    pub fn parse(serialized: &str) -> Self {
        let trimmed: String = serialized
            .chars()
            .filter(|c| *c != '[' && *c != ']')
            .collect();
        if trimmed.trim().is_empty() {
            return GridPosition::Null;
        }

        let tokens: Vec<&str> = trimmed.split(',').collect();
        if tokens.len() != 2 {
            return GridPosition::Null;
        }

        match (tokens[0].trim().parse(), tokens[1].trim().parse()) {
            (Ok(column), Ok(row)) => GridPosition::new(column, row),
            _ => GridPosition::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GridPosition::Null)
    }

    pub fn column(&self) -> Option<i32> {
        match self {
            GridPosition::At { column, .. } => Some(*column),
            GridPosition::Null => None,
        }
    }

    pub fn row(&self) -> Option<i32> {
        match self {
            GridPosition::At { row, .. } => Some(*row),
            GridPosition::Null => None,
        }
    }

    /// Both coordinates, if this is not `Null`
    pub fn coords(&self) -> Option<(i32, i32)> {
        match self {
            GridPosition::At { column, row } => Some((*column, *row)),
            GridPosition::Null => None,
        }
    }

    /// Component-wise minimum. `Null` on either side yields the other operand.
    pub fn min(self, other: GridPosition) -> GridPosition {
        match (self.coords(), other.coords()) {
            (_, None) => self,
            (None, _) => other,
            (Some((c1, r1)), Some((c2, r2))) => GridPosition::new(c1.min(c2), r1.min(r2)),
        }
    }

    /// Component-wise maximum. `Null` on either side yields the other operand.
    pub fn max(self, other: GridPosition) -> GridPosition {
        match (self.coords(), other.coords()) {
            (_, None) => self,
            (None, _) => other,
            (Some((c1, r1)), Some((c2, r2))) => GridPosition::new(c1.max(c2), r1.max(r2)),
        }
    }

    /// Add another position as an offset. Null stays Null.
    ///
    /// Arithmetic on positions saturates at the `i32` limits.
    pub fn plus(self, offset: GridPosition) -> GridPosition {
        match (self.coords(), offset.coords()) {
            (Some((c1, r1)), Some((c2, r2))) => {
                GridPosition::new(c1.saturating_add(c2), r1.saturating_add(r2))
            }
            _ => GridPosition::Null,
        }
    }

    /// Subtract another position. Null stays Null.
    pub fn minus(self, offset: GridPosition) -> GridPosition {
        match (self.coords(), offset.coords()) {
            (Some((c1, r1)), Some((c2, r2))) => {
                GridPosition::new(c1.saturating_sub(c2), r1.saturating_sub(r2))
            }
            _ => GridPosition::Null,
        }
    }

    /// Move by `delta` rows
    pub fn offset_row(self, delta: i32) -> GridPosition {
        match self {
            GridPosition::At { column, row } => GridPosition::new(column, row.saturating_add(delta)),
            GridPosition::Null => GridPosition::Null,
        }
    }

    /// Move by `delta` columns
    pub fn offset_column(self, delta: i32) -> GridPosition {
        match self {
            GridPosition::At { column, row } => GridPosition::new(column.saturating_add(delta), row),
            GridPosition::Null => GridPosition::Null,
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridPosition::At { column, row } => write!(f, "{},{}", column, row),
            GridPosition::Null => write!(f, "NaN,NaN"),
        }
    }
}

impl From<(i32, i32)> for GridPosition {
    fn from((column, row): (i32, i32)) -> Self {
        GridPosition::new(column, row)
    }
}
