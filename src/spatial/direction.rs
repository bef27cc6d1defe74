//! Cardinal directions and tile edge signatures

use crate::spatial::grid::Cell;
use ndarray::{Array2, ArrayView1};
use std::fmt;

/// Side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Top edge (first row)
    North,
    /// Bottom edge (last row)
    South,
    /// Right edge (last column)
    East,
    /// Left edge (first column)
    West,
}

impl Direction {
    /// All directions in output order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The side that touches this one on an adjacent tile
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Lowercase name used in tileset keys
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Position of this direction within [`Direction::ALL`]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// Extract this side's boundary row or column from a pattern
    pub fn edge_of(self, pattern: &Array2<Cell>) -> EdgeSignature {
        let (rows, cols) = pattern.dim();
        if rows == 0 || cols == 0 {
            return EdgeSignature(Vec::new());
        }
        let line: ArrayView1<'_, Cell> = match self {
            Self::North => pattern.row(0),
            Self::South => pattern.row(rows - 1),
            Self::West => pattern.column(0),
            Self::East => pattern.column(cols - 1),
        };
        EdgeSignature(line.to_vec())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell values along one side of a tile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSignature(pub Vec<Cell>);

impl EdgeSignature {
    /// Cells along the edge
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// On-disk values along the edge
    pub fn values(&self) -> Vec<i8> {
        self.0.iter().map(|c| c.value()).collect()
    }
}
