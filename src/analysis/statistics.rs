//! Floor/wall statistics of a grid

use crate::spatial::grid::Grid;

/// Cell counts and percentages for a generated grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    /// Number of FLOOR cells
    pub floor_count: usize,
    /// Number of WALL cells
    pub wall_count: usize,
    /// FLOOR share in percent
    pub floor_pct: f64,
    /// WALL share in percent
    pub wall_pct: f64,
}

impl GridStats {
    /// Measure a grid
    pub fn of(grid: &Grid) -> Self {
        let total = grid.len().max(1) as f64;
        let floor_count = grid.floor_count();
        let wall_count = grid.wall_count();
        Self {
            floor_count,
            wall_count,
            floor_pct: floor_count as f64 / total * 100.0,
            wall_pct: wall_count as f64 / total * 100.0,
        }
    }
}
