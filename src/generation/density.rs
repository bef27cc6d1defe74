//! Floor density normalization
//!
//! No carving strategy hits the floor band on its own; this pass is what
//! guarantees it. The floor share is re-measured after every edit, so the
//! loop stops as soon as the grid enters the band. Each edit moves at most
//! four cells, far less than the width of any sensible band, so a grid that
//! starts below the band can't jump past its top and vice versa.

use crate::generation::corridors::carve_segment;
use crate::generation::random::MazeRng;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::grid::{Cell, Grid};

/// Neighbour order tried when thickening a new wall, as `(dx, dy)`
const THICKEN_ORDER: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Probability that a new wall cell grows into a two-cell patch
pub const THICKEN_CHANCE: f64 = 0.3;

/// Inclusive floor-share band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorBand {
    /// Lowest acceptable floor share
    pub min: f64,
    /// Highest acceptable floor share
    pub max: f64,
}

impl FloorBand {
    /// Build a band, rejecting inverted or out-of-range bounds
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 <= min <= max <= 1`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(invalid_parameter(
                "floor_band",
                &format!("{min}..={max}"),
                &"bounds must satisfy 0 <= min <= max <= 1",
            ));
        }
        Ok(Self { min, max })
    }

    /// Whether `ratio` lies inside the band
    pub fn contains(&self, ratio: f64) -> bool {
        (self.min..=self.max).contains(&ratio)
    }

    fn floor_bounds(&self, cells: usize) -> (usize, usize) {
        let total = cells as f64;
        ((self.min * total).ceil() as usize, (self.max * total).floor() as usize)
    }
}

/// Push the grid's floor share into `band`
///
/// Below the band, short random corridors are punched into the interior.
/// Above it, random interior floor cells become wall, sometimes together with
/// one neighbouring floor cell.
///
/// # Errors
///
/// Returns an error if the grid is too small to have an interior, or if the
/// band is still missed after `attempts_per_cell` edits per grid cell
pub fn normalize_floor_density(
    grid: &mut Grid,
    rng: &mut MazeRng,
    band: FloorBand,
    attempts_per_cell: usize,
) -> Result<()> {
    let (low, high) = band.floor_bounds(grid.len());
    if grid.floor_count() >= low && grid.floor_count() <= high {
        return Ok(());
    }

    let (cols, rows) = (grid.cols() as i32, grid.rows() as i32);
    if cols < 3 || rows < 3 {
        return Err(computation_error(
            "floor normalization",
            &format!("{cols}x{rows} grid has no interior to edit"),
        ));
    }

    let budget = grid.len().saturating_mul(attempts_per_cell);
    for _ in 0..budget {
        if grid.floor_count() < low {
            let x = rng.range(1, cols - 2);
            let y = rng.range(1, rows - 2);
            let length = rng.range(2, 5);
            let horizontal = rng.chance(0.5);
            carve_segment(grid, x, y, length, horizontal);
        } else if grid.floor_count() > high {
            let x = rng.range(1, cols - 2);
            let y = rng.range(1, rows - 2);
            if grid.set(x, y, Cell::Wall) && rng.chance(THICKEN_CHANCE) {
                thicken_wall(grid, x, y);
            }
        } else {
            return Ok(());
        }
    }

    if grid.floor_count() >= low && grid.floor_count() <= high {
        return Ok(());
    }
    Err(computation_error(
        "floor normalization",
        &format!(
            "floor share {:.3} outside {:.2}..={:.2} after {budget} attempts",
            grid.floor_ratio(),
            band.min,
            band.max
        ),
    ))
}

fn thicken_wall(grid: &mut Grid, x: i32, y: i32) {
    for (dx, dy) in THICKEN_ORDER {
        if grid.get(x + dx, y + dy) == Some(Cell::Floor) {
            grid.set(x + dx, y + dy, Cell::Wall);
            return;
        }
    }
}
