//! Overlapping tile extraction from approved grids
//!
//! Slides a square window over a grid in row-major order (y outer, x inner)
//! and records every window as a named tile. Edge signatures are derived from
//! the stored pattern on demand, so they always agree with it.

use crate::io::configuration::TILE_WEIGHT;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::{Direction, EdgeSignature};
use crate::spatial::grid::{Cell, Grid};
use ndarray::{Array2, Axis, Slice};

/// A square sub-window of a source grid
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Unique name, `{source}_tile_{index:04}`
    pub name: String,
    /// Name of the grid the tile was cut from
    pub source: String,
    /// Top-left sampling offset `[x, y]`
    pub position: [usize; 2],
    /// Cell contents of the window
    pub pattern: Array2<Cell>,
    /// Selection weight hint
    pub weight: f64,
}

impl Tile {
    /// Side length of the pattern
    pub fn size(&self) -> usize {
        self.pattern.nrows()
    }

    /// Boundary signature on the given side
    pub fn edge(&self, direction: Direction) -> EdgeSignature {
        direction.edge_of(&self.pattern)
    }

    /// Pattern rows as on-disk values
    pub fn pattern_values(&self) -> Vec<Vec<i8>> {
        self.pattern
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }
}

/// Number of window offsets along one axis of length `extent`
pub const fn tiles_per_axis(extent: usize, tile_size: usize, stride: usize) -> usize {
    if stride == 0 || tile_size == 0 || extent < tile_size {
        return 0;
    }
    (extent - tile_size) / stride + 1
}

/// Cut every `tile_size` window at multiples of `stride` out of `grid`
///
/// A grid smaller than the window yields no tiles.
///
/// # Errors
///
/// Returns an error if `tile_size` or `stride` is zero
pub fn sample_tiles(
    source: &str,
    grid: &Grid,
    tile_size: usize,
    stride: usize,
) -> Result<Vec<Tile>> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tile size must be at least 1",
        ));
    }
    if stride == 0 {
        return Err(invalid_parameter(
            "stride",
            &stride,
            &"stride must be at least 1",
        ));
    }

    let across = tiles_per_axis(grid.cols(), tile_size, stride);
    let down = tiles_per_axis(grid.rows(), tile_size, stride);
    let mut tiles = Vec::with_capacity(across * down);

    for ty in 0..down {
        for tx in 0..across {
            let (x, y) = (tx * stride, ty * stride);
            let pattern = grid
                .cells()
                .slice_axis(Axis(0), Slice::from(y..y + tile_size))
                .slice_axis(Axis(1), Slice::from(x..x + tile_size))
                .to_owned();
            tiles.push(Tile {
                name: format!("{source}_tile_{:04}", tiles.len()),
                source: source.to_string(),
                position: [x, y],
                pattern,
                weight: TILE_WEIGHT,
            });
        }
    }

    Ok(tiles)
}
