//! Corridor primitives shared by the carving strategies

use crate::generation::random::MazeRng;
use crate::spatial::grid::{Cell, Grid};

/// Corridor widths and their selection weights (narrow hallways dominate)
pub const CORRIDOR_WIDTHS: [(i32, f64); 3] = [(1, 0.7), (2, 0.25), (3, 0.05)];

/// Corridors per cell when scattering extra connections
pub const RANDOM_CORRIDOR_DENSITY: f64 = 0.1;

/// Pick a corridor width by weight
pub fn corridor_width(rng: &mut MazeRng) -> i32 {
    let weights = CORRIDOR_WIDTHS.map(|(_, w)| w);
    CORRIDOR_WIDTHS
        .get(rng.weighted_choice(&weights))
        .map_or(1, |&(width, _)| width)
}

/// Carve a straight run of `length` cells from `(x, y)`
pub fn carve_segment(grid: &mut Grid, x: i32, y: i32, length: i32, horizontal: bool) {
    for step in 0..length {
        if horizontal {
            grid.set(x + step, y, Cell::Floor);
        } else {
            grid.set(x, y + step, Cell::Floor);
        }
    }
}

fn carve_horizontal(grid: &mut Grid, x1: i32, x2: i32, y: i32, width: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        for w in 0..width {
            grid.set(x, y + w, Cell::Floor);
        }
    }
}

fn carve_vertical(grid: &mut Grid, y1: i32, y2: i32, x: i32, width: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        for w in 0..width {
            grid.set(x + w, y, Cell::Floor);
        }
    }
}

/// Carve an L-shaped corridor of random width between two points
///
/// Half the time the horizontal leg runs along `y1` and the vertical leg down
/// `x2`; otherwise the vertical leg runs down `x1` and the horizontal leg
/// along `y2`.
pub fn carve_corridor(grid: &mut Grid, rng: &mut MazeRng, from: (i32, i32), to: (i32, i32)) {
    let width = corridor_width(rng);
    let ((x1, y1), (x2, y2)) = (from, to);

    if rng.chance(0.5) {
        carve_horizontal(grid, x1, x2, y1, width);
        carve_vertical(grid, y1, y2, x2, width);
    } else {
        carve_vertical(grid, y1, y2, x1, width);
        carve_horizontal(grid, x1, x2, y2, width);
    }
}

/// Scatter corridors between random points to raise connectivity
pub fn add_random_corridors(grid: &mut Grid, rng: &mut MazeRng, density: f64) {
    let count = (grid.len() as f64 * density / 20.0) as usize;
    let max_x = grid.cols() as i32 - 1;
    let max_y = grid.rows() as i32 - 1;

    for _ in 0..count {
        let x1 = rng.range(0, max_x);
        let y1 = rng.range(0, max_y);
        let x2 = rng.range(0, max_x);
        let y2 = rng.range(0, max_y);
        carve_corridor(grid, rng, (x1, y1), (x2, y2));
    }
}
