//! Mini-maze infill for wall-heavy blocks

use crate::generation::corridors::carve_segment;
use crate::generation::random::MazeRng;
use crate::spatial::grid::Grid;

/// Side length of the blocks inspected for infill
pub const BLOCK_SIZE: i32 = 16;
/// Blocks with fewer floor cells than this count as empty
pub const SPARSE_BLOCK_FLOOR: usize = 20;
/// Probability that an empty block receives a mini-maze
pub const INFILL_CHANCE: f64 = 0.4;

/// Scatter short straight segments inside a `width × height` region
pub fn carve_mini_maze(
    grid: &mut Grid,
    rng: &mut MazeRng,
    origin: (i32, i32),
    width: i32,
    height: i32,
) {
    let segments = rng.range(4, 10);
    for _ in 0..segments {
        let x = origin.0 + rng.range(0, width - 1);
        let y = origin.1 + rng.range(0, height - 1);
        let length = rng.range(2, 6);
        let horizontal = rng.chance(0.5);
        carve_segment(grid, x, y, length, horizontal);
    }
}

/// Give some mostly-wall blocks a mini-maze
pub fn fill_empty_areas(grid: &mut Grid, rng: &mut MazeRng) {
    let (cols, rows) = (grid.cols() as i32, grid.rows() as i32);
    for y in (0..rows).step_by(BLOCK_SIZE as usize) {
        for x in (0..cols).step_by(BLOCK_SIZE as usize) {
            if grid.count_floor_in(x, y, BLOCK_SIZE, BLOCK_SIZE) < SPARSE_BLOCK_FLOOR
                && rng.chance(INFILL_CHANCE)
            {
                carve_mini_maze(grid, rng, (x, y), BLOCK_SIZE, BLOCK_SIZE);
            }
        }
    }
}
