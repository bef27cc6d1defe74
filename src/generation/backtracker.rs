//! Depth-first backtracking maze on the even-cell lattice

use crate::generation::random::MazeRng;
use crate::generation::rooms::carve_random_room;
use crate::spatial::grid::{Cell, Grid};
use bitvec::prelude::*;

const STEPS: [(i32, i32); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// Carve a perfect maze with an explicit stack
///
/// Starts at a random even coordinate, repeatedly steps two cells to an
/// unvisited neighbour and opens the cell in between, backing up when the
/// current cell has no unvisited neighbours left.
pub fn carve_backtracker_maze(grid: &mut Grid, rng: &mut MazeRng) {
    let (cols, rows) = (grid.cols() as i32, grid.rows() as i32);
    if cols == 0 || rows == 0 {
        return;
    }

    let mut visited = bitvec![0; grid.len()];
    let slot = |x: i32, y: i32| (y * cols + x) as usize;

    let start_x = rng.range(0, cols / 2 - 1) * 2;
    let start_y = rng.range(0, rows / 2 - 1) * 2;

    let mut stack = vec![(start_x, start_y)];
    visited.set(slot(start_x, start_y), true);
    grid.set(start_x, start_y, Cell::Floor);

    let mut neighbours = Vec::with_capacity(STEPS.len());
    while let Some(&(x, y)) = stack.last() {
        neighbours.clear();
        for (dx, dy) in STEPS {
            let (nx, ny) = (x + dx, y + dy);
            if grid.contains(nx, ny) && !visited.get(slot(nx, ny)).is_some_and(|b| *b) {
                neighbours.push((nx, ny, dx, dy));
            }
        }

        if neighbours.is_empty() {
            stack.pop();
            continue;
        }

        if let Some(&(nx, ny, dx, dy)) = neighbours.get(rng.index(neighbours.len())) {
            grid.set(nx, ny, Cell::Floor);
            grid.set(x + dx / 2, y + dy / 2, Cell::Floor);
            visited.set(slot(nx, ny), true);
            stack.push((nx, ny));
        }
    }
}

/// Open `count` plain rooms on top of an existing maze
pub fn carve_rooms_in_maze(grid: &mut Grid, rng: &mut MazeRng, count: usize) {
    for _ in 0..count {
        let width = rng.range(5, 15);
        let height = rng.range(5, 15);
        carve_random_room(grid, rng, width, height);
    }
}
