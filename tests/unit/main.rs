//! Unit tests mirroring the `src` tree, one file per source file

mod analysis;

use mazetile::spatial::grid::{Cell, Grid};

/// Build a grid from rows of `#` (wall) and `.` (floor)
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut grid = Grid::new(height, width);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '.' {
                grid.set(x as i32, y as i32, Cell::Floor);
            }
        }
    }
    grid
}

/// Whether every floor cell is reachable from every other through 4-neighbours
pub fn floor_is_connected(grid: &Grid) -> bool {
    let mut start = None;
    for y in 0..grid.rows() as i32 {
        for x in 0..grid.cols() as i32 {
            if start.is_none() && grid.get(x, y) == Some(Cell::Floor) {
                start = Some((x, y));
            }
        }
    }
    let Some(start) = start else {
        return true;
    };

    let mut seen = vec![false; grid.len()];
    let slot = |x: i32, y: i32| y as usize * grid.cols() + x as usize;
    let mut stack = vec![start];
    seen[slot(start.0, start.1)] = true;
    let mut reached = 1;
    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if grid.get(nx, ny) == Some(Cell::Floor) && !seen[slot(nx, ny)] {
                seen[slot(nx, ny)] = true;
                reached += 1;
                stack.push((nx, ny));
            }
        }
    }
    reached == grid.floor_count()
}
