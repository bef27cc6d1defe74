//! Tests for the backtracking corridor maze

#[cfg(test)]
mod tests {
    use crate::floor_is_connected;
    use mazetile::generation::backtracker::{carve_backtracker_maze, carve_rooms_in_maze};
    use mazetile::generation::random::MazeRng;
    use mazetile::spatial::grid::{Cell, Grid};

    // Tests every even lattice cell is visited and odd-odd cells stay wall
    // Verified by stopping at the first dead end
    #[test]
    fn test_maze_covers_lattice() {
        let mut rng = MazeRng::new(21);
        let mut grid = Grid::square(32);
        carve_backtracker_maze(&mut grid, &mut rng);

        for y in (0..32).step_by(2) {
            for x in (0..32).step_by(2) {
                assert_eq!(grid.get(x, y), Some(Cell::Floor), "({x}, {y}) unvisited");
            }
        }
        for y in (1..32).step_by(2) {
            for x in (1..32).step_by(2) {
                assert_eq!(grid.get(x, y), Some(Cell::Wall));
            }
        }
    }

    // Tests the maze is a spanning tree: connected with exactly n - 1 links
    #[test]
    fn test_maze_is_perfect() {
        let mut rng = MazeRng::new(3);
        let mut grid = Grid::square(32);
        carve_backtracker_maze(&mut grid, &mut rng);

        let lattice = 16 * 16;
        assert!(floor_is_connected(&grid));
        assert_eq!(grid.floor_count(), lattice + (lattice - 1));
    }

    // Tests rooms add floor on top of the maze
    #[test]
    fn test_rooms_in_maze() {
        let mut rng = MazeRng::new(3);
        let mut grid = Grid::square(64);
        carve_backtracker_maze(&mut grid, &mut rng);
        let before = grid.floor_count();

        carve_rooms_in_maze(&mut grid, &mut rng, 6);
        assert!(grid.floor_count() > before);
    }

    // Tests degenerate grids don't panic
    #[test]
    fn test_tiny_grids() {
        let mut rng = MazeRng::new(0);
        let mut empty = Grid::new(0, 0);
        carve_backtracker_maze(&mut empty, &mut rng);

        let mut single = Grid::square(1);
        carve_backtracker_maze(&mut single, &mut rng);
        assert_eq!(single.floor_count(), 1);
    }
}
