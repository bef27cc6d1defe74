//! Tests for room placement and connection

#[cfg(test)]
mod tests {
    use crate::floor_is_connected;
    use mazetile::generation::random::MazeRng;
    use mazetile::generation::rooms::{
        ROOM_MARGIN, Room, SizeClass, carve_random_room, connect_rooms, place_varied_rooms,
    };
    use mazetile::spatial::grid::{Cell, Grid};

    // Tests size-class weights form a distribution and ranges are non-empty
    #[test]
    fn test_size_classes() {
        let total: f64 = SizeClass::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
        for class in SizeClass::ALL {
            let (low, high) = class.side_range();
            assert!(low < high);
        }
    }

    // Tests a room is carved inside the margin with its center on floor
    #[test]
    fn test_carve_random_room() {
        let mut rng = MazeRng::new(4);
        for _ in 0..50 {
            let mut grid = Grid::square(64);
            let room = carve_random_room(&mut grid, &mut rng, 6, 4);

            let (cx, cy) = room.center();
            assert_eq!(grid.get(cx, cy), Some(Cell::Floor));
            assert_eq!(grid.floor_count(), 24);
            assert!(cx - 3 >= ROOM_MARGIN && cy - 2 >= ROOM_MARGIN);
            assert!(cx - 3 + 6 <= 64 - ROOM_MARGIN);
        }
    }

    // Tests rooms larger than the grid are clipped instead of panicking
    #[test]
    fn test_oversized_room_is_clipped() {
        let mut rng = MazeRng::new(4);
        let mut grid = Grid::square(10);
        carve_random_room(&mut grid, &mut rng, 30, 30);

        assert_eq!(grid.get(0, 0), Some(Cell::Wall));
        assert_eq!(grid.get(9, 9), Some(Cell::Floor));
    }

    // Tests the requested number of rooms is placed
    #[test]
    fn test_place_varied_rooms() {
        let mut rng = MazeRng::new(12);
        let mut grid = Grid::square(128);
        let rooms = place_varied_rooms(&mut grid, &mut rng, 14);

        assert_eq!(rooms.len(), 14);
        for room in &rooms {
            assert!(room.width >= 3 && room.width < 35);
            assert!(room.height >= 3 && room.height < 35);
            assert_eq!(grid.get(room.center_x, room.center_y), Some(Cell::Floor));
        }
    }

    // Tests connected rooms form a single floor region
    // Verified by connecting only every other pair
    #[test]
    fn test_connect_rooms_joins_everything() {
        for seed in 0..10 {
            let mut rng = MazeRng::new(seed);
            let mut grid = Grid::square(128);
            let rooms = place_varied_rooms(&mut grid, &mut rng, 9);
            connect_rooms(&mut grid, &mut rng, &rooms);

            assert!(floor_is_connected(&grid), "seed {seed} left rooms apart");
        }
    }

    // Tests fewer than two rooms leaves the grid alone
    #[test]
    fn test_connect_single_room() {
        let mut rng = MazeRng::new(1);
        let mut grid = Grid::square(16);
        let room = Room {
            center_x: 8,
            center_y: 8,
            width: 1,
            height: 1,
        };
        connect_rooms(&mut grid, &mut rng, &[room]);
        assert_eq!(grid.floor_count(), 0);
    }
}
