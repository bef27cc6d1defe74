//! Tests for the directional edge-compatibility index

#[cfg(test)]
mod tests {
    use crate::grid_from_rows;
    use mazetile::analysis::compatibility::{CompatibilityMap, TileId};
    use mazetile::generation::MazeGenerator;
    use mazetile::spatial::direction::Direction;
    use mazetile::spatial::tiles::{Tile, sample_tiles};

    fn maze_tiles(seed: u64, stride: usize) -> Vec<Tile> {
        let maze = MazeGenerator::new(seed).generate().unwrap();
        sample_tiles(&maze.name, &maze.grid, 8, stride).unwrap()
    }

    // Tests one key per tile per direction
    #[test]
    fn test_key_count() {
        let tiles = maze_tiles(1, 8);
        let map = CompatibilityMap::build(&tiles);

        assert_eq!(map.tile_count(), tiles.len());
        assert_eq!(map.len(), tiles.len() * 4);
        assert_eq!(map.keys().count(), map.len());
        assert_eq!(
            map.keys().take(4).map(|(_, d)| d).collect::<Vec<_>>(),
            Direction::ALL.to_vec()
        );
    }

    // Tests B in A's north list exactly when A is in B's south list, and so on
    // Verified by looking up the same-direction index instead of the opposite
    #[test]
    fn test_symmetry() {
        let tiles = maze_tiles(2, 8);
        let map = CompatibilityMap::build(&tiles);

        for a in 0..tiles.len() {
            for direction in Direction::ALL {
                for &b in map.compatible(TileId(a), direction) {
                    assert!(
                        map.compatible(b, direction.opposite()).contains(&TileId(a)),
                        "{} is {direction} of {} but not the reverse",
                        tiles[b.0].name,
                        tiles[a].name
                    );
                }
            }
        }
    }

    // Tests each list is exactly the tiles with a matching opposite edge, in pool order
    // Verified by deduplicating lists through a HashSet
    #[test]
    fn test_completeness_against_pairwise_scan() {
        let tiles = maze_tiles(3, 8);
        let map = CompatibilityMap::build(&tiles);

        for (a, tile) in tiles.iter().enumerate() {
            for direction in Direction::ALL {
                let edge = tile.edge(direction);
                let expected: Vec<TileId> = tiles
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| other.edge(direction.opposite()) == edge)
                    .map(|(b, _)| TileId(b))
                    .collect();

                assert_eq!(map.compatible(TileId(a), direction), expected.as_slice());
            }
        }
    }

    // Tests matching works on a hand-built pool, including self-compatibility
    #[test]
    fn test_small_pool() {
        let grid = grid_from_rows(&["..#.", ".##.", "#..#", "...."]);
        let tiles = sample_tiles("g", &grid, 2, 2).unwrap();
        let map = CompatibilityMap::build(&tiles);

        // t0 = [.. .#], t1 = [#. #.], t2 = [#. ..], t3 = [.# ..]
        assert_eq!(map.compatible(TileId(2), Direction::North), &[TileId(1)]);
        assert_eq!(
            map.compatible(TileId(1), Direction::South),
            &[TileId(1), TileId(2)]
        );
        assert_eq!(map.compatible(TileId(0), Direction::South), &[TileId(3)]);
        assert_eq!(map.compatible(TileId(3), Direction::East), &[TileId(2)]);
        assert!(map.compatible(TileId(1), Direction::West).is_empty());
    }

    // Tests a unique edge yields an empty list and unknown tiles are harmless
    #[test]
    fn test_unique_edges_and_unknown_tiles() {
        let grid = grid_from_rows(&["....", "####"]);
        let tiles = sample_tiles("g", &grid, 2, 2).unwrap();
        let map = CompatibilityMap::build(&tiles);

        assert_eq!(tiles.len(), 2);
        assert!(map.compatible(TileId(0), Direction::North).is_empty());
        assert_eq!(
            map.compatible(TileId(0), Direction::East),
            &[TileId(0), TileId(1)]
        );
        assert!(map.compatible(TileId(99), Direction::East).is_empty());
        assert_eq!(map.distinct_edges(Direction::North), 1);
        assert_eq!(map.distinct_edges(Direction::West), 1);
    }

    // Tests an empty pool
    #[test]
    fn test_empty_pool() {
        let map = CompatibilityMap::build(&[]);
        assert!(map.is_empty());
        assert_eq!(map.keys().count(), 0);
    }
}
