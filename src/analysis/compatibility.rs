//! Directional edge-compatibility index over a tile pool
//!
//! Two tiles may sit side by side when the touching edges are identical: a
//! tile's north edge must equal its neighbour's south edge, its east edge its
//! neighbour's west edge, and so on. Tiles are grouped by exact edge value per
//! direction in one pass, and every `(tile, direction)` key points at the group
//! of the opposite direction that shares its edge. Construction is O(T) and
//! groups are stored once no matter how many keys reference them.

use crate::spatial::direction::{Direction, EdgeSignature};
use crate::spatial::tiles::Tile;
use std::collections::HashMap;

/// Index of a tile within the pooled tile list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

/// Composite key of the compatibility map
pub type CompatibilityKey = (TileId, Direction);

/// Tiles grouped by the exact edge they show on one side
#[derive(Debug, Default, Clone)]
struct EdgeIndex {
    groups: Vec<Vec<TileId>>,
    lookup: HashMap<EdgeSignature, usize>,
}

impl EdgeIndex {
    fn insert(&mut self, edge: EdgeSignature, tile: TileId) {
        let next = self.groups.len();
        let group = *self.lookup.entry(edge).or_insert(next);
        if group == next {
            self.groups.push(Vec::new());
        }
        if let Some(members) = self.groups.get_mut(group) {
            members.push(tile);
        }
    }

    fn group_of(&self, edge: &EdgeSignature) -> Option<usize> {
        self.lookup.get(edge).copied()
    }

    fn members(&self, group: usize) -> &[TileId] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Which tiles may be placed next to which, per side
#[derive(Debug, Clone, Default)]
pub struct CompatibilityMap {
    indexes: [EdgeIndex; 4],
    entries: HashMap<CompatibilityKey, Option<usize>>,
    tile_count: usize,
}

impl CompatibilityMap {
    /// Index every tile of the pool
    ///
    /// Compatible lists keep the order tiles appear in `tiles`.
    pub fn build(tiles: &[Tile]) -> Self {
        let mut indexes: [EdgeIndex; 4] = Default::default();

        for (i, tile) in tiles.iter().enumerate() {
            for direction in Direction::ALL {
                if let Some(index) = indexes.get_mut(direction.ordinal()) {
                    index.insert(tile.edge(direction), TileId(i));
                }
            }
        }

        let mut entries = HashMap::with_capacity(tiles.len() * Direction::ALL.len());
        for (i, tile) in tiles.iter().enumerate() {
            for direction in Direction::ALL {
                let group = indexes
                    .get(direction.opposite().ordinal())
                    .and_then(|index| index.group_of(&tile.edge(direction)));
                entries.insert((TileId(i), direction), group);
            }
        }

        Self {
            indexes,
            entries,
            tile_count: tiles.len(),
        }
    }

    /// Tiles that may sit on `direction`'s side of `tile`
    ///
    /// Unknown tiles and unique edges both give an empty list.
    pub fn compatible(&self, tile: TileId, direction: Direction) -> &[TileId] {
        let group = self.entries.get(&(tile, direction)).copied().flatten();
        match (group, self.indexes.get(direction.opposite().ordinal())) {
            (Some(group), Some(index)) => index.members(group),
            _ => &[],
        }
    }

    /// Number of `(tile, direction)` keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tiles indexed
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Number of distinct edge values seen on one side
    pub fn distinct_edges(&self, direction: Direction) -> usize {
        self.indexes
            .get(direction.ordinal())
            .map_or(0, |index| index.groups.len())
    }

    /// All keys in tile order, then north, south, east, west
    pub fn keys(&self) -> impl Iterator<Item = CompatibilityKey> + '_ {
        (0..self.tile_count).flat_map(|i| Direction::ALL.map(|d| (TileId(i), d)))
    }
}
