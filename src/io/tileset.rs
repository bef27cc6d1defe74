//! Tileset JSON export and import
//!
//! The on-disk layout is consumed by the game's WFC synthesizer:
//! `tiles` (pattern and edges per tile), `compatibility` keyed by
//! `"<tile>:<direction>"`, and a `metadata` block. String keys only exist at
//! this boundary; in memory the key is `(TileId, Direction)`.

use crate::analysis::compatibility::{CompatibilityMap, TileId};
use crate::io::configuration::GENERATED_BY;
use crate::io::error::{Result, TilesetError, WithPath};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::Tile;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Edge values of one tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// First row
    pub north: Vec<i8>,
    /// Last row
    pub south: Vec<i8>,
    /// Last column
    pub east: Vec<i8>,
    /// First column
    pub west: Vec<i8>,
}

impl EdgeRecord {
    /// Values on one side
    pub fn get(&self, direction: Direction) -> &[i8] {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }
}

/// Serialized tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Unique tile name
    pub name: String,
    /// Source grid name
    pub source_maze: String,
    /// Top-left offset `[x, y]` in the source grid
    pub source_position: [usize; 2],
    /// Cell values, row-major
    pub pattern: Vec<Vec<i8>>,
    /// Boundary values per side
    pub edges: EdgeRecord,
    /// Selection weight hint
    pub weight: f64,
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        Self {
            name: tile.name.clone(),
            source_maze: tile.source.clone(),
            source_position: tile.position,
            pattern: tile.pattern_values(),
            edges: EdgeRecord {
                north: tile.edge(Direction::North).values(),
                south: tile.edge(Direction::South).values(),
                east: tile.edge(Direction::East).values(),
                west: tile.edge(Direction::West).values(),
            },
            weight: tile.weight,
        }
    }
}

/// Tileset summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilesetMetadata {
    /// Number of tiles
    pub tile_count: usize,
    /// Tile side length
    pub tile_size: usize,
    /// Sampling stride
    pub stride: usize,
    /// Number of source grids
    pub source_mazes: usize,
    /// Producer tag
    pub generated_by: String,
}

impl TilesetMetadata {
    /// Metadata for a freshly sampled pool
    pub fn new(tile_count: usize, tile_size: usize, stride: usize, source_mazes: usize) -> Self {
        Self {
            tile_count,
            tile_size,
            stride,
            source_mazes,
            generated_by: GENERATED_BY.to_string(),
        }
    }
}

/// Format a compatibility key as it appears in JSON
pub fn compatibility_key(tile_name: &str, direction: Direction) -> String {
    format!("{tile_name}:{direction}")
}

// Writes the map in tile order, then north/south/east/west, resolving ids to names
struct CompatibilityView<'a> {
    tiles: &'a [Tile],
    map: &'a CompatibilityMap,
}

impl Serialize for CompatibilityView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.map.len()))?;
        for (TileId(i), direction) in self.map.keys() {
            let Some(tile) = self.tiles.get(i) else {
                continue;
            };
            let names: Vec<&str> = self
                .map
                .compatible(TileId(i), direction)
                .iter()
                .filter_map(|&TileId(j)| self.tiles.get(j).map(|t| t.name.as_str()))
                .collect();
            out.serialize_entry(&compatibility_key(&tile.name, direction), &names)?;
        }
        out.end()
    }
}

#[derive(Serialize)]
struct TilesetOut<'a> {
    tiles: Vec<TileRecord>,
    compatibility: CompatibilityView<'a>,
    metadata: &'a TilesetMetadata,
}

/// Tileset as read back from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct TilesetDocument {
    /// All tiles in pool order
    pub tiles: Vec<TileRecord>,
    /// Compatible tile names per `"<tile>:<direction>"` key
    pub compatibility: BTreeMap<String, Vec<String>>,
    /// Summary block
    pub metadata: TilesetMetadata,
}

impl TilesetDocument {
    /// Compatible tile names for one key
    pub fn compatible(&self, tile_name: &str, direction: Direction) -> Option<&[String]> {
        self.compatibility
            .get(&compatibility_key(tile_name, direction))
            .map(Vec::as_slice)
    }
}

/// Write tiles, compatibility and metadata as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_tileset(
    path: &Path,
    tiles: &[Tile],
    compatibility: &CompatibilityMap,
    metadata: &TilesetMetadata,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let document = TilesetOut {
        tiles: tiles.iter().map(TileRecord::from).collect(),
        compatibility: CompatibilityView {
            tiles,
            map: compatibility,
        },
        metadata,
    };

    let file = File::create(path).with_path(path, "create file")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document).map_err(|source| {
        TilesetError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().with_path(path, "write file")?;
    Ok(())
}

/// Read a tileset JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid tileset
pub fn read_tileset(path: &Path) -> Result<TilesetDocument> {
    let file = File::open(path).with_path(path, "open file")?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| TilesetError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}
