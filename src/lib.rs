//! Maze floor-plan generation and Wave Function Collapse tileset extraction
//!
//! Carves FLOOR/WALL grids with room, backtracker and hybrid strategies,
//! normalizes their floor density, then slides a fixed window over approved
//! grids to build tiles and a directional edge-compatibility index.

#![forbid(unsafe_code)]

/// Tile compatibility indexing and grid statistics
pub mod analysis;
/// Carving strategies, density normalization and the maze generator
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid model, directions and tile sampling
pub mod spatial;

pub use io::error::{Result, TilesetError};
