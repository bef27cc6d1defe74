//! Spatial data structures
//!
//! This module contains:
//! - The FLOOR/WALL grid model
//! - Tile sides and edge signatures
//! - Overlapping tile extraction

/// Tile sides and edge signatures
pub mod direction;
/// FLOOR/WALL grid with bounds-checked mutation
pub mod grid;
/// Tile extraction from approved grids
pub mod tiles;

pub use direction::{Direction, EdgeSignature};
pub use grid::{Cell, Grid};
pub use tiles::Tile;
