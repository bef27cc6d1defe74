//! Analysis of sampled tiles and generated grids

/// Directional edge-compatibility index
pub mod compatibility;
/// Floor/wall statistics
pub mod statistics;

pub use compatibility::{CompatibilityKey, CompatibilityMap, TileId};
pub use statistics::GridStats;
