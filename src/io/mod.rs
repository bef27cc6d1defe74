//! Input/output, configuration and error handling

/// Command-line interface and pipeline steps
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG previews of grids
pub mod image;
/// Raw `.npy` grid persistence
pub mod npy;
/// Progress display
pub mod progress;
/// Tileset JSON persistence
pub mod tileset;
