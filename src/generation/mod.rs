//! Maze carving and density normalization

/// Recursive-backtracking corridor maze
pub mod backtracker;
/// L-shaped corridors and straight segments
pub mod corridors;
/// Floor-share normalization pass
pub mod density;
/// Strategy selection and maze naming
pub mod generator;
/// Mini-maze infill for the hybrid strategy
pub mod hybrid;
/// Seeded random handle
pub mod random;
/// Room placement and connection
pub mod rooms;

pub use generator::{GeneratorConfig, Maze, MazeGenerator, Strategy};
pub use random::MazeRng;
