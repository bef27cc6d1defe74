//! Generation constants and runtime configuration defaults

// Grid and tile geometry
/// Side length of generated grids
pub const GRID_SIZE: usize = 128;
/// Side length of sampled tiles
pub const TILE_SIZE: usize = 8;
/// Default sampling step (4 gives 50% overlap for 8-wide tiles)
pub const DEFAULT_STRIDE: usize = 4;

// Floor density band enforced after carving
/// Lowest acceptable floor share
pub const MIN_FLOOR_RATIO: f64 = 0.68;
/// Highest acceptable floor share
pub const MAX_FLOOR_RATIO: f64 = 0.75;

// Safety limit so normalization can't spin forever on a degenerate grid
/// Normalization attempts allowed per grid cell
pub const NORMALIZATION_ATTEMPTS_PER_CELL: usize = 64;

/// Selection weight given to every sampled tile
pub const TILE_WEIGHT: f64 = 1.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of mazes per batch
pub const DEFAULT_MAZE_COUNT: usize = 20;
/// Default pixels per cell in maze previews
pub const DEFAULT_CELL_SIZE: u32 = 4;
/// Default directory for generated mazes
pub const DEFAULT_MAZE_DIR: &str = "data/mazes";
/// Default tileset output path
pub const DEFAULT_TILESET_PATH: &str = "data/lvl0_wfc_tileset.json";

// Output settings
/// Prefix of generated maze names
pub const MAZE_NAME_PREFIX: &str = "maze";
/// Extension of raw grid files
pub const GRID_EXTENSION: &str = "npy";
/// Extension of grid previews
pub const PREVIEW_EXTENSION: &str = "png";
/// Preview color of WALL cells
pub const WALL_COLOR: [u8; 3] = [50, 50, 50];
/// Preview color of FLOOR cells
pub const FLOOR_COLOR: [u8; 3] = [200, 200, 150];
/// Producer tag written into tileset metadata
pub const GENERATED_BY: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " ",
    env!("CARGO_PKG_VERSION"),
    " (subsample mode)"
);
