//! Maze generator orchestrating strategy choice, carving and normalization

use crate::generation::backtracker::{carve_backtracker_maze, carve_rooms_in_maze};
use crate::generation::corridors::{RANDOM_CORRIDOR_DENSITY, add_random_corridors};
use crate::generation::density::{FloorBand, normalize_floor_density};
use crate::generation::hybrid::fill_empty_areas;
use crate::generation::random::MazeRng;
use crate::generation::rooms::{connect_rooms, place_varied_rooms};
use crate::io::configuration::{
    GRID_SIZE, MAX_FLOOR_RATIO, MAZE_NAME_PREFIX, MIN_FLOOR_RATIO,
    NORMALIZATION_ATTEMPTS_PER_CELL,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;
use std::fmt;

/// Carving approach used for one maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Many varied rooms joined by corridors, plus scattered extra corridors
    RoomFocused,
    /// Backtracking corridor maze with a few large rooms cut in
    MazeFocused,
    /// Fewer rooms, with mini-mazes in wall-heavy blocks
    Hybrid,
}

impl Strategy {
    /// All strategies in weight order
    pub const ALL: [Self; 3] = [Self::RoomFocused, Self::MazeFocused, Self::Hybrid];

    /// Selection weight
    pub const fn weight(self) -> f64 {
        match self {
            Self::RoomFocused => 0.2,
            Self::MazeFocused => 0.5,
            Self::Hybrid => 0.3,
        }
    }

    /// Draw a strategy by weight
    pub fn pick(rng: &mut MazeRng) -> Self {
        let weights = Self::ALL.map(Self::weight);
        Self::ALL
            .get(rng.weighted_choice(&weights))
            .copied()
            .unwrap_or(Self::MazeFocused)
    }

    /// Carve a fresh all-wall grid with this strategy
    pub fn carve(self, grid: &mut Grid, rng: &mut MazeRng) {
        match self {
            Self::RoomFocused => {
                let count = rng.range(10, 18) as usize;
                let rooms = place_varied_rooms(grid, rng, count);
                connect_rooms(grid, rng, &rooms);
                add_random_corridors(grid, rng, RANDOM_CORRIDOR_DENSITY);
            }
            Self::MazeFocused => {
                carve_backtracker_maze(grid, rng);
                let count = rng.range(4, 8) as usize;
                carve_rooms_in_maze(grid, rng, count);
            }
            Self::Hybrid => {
                let count = rng.range(6, 12) as usize;
                let rooms = place_varied_rooms(grid, rng, count);
                connect_rooms(grid, rng, &rooms);
                fill_empty_areas(grid, rng);
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RoomFocused => "room_focused",
            Self::MazeFocused => "maze_focused",
            Self::Hybrid => "hybrid",
        })
    }
}

/// Generator parameters
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Side length of generated grids
    pub grid_size: usize,
    /// Floor share every grid must end up in
    pub floor_band: FloorBand,
    /// Normalization edit budget per grid cell
    pub attempts_per_cell: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            floor_band: FloorBand {
                min: MIN_FLOOR_RATIO,
                max: MAX_FLOOR_RATIO,
            },
            attempts_per_cell: NORMALIZATION_ATTEMPTS_PER_CELL,
        }
    }
}

/// A named, finished floor plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// File stem, `maze_XXX`
    pub name: String,
    /// Carving approach that produced the grid
    pub strategy: Strategy,
    /// Normalized floor plan
    pub grid: Grid,
}

/// Seeded maze factory
///
/// One generator draws every maze of a batch from a single random stream, so
/// a seed fixes the whole batch.
pub struct MazeGenerator {
    config: GeneratorConfig,
    rng: MazeRng,
    counter: usize,
}

impl MazeGenerator {
    /// Create a generator with default parameters
    pub fn new(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: MazeRng::new(seed),
            counter: 0,
        }
    }

    /// Create a generator with custom parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is zero
    pub fn with_config(seed: u64, config: GeneratorConfig) -> Result<Self> {
        if config.grid_size == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &config.grid_size,
                &"grid size must be at least 1",
            ));
        }
        FloorBand::new(config.floor_band.min, config.floor_band.max)?;
        Ok(Self {
            config,
            rng: MazeRng::new(seed),
            counter: 0,
        })
    }

    /// Parameters in use
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce the next maze with a randomly chosen strategy
    ///
    /// # Errors
    ///
    /// Returns an error if density normalization cannot reach the floor band
    pub fn generate(&mut self) -> Result<Maze> {
        let strategy = Strategy::pick(&mut self.rng);
        self.generate_with(strategy)
    }

    /// Produce the next maze with a fixed strategy
    ///
    /// # Errors
    ///
    /// Returns an error if density normalization cannot reach the floor band
    pub fn generate_with(&mut self, strategy: Strategy) -> Result<Maze> {
        let mut grid = Grid::square(self.config.grid_size);
        strategy.carve(&mut grid, &mut self.rng);
        normalize_floor_density(
            &mut grid,
            &mut self.rng,
            self.config.floor_band,
            self.config.attempts_per_cell,
        )?;

        let name = format!("{MAZE_NAME_PREFIX}_{:03}", self.counter);
        self.counter += 1;

        Ok(Maze {
            name,
            strategy,
            grid,
        })
    }
}
