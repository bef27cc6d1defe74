//! Command-line interface for maze generation and tileset extraction
//!
//! Two steps with a human review in between: `generate-mazes` writes PNG
//! previews and raw grids, the operator deletes the grids they don't like,
//! then `subsample-tiles` turns whatever is left into a tileset.

use crate::analysis::compatibility::CompatibilityMap;
use crate::analysis::statistics::GridStats;
use crate::generation::generator::{GeneratorConfig, MazeGenerator, Strategy};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_MAZE_COUNT, DEFAULT_MAZE_DIR, DEFAULT_SEED, DEFAULT_STRIDE,
    DEFAULT_TILESET_PATH, GRID_EXTENSION, GRID_SIZE, PREVIEW_EXTENSION, TILE_SIZE,
};
use crate::io::error::{Result, WithPath, invalid_parameter, invalid_source};
use crate::io::image::export_grid_as_png;
use crate::io::npy::{grid_name, list_grid_files, load_grid, save_grid};
use crate::io::progress::ProgressManager;
use crate::io::tileset::{TilesetMetadata, write_tileset};
use crate::spatial::tiles::{Tile, sample_tiles};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazetile")]
#[command(
    author,
    version,
    about = "Generate maze floor plans and extract WFC tilesets from them"
)]
/// Command-line arguments for the maze and tileset tool
pub struct Cli {
    /// Step to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Pipeline steps
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate and visualize maze floor plans
    GenerateMazes(GenerateArgs),
    /// Subsample approved mazes into WFC tiles
    SubsampleTiles(SubsampleArgs),
}

/// Arguments of `generate-mazes`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of mazes to generate
    #[arg(long, default_value_t = DEFAULT_MAZE_COUNT)]
    pub count: usize,

    /// Random seed for reproducible generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving `.png` previews and `.npy` grids
    #[arg(long, default_value = DEFAULT_MAZE_DIR)]
    pub output_dir: PathBuf,

    /// Pixels per cell in the PNG previews
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Side length of generated grids
    #[arg(long, default_value_t = GRID_SIZE)]
    pub grid_size: usize,
}

/// Arguments of `subsample-tiles`
#[derive(Args, Debug, Clone)]
pub struct SubsampleArgs {
    /// Directory with approved `.npy` grids
    #[arg(long, default_value = DEFAULT_MAZE_DIR)]
    pub maze_dir: PathBuf,

    /// Sampling stride (4 = 50% overlap, 6 = 25% overlap)
    #[arg(long, default_value_t = DEFAULT_STRIDE)]
    pub stride: usize,

    /// Tile side length
    #[arg(long, default_value_t = TILE_SIZE)]
    pub tile_size: usize,

    /// Output tileset JSON file
    #[arg(long, default_value = DEFAULT_TILESET_PATH)]
    pub output: PathBuf,
}

/// Outcome of one generated maze
#[derive(Debug, Clone)]
pub struct MazeReport {
    /// Maze name
    pub name: String,
    /// Strategy that carved it
    pub strategy: Strategy,
    /// Floor/wall statistics
    pub stats: GridStats,
    /// Raw grid path
    pub grid_path: PathBuf,
    /// Preview path
    pub preview_path: PathBuf,
}

/// Outcome of a tileset build
#[derive(Debug, Clone)]
pub struct TilesetReport {
    /// Summary written into the file
    pub metadata: TilesetMetadata,
    /// Number of compatibility keys
    pub compatibility_entries: usize,
    /// Size of the written file in bytes
    pub file_size: u64,
}

/// Dispatches parsed arguments to the pipeline steps
pub struct CommandRunner {
    cli: Cli,
    progress: ProgressManager,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: ProgressManager::new(),
        }
    }

    /// Run the selected step
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation, or file I/O fails
    pub fn run(&mut self) -> Result<()> {
        let show_progress = self.cli.should_show_progress();
        match self.cli.command.clone() {
            Command::GenerateMazes(args) => {
                generate_mazes(&args, show_progress.then_some(&mut self.progress))?;
            }
            Command::SubsampleTiles(args) => {
                subsample_tiles(&args, show_progress.then_some(&mut self.progress))?;
            }
        }
        Ok(())
    }
}

fn report(progress: Option<&ProgressManager>, f: impl FnOnce()) {
    match progress {
        Some(pm) => pm.report(f),
        None => f(),
    }
}

/// Generate a seeded batch of mazes and write preview and raw grid for each
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` or `grid_size` is zero
/// - A maze cannot be normalized into the floor band
/// - Any output file cannot be written
pub fn generate_mazes(
    args: &GenerateArgs,
    mut progress: Option<&mut ProgressManager>,
) -> Result<Vec<MazeReport>> {
    if args.cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &args.cell_size,
            &"cell size must be at least 1",
        ));
    }

    let config = GeneratorConfig {
        grid_size: args.grid_size,
        ..GeneratorConfig::default()
    };
    let mut generator = MazeGenerator::with_config(args.seed, config)?;

    std::fs::create_dir_all(&args.output_dir).with_path(&args.output_dir, "create directory")?;

    info!(
        "Generating {} mazes (seed {}) into {}",
        args.count,
        args.seed,
        args.output_dir.display()
    );
    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize("Mazes", args.count);
    }

    let mut reports = Vec::with_capacity(args.count);
    for i in 0..args.count {
        let maze = generator.generate()?;
        let stats = GridStats::of(&maze.grid);

        let preview_path = args
            .output_dir
            .join(format!("{}.{PREVIEW_EXTENSION}", maze.name));
        export_grid_as_png(&maze.grid, args.cell_size, &preview_path)?;

        let grid_path = args
            .output_dir
            .join(format!("{}.{GRID_EXTENSION}", maze.name));
        save_grid(&maze.grid, &grid_path)?;

        report(progress.as_deref(), || {
            info!(
                "[{:2}/{}] {} ({}): {:.1}% floor, {:.1}% walls",
                i + 1,
                args.count,
                maze.name,
                maze.strategy,
                stats.floor_pct,
                stats.wall_pct
            );
        });
        if let Some(pm) = progress.as_deref_mut() {
            pm.complete_item(&maze.name);
        }

        reports.push(MazeReport {
            name: maze.name,
            strategy: maze.strategy,
            stats,
            grid_path,
            preview_path,
        });
    }

    if let Some(pm) = progress.as_deref_mut() {
        pm.finish();
    }
    info!(
        "Review the previews in {}, delete dull mazes, then run subsample-tiles",
        args.output_dir.display()
    );

    Ok(reports)
}

/// Sample every grid in `maze_dir` into one pooled, ordered tile list
///
/// Grids are visited in sorted file-name order. Finding nothing to sample is
/// reported as an error rather than an empty tileset, so the process exits
/// non-zero instead of writing a file with no tiles.
///
/// # Errors
///
/// Returns an error if the directory is missing, holds no `.npy` grids, or a
/// grid cannot be loaded
pub fn collect_tiles(
    maze_dir: &Path,
    tile_size: usize,
    stride: usize,
    mut progress: Option<&mut ProgressManager>,
) -> Result<(Vec<Tile>, usize)> {
    let files = list_grid_files(maze_dir)?;
    if files.is_empty() {
        return Err(invalid_source(&format!(
            "no .{GRID_EXTENSION} files found in {}",
            maze_dir.display()
        )));
    }

    info!("Found {} maze files in {}", files.len(), maze_dir.display());
    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize("Grids", files.len());
    }

    let mut tiles = Vec::new();
    for file in &files {
        let name = grid_name(file);
        let grid = load_grid(file)?;
        let sampled = sample_tiles(&name, &grid, tile_size, stride)?;

        report(progress.as_deref(), || {
            info!("  {name}: extracted {} tiles", sampled.len());
        });
        if let Some(pm) = progress.as_deref_mut() {
            pm.complete_item(&name);
        }
        tiles.extend(sampled);
    }

    if let Some(pm) = progress.as_deref_mut() {
        pm.finish();
    }
    Ok((tiles, files.len()))
}

/// Build the tileset JSON from the approved grids in `args.maze_dir`
///
/// # Errors
///
/// Returns an error if `stride` or `tile_size` is zero, no grids can be
/// loaded, or the tileset cannot be written
pub fn subsample_tiles(
    args: &SubsampleArgs,
    progress: Option<&mut ProgressManager>,
) -> Result<TilesetReport> {
    if args.stride == 0 {
        return Err(invalid_parameter(
            "stride",
            &args.stride,
            &"stride must be at least 1",
        ));
    }
    if args.tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &args.tile_size,
            &"tile size must be at least 1",
        ));
    }

    let overlap = args.tile_size.saturating_sub(args.stride) * 100 / args.tile_size;
    info!(
        "Subsampling {} with stride {} ({overlap}% overlap)",
        args.maze_dir.display(),
        args.stride
    );

    let (tiles, source_mazes) =
        collect_tiles(&args.maze_dir, args.tile_size, args.stride, progress)?;
    info!("Total tiles: {}", tiles.len());

    let compatibility = CompatibilityMap::build(&tiles);
    info!("Compatibility entries: {}", compatibility.len());

    let metadata = TilesetMetadata::new(tiles.len(), args.tile_size, args.stride, source_mazes);
    write_tileset(&args.output, &tiles, &compatibility, &metadata)?;

    let file_size = std::fs::metadata(&args.output)
        .with_path(&args.output, "stat file")?
        .len();
    info!(
        "Tileset exported: {} ({:.1} KB)",
        args.output.display(),
        file_size as f64 / 1024.0
    );

    Ok(TilesetReport {
        metadata,
        compatibility_entries: compatibility.len(),
        file_size,
    })
}
