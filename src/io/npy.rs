//! Raw grid persistence as NumPy `.npy` arrays
//!
//! Grids are stored as 2-D `int8` arrays (FLOOR = 0, WALL = 1), the layout
//! downstream tooling already reads.

use crate::io::configuration::GRID_EXTENSION;
use crate::io::error::{Result, TilesetError, WithPath, invalid_source};
use crate::spatial::grid::Grid;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};
use std::path::{Path, PathBuf};

/// Write a grid to `path`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the array
/// cannot be written
pub fn save_grid(grid: &Grid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    write_npy(path, &grid.to_values()).map_err(|source| TilesetError::GridSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a grid from `path`
///
/// # Errors
///
/// Returns an error if the file is not a 2-D `int8` array or holds values
/// other than 0 and 1
pub fn load_grid(path: &Path) -> Result<Grid> {
    let values: Array2<i8> = read_npy(path).map_err(|source| TilesetError::GridLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Grid::from_values(&values).map_err(|bad| {
        invalid_source(&format!(
            "'{}' holds cell value {bad}, expected 0 (floor) or 1 (wall)",
            path.display()
        ))
    })
}

/// Every `.npy` file directly inside `dir`, sorted by file name
///
/// # Errors
///
/// Returns an error if `dir` is missing or cannot be listed
pub fn list_grid_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(invalid_source(&format!(
            "maze directory not found: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "read directory")? {
        let path = entry.with_path(dir, "read directory")?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(GRID_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File stem used as the grid's name
pub fn grid_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
