//! PNG previews of floor plans for human review

use crate::io::configuration::{FLOOR_COLOR, WALL_COLOR};
use crate::io::error::{Result, TilesetError, WithPath, invalid_parameter};
use crate::spatial::grid::{Cell, Grid};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Render a grid with `cell_size × cell_size` pixels per cell
///
/// # Errors
///
/// Returns an error if `cell_size` is zero or the image would exceed `u32`
/// dimensions
pub fn render_grid(grid: &Grid, cell_size: u32) -> Result<RgbImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"cell size must be at least 1",
        ));
    }
    let width = u32::try_from(grid.cols())
        .ok()
        .and_then(|c| c.checked_mul(cell_size));
    let height = u32::try_from(grid.rows())
        .ok()
        .and_then(|r| r.checked_mul(cell_size));
    let (Some(width), Some(height)) = (width, height) else {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"preview dimensions overflow",
        ));
    };

    let mut img = RgbImage::new(width, height);
    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let cell = grid.get((px / cell_size) as i32, (py / cell_size) as i32);
        *pixel = match cell {
            Some(Cell::Floor) => Rgb(FLOOR_COLOR),
            _ => Rgb(WALL_COLOR),
        };
    }
    Ok(img)
}

/// Save a grid preview as PNG
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|e| TilesetError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
