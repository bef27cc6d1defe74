//! Two-state floor plan grid with bounds-checked mutation
//!
//! Every cell holds exactly one of FLOOR or WALL. Writes outside the grid are
//! ignored, so carving code can draw shapes that overhang the border without
//! clipping them first. The floor count is cached and kept in step with every
//! write, which keeps density checks O(1).

use ndarray::Array2;

/// Cell state of a floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Cell {
    /// Walkable space
    Floor = 0,
    /// Solid wall
    Wall = 1,
}

impl Cell {
    /// Numeric value used on disk and in tileset JSON
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Decode a stored cell value
    pub const fn from_value(value: i8) -> Option<Self> {
        match value {
            0 => Some(Self::Floor),
            1 => Some(Self::Wall),
            _ => None,
        }
    }
}

/// Fully populated FLOOR/WALL matrix indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    floor_cells: usize,
}

impl Grid {
    /// Create a grid with every cell set to WALL
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Wall),
            floor_cells: 0,
        }
    }

    /// Create a square grid with every cell set to WALL
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Wrap an existing cell matrix
    pub fn from_cells(cells: Array2<Cell>) -> Self {
        let floor_cells = cells.iter().filter(|&&c| c == Cell::Floor).count();
        Self { cells, floor_cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only view of the underlying matrix
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cell at signed coordinates, `None` when outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let (row, col) = self.index(x, y)?;
        self.cells.get((row, col)).copied()
    }

    /// Whether `(x, y)` lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Write a cell, ignoring out-of-range coordinates
    ///
    /// Returns true when the stored value changed.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        let Some(index) = self.index(x, y) else {
            return false;
        };
        let Some(slot) = self.cells.get_mut(index) else {
            return false;
        };
        if *slot == cell {
            return false;
        }
        *slot = cell;
        match cell {
            Cell::Floor => self.floor_cells += 1,
            Cell::Wall => self.floor_cells -= 1,
        }
        true
    }

    /// Fill the rectangle `[x, x + width) × [y, y + height)`, clipped to the grid
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        for yy in y.max(0)..(y + height).min(self.rows() as i32) {
            for xx in x.max(0)..(x + width).min(self.cols() as i32) {
                self.set(xx, yy, cell);
            }
        }
    }

    /// Number of FLOOR cells inside the clipped rectangle
    pub fn count_floor_in(&self, x: i32, y: i32, width: i32, height: i32) -> usize {
        let mut count = 0;
        for yy in y.max(0)..(y + height).min(self.rows() as i32) {
            for xx in x.max(0)..(x + width).min(self.cols() as i32) {
                if self.get(xx, yy) == Some(Cell::Floor) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of FLOOR cells
    pub const fn floor_count(&self) -> usize {
        self.floor_cells
    }

    /// Number of WALL cells
    pub fn wall_count(&self) -> usize {
        self.len() - self.floor_cells
    }

    /// Share of FLOOR cells in `[0, 1]`
    pub fn floor_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.floor_cells as f64 / self.len() as f64
    }

    /// Encode as the on-disk `i8` matrix
    pub fn to_values(&self) -> Array2<i8> {
        self.cells.mapv(Cell::value)
    }

    /// Decode an on-disk `i8` matrix
    ///
    /// Returns the offending value when a cell is neither 0 nor 1.
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` for the first value that is not a valid cell.
    pub fn from_values(values: &Array2<i8>) -> std::result::Result<Self, i8> {
        if let Some(&bad) = values.iter().find(|&&v| Cell::from_value(v).is_none()) {
            return Err(bad);
        }
        let cells = values.mapv(|v| Cell::from_value(v).unwrap_or(Cell::Wall));
        Ok(Self::from_cells(cells))
    }

    // (x, y) world order to (row, col) storage order
    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x as usize >= self.cols() || y as usize >= self.rows() {
            return None;
        }
        Some((y as usize, x as usize))
    }
}
