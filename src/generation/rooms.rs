//! Room placement and room-to-room connections
//!
//! Rooms are rectangles of a weighted size class dropped at random positions
//! with a small border margin. Overlap is allowed. Consecutive rooms are
//! joined by L-shaped corridors, plus a few random extra pairs for loops.

use crate::generation::corridors::carve_corridor;
use crate::generation::random::MazeRng;
use crate::spatial::grid::{Cell, Grid};

/// Minimum gap kept between a room and the grid border
pub const ROOM_MARGIN: i32 = 2;

/// Upper bound on extra loop-forming connections
pub const MAX_EXTRA_CONNECTIONS: usize = 5;

/// Rectangular room, recorded by its center for corridor routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Center column
    pub center_x: i32,
    /// Center row
    pub center_y: i32,
    /// Width in cells
    pub width: i32,
    /// Height in cells
    pub height: i32,
}

impl Room {
    /// Center as `(x, y)`
    pub const fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }
}

/// Room size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Closet-sized
    Tiny,
    /// Small office
    Small,
    /// Medium room
    Medium,
    /// Large room
    Large,
    /// Open hall
    Huge,
}

impl SizeClass {
    /// All classes in weight order
    pub const ALL: [Self; 5] = [
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Huge,
    ];

    /// Selection weight
    pub const fn weight(self) -> f64 {
        match self {
            Self::Tiny => 0.15,
            Self::Small => 0.35,
            Self::Medium => 0.30,
            Self::Large => 0.15,
            Self::Huge => 0.05,
        }
    }

    /// Half-open side-length range
    pub const fn side_range(self) -> (i32, i32) {
        match self {
            Self::Tiny => (3, 6),
            Self::Small => (5, 10),
            Self::Medium => (8, 16),
            Self::Large => (12, 24),
            Self::Huge => (20, 35),
        }
    }

    /// Draw a class by weight
    pub fn pick(rng: &mut MazeRng) -> Self {
        let weights = Self::ALL.map(Self::weight);
        Self::ALL
            .get(rng.weighted_choice(&weights))
            .copied()
            .unwrap_or(Self::Small)
    }
}

/// Carve a `width × height` room at a random position inside the margin
pub fn carve_random_room(grid: &mut Grid, rng: &mut MazeRng, width: i32, height: i32) -> Room {
    let x = rng.range(
        ROOM_MARGIN,
        (ROOM_MARGIN + 1).max(grid.cols() as i32 - width - ROOM_MARGIN),
    );
    let y = rng.range(
        ROOM_MARGIN,
        (ROOM_MARGIN + 1).max(grid.rows() as i32 - height - ROOM_MARGIN),
    );

    grid.fill_rect(x, y, width, height, Cell::Floor);

    Room {
        center_x: x + width / 2,
        center_y: y + height / 2,
        width,
        height,
    }
}

/// Place `count` rooms of weighted random size classes
pub fn place_varied_rooms(grid: &mut Grid, rng: &mut MazeRng, count: usize) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(count);
    for _ in 0..count {
        let (low, high) = SizeClass::pick(rng).side_range();
        let width = rng.range(low, high);
        let height = rng.range(low, high);
        rooms.push(carve_random_room(grid, rng, width, height));
    }
    rooms
}

/// Join consecutive rooms, then add up to five random extra links
pub fn connect_rooms(grid: &mut Grid, rng: &mut MazeRng, rooms: &[Room]) {
    if rooms.len() < 2 {
        return;
    }

    for pair in rooms.windows(2) {
        if let [a, b] = pair {
            carve_corridor(grid, rng, a.center(), b.center());
        }
    }

    let extra = MAX_EXTRA_CONNECTIONS.min(rooms.len() / 3);
    for _ in 0..extra {
        let Some((i, j)) = rng.distinct_pair(rooms.len()) else {
            break;
        };
        if let (Some(a), Some(b)) = (rooms.get(i), rooms.get(j)) {
            carve_corridor(grid, rng, a.center(), b.center());
        }
    }
}
