//! Grid/world coordinate mapping.
//!
//! The simulation runs entirely in grid space. Event payloads and any host
//! rendering adapter use world units, with `CELL_SIZE` world units per cell.
//! World positions convert back to cells by rounding to the nearest cell.

use crate::types::GridPos;

/// World units per grid cell
pub const CELL_SIZE: f32 = 100.0;

/// A position in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Convert a grid cell to its world position (cell origin)
pub fn grid_to_world(pos: GridPos) -> WorldPos {
    WorldPos::new(pos.x as f32 * CELL_SIZE, pos.y as f32 * CELL_SIZE)
}

/// Convert a world position to the nearest grid cell
pub fn world_to_grid(pos: WorldPos) -> GridPos {
    GridPos::new(
        (pos.x / CELL_SIZE).round() as i32,
        (pos.y / CELL_SIZE).round() as i32,
    )
}

/// Boundary positions of an initialized board, in world units.
///
/// Edges sit half a cell outside the playable area so that cell centers
/// round back into the grid cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boundaries {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Boundaries {
    /// Compute boundaries for a `width x height` board
    pub fn from_dimensions(width: i32, height: i32) -> Self {
        let full_width = width as f32 * CELL_SIZE;
        let full_height = height as f32 * CELL_SIZE;
        Self {
            left: -CELL_SIZE / 2.0,
            right: full_width + CELL_SIZE / 2.0,
            top: full_height + CELL_SIZE / 2.0,
            bottom: -CELL_SIZE / 2.0,
        }
    }
}
