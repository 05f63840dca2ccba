//! Piece module - shape catalog and the movable piece.
//!
//! Each shape archetype is a template of four cell offsets inside a 4x4
//! box. Offsets are `(dx, dy)` with `dy` measured downward from the piece
//! anchor, so a cell lands at `(anchor.x + dx, anchor.y - dy)` in grid
//! space (row 0 = bottom). Rotation is a fixed 90 degree clockwise step
//! between precomputed orientations.

use crate::types::{Direction, GridPos, Rotation, ShapeKind};

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i32, i32);

/// Shape of a piece - four block offsets
pub type Shape = [BlockOffset; 4];

/// Get the shape (block offsets) for a kind and rotation
pub fn shape_of(kind: ShapeKind, rotation: Rotation) -> Shape {
    match kind {
        ShapeKind::I => i_shape(rotation),
        ShapeKind::O => o_shape(rotation),
        ShapeKind::T => t_shape(rotation),
        ShapeKind::S => s_shape(rotation),
        ShapeKind::Z => z_shape(rotation),
        ShapeKind::J => j_shape(rotation),
        ShapeKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> Shape {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O is rotation-invariant
fn o_shape(_rotation: Rotation) -> Shape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_shape(rotation: Rotation) -> Shape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_shape(rotation: Rotation) -> Shape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_shape(rotation: Rotation) -> Shape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_shape(rotation: Rotation) -> Shape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_shape(rotation: Rotation) -> Shape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// The movable group of blocks under player control.
///
/// Owned by the board while active; its lifetime ends when it locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub anchor: GridPos,
}

impl Piece {
    /// Create a piece at the given anchor in spawn orientation
    pub fn new(kind: ShapeKind, anchor: GridPos) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            anchor,
        }
    }

    /// Grid cells currently covered by this piece
    pub fn cells(&self) -> [GridPos; 4] {
        let shape = shape_of(self.kind, self.rotation);
        let mut cells = [GridPos::default(); 4];
        for (cell, &(dx, dy)) in cells.iter_mut().zip(shape.iter()) {
            *cell = GridPos::new(self.anchor.x + dx, self.anchor.y - dy);
        }
        cells
    }

    /// Grid cells covered after applying `offset` to every block
    pub fn cells_offset(&self, offset: (i32, i32)) -> [GridPos; 4] {
        let mut cells = self.cells();
        for cell in &mut cells {
            cell.x += offset.0;
            cell.y += offset.1;
        }
        cells
    }

    /// The piece translated one cell in `direction` (pure)
    pub fn translated(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            anchor: GridPos::new(self.anchor.x + dx, self.anchor.y + dy),
            ..*self
        }
    }

    /// The piece rotated 90 degrees clockwise (pure, unvalidated)
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_blocks_in_box() {
        for kind in ShapeKind::ALL {
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                let shape = shape_of(kind, rotation);
                for &(dx, dy) in &shape {
                    assert!((0..4).contains(&dx), "{:?} {:?} dx {}", kind, rotation, dx);
                    assert!((0..4).contains(&dy), "{:?} {:?} dy {}", kind, rotation, dy);
                }
                // No duplicate offsets within a shape.
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(shape[i], shape[j], "{:?} {:?}", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn cells_apply_anchor_with_y_up() {
        let piece = Piece::new(ShapeKind::O, GridPos::new(3, 19));
        let mut cells = piece.cells().to_vec();
        cells.sort_by_key(|c| (c.y, c.x));
        // O occupies box columns 1-2 on the anchor row and the row below it.
        assert_eq!(
            cells,
            vec![
                GridPos::new(4, 18),
                GridPos::new(5, 18),
                GridPos::new(4, 19),
                GridPos::new(5, 19),
            ]
        );
    }

    #[test]
    fn translation_moves_every_block() {
        let piece = Piece::new(ShapeKind::T, GridPos::new(3, 10));
        let moved = piece.translated(Direction::Down);
        for (a, b) in piece.cells().iter().zip(moved.cells().iter()) {
            assert_eq!(b.x, a.x);
            assert_eq!(b.y, a.y - 1);
        }
    }

    #[test]
    fn four_rotations_return_to_start() {
        let piece = Piece::new(ShapeKind::L, GridPos::new(4, 8));
        let back = piece.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, piece);
    }
}
