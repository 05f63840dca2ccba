//! Piece tests - shape catalog geometry, translation, and rotation

use gridfall::core::{shape_of, Piece};
use gridfall::types::{Direction, GridPos, Rotation, ShapeKind};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn catalog_has_seven_archetypes() {
    assert_eq!(ShapeKind::ALL.len(), 7);
}

#[test]
fn every_shape_covers_four_distinct_cells() {
    for kind in ShapeKind::ALL {
        for rotation in ROTATIONS {
            let piece = Piece {
                kind,
                rotation,
                anchor: GridPos::new(4, 10),
            };
            let mut cells = piece.cells().to_vec();
            cells.sort_by_key(|c| (c.y, c.x));
            cells.dedup();
            assert_eq!(cells.len(), 4, "{:?} {:?}", kind, rotation);
        }
    }
}

#[test]
fn o_shape_is_rotation_invariant() {
    for rotation in ROTATIONS {
        assert_eq!(
            shape_of(ShapeKind::O, rotation),
            shape_of(ShapeKind::O, Rotation::North)
        );
    }
}

#[test]
fn i_shape_alternates_between_row_and_column() {
    let horizontal = shape_of(ShapeKind::I, Rotation::North);
    assert!(horizontal.iter().all(|&(_, dy)| dy == 1));

    let vertical = shape_of(ShapeKind::I, Rotation::East);
    assert!(vertical.iter().all(|&(dx, _)| dx == 2));
}

#[test]
fn translation_shifts_one_cell() {
    let piece = Piece::new(ShapeKind::J, GridPos::new(4, 10));

    assert_eq!(
        piece.translated(Direction::Left).anchor,
        GridPos::new(3, 10)
    );
    assert_eq!(
        piece.translated(Direction::Right).anchor,
        GridPos::new(5, 10)
    );
    assert_eq!(piece.translated(Direction::Down).anchor, GridPos::new(4, 9));
}

#[test]
fn translation_and_rotation_are_pure() {
    let piece = Piece::new(ShapeKind::S, GridPos::new(2, 8));
    let _ = piece.translated(Direction::Down);
    let _ = piece.rotated_cw();
    assert_eq!(piece, Piece::new(ShapeKind::S, GridPos::new(2, 8)));
}

#[test]
fn rotation_steps_through_all_orientations() {
    let mut piece = Piece::new(ShapeKind::T, GridPos::new(4, 10));
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(piece.rotation);
        piece = piece.rotated_cw();
    }
    assert_eq!(seen, ROTATIONS.to_vec());
    assert_eq!(piece.rotation, Rotation::North);
}

#[test]
fn cells_offset_matches_manual_translation() {
    let piece = Piece::new(ShapeKind::Z, GridPos::new(4, 10));
    let shifted = piece.cells_offset((2, -3));
    for (cell, base) in shifted.iter().zip(piece.cells().iter()) {
        assert_eq!(cell.x, base.x + 2);
        assert_eq!(cell.y, base.y - 3);
    }
}

#[test]
fn anchor_row_is_the_top_of_the_shape_box() {
    // With row 0 at the bottom, box offsets grow downward from the anchor.
    for kind in ShapeKind::ALL {
        let piece = Piece::new(kind, GridPos::new(3, 19));
        assert!(piece.cells().iter().all(|c| c.y <= 19));
    }
}
