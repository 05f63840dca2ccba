//! Board module - occupancy grid and the spawn/lock/clear cycle.
//!
//! The board owns the grid, the active piece, the score, and the spawner.
//! Storage is a flat row-major boolean array (index = y * width + x) with
//! row 0 at the bottom of the well. Movement validation never mutates the
//! grid; only lock-commit and line clearing do.
//!
//! Rows at `y >= height` are headroom above the visible well: exempt from
//! occupancy checks but still bounded horizontally and at `y < 0`.

use std::fmt;

use crate::core::piece::Piece;
use crate::core::spawner::Spawner;
use crate::events::{BoardEvent, EventQueue};
use crate::geometry::{grid_to_world, Boundaries};
use crate::types::{Direction, GridPos, ShapeKind, LINE_SCORE_BASE};

/// Default seed for the board-owned spawner
const DEFAULT_SPAWNER_SEED: u32 = 1;

/// Failure modes for board operations that are not ordinary placement
/// rejections. Placement rejections are reported as `false` plus a
/// `PieceMovementFailed` event instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Operation requested before a successful `initialize`
    NotInitialized,
    /// `initialize` called with non-positive dimensions
    InvalidDimensions { width: i32, height: i32 },
    /// Operation requires an active piece and none is in play
    NoActivePiece,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NotInitialized => write!(f, "board is not initialized"),
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions: {}x{}", width, height)
            }
            BoardError::NoActivePiece => write!(f, "no active piece"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Owner of the occupancy grid and game-state machine.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<bool>,
    score: u32,
    current: Option<Piece>,
    spawner: Option<Spawner>,
    boundaries: Boundaries,
    events: EventQueue,
    initialized: bool,
    game_over: bool,
}

impl Board {
    /// Create an uninitialized board. Every operation other than
    /// `initialize` fails until `initialize` succeeds.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            score: 0,
            current: None,
            spawner: None,
            boundaries: Boundaries::default(),
            events: EventQueue::new(),
            initialized: false,
            game_over: false,
        }
    }

    /// Create an uninitialized board with an injected spawner (tests use
    /// this to control the catalog and seed). The board registers the
    /// spawn point with it during `initialize`.
    pub fn with_spawner(spawner: Spawner) -> Self {
        let mut board = Self::new();
        board.spawner = Some(spawner);
        board
    }

    /// Allocate the grid and bring the board into play.
    ///
    /// Emits `BoardInitialized` and registers the spawn point (top row,
    /// horizontally centered) with the spawner, creating a default
    /// spawner if none was injected.
    pub fn initialize(&mut self, width: i32, height: i32) -> Result<(), BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        self.width = width;
        self.height = height;
        self.cells = vec![false; (width * height) as usize];
        self.boundaries = Boundaries::from_dimensions(width, height);
        self.initialized = true;

        self.events
            .push(BoardEvent::BoardInitialized { width, height });

        let spawn_point = self.spawn_point();
        self.spawner
            .get_or_insert_with(|| Spawner::new(DEFAULT_SPAWNER_SEED))
            .set_spawn_point(spawn_point);

        Ok(())
    }

    /// Spawn anchor: horizontally centered (the shape box is 4 wide),
    /// anchored at the top visible row so a full stack blocks spawning.
    fn spawn_point(&self) -> GridPos {
        GridPos::new((self.width - 4) / 2, self.height - 1)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// The active falling piece, if any
    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// The spawner's lookahead shape, if it can produce one
    pub fn next_shape(&mut self) -> Option<ShapeKind> {
        self.spawner.as_mut()?.next_shape()
    }

    /// Whether the visible cell at (x, y) is occupied. Out-of-bounds
    /// coordinates report unoccupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// Directly occupy a visible cell. Returns false out of bounds.
    /// Intended for scenario setup (pre-filled wells) and tests.
    pub fn set_occupied(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Remove and return all pending board events, oldest first
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        self.events.drain()
    }

    /// Check whether every block of `piece`, shifted by `offset`, lands on
    /// a legal cell. Read-only on the grid; short-circuits on the first
    /// bad block and emits `PieceMovementFailed` with its world position.
    ///
    /// Blocks above the visible well (`y >= height`) are exempt from the
    /// occupancy check but still bounded horizontally and at `y < 0`.
    pub fn is_valid_position(&mut self, piece: &Piece, offset: (i32, i32)) -> bool {
        if !self.initialized {
            return false;
        }

        for cell in piece.cells_offset(offset) {
            let out_of_bounds = cell.x < 0 || cell.x >= self.width || cell.y < 0;
            let collides = cell.y < self.height && self.is_occupied(cell.x, cell.y);
            if out_of_bounds || collides {
                self.events.push(BoardEvent::PieceMovementFailed {
                    position: grid_to_world(cell),
                });
                return false;
            }
        }
        true
    }

    /// Commit a piece's blocks into the grid. Blocks outside the visible
    /// well are skipped without error. Emits `PieceLocked`, then runs the
    /// clear pass.
    pub fn lock_piece(&mut self, piece: &Piece) -> Result<(), BoardError> {
        if !self.initialized {
            return Err(BoardError::NotInitialized);
        }

        for cell in piece.cells() {
            if let Some(idx) = self.index(cell.x, cell.y) {
                self.cells[idx] = true;
            }
        }

        self.events.push(BoardEvent::PieceLocked {
            kind: piece.kind,
            position: grid_to_world(piece.anchor),
            rotation_degrees: piece.rotation.degrees(),
        });

        self.clear_lines();
        Ok(())
    }

    /// Remove every complete row and compact the well.
    ///
    /// Sweeps bottom to top; each full row is removed, an empty row enters
    /// at the top, and the same index is re-examined since the contents
    /// above shifted down into it. Clearing `n` rows in one sweep scores
    /// `n * n * LINE_SCORE_BASE` and emits a single `LinesCleared` with
    /// the new running total.
    pub fn clear_lines(&mut self) -> u32 {
        if !self.initialized {
            return 0;
        }

        let mut cleared = 0u32;
        let mut y = 0;
        while y < self.height {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
                // Re-check the same index: the row above shifted into it.
            } else {
                y += 1;
            }
        }

        if cleared > 0 {
            self.score += cleared * cleared * LINE_SCORE_BASE;
            self.events.push(BoardEvent::LinesCleared {
                count: cleared,
                score: self.score,
            });
        }
        cleared
    }

    fn is_row_full(&self, y: i32) -> bool {
        let start = (y * self.width) as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|&occupied| occupied)
    }

    /// Drop every row above `y` down one and blank the top row
    fn remove_row(&mut self, y: i32) {
        let width = self.width as usize;
        for row in y..self.height - 1 {
            let src = ((row + 1) * self.width) as usize;
            let dst = (row * self.width) as usize;
            self.cells.copy_within(src..src + width, dst);
        }
        let top = ((self.height - 1) * self.width) as usize;
        self.cells[top..top + width].fill(false);
    }

    /// Validate-then-translate the active piece one cell in `direction`.
    /// Returns false (piece untouched) on rejection, before
    /// initialization, after game over, or with no active piece.
    pub fn try_move_piece(&mut self, direction: Direction) -> bool {
        if !self.initialized || self.game_over {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        if !self.is_valid_position(&piece, direction.offset()) {
            return false;
        }
        self.current = Some(piece.translated(direction));
        true
    }

    /// Rotate the active piece 90 degrees clockwise if the rotated
    /// placement is legal. No wall kicks: a blocked rotation leaves the
    /// piece unchanged and returns false.
    pub fn try_rotate_piece(&mut self) -> bool {
        if !self.initialized || self.game_over {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let rotated = piece.rotated_cw();
        if !self.is_valid_position(&rotated, (0, 0)) {
            return false;
        }
        self.current = Some(rotated);
        true
    }

    /// Request the next piece from the spawner.
    ///
    /// Transitions to game over (emitting `GameOver` once) when no spawner
    /// is available, the spawner produces nothing, or the produced piece
    /// has no valid initial position. The grid and score are retained.
    pub fn spawn_new_piece(&mut self) -> bool {
        if !self.initialized || self.game_over {
            return false;
        }

        let spawned = self.spawner.as_mut().and_then(Spawner::spawn);
        let Some(piece) = spawned else {
            self.enter_game_over();
            return false;
        };

        if !self.is_valid_position(&piece, (0, 0)) {
            self.enter_game_over();
            return false;
        }

        self.current = Some(piece);
        self.events
            .push(BoardEvent::NewPieceSpawned { kind: piece.kind });
        true
    }

    fn enter_game_over(&mut self) {
        self.current = None;
        self.game_over = true;
        self.events.push(BoardEvent::GameOver);
    }

    /// Lock the active piece and continue the cycle: commit, clear, then
    /// spawn the next piece (which may end the game).
    pub fn lock_current(&mut self) -> Result<(), BoardError> {
        if !self.initialized {
            return Err(BoardError::NotInitialized);
        }
        let Some(piece) = self.current.take() else {
            return Err(BoardError::NoActivePiece);
        };

        self.lock_piece(&piece)?;
        self.spawn_new_piece();
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_board(width: i32, height: i32) -> Board {
        let mut board = Board::new();
        board.initialize(width, height).unwrap();
        board.drain_events();
        board
    }

    #[test]
    fn index_maps_row_major_from_bottom() {
        let board = ready_board(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn remove_row_shifts_rows_down_and_blanks_top() {
        let mut board = ready_board(3, 4);
        // Row 1 full, one block on row 2.
        for x in 0..3 {
            board.set_occupied(x, 1, true);
        }
        board.set_occupied(0, 2, true);

        board.remove_row(1);

        assert!(board.is_occupied(0, 1));
        assert!(!board.is_occupied(1, 1));
        for x in 0..3 {
            assert!(!board.is_occupied(x, 2));
            assert!(!board.is_occupied(x, 3));
        }
    }

    #[test]
    fn spawn_point_is_centered_on_top_row() {
        let board = ready_board(10, 20);
        assert_eq!(board.spawn_point(), GridPos::new(3, 19));
    }
}
