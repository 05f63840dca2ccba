//! Controller module - translates discrete game actions into board calls.
//!
//! The controller holds the board by explicit injection; it keeps no state
//! of its own beyond that reference. Horizontal move failures are silent.
//! A failed soft drop locks the piece; the board's lock cycle then clears
//! lines and spawns the next piece.

use crate::core::Board;
use crate::types::{Direction, GameAction};

/// Player controller over an injected board.
#[derive(Debug)]
pub struct Controller {
    board: Board,
}

impl Controller {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Consume the controller, returning the board
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Apply one discrete action to the active piece
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.board.try_move_piece(Direction::Left);
            }
            GameAction::MoveRight => {
                self.board.try_move_piece(Direction::Right);
            }
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => {
                self.board.try_rotate_piece();
            }
        }
    }

    /// One gravity step; identical to a soft drop
    pub fn gravity_tick(&mut self) {
        self.soft_drop();
    }

    fn soft_drop(&mut self) {
        if !self.board.try_move_piece(Direction::Down) {
            // Blocked downward: the lock condition. The board commits the
            // piece, clears lines, and spawns the next one.
            let _ = self.board.lock_current();
        }
    }

    fn hard_drop(&mut self) {
        if self.board.current().is_none() {
            return;
        }
        while self.board.try_move_piece(Direction::Down) {}
        let _ = self.board.lock_current();
    }
}
