//! Board event plumbing.
//!
//! Each notification is a plain enum value pushed into a queue owned by
//! the board; the presentation layer drains the queue once per frame.
//! Payloads carry world-space positions so observers never need grid
//! internals.

use crate::geometry::WorldPos;
use crate::types::ShapeKind;

/// Notifications emitted by the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardEvent {
    /// Successful `initialize(width, height)`
    BoardInitialized { width: i32, height: i32 },
    /// A piece was committed to the grid
    PieceLocked {
        kind: ShapeKind,
        position: WorldPos,
        rotation_degrees: f32,
    },
    /// A new piece entered play
    NewPieceSpawned { kind: ShapeKind },
    /// One or more rows were cleared; `score` is the new running total
    LinesCleared { count: u32, score: u32 },
    /// No valid spawn position remains
    GameOver,
    /// Validation rejected a placement at the given world position
    PieceMovementFailed { position: WorldPos },
}

/// FIFO queue of pending board events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Vec<BoardEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: BoardEvent) {
        self.pending.push(event);
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
