//! Core module - pure simulation logic with no I/O dependencies
//!
//! Everything the presentation layer needs is exposed through the board's
//! accessors and its event queue.

pub mod board;
pub mod piece;
pub mod rng;
pub mod spawner;

// Re-export commonly used types
pub use board::{Board, BoardError};
pub use piece::{shape_of, Piece, Shape};
pub use rng::SimpleRng;
pub use spawner::Spawner;
