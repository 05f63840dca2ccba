//! GameView: maps board state into terminal text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The grid's row 0 is the bottom of the well, so rows are emitted top
//! down. Each cell is two characters wide to compensate for terminal
//! glyph aspect ratio.

use crate::core::{shape_of, Board};
use crate::types::{Rotation, ShapeKind};

const LOCKED_CELL: &str = "[]";
const ACTIVE_CELL: &str = "()";
const EMPTY_CELL: &str = " .";

/// A lightweight text renderer for the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    /// Draw row/column indices around the well
    pub debug_grid: bool,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the board, active piece, lookahead, and score into lines.
    ///
    /// `next` is the spawner lookahead (queried separately since the
    /// preview is a spawner concern, not a grid concern).
    pub fn render(&self, board: &Board, next: Option<ShapeKind>) -> Vec<String> {
        let width = board.width();
        let height = board.height();
        let mut lines = Vec::with_capacity(height as usize + 8);

        if !board.is_initialized() {
            lines.push("board not initialized".to_string());
            return lines;
        }

        let active_cells = board.current().map(|piece| piece.cells());

        lines.push(self.top_border(width));
        for y in (0..height).rev() {
            let mut line = String::with_capacity(width as usize * 2 + 8);
            if self.debug_grid {
                line.push_str(&format!("{:>3} ", y));
            }
            line.push('|');
            for x in 0..width {
                let is_active = active_cells
                    .map(|cells| cells.iter().any(|c| c.x == x && c.y == y))
                    .unwrap_or(false);
                if is_active {
                    line.push_str(ACTIVE_CELL);
                } else if board.is_occupied(x, y) {
                    line.push_str(LOCKED_CELL);
                } else {
                    line.push_str(EMPTY_CELL);
                }
            }
            line.push('|');
            lines.push(line);
        }
        lines.push(self.bottom_border(width));
        if self.debug_grid {
            lines.push(self.column_indices(width));
        }

        lines.push(format!("score {}", board.score()));
        if let Some(kind) = next {
            lines.push(format!("next  {}", kind.as_str().to_uppercase()));
            lines.extend(preview_lines(kind));
        }
        if board.is_game_over() {
            lines.push("GAME OVER".to_string());
        }
        lines
    }

    fn top_border(&self, width: i32) -> String {
        let pad = if self.debug_grid { "    " } else { "" };
        format!("{}+{}+", pad, "-".repeat(width as usize * 2))
    }

    fn bottom_border(&self, width: i32) -> String {
        self.top_border(width)
    }

    fn column_indices(&self, width: i32) -> String {
        let mut line = String::from("     ");
        for x in 0..width {
            line.push_str(&format!("{:<2}", x % 10));
        }
        line
    }
}

/// Render a shape's spawn orientation into its 4x4 preview box
fn preview_lines(kind: ShapeKind) -> Vec<String> {
    let shape = shape_of(kind, Rotation::North);
    let mut rows = vec![String::from("        "); 2];
    for &(dx, dy) in &shape {
        // All spawn orientations fit in the top two box rows.
        if let Some(row) = rows.get_mut(dy as usize) {
            row.replace_range(dx as usize * 2..dx as usize * 2 + 2, LOCKED_CELL);
        }
    }
    rows.into_iter()
        .map(|r| format!("  {}", r.trim_end()))
        .collect()
}
