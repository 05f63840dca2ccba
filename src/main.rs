//! Terminal runner (default binary).
//!
//! Hosts the simulation core: polls crossterm for input, drives the
//! gravity timer, and redraws after every frame. The board's event queue
//! feeds the status line.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::controller::Controller;
use gridfall::core::Board;
use gridfall::events::BoardEvent;
use gridfall::input::{collect_action, should_quit, ActionBuffer};
use gridfall::term::{GameView, TerminalRenderer};
use gridfall::types::{
    GameAction, DEFAULT_HEIGHT, DEFAULT_WIDTH, DROP_INTERVAL_MS, FAST_DROP_INTERVAL_MS,
};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut board = Board::new();
    board.initialize(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
    board.spawn_new_piece();
    let mut controller = Controller::new(board);

    let mut view = GameView::new();
    let mut status = String::new();
    let mut last_drop = Instant::now();
    let mut fast_drop = false;

    loop {
        let next = controller.board_mut().next_shape();
        let mut lines = view.render(controller.board(), next);
        if !status.is_empty() {
            lines.push(status.clone());
        }
        term.draw(&lines)?;

        if controller.board().is_game_over() {
            // Leave the final grid and score on screen until a key.
            wait_for_key()?;
            return Ok(());
        }

        let drop_interval = Duration::from_millis(if fast_drop {
            FAST_DROP_INTERVAL_MS
        } else {
            DROP_INTERVAL_MS
        });
        let timeout = drop_interval
            .checked_sub(last_drop.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        let mut actions = ActionBuffer::new();
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if key.code == crossterm::event::KeyCode::Char('g') {
                        view.debug_grid = !view.debug_grid;
                    }
                    collect_action(&mut actions, key.code);
                }
            }
        }

        fast_drop = actions.contains(&GameAction::SoftDrop);
        for action in actions {
            controller.apply(action);
        }

        if last_drop.elapsed() >= drop_interval {
            last_drop = Instant::now();
            controller.gravity_tick();
        }

        if let Some(event) = controller.board_mut().drain_events().into_iter().last() {
            status = describe_event(&event);
        }
    }
}

fn describe_event(event: &BoardEvent) -> String {
    match event {
        BoardEvent::BoardInitialized { width, height } => {
            format!("board {}x{}", width, height)
        }
        BoardEvent::PieceLocked { kind, .. } => format!("locked {}", kind.as_str()),
        BoardEvent::NewPieceSpawned { kind } => format!("spawned {}", kind.as_str()),
        BoardEvent::LinesCleared { count, score } => {
            format!("cleared {} (score {})", count, score)
        }
        BoardEvent::GameOver => "game over".to_string(),
        BoardEvent::PieceMovementFailed { .. } => "blocked".to_string(),
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
