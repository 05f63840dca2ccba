//! Key binding layer for the terminal front-end.
//!
//! Maps crossterm key events onto the five discrete game actions. Multiple
//! key events can arrive inside one poll window, so `collect_actions`
//! buffers them without allocating.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Per-poll-window action buffer
pub type ActionBuffer = ArrayVec<GameAction, 8>;

/// Map a key press to a game action, if it is bound
pub fn action_for_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        _ => None,
    }
}

/// Whether this key event should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Append the action for `code` (if bound) to `buffer`, dropping input
/// beyond the buffer's capacity for this window.
pub fn collect_action(buffer: &mut ActionBuffer, code: KeyCode) {
    if let Some(action) = action_for_key(code) {
        let _ = buffer.try_push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_and_wasd_bindings_agree() {
        assert_eq!(action_for_key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(
            action_for_key(KeyCode::Char('a')),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(action_for_key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(action_for_key(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(action_for_key(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(
            action_for_key(KeyCode::Char(' ')),
            Some(GameAction::HardDrop)
        );
        assert_eq!(action_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(should_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn buffer_drops_overflow_instead_of_panicking() {
        let mut buffer = ActionBuffer::new();
        for _ in 0..20 {
            collect_action(&mut buffer, KeyCode::Left);
        }
        assert_eq!(buffer.len(), buffer.capacity());
    }
}
