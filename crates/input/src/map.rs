//! Key mapping from terminal events to shell edits and game actions.

use crate::types::{GameAction, ShellInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Up => Some(GameAction::Up),
        KeyCode::Down => Some(GameAction::Down),
        KeyCode::Left => Some(GameAction::Left),
        KeyCode::Right => Some(GameAction::Right),

        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Confirm),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::Flag),

        KeyCode::Esc => Some(GameAction::Exit),

        _ => None,
    }
}

/// Map keyboard input to edits of the command line.
pub fn handle_shell_key(key: KeyEvent) -> Option<ShellInput> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(ShellInput::Insert(ch)),
        KeyCode::Backspace => Some(ShellInput::Backspace),
        KeyCode::Enter => Some(ShellInput::Submit),
        _ => None,
    }
}

/// Presses and terminal auto-repeat drive the UI; releases do not.
pub fn is_actionable(key: KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(GameAction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), Some(GameAction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), Some(GameAction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), Some(GameAction::Right));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(GameAction::Flag)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('F'))),
            Some(GameAction::Flag)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), Some(GameAction::Exit));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_shell_keys() {
        assert_eq!(
            handle_shell_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(ShellInput::Insert('H'))
        );
        assert_eq!(
            handle_shell_key(KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            Some(ShellInput::Insert('E'))
        );
        assert_eq!(
            handle_shell_key(KeyEvent::from(KeyCode::Backspace)),
            Some(ShellInput::Backspace)
        );
        assert_eq!(
            handle_shell_key(KeyEvent::from(KeyCode::Enter)),
            Some(ShellInput::Submit)
        );
        assert_eq!(
            handle_shell_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_is_not_actionable() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(!is_actionable(release));
        assert!(is_actionable(KeyEvent::from(KeyCode::Left)));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }
}
