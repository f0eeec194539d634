//! Key mapping from terminal events to key tokens.

use crate::types::KeyToken;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard event to a key token.
///
/// Unmapped keys become [`KeyToken::Other`].
pub fn key_token(key: KeyEvent) -> KeyToken {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyToken::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => KeyToken::Up,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => KeyToken::Down,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => KeyToken::Left,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => KeyToken::Right,

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => KeyToken::Confirm,
        KeyCode::Char('\'')
        | KeyCode::Char('m')
        | KeyCode::Char('M')
        | KeyCode::Char('f')
        | KeyCode::Char('F') => KeyToken::Mark,

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyToken::Quit,

        _ => KeyToken::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(key_token(KeyEvent::from(KeyCode::Up)), KeyToken::Up);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Down)), KeyToken::Down);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Left)), KeyToken::Left);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Right)), KeyToken::Right);

        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('k'))), KeyToken::Up);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('J'))), KeyToken::Down);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('h'))), KeyToken::Left);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('L'))), KeyToken::Right);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_token(KeyEvent::from(KeyCode::Enter)), KeyToken::Confirm);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char(' '))), KeyToken::Confirm);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('\''))), KeyToken::Mark);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('f'))), KeyToken::Mark);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('x'))), KeyToken::Other);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('q'))), KeyToken::Quit);
        assert_eq!(key_token(KeyEvent::from(KeyCode::Esc)), KeyToken::Quit);
        assert_eq!(
            key_token(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyToken::Quit
        );
        assert_eq!(key_token(KeyEvent::from(KeyCode::Char('c'))), KeyToken::Other);
    }
}
