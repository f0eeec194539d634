//! Two-state key decoder.
//!
//! `Normal` maps single tokens straight to commands. An [`KeyToken::ArrowPrefix`]
//! switches to `AwaitingArrowCode`, where the next token picks a direction;
//! whatever that token is, control returns to `Normal` afterwards.

use crate::types::{Command, Coord, GridSize, KeyToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Normal,
    AwaitingArrowCode,
}

/// Decodes key tokens into engine commands and owns the board cursor.
#[derive(Debug, Clone)]
pub struct InputController {
    state: InputState,
    cursor: Coord,
    size: GridSize,
}

impl InputController {
    /// Start in `Normal` with the cursor at the top-left cell.
    pub fn new(size: GridSize) -> Self {
        Self {
            state: InputState::Normal,
            cursor: Coord::default(),
            size,
        }
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Feed one token. Returns the command it completes, if any.
    pub fn feed(&mut self, token: KeyToken) -> Option<Command> {
        match self.state {
            InputState::AwaitingArrowCode => {
                self.state = InputState::Normal;
                self.move_cursor(token)
            }
            InputState::Normal => match token {
                KeyToken::ArrowPrefix => {
                    self.state = InputState::AwaitingArrowCode;
                    None
                }
                KeyToken::Confirm => Some(Command::Open(self.cursor)),
                KeyToken::Mark => Some(Command::ToggleMark(self.cursor)),
                KeyToken::Quit => Some(Command::Quit),
                // Backends that decode escape sequences themselves send bare arrows.
                KeyToken::Up | KeyToken::Down | KeyToken::Left | KeyToken::Right => {
                    self.move_cursor(token)
                }
                KeyToken::Other => None,
            },
        }
    }

    /// Feed one raw console scan byte, decoded according to the current state.
    pub fn feed_scan_code(&mut self, byte: u8) -> Option<Command> {
        let token = match self.state {
            InputState::Normal => KeyToken::from_scan_code(byte),
            InputState::AwaitingArrowCode => KeyToken::from_arrow_scan_code(byte),
        };
        self.feed(token)
    }

    fn move_cursor(&mut self, token: KeyToken) -> Option<Command> {
        let dir = token.direction()?;
        self.cursor = self.cursor.step(dir, self.size);
        Some(Command::MoveCursor(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_up_wraps_then_opens() {
        let mut input = InputController::new(GridSize::new(9, 9));

        assert_eq!(input.feed(KeyToken::ArrowPrefix), None);
        assert_eq!(input.state(), InputState::AwaitingArrowCode);
        assert_eq!(
            input.feed(KeyToken::Up),
            Some(Command::MoveCursor(Coord::new(0, 8)))
        );
        assert_eq!(input.state(), InputState::Normal);
        assert_eq!(input.feed(KeyToken::Confirm), Some(Command::Open(Coord::new(0, 8))));
    }

    #[test]
    fn unrecognized_arrow_code_returns_to_normal() {
        let mut input = InputController::new(GridSize::new(4, 4));

        input.feed(KeyToken::ArrowPrefix);
        assert_eq!(input.feed(KeyToken::Confirm), None);
        assert_eq!(input.state(), InputState::Normal);
        assert_eq!(input.cursor(), Coord::new(0, 0));

        // Back in Normal, Confirm opens again.
        assert_eq!(input.feed(KeyToken::Confirm), Some(Command::Open(Coord::new(0, 0))));
    }

    #[test]
    fn horizontal_moves_wrap() {
        let mut input = InputController::new(GridSize::new(3, 2));
        assert_eq!(
            input.feed(KeyToken::Left),
            Some(Command::MoveCursor(Coord::new(2, 0)))
        );
        assert_eq!(
            input.feed(KeyToken::Right),
            Some(Command::MoveCursor(Coord::new(0, 0)))
        );
        input.feed(KeyToken::Down);
        assert_eq!(
            input.feed(KeyToken::Down),
            Some(Command::MoveCursor(Coord::new(0, 0)))
        );
    }

    #[test]
    fn wraps_on_very_wide_and_tall_boards() {
        let mut input = InputController::new(GridSize::new(40000, 40000));
        assert_eq!(
            input.feed(KeyToken::Left),
            Some(Command::MoveCursor(Coord::new(39999, 0)))
        );
        assert_eq!(
            input.feed(KeyToken::Left),
            Some(Command::MoveCursor(Coord::new(39998, 0)))
        );
        assert_eq!(
            input.feed(KeyToken::Up),
            Some(Command::MoveCursor(Coord::new(39998, 39999)))
        );
        assert_eq!(
            input.feed(KeyToken::Up),
            Some(Command::MoveCursor(Coord::new(39998, 39998)))
        );
    }

    #[test]
    fn mark_quit_and_other() {
        let mut input = InputController::new(GridSize::new(3, 3));
        input.feed(KeyToken::Right);
        assert_eq!(
            input.feed(KeyToken::Mark),
            Some(Command::ToggleMark(Coord::new(1, 0)))
        );
        assert_eq!(input.feed(KeyToken::Other), None);
        assert_eq!(input.feed(KeyToken::Quit), Some(Command::Quit));
    }

    #[test]
    fn scan_codes_decode_by_state() {
        let mut input = InputController::new(GridSize::new(9, 9));

        // 'H' (72) in Normal is not an arrow.
        assert_eq!(input.feed_scan_code(72), None);
        assert_eq!(input.feed_scan_code(224), None);
        assert_eq!(
            input.feed_scan_code(72),
            Some(Command::MoveCursor(Coord::new(0, 8)))
        );
        assert_eq!(input.feed_scan_code(224), None);
        assert_eq!(
            input.feed_scan_code(77),
            Some(Command::MoveCursor(Coord::new(1, 8)))
        );
        assert_eq!(
            input.feed_scan_code(39),
            Some(Command::ToggleMark(Coord::new(1, 8)))
        );
        assert_eq!(input.feed_scan_code(13), Some(Command::Open(Coord::new(1, 8))));
        assert_eq!(input.feed_scan_code(3), Some(Command::Quit));
    }
}
