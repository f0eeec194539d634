//! Session: one game from first paint to win, loss or quit.
//!
//! Each key token is processed to completion: decode, mutate the game, queue
//! draw commands. The caller flushes the returned commands and stops feeding
//! tokens once a [`SessionEnd`] is reported.

use crate::core::GameState;
use crate::input::InputController;
use crate::term::{DrawCommand, RenderTracker, StatusLine};
use crate::types::{CellState, Command, Coord, Glyph, KeyToken, OpenResult};

pub const LOSS_MESSAGE: &str = "You detonated a bomb. Better luck next time.";
pub const WIN_MESSAGE: &str = "You win. All the safe cells have been opened.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
}

/// Output of processing one key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub commands: Vec<DrawCommand>,
    pub end: Option<SessionEnd>,
}

pub struct Session {
    game: GameState,
    input: InputController,
    tracker: RenderTracker,
    end: Option<SessionEnd>,
}

impl Session {
    pub fn new(game: GameState) -> Self {
        let size = game.size();
        Self {
            game,
            input: InputController::new(size),
            tracker: RenderTracker::new(size),
            end: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cursor(&self) -> Coord {
        self.input.cursor()
    }

    pub fn tracker(&self) -> &RenderTracker {
        &self.tracker
    }

    pub fn end(&self) -> Option<SessionEnd> {
        self.end
    }

    /// Paint the whole board and status bar, cursor on the selected cell.
    pub fn start(&mut self) -> Vec<DrawCommand> {
        for at in self.game.size().coords() {
            self.tracker.paint(at, Glyph::from(self.game.cell(at)));
        }
        self.refresh_status();
        self.tracker.park(self.input.cursor());
        self.tracker.take()
    }

    /// Process one key token.
    pub fn handle(&mut self, token: KeyToken) -> Step {
        if self.end.is_some() {
            return self.step();
        }
        let command = self.input.feed(token);
        self.apply(command)
    }

    /// Process one raw console scan byte.
    pub fn handle_scan_code(&mut self, byte: u8) -> Step {
        if self.end.is_some() {
            return self.step();
        }
        let command = self.input.feed_scan_code(byte);
        self.apply(command)
    }

    fn apply(&mut self, command: Option<Command>) -> Step {
        match command {
            None => {}
            Some(Command::MoveCursor(at)) => self.tracker.park(at),
            Some(Command::ToggleMark(at)) => self.toggle_mark(at),
            Some(Command::Open(at)) => self.open(at),
            Some(Command::Quit) => {
                let row = self.tracker.status_row();
                self.tracker.move_to(0, row);
                self.tracker.newline();
                self.finish(SessionEnd::Quit);
            }
        }
        self.step()
    }

    fn toggle_mark(&mut self, at: Coord) {
        let before = self.game.cell(at);
        let after = self.game.toggle_mark(at);
        if after != before {
            self.tracker.paint(at, Glyph::from(after));
            self.refresh_status();
        }
        self.tracker.park(at);
    }

    fn open(&mut self, at: Coord) {
        if self.game.cell(at) != CellState::Hidden {
            return;
        }
        match self.game.open(at) {
            OpenResult::Loss => {
                self.reveal_mines(at);
                self.tracker.message(LOSS_MESSAGE);
                self.finish(SessionEnd::Lost);
            }
            OpenResult::Win => {
                self.paint_revealed();
                self.tracker.message(WIN_MESSAGE);
                self.finish(SessionEnd::Won);
            }
            OpenResult::Continue => {
                self.paint_revealed();
                self.refresh_status();
                self.tracker.park(at);
            }
        }
    }

    fn paint_revealed(&mut self) {
        for &c in self.game.last_revealed() {
            self.tracker.paint(c, Glyph::from(self.game.cell(c)));
        }
    }

    /// Show every mine and judge every flag; the detonated mine stands out.
    fn reveal_mines(&mut self, detonated: Coord) {
        let board = self.game.board();
        for at in self.game.size().coords() {
            let flagged = self.game.cell(at) == CellState::Flagged;
            let glyph = match (board.is_mine(at), flagged) {
                _ if at == detonated => Glyph::Detonated,
                (true, true) => Glyph::FlagCorrect,
                (true, false) => Glyph::Mine,
                (false, true) => Glyph::FlagWrong,
                (false, false) => continue,
            };
            self.tracker.paint(at, glyph);
        }
    }

    fn finish(&mut self, end: SessionEnd) {
        tracing::info!(
            ?end,
            opened = self.game.opened_count(),
            target = self.game.target_opened_count(),
            flagged = self.game.flagged_count(),
            "session ended"
        );
        self.end = Some(end);
    }

    fn refresh_status(&mut self) {
        let status = StatusLine {
            opened: self.game.opened_count(),
            target: self.game.target_opened_count(),
            flagged: self.game.flagged_count(),
            mines: self.game.mine_count(),
        };
        self.tracker.status(status);
    }

    fn step(&mut self) -> Step {
        Step {
            commands: self.tracker.take(),
            end: self.end,
        }
    }
}
