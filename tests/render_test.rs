//! Render tracker tests against a simulated terminal.
//!
//! `VirtualScreen` executes draw commands the way a terminal would, keeping its
//! own cursor. After every step the tracker's believed cursor must match the
//! screen's, and the board area must show exactly what the game state says.

use tui_mines::core::{Board, GameConfig, GameState};
use tui_mines::engine::{Session, SessionEnd, LOSS_MESSAGE, WIN_MESSAGE};
use tui_mines::term::{glyph_cell, DrawCommand};
use tui_mines::types::{Coord, Glyph, GridSize, KeyToken, CELL_COLUMNS};

struct VirtualScreen {
    width: u16,
    rows: Vec<Vec<char>>,
    cursor: (u16, u16),
}

impl VirtualScreen {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            rows: vec![vec![' '; width as usize]; height as usize],
            cursor: (0, 0),
        }
    }

    fn put(&mut self, ch: char) {
        let (x, y) = self.cursor;
        if x < self.width {
            self.rows[y as usize][x as usize] = ch;
        }
        self.cursor.0 += 1;
    }

    fn apply(&mut self, commands: &[DrawCommand]) {
        for c in commands {
            match c {
                DrawCommand::MoveTo { x, y } => self.cursor = (*x, *y),
                DrawCommand::MoveToColumn(x) => self.cursor.0 = *x,
                DrawCommand::Glyph(g) => self.put(glyph_cell(*g).ch),
                DrawCommand::Text { text, .. } => text.chars().for_each(|ch| self.put(ch)),
                DrawCommand::ClearLine => {
                    let y = self.cursor.1 as usize;
                    self.rows[y].iter_mut().for_each(|ch| *ch = ' ');
                }
                DrawCommand::NewLine => self.cursor = (0, self.cursor.1 + 1),
            }
        }
    }

    fn row(&self, y: u16) -> String {
        self.rows[y as usize].iter().collect::<String>().trim_end().to_string()
    }

    fn at_cell(&self, at: Coord) -> char {
        self.rows[at.row as usize][(at.col * CELL_COLUMNS) as usize]
    }
}

fn screen_for(size: GridSize) -> VirtualScreen {
    VirtualScreen::new(size.width * CELL_COLUMNS + 60, size.height + 3)
}

fn assert_board_matches(screen: &VirtualScreen, session: &Session) {
    let game = session.game();
    for at in game.size().coords() {
        let expected = glyph_cell(Glyph::from(game.cell(at))).ch;
        assert_eq!(screen.at_cell(at), expected, "cell {at:?}");
    }
    // Separators stay blank.
    for y in 0..game.size().height {
        for col in 0..game.size().width - 1 {
            let x = (col * CELL_COLUMNS + 1) as usize;
            assert_eq!(screen.rows[y as usize][x], ' ', "separator {x},{y}");
        }
    }
}

fn cursor_cell(session: &Session) -> (u16, u16) {
    let c = session.cursor();
    (c.col * CELL_COLUMNS, c.row)
}

#[test]
fn initial_frame_shows_hidden_board_and_status() {
    let size = GridSize::new(5, 4);
    let mut session = Session::new(GameState::new(GameConfig::new(5, 4, 3), 11));
    let mut screen = screen_for(size);

    screen.apply(&session.start());

    assert_eq!(screen.row(0), ". . . . .");
    assert_eq!(screen.row(3), ". . . . .");
    assert_eq!(screen.row(4), "0 / 17    0 / 3");
    assert_eq!(screen.cursor, (0, 0));
    assert_eq!(session.tracker().cursor(), screen.cursor);
}

#[test]
fn belief_never_desyncs_during_random_play() {
    let keys = [
        KeyToken::Right,
        KeyToken::Down,
        KeyToken::Mark,
        KeyToken::Left,
        KeyToken::Confirm,
        KeyToken::Up,
        KeyToken::Right,
        KeyToken::ArrowPrefix,
        KeyToken::Down,
        KeyToken::Mark,
        KeyToken::Mark,
        KeyToken::Confirm,
        KeyToken::Other,
    ];
    for seed in 0..40u64 {
        let config = GameConfig::new(8, 6, 8);
        let mut session = Session::new(GameState::new(config, seed));
        let mut screen = screen_for(config.size);
        screen.apply(&session.start());

        for n in 0..300usize {
            let token = keys[(seed as usize * 5 + n * n + n / 3) % keys.len()];

            let step = session.handle(token);
            screen.apply(&step.commands);
            assert_eq!(session.tracker().cursor(), screen.cursor, "seed {seed}");

            if step.end.is_some() {
                break;
            }
            assert_board_matches(&screen, &session);
            assert_eq!(screen.cursor, cursor_cell(&session), "seed {seed}");

            let game = session.game();
            let status = format!(
                "{} / {}    {} / {}",
                game.opened_count(),
                game.target_opened_count(),
                game.flagged_count(),
                game.mine_count()
            );
            assert_eq!(screen.row(config.size.height), status, "seed {seed}");
        }

        let step = session.handle(KeyToken::Quit);
        screen.apply(&step.commands);
        assert_eq!(session.tracker().cursor(), screen.cursor, "seed {seed}");
    }
}

#[test]
fn loss_screen_shows_mines_and_message() {
    let size = GridSize::new(3, 3);
    let board = Board::from_mines(size, &[Coord::new(2, 2), Coord::new(0, 2)]);
    let mut session = Session::new(GameState::with_board(board));
    let mut screen = screen_for(size);
    screen.apply(&session.start());

    // (1,1) is safe and numbered; then flag (0,2) and step onto (2,2).
    for token in [KeyToken::Right, KeyToken::Down, KeyToken::Confirm] {
        screen.apply(&session.handle(token).commands);
    }
    for token in [KeyToken::Down, KeyToken::Left, KeyToken::Mark] {
        screen.apply(&session.handle(token).commands);
    }
    screen.apply(&session.handle(KeyToken::Left).commands);
    let step = session.handle(KeyToken::Confirm);
    screen.apply(&step.commands);

    assert_eq!(step.end, Some(SessionEnd::Lost));
    assert_eq!(screen.at_cell(Coord::new(1, 1)), '2');
    assert_eq!(screen.at_cell(Coord::new(0, 2)), glyph_cell(Glyph::FlagCorrect).ch);
    assert_eq!(screen.at_cell(Coord::new(2, 2)), glyph_cell(Glyph::Detonated).ch);
    assert_eq!(screen.row(3), LOSS_MESSAGE);
    assert_eq!(screen.cursor, (0, 4));
}

#[test]
fn win_screen_shows_message_below_board() {
    let size = GridSize::new(3, 3);
    let board = Board::from_mines(size, &[Coord::new(2, 2)]);
    let mut session = Session::new(GameState::with_board(board));
    let mut screen = screen_for(size);
    screen.apply(&session.start());

    let step = session.handle(KeyToken::Confirm);
    screen.apply(&step.commands);

    assert_eq!(step.end, Some(SessionEnd::Won));
    assert_eq!(screen.row(0), "0 0 0");
    assert_eq!(screen.row(1), "0 1 1");
    assert_eq!(screen.row(2), "0 1 .");
    assert_eq!(screen.row(3), WIN_MESSAGE);
    assert_eq!(session.tracker().cursor(), screen.cursor);
}
