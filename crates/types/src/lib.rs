//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, input decoding, terminal rendering).
//!
//! # Coordinates
//!
//! Cells are addressed by [`Coord`] with `col` growing left to right and `row`
//! growing top to bottom. Boards are stored row-major (`row * width + col`).
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 9 | Beginner board width |
//! | `DEFAULT_HEIGHT` | 9 | Beginner board height |
//! | `DEFAULT_MINES` | 10 | Beginner mine count |
//! | `MIN_SIDE` | 2 | Smallest accepted width/height |
//!
//! # Examples
//!
//! ```
//! use tui_mines_types::{CellState, Coord, Direction, GridSize};
//!
//! let size = GridSize::new(9, 9);
//! assert_eq!(size.cells(), 81);
//!
//! // Movement wraps at the edges.
//! let c = Coord::new(0, 0).step(Direction::Up, size);
//! assert_eq!(c, Coord::new(0, 8));
//!
//! // Marks cycle Hidden -> Flagged -> Questioned -> Hidden.
//! assert_eq!(CellState::Hidden.next_mark(), Some(CellState::Flagged));
//! assert_eq!(CellState::Opened(3).next_mark(), None);
//! ```

/// Beginner board width.
pub const DEFAULT_WIDTH: u16 = 9;

/// Beginner board height.
pub const DEFAULT_HEIGHT: u16 = 9;

/// Beginner mine count.
pub const DEFAULT_MINES: u32 = 10;

/// Smallest accepted board side.
pub const MIN_SIDE: u16 = 2;

/// Terminal columns used per board cell (glyph + separator).
pub const CELL_COLUMNS: u16 = 2;

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.col < self.width && at.row < self.height
    }

    /// Row-major index of `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` lies outside the grid. Callers keep coordinates in range
    /// through wrapping cursor movement, so this is a programming error.
    #[inline(always)]
    pub fn index(&self, at: Coord) -> usize {
        assert!(
            self.contains(at),
            "coordinate ({}, {}) outside {}x{} grid",
            at.col,
            at.row,
            self.width,
            self.height
        );
        (at.row as usize) * (self.width as usize) + (at.col as usize)
    }

    /// Inverse of [`GridSize::index`].
    pub fn coord(&self, index: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((index % w) as u16, (index / w) as u16)
    }

    /// Iterate all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = *self;
        (0..size.cells()).map(move |i| size.coord(i))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub col: u16,
    pub row: u16,
}

impl Coord {
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Move one cell in `dir`, wrapping modularly at the grid edges.
    pub fn step(self, dir: Direction, size: GridSize) -> Self {
        match dir {
            Direction::Up => Self::new(self.col, wrap(self.row, size.height, -1)),
            Direction::Down => Self::new(self.col, wrap(self.row, size.height, 1)),
            Direction::Left => Self::new(wrap(self.col, size.width, -1), self.row),
            Direction::Right => Self::new(wrap(self.col, size.width, 1), self.row),
        }
    }
}

/// `(at + delta) mod len`, computed wide so sides up to `u16::MAX` cannot overflow.
fn wrap(at: u16, len: u16, delta: i32) -> u16 {
    (at as i32 + delta).rem_euclid(len as i32) as u16
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Visible state of a single cell.
///
/// `Hidden`, `Flagged` and `Questioned` cycle through marking; any of them
/// can become `Opened`, which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Questioned,
    /// Opened safe cell with its adjacent mine count (0..=8).
    Opened(u8),
}

impl CellState {
    /// Next state in the mark cycle, or `None` for opened cells.
    pub fn next_mark(self) -> Option<Self> {
        match self {
            CellState::Hidden => Some(CellState::Flagged),
            CellState::Flagged => Some(CellState::Questioned),
            CellState::Questioned => Some(CellState::Hidden),
            CellState::Opened(_) => None,
        }
    }

    pub fn is_opened(self) -> bool {
        matches!(self, CellState::Opened(_))
    }
}

/// What a board cell looks like on screen.
///
/// The first four variants mirror [`CellState`]; the rest only appear on the
/// final reveal after a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Hidden,
    Flagged,
    Questioned,
    Number(u8),
    /// Unflagged mine.
    Mine,
    /// The mine that ended the game.
    Detonated,
    /// Flag that sits on a mine.
    FlagCorrect,
    /// Flag that sits on a safe cell.
    FlagWrong,
}

impl From<CellState> for Glyph {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Hidden => Glyph::Hidden,
            CellState::Flagged => Glyph::Flagged,
            CellState::Questioned => Glyph::Questioned,
            CellState::Opened(n) => Glyph::Number(n),
        }
    }
}

/// Abstract key tokens produced by an input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// Marker announcing that the next token is an arrow code.
    ArrowPrefix,
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Mark,
    Quit,
    /// Anything the backend does not recognize.
    Other,
}

impl KeyToken {
    /// Decode a console scan byte read in normal state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mines_types::KeyToken;
    ///
    /// assert_eq!(KeyToken::from_scan_code(224), KeyToken::ArrowPrefix);
    /// assert_eq!(KeyToken::from_scan_code(13), KeyToken::Confirm);
    /// assert_eq!(KeyToken::from_scan_code(72), KeyToken::Other);
    /// ```
    pub fn from_scan_code(byte: u8) -> Self {
        match byte {
            224 => KeyToken::ArrowPrefix,
            13 => KeyToken::Confirm,
            b'\'' => KeyToken::Mark,
            3 => KeyToken::Quit,
            _ => KeyToken::Other,
        }
    }

    /// Decode the scan byte that follows an arrow prefix.
    ///
    /// ```
    /// use tui_mines_types::KeyToken;
    ///
    /// assert_eq!(KeyToken::from_arrow_scan_code(72), KeyToken::Up);
    /// assert_eq!(KeyToken::from_arrow_scan_code(13), KeyToken::Other);
    /// ```
    pub fn from_arrow_scan_code(byte: u8) -> Self {
        match byte {
            72 => KeyToken::Up,
            80 => KeyToken::Down,
            75 => KeyToken::Left,
            77 => KeyToken::Right,
            _ => KeyToken::Other,
        }
    }

    /// Direction carried by this token, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            KeyToken::Up => Some(Direction::Up),
            KeyToken::Down => Some(Direction::Down),
            KeyToken::Left => Some(Direction::Left),
            KeyToken::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Engine commands decoded from key tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Cursor moved to the given cell.
    MoveCursor(Coord),
    Open(Coord),
    ToggleMark(Coord),
    /// End the session.
    Quit,
}

/// Result of opening a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenResult {
    #[default]
    Continue,
    Win,
    Loss,
}
