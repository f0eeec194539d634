//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **no dependencies** on the terminal, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Boards can be built cell by cell with [`Board::from_mines`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: mine layout and uniform random placement
//! - [`neighbors`]: clipped Moore neighborhoods and adjacent-mine counts
//! - [`flood`]: breadth-first reveal of zero-count regions
//! - [`game_state`]: visible cells, counters, open/mark operations
//! - [`config`]: startup parameters and validation
//!
//! # Game Rules
//!
//! - Opening a mine loses, opening every safe cell wins
//! - The first open of a session is always safe
//! - Opening a cell with no adjacent mines opens its whole zero region plus
//!   the numbered border around it
//! - Marks cycle Hidden → Flagged → Questioned → Hidden
//!
//! # Example
//!
//! ```
//! use tui_mines_core::{Board, GameState};
//! use tui_mines_types::{Coord, GridSize, OpenResult};
//!
//! let board = Board::from_mines(GridSize::new(3, 3), &[Coord::new(2, 2)]);
//! let mut game = GameState::with_board(board);
//!
//! // Opening a corner floods the board.
//! assert_eq!(game.open(Coord::new(0, 0)), OpenResult::Win);
//! assert_eq!(game.opened_count(), 8);
//! ```

pub mod board;
pub mod config;
pub mod flood;
pub mod game_state;
pub mod neighbors;

pub use tui_mines_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use flood::flood_fill;
pub use game_state::GameState;
pub use neighbors::{count_adjacent_mines, neighbors};
