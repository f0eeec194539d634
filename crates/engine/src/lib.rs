//! Game session driver.
//!
//! Ties the pieces together in the order a key press flows through them:
//! [`input`](crate::input) decodes the token, [`core`](crate::core) applies
//! the command, and the [`term`](crate::term) tracker turns the resulting
//! changes into draw commands. Everything here is pure; the binary owns the
//! terminal and the blocking key read.
//!
//! # Example
//!
//! ```
//! use tui_mines_core::{Board, GameState};
//! use tui_mines_engine::{Session, SessionEnd};
//! use tui_mines_types::{Coord, GridSize, KeyToken};
//!
//! let board = Board::from_mines(GridSize::new(3, 3), &[Coord::new(2, 2)]);
//! let mut session = Session::new(GameState::with_board(board));
//! let _first_frame = session.start();
//!
//! let step = session.handle(KeyToken::Confirm);
//! assert_eq!(step.end, Some(SessionEnd::Won));
//! ```

pub mod session;

pub use tui_mines_core as core;
pub use tui_mines_input as input;
pub use tui_mines_term as term;
pub use tui_mines_types as types;

pub use session::{Session, SessionEnd, Step, LOSS_MESSAGE, WIN_MESSAGE};
