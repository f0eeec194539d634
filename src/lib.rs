//! TUI Mines (workspace facade crate).
//!
//! This package exposes the `tui_mines::{core,engine,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_mines_core as core;
pub use tui_mines_engine as engine;
pub use tui_mines_input as input;
pub use tui_mines_term as term;
pub use tui_mines_types as types;
