//! Terminal rendering module.
//!
//! Game code never writes escape sequences itself. It describes changes to a
//! [`RenderTracker`], which turns them into a minimal [`DrawCommand`] stream
//! while tracking where the terminal cursor is believed to be. The
//! [`TerminalRenderer`] backend executes that stream with crossterm.
//!
//! The tracker never asks the terminal where the cursor is, so it must be the
//! only thing that moves it. Any output written around it desynchronizes the
//! belief.

pub mod command;
pub mod palette;
pub mod renderer;
pub mod tracker;

pub use tui_mines_types as types;

pub use command::{DrawCommand, Tone};
pub use palette::{glyph_cell, tone_style, Cell, CellStyle, Rgb};
pub use renderer::{encode_into, TerminalRenderer};
pub use tracker::{RenderTracker, StatusLine};
