//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into abstract [`crate::types::KeyToken`]s and decodes
//! token streams into engine [`crate::types::Command`]s with a small state
//! machine that also understands prefixed arrow sequences.

pub mod controller;
pub mod map;

pub use tui_mines_types as types;

pub use controller::{InputController, InputState};
pub use map::key_token;
