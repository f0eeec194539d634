//! RenderTracker: state deltas in, minimal draw commands out.
//!
//! The tracker keeps the believed terminal cursor position and updates it for
//! every command that moves the real cursor, so moves that would land where the
//! cursor already is are skipped and same-row moves use the cheaper
//! column-only form.
//!
//! Screen layout: cell `(col, row)` is drawn at `x = col * CELL_COLUMNS`,
//! `y = row`; the columns in between are blank separators. The status bar is
//! the row right below the board.

use std::mem;

use crate::command::{DrawCommand, Tone};
use crate::types::{Coord, Glyph, GridSize, CELL_COLUMNS};

/// Counters shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub opened: u32,
    pub target: u32,
    pub flagged: u32,
    pub mines: u32,
}

#[derive(Debug, Clone)]
pub struct RenderTracker {
    size: GridSize,
    /// Believed cursor position (screen columns, rows).
    cursor: (u16, u16),
    out: Vec<DrawCommand>,
}

impl RenderTracker {
    /// The backend must have put the cursor at the board origin.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cursor: (0, 0),
            out: Vec::with_capacity(64),
        }
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn status_row(&self) -> u16 {
        self.size.height
    }

    /// Screen position of a board cell.
    ///
    /// Terminal coordinates are `u16`; columns past the last addressable one
    /// saturate.
    pub fn cell_origin(at: Coord) -> (u16, u16) {
        (at.col.saturating_mul(CELL_COLUMNS), at.row)
    }

    /// Commands queued since the last call.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        mem::take(&mut self.out)
    }

    /// Queued commands, without draining them.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.out
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        let (cx, cy) = self.cursor;
        if (x, y) == (cx, cy) {
            return;
        }
        if y != cy {
            self.out.push(DrawCommand::MoveTo { x, y });
        } else if x == cx.saturating_add(1) && self.is_separator(cx, cy) {
            // Stepping over a blank separator is one byte.
            self.out.push(DrawCommand::text(" ", Tone::Plain));
        } else {
            self.out.push(DrawCommand::MoveToColumn(x));
        }
        self.cursor = (x, y);
    }

    /// Draw `glyph` on board cell `at`.
    pub fn paint(&mut self, at: Coord, glyph: Glyph) {
        let (x, y) = Self::cell_origin(at);
        self.move_to(x, y);
        self.out.push(DrawCommand::Glyph(glyph));
        self.cursor.0 = self.cursor.0.saturating_add(1);
    }

    /// Put the cursor back on board cell `at`.
    pub fn park(&mut self, at: Coord) {
        let (x, y) = Self::cell_origin(at);
        self.move_to(x, y);
    }

    pub fn text(&mut self, text: impl Into<String>, tone: Tone) {
        let text = text.into();
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        self.out.push(DrawCommand::Text { text, tone });
        self.cursor.0 = self.cursor.0.saturating_add(width);
    }

    pub fn clear_line(&mut self) {
        self.out.push(DrawCommand::ClearLine);
    }

    pub fn newline(&mut self) {
        self.out.push(DrawCommand::NewLine);
        self.cursor = (0, self.cursor.1.saturating_add(1));
    }

    /// Redraw the status bar, then return the cursor to where it was.
    pub fn status(&mut self, status: StatusLine) {
        let saved = self.cursor;
        self.move_to(0, self.status_row());
        self.clear_line();
        self.text(format!("{} / {}", status.opened, status.target), Tone::Progress);
        self.text("    ", Tone::Plain);
        self.text(format!("{} / {}", status.flagged, status.mines), Tone::Flags);
        self.move_to(saved.0, saved.1);
    }

    /// Replace the status bar with `message` and leave the cursor below it.
    pub fn message(&mut self, message: &str) {
        self.move_to(0, self.status_row());
        self.clear_line();
        self.text(message, Tone::Message);
        self.newline();
    }

    fn is_separator(&self, x: u16, y: u16) -> bool {
        let board_w = (u32::from(self.size.width) * u32::from(CELL_COLUMNS)).saturating_sub(1);
        y < self.size.height && u32::from(x) < board_w && x % CELL_COLUMNS == 1
    }
}
