//! Abstract draw commands consumed by a render backend.

use crate::types::Glyph;

/// Color role of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    /// Opened-cell progress in the status bar.
    Progress,
    /// Flag count in the status bar.
    Flags,
    /// End-of-session message.
    Message,
}

/// One step of terminal output.
///
/// Coordinates are screen cells relative to the board origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    MoveTo { x: u16, y: u16 },
    /// Move within the current row.
    MoveToColumn(u16),
    /// Draw one board glyph; the cursor advances one column.
    Glyph(Glyph),
    /// Draw text; the cursor advances by its character count.
    Text { text: String, tone: Tone },
    /// Erase the current row without moving the cursor.
    ClearLine,
    /// Carriage return plus line feed.
    NewLine,
}

impl DrawCommand {
    pub fn text(text: impl Into<String>, tone: Tone) -> Self {
        DrawCommand::Text {
            text: text.into(),
            tone,
        }
    }
}
