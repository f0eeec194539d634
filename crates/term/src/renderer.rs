//! TerminalRenderer: executes draw commands on a real terminal.
//!
//! The board is drawn inline on a cleared screen rather than on the alternate
//! screen, so the final board and session message stay visible after exit.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::command::DrawCommand;
use crate::palette::{glyph_cell, tone_style, CellStyle, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Enable raw mode, clear the screen and home the cursor.
    ///
    /// A [`crate::RenderTracker`] created afterwards starts in sync.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Write one batch of commands and flush.
    pub fn execute(&mut self, commands: &[DrawCommand]) -> Result<()> {
        if commands.is_empty() {
            return Ok(());
        }
        self.buf.clear();
        encode_into(commands, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode draw commands as terminal control sequences into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_into(commands: &[DrawCommand], out: &mut Vec<u8>) -> Result<()> {
    for command in commands {
        match command {
            DrawCommand::MoveTo { x, y } => {
                out.queue(cursor::MoveTo(*x, *y))?;
            }
            DrawCommand::MoveToColumn(x) => {
                out.queue(cursor::MoveToColumn(*x))?;
            }
            DrawCommand::Glyph(glyph) => {
                let cell = glyph_cell(*glyph);
                print_styled(out, cell.style, cell.ch)?;
            }
            DrawCommand::Text { text, tone } => {
                print_styled(out, tone_style(*tone), text.as_str())?;
            }
            DrawCommand::ClearLine => {
                out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            }
            DrawCommand::NewLine => {
                out.queue(Print("\r\n"))?;
            }
        }
    }
    Ok(())
}

fn print_styled<T: std::fmt::Display>(out: &mut Vec<u8>, style: CellStyle, content: T) -> Result<()> {
    if style == CellStyle::default() {
        out.queue(Print(content))?;
        return Ok(());
    }
    if style.reverse {
        out.queue(SetAttribute(Attribute::Reverse))?;
    }
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        out.queue(SetBackgroundColor(rgb_to_color(bg)))?;
    }
    out.queue(Print(content))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
