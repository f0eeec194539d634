//! Glyph characters and colors.

use crate::command::Tone;
use crate::types::Glyph;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal styling. `None` colors keep the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub reverse: bool,
}

impl CellStyle {
    const fn fg(fg: Rgb) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
            reverse: false,
        }
    }

    const fn reversed(fg: Rgb) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
            reverse: true,
        }
    }
}

/// A single styled terminal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

/// Count colors, green for 1 through violet for 8.
const NUMBER_COLORS: [Rgb; 9] = [
    Rgb::new(100, 100, 100),
    Rgb::new(149, 253, 141),
    Rgb::new(193, 253, 141),
    Rgb::new(253, 252, 141),
    Rgb::new(253, 211, 141),
    Rgb::new(253, 165, 141),
    Rgb::new(253, 141, 176),
    Rgb::new(253, 141, 220),
    Rgb::new(237, 141, 253),
];

const MINE_RED: Rgb = Rgb::new(255, 0, 0);

pub fn glyph_cell(glyph: Glyph) -> Cell {
    let (ch, style) = match glyph {
        Glyph::Hidden => (
            '.',
            CellStyle {
                fg: None,
                bg: Some(Rgb::new(64, 64, 64)),
                reverse: false,
            },
        ),
        Glyph::Flagged => ('!', CellStyle::reversed(Rgb::new(255, 255, 0))),
        Glyph::Questioned => ('?', CellStyle::reversed(Rgb::new(224, 152, 203))),
        Glyph::Number(n) => {
            let n = n.min(8);
            (char::from(b'0' + n), CellStyle::fg(NUMBER_COLORS[n as usize]))
        }
        Glyph::Mine => ('X', CellStyle::fg(MINE_RED)),
        Glyph::Detonated => ('X', CellStyle::reversed(MINE_RED)),
        Glyph::FlagCorrect => ('!', CellStyle::reversed(Rgb::new(149, 253, 141))),
        Glyph::FlagWrong => ('!', CellStyle::reversed(Rgb::new(156, 156, 156))),
    };
    Cell { ch, style }
}

pub fn tone_style(tone: Tone) -> CellStyle {
    match tone {
        Tone::Plain | Tone::Message => CellStyle::default(),
        Tone::Progress => CellStyle::fg(Rgb::new(138, 244, 119)),
        Tone::Flags => CellStyle::fg(Rgb::new(244, 204, 119)),
    }
}
