//! Startup parameters and their validation.

use thiserror::Error;

use crate::types::{GridSize, CELL_COLUMNS, DEFAULT_MINES, MIN_SIDE};

/// Board dimensions plus mine count for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: GridSize,
    pub mines: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 2x2, got {0}x{1}")]
    TooSmall(u16, u16),
    #[error("need at least one mine")]
    NoMines,
    #[error("{mines} mines do not fit on a board of {cells} cells")]
    TooManyMines { mines: u32, cells: usize },
    #[error("terminal is {have_w}x{have_h}, board needs {need_w}x{need_h}")]
    TerminalTooSmall {
        need_w: u32,
        need_h: u32,
        have_w: u16,
        have_h: u16,
    },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            mines: DEFAULT_MINES,
        }
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16, mines: u32) -> Self {
        Self {
            size: GridSize::new(width, height),
            mines,
        }
    }

    /// Check `width >= 2`, `height >= 2` and `1 <= mines < width * height`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridSize { width, height } = self.size;
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(ConfigError::TooSmall(width, height));
        }
        if self.mines < 1 {
            return Err(ConfigError::NoMines);
        }
        let cells = self.size.cells();
        if self.mines as usize >= cells {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        Ok(())
    }

    /// Terminal columns and rows needed to show the board plus status bar.
    ///
    /// The width covers the board and the widest status bar this board can
    /// produce, `"{opened} / {target}    {flagged} / {mines}"` with every
    /// counter at its maximum.
    pub fn screen_extent(&self) -> (u32, u32) {
        let board_w = (u32::from(self.size.width) * u32::from(CELL_COLUMNS)).saturating_sub(1);
        let cells = self.size.cells() as u64;
        let target = cells.saturating_sub(u64::from(self.mines));
        let status_w = 2 * digits(target) + digits(cells) + digits(u64::from(self.mines)) + 10;
        let h = u32::from(self.size.height) + 1;
        (board_w.max(status_w), h)
    }

    /// Check the board fits a terminal of `cols x rows`.
    pub fn check_fits(&self, cols: u16, rows: u16) -> Result<(), ConfigError> {
        let (need_w, need_h) = self.screen_extent();
        if u32::from(cols) < need_w || u32::from(rows) < need_h {
            return Err(ConfigError::TerminalTooSmall {
                need_w,
                need_h,
                have_w: cols,
                have_h: rows,
            });
        }
        Ok(())
    }
}

fn digits(n: u64) -> u32 {
    n.checked_ilog10().unwrap_or(0) + 1
}
