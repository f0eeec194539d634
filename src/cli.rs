//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use tui_mines::core::GameConfig;
use tui_mines::types::{DEFAULT_HEIGHT, DEFAULT_MINES, DEFAULT_WIDTH};

/// Terminal Minesweeper.
///
/// Arrows or h/j/k/l move, Enter or Space opens, ' (or m/f) cycles
/// flag/question marks, q, Esc or Ctrl+C quits.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    after_help = "WIDTH, HEIGHT and MINES go together: give all three or none \
                  (none means 9 9 10). Giving only some of them is an error, \
                  not a silent fallback to the defaults."
)]
pub struct Args {
    /// Board width in cells
    #[arg(requires_all = ["height", "mines"])]
    pub width: Option<u16>,
    /// Board height in cells
    #[arg(requires_all = ["width", "mines"])]
    pub height: Option<u16>,
    /// Number of mines
    #[arg(requires_all = ["width", "height"])]
    pub mines: Option<u32>,
    /// Seed for the mine layout (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Game configuration; defaults to the 9x9 beginner board with 10 mines.
    pub fn config(&self) -> GameConfig {
        GameConfig::new(
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
            self.mines.unwrap_or(DEFAULT_MINES),
        )
    }
}
