//! Game state - mine layout, visible cells and session counters
//!
//! `GameState` exclusively owns the [`Board`], the per-cell [`CellState`] grid
//! and the opened/flagged counters. Everything else reads it through the
//! query methods; only [`GameState::open`] and [`GameState::toggle_mark`]
//! mutate it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::config::GameConfig;
use crate::flood::flood_fill;
use crate::neighbors::count_adjacent_mines;
use crate::types::{CellState, Coord, GridSize, OpenResult};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cells: Vec<CellState>,
    opened: u32,
    flagged: u32,
    target: u32,
    /// Still waiting for the first successful open.
    first_move: bool,
    status: OpenResult,
    /// The mine that ended the game, if any.
    detonated: Option<Coord>,
    /// Cells opened by the most recent `open`, origin first.
    revealed: Vec<Coord>,
}

impl GameState {
    /// Generate a fresh board for `config` from `seed`.
    ///
    /// The same seed and config always produce the same layout.
    /// `config` must already be validated.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate(config.size, config.mines, &mut rng);
        tracing::debug!(
            width = config.size.width,
            height = config.size.height,
            mines = config.mines,
            seed,
            "board generated"
        );
        Self::with_board(board)
    }

    /// Start a session on a prepared board.
    pub fn with_board(board: Board) -> Self {
        let size = board.size();
        let target = size.cells() as u32 - board.mine_count();
        Self {
            cells: vec![CellState::Hidden; size.cells()],
            board,
            opened: 0,
            flagged: 0,
            target,
            first_move: true,
            status: OpenResult::Continue,
            detonated: None,
            revealed: Vec::new(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, at: Coord) -> CellState {
        self.cells[self.size().index(at)]
    }

    pub fn opened_count(&self) -> u32 {
        self.opened
    }

    pub fn flagged_count(&self) -> u32 {
        self.flagged
    }

    pub fn target_opened_count(&self) -> u32 {
        self.target
    }

    pub fn mine_count(&self) -> u32 {
        self.board.mine_count()
    }

    pub fn is_won(&self) -> bool {
        self.status == OpenResult::Win
    }

    pub fn is_lost(&self) -> bool {
        self.status == OpenResult::Loss
    }

    pub fn is_over(&self) -> bool {
        self.status != OpenResult::Continue
    }

    pub fn detonated(&self) -> Option<Coord> {
        self.detonated
    }

    /// Cells opened by the last call to [`GameState::open`], origin first.
    pub fn last_revealed(&self) -> &[Coord] {
        &self.revealed
    }

    /// Cycle the mark on `at`: Hidden -> Flagged -> Questioned -> Hidden.
    ///
    /// Opened cells are left unchanged. Returns the (possibly new) state.
    pub fn toggle_mark(&mut self, at: Coord) -> CellState {
        let idx = self.size().index(at);
        let current = self.cells[idx];
        let Some(next) = current.next_mark() else {
            return current;
        };
        if next == CellState::Flagged {
            self.flagged += 1;
        } else if current == CellState::Flagged {
            self.flagged -= 1;
        }
        self.cells[idx] = next;
        next
    }

    /// Open the cell at `at`.
    ///
    /// Only hidden cells can be opened; anything else (and any call after the
    /// game ended) returns the current status unchanged. The first successful
    /// open never hits a mine: a mine under it is moved away first.
    pub fn open(&mut self, at: Coord) -> OpenResult {
        self.revealed.clear();
        let idx = self.size().index(at);
        if self.is_over() || self.cells[idx] != CellState::Hidden {
            return self.status;
        }

        if self.first_move {
            self.first_move = false;
            if let Some(to) = self.board.relocate_mine(at) {
                tracing::debug!(from = ?at, ?to, "relocated mine under first move");
            }
        }

        if self.board.is_mine(at) {
            self.detonated = Some(at);
            self.status = OpenResult::Loss;
            return self.status;
        }

        let count = count_adjacent_mines(&self.board, at);
        self.cells[idx] = CellState::Opened(count);
        self.opened += 1;
        self.revealed.push(at);

        if count == 0 {
            let filled = flood_fill(&self.board, &mut self.cells, at);
            tracing::trace!(origin = ?at, cells = filled.len(), "flood fill");
            self.opened += filled.len() as u32;
            self.revealed.extend(filled);
        }

        if self.opened == self.target {
            self.status = OpenResult::Win;
        }
        self.status
    }
}
