//! Moore-neighborhood helpers.
//!
//! Neighborhoods are clipped at the grid edges; there is no wraparound here
//! (only cursor movement wraps).

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Coord, GridSize};

/// The up to 8 in-bounds neighbors of `at`, row-major.
///
/// This is stack-only and does not allocate.
pub fn neighbors(size: GridSize, at: Coord) -> ArrayVec<Coord, 8> {
    assert!(size.contains(at), "neighbors of out-of-bounds cell");

    let mut out = ArrayVec::new();
    let row_lo = at.row.saturating_sub(1);
    let row_hi = (at.row + 1).min(size.height - 1);
    let col_lo = at.col.saturating_sub(1);
    let col_hi = (at.col + 1).min(size.width - 1);

    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            if row != at.row || col != at.col {
                out.push(Coord::new(col, row));
            }
        }
    }
    out
}

/// Number of mines among the neighbors of `at` (0..=8).
pub fn count_adjacent_mines(board: &Board, at: Coord) -> u8 {
    neighbors(board.size(), at)
        .iter()
        .filter(|&&c| board.is_mine(c))
        .count() as u8
}
