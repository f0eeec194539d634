//! Flood fill for zero-count openings.

use std::collections::VecDeque;

use crate::board::Board;
use crate::neighbors::{count_adjacent_mines, neighbors};
use crate::types::{CellState, Coord};

/// Reveal the region connected to `origin` through zero-count cells.
///
/// `origin` must already be `Opened(0)`. Every hidden neighbor of a zero-count
/// cell is opened with its own count; only zero-count cells are expanded
/// further, so numbered cells form the border of the fill. Flagged and
/// questioned cells are left alone.
///
/// Returns the newly opened cells in reveal order (excluding `origin`).
pub fn flood_fill(board: &Board, cells: &mut [CellState], origin: Coord) -> Vec<Coord> {
    let size = board.size();
    debug_assert_eq!(cells[size.index(origin)], CellState::Opened(0));

    let mut revealed = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(origin);

    while let Some(at) = queue.pop_front() {
        for n in neighbors(size, at) {
            let idx = size.index(n);
            if cells[idx] != CellState::Hidden {
                continue;
            }
            // Neighbors of a zero-count cell are never mines.
            debug_assert!(!board.is_mine(n));
            let count = count_adjacent_mines(board, n);
            cells[idx] = CellState::Opened(count);
            revealed.push(n);
            if count == 0 {
                queue.push_back(n);
            }
        }
    }

    revealed
}
