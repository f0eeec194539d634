//! Board module - the hidden mine layout
//!
//! The board is a `width x height` grid where each cell either holds a mine or not.
//! Uses a flat vector in row-major order (`row * width + col`).
//! The layout is fixed after generation apart from the one-time first-move
//! relocation performed by [`Board::relocate_mine`].

use rand::Rng;

use crate::types::{Coord, GridSize};

/// The mine layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    /// Flat array of mine flags, row-major order.
    mines: Vec<bool>,
    mine_count: u32,
}

impl Board {
    /// Place `mine_count` mines uniformly at random.
    ///
    /// Every combination of `mine_count` cells is equally likely. This runs a
    /// partial Fisher-Yates shuffle over the cell indices: each step picks a
    /// random index from the unconsumed prefix, marks it, and moves the last
    /// unconsumed index into its slot, so no cell is drawn twice.
    ///
    /// The caller validates `0 < mine_count < width * height`.
    pub fn generate<R: Rng + ?Sized>(size: GridSize, mine_count: u32, rng: &mut R) -> Self {
        let cells = size.cells();
        let count = mine_count as usize;
        debug_assert!(count > 0 && count < cells, "mine count out of range");

        let mut mines = vec![false; cells];
        let mut shuffler: Vec<u32> = (0..cells as u32).collect();

        for last in (cells - count..cells).rev() {
            let pick = rng.random_range(0..=last);
            mines[shuffler[pick] as usize] = true;
            shuffler[pick] = shuffler[last];
        }

        Self {
            size,
            mines,
            mine_count,
        }
    }

    /// Build a board with mines at exactly the given cells.
    ///
    /// Duplicate coordinates count once.
    pub fn from_mines(size: GridSize, at: &[Coord]) -> Self {
        let mut mines = vec![false; size.cells()];
        for &c in at {
            mines[size.index(c)] = true;
        }
        let mine_count = mines.iter().filter(|&&m| m).count() as u32;
        Self {
            size,
            mines,
            mine_count,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    #[inline(always)]
    pub fn is_mine(&self, at: Coord) -> bool {
        self.mines[self.size.index(at)]
    }

    /// Iterate mine positions in row-major order.
    pub fn mines(&self) -> impl Iterator<Item = Coord> + '_ {
        self.mines
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| self.size.coord(i))
    }

    /// Move the mine at `from` to the first mine-free cell in row-major order.
    ///
    /// Returns the new mine position, or `None` when `from` holds no mine.
    /// The mine count is unchanged.
    pub fn relocate_mine(&mut self, from: Coord) -> Option<Coord> {
        let from_idx = self.size.index(from);
        if !self.mines[from_idx] {
            return None;
        }
        // A free cell always exists because mine_count < cells.
        let to_idx = self.mines.iter().position(|&m| !m)?;
        self.mines[to_idx] = true;
        self.mines[from_idx] = false;
        Some(self.size.coord(to_idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generate_places_exact_mine_count() {
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let size = GridSize::new(9, 7);
            let mines = 1 + (seed as u32 % 62);
            let board = Board::generate(size, mines, &mut rng);
            assert_eq!(board.mines().count() as u32, mines, "seed {seed}");
            assert_eq!(board.mine_count(), mines);
        }
    }

    #[test]
    fn generate_fills_all_but_one_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::generate(GridSize::new(2, 2), 3, &mut rng);
        assert_eq!(board.mines().count(), 3);
    }

    #[test]
    fn generate_reaches_every_cell() {
        // With a single mine, every cell should be hit across enough seeds.
        let size = GridSize::new(3, 3);
        let mut hit = [false; 9];
        for seed in 0..500u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::generate(size, 1, &mut rng);
            let at = board.mines().next().unwrap();
            hit[size.index(at)] = true;
        }
        assert!(hit.iter().all(|&h| h), "unreached cells: {hit:?}");
    }

    #[test]
    fn relocate_moves_to_first_free_cell() {
        let size = GridSize::new(3, 2);
        let mut board = Board::from_mines(size, &[Coord::new(0, 0), Coord::new(1, 0)]);
        let to = board.relocate_mine(Coord::new(0, 0));
        assert_eq!(to, Some(Coord::new(2, 0)));
        assert!(!board.is_mine(Coord::new(0, 0)));
        assert!(board.is_mine(Coord::new(1, 0)));
        assert!(board.is_mine(Coord::new(2, 0)));
        assert_eq!(board.mines().count(), 2);
    }

    #[test]
    fn relocate_from_safe_cell_is_noop() {
        let size = GridSize::new(2, 2);
        let mut board = Board::from_mines(size, &[Coord::new(1, 1)]);
        let before = board.clone();
        assert_eq!(board.relocate_mine(Coord::new(0, 0)), None);
        assert_eq!(board, before);
    }
}
