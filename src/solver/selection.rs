//! Policies for picking the next unassigned cell to branch on.

use crate::solver::board::{Board, Cell, GRID_SIZE};
use crate::solver::constraints;

/// Picks the next unassigned cell for the search to branch on.
pub trait CellSelection {
    /// Returns the next empty cell, or `None` if the board is fully
    /// assigned.
    fn select(&self, board: &Board) -> Option<Cell>;
}

/// Scans cells in row-major order and returns the first empty one.
///
/// The fixed ordering keeps the whole search trace reproducible; it makes no
/// attempt to be fast on hard puzzles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

impl CellSelection for RowMajor {
    fn select(&self, board: &Board) -> Option<Cell> {
        cells().find(|&cell| board[cell] == 0)
    }
}

/// Picks the empty cell with the fewest admissible digits, breaking ties in
/// row-major order.
///
/// Changes the exploration order relative to [`RowMajor`], and with it which
/// solution an ambiguous puzzle resolves to. Opt-in only; never substituted
/// for the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinCandidates;

impl CellSelection for MinCandidates {
    fn select(&self, board: &Board) -> Option<Cell> {
        cells()
            .filter(|&cell| board[cell] == 0)
            .min_by_key(|&cell| (constraints::candidates(board, cell).len(), cell))
    }
}

fn cells() -> impl Iterator<Item = Cell> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Cell::new(row, col)))
}
