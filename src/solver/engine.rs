//! The recursive depth-first backtracking search.
//!
//! Each call either accepts a complete board, or picks the next empty cell
//! and tries the digits 1 through 9 in ascending order: unsafe digits are
//! skipped, a safe digit is written into the grid and the search recurses
//! below it. A successful recursive call propagates success immediately and
//! leaves the board solved; a failed one retracts the assignment (writes `0`
//! back) before the next digit is tried. When all nine digits are exhausted
//! the call reports failure with the board exactly as it found it.
//!
//! The branching factor is at most 9 and the depth at most 81, so recursion
//! is bounded and termination follows from each successful step strictly
//! reducing the number of empty cells. An unsolvable puzzle is a normal
//! outcome, not a fault.

use crate::solver::board::{Board, DIGITS};
use crate::solver::constraints;
use crate::solver::selection::{CellSelection, RowMajor};

/// Counters describing one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative assignments made, including those later retracted.
    pub decisions: usize,
    /// Assignments undone after the branch below them failed.
    pub backtracks: usize,
}

/// Depth-first backtracking solver.
///
/// Owns its board exclusively for the duration of a search. Branches mutate
/// the one grid in place and repair it on failure; the grid is never copied
/// per branch.
#[derive(Debug, Clone)]
pub struct Backtracker<S: CellSelection = RowMajor> {
    board: Board,
    selector: S,
    stats: SearchStats,
}

impl Backtracker {
    /// Creates a solver over `board` with the default row-major cell
    /// selection.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_selector(board, RowMajor)
    }
}

impl<S: CellSelection> Backtracker<S> {
    /// Creates a solver over `board` branching on the cells `selector`
    /// picks.
    #[must_use]
    pub fn with_selector(board: Board, selector: S) -> Self {
        Self {
            board,
            selector,
            stats: SearchStats::default(),
        }
    }

    /// Runs the search. Returns the solved grid, or `None` if no completion
    /// satisfies the row, column and block constraints.
    ///
    /// On failure the internal board is left equal to the input grid: every
    /// failed branch retracts its own assignment on the way out.
    pub fn solve(&mut self) -> Option<Board> {
        if self.search() { Some(self.board) } else { None }
    }

    /// The board in its current state: the input grid before [`solve`], the
    /// solved grid after a successful solve, the input grid again after a
    /// failed one.
    ///
    /// [`solve`]: Backtracker::solve
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Counters for the search run so far.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self) -> bool {
        if self.board.is_complete() {
            return true;
        }

        let cell = self
            .selector
            .select(&self.board)
            .expect("incomplete board must have an empty cell");

        for digit in DIGITS {
            if !constraints::is_safe(&self.board, cell, digit) {
                continue;
            }

            self.board.set(cell.row, cell.col, digit);
            self.stats.decisions += 1;

            if self.search() {
                return true;
            }

            self.board.set(cell.row, cell.col, 0);
            self.stats.backtracks += 1;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::presets;
    use crate::solver::selection::MinCandidates;

    const SOLVED: [[u8; 9]; 9] = [
        [1, 2, 3, 4, 5, 6, 7, 8, 9],
        [4, 5, 6, 7, 8, 9, 1, 2, 3],
        [7, 8, 9, 1, 2, 3, 4, 5, 6],
        [2, 3, 4, 5, 6, 7, 8, 9, 1],
        [5, 6, 7, 8, 9, 1, 2, 3, 4],
        [8, 9, 1, 2, 3, 4, 5, 6, 7],
        [3, 4, 5, 6, 7, 8, 9, 1, 2],
        [6, 7, 8, 9, 1, 2, 3, 4, 5],
        [9, 1, 2, 3, 4, 5, 6, 7, 8],
    ];

    fn clues_conserved(puzzle: &Board, solved: &Board) -> bool {
        Iterator::zip(puzzle.rows().flatten(), solved.rows().flatten())
            .all(|(&clue, &digit)| clue == 0 || clue == digit)
    }

    #[test]
    fn test_solves_basic_scenario() {
        let mut solver = Backtracker::new(presets::BASIC);
        let solution = solver.solve().expect("basic puzzle has a solution");

        assert!(solution.is_solved());
        assert!(clues_conserved(&presets::BASIC, &solution));
        // Row 0 keeps the fixed clues 6 _ 8 7 _ 2 1 _ _.
        assert_eq!(solution.get(0, 0), 6);
        assert_eq!(solution.get(0, 2), 8);
        assert_eq!(solution.get(0, 3), 7);
        assert_eq!(solution.get(0, 5), 2);
        assert_eq!(solution.get(0, 6), 1);
    }

    #[test]
    fn test_solves_empty_grid() {
        let mut solver = Backtracker::new(Board::empty());
        let solution = solver.solve().expect("an empty grid has completions");
        assert!(solution.is_solved());
    }

    #[test]
    fn test_deterministic() {
        let first = Backtracker::new(presets::BASIC).solve();
        let second = Backtracker::new(presets::BASIC).solve();
        assert_eq!(first, second);

        let mut a = Backtracker::new(Board::empty());
        let mut b = Backtracker::new(Board::empty());
        assert_eq!(a.solve(), b.solve());
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn test_idempotent_on_solved_board() {
        let board = Board::new(SOLVED);
        let mut solver = Backtracker::new(board);

        assert_eq!(solver.solve(), Some(board));
        // Complete at entry, so no branching happened at all.
        assert_eq!(solver.stats(), SearchStats::default());
    }

    #[test]
    fn test_row_contradiction_is_unsolvable() {
        let mut board = Board::empty();
        board.set(0, 0, 1);
        board.set(0, 1, 1);

        assert_eq!(Backtracker::new(board).solve(), None);
    }

    #[test]
    fn test_col_contradiction_is_unsolvable() {
        let mut board = Board::empty();
        board.set(1, 0, 7);
        board.set(8, 0, 7);

        assert_eq!(Backtracker::new(board).solve(), None);
    }

    #[test]
    fn test_block_contradiction_is_unsolvable() {
        let mut board = Board::empty();
        board.set(1, 1, 2);
        board.set(2, 2, 2);

        assert_eq!(Backtracker::new(board).solve(), None);
    }

    #[test]
    fn test_failure_restores_input_board() {
        // The duplicate 6s block every digit in the rest of block 1, but the
        // search assigns and retracts in block 0 first.
        let mut board = Board::empty();
        board.set(1, 3, 6);
        board.set(1, 4, 6);

        let mut solver = Backtracker::new(board);
        assert_eq!(solver.solve(), None);
        assert_eq!(solver.board(), &board);
        assert!(solver.stats().decisions > 0);
        assert_eq!(solver.stats().decisions, solver.stats().backtracks);
    }

    #[test]
    fn test_min_candidates_selector_solves() {
        let mut solver = Backtracker::with_selector(presets::BASIC, MinCandidates);
        let solution = solver.solve().expect("basic puzzle has a solution");

        assert!(solution.is_solved());
        assert!(clues_conserved(&presets::BASIC, &solution));
    }
}
