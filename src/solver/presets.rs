//! Puzzles shipped with the crate.

use crate::solver::board::Board;

/// A lightly constrained starter puzzle.
pub const BASIC: Board = Board::new([
    [6, 0, 8, 7, 0, 2, 1, 0, 0],
    [4, 0, 0, 0, 1, 0, 0, 0, 2],
    [0, 2, 5, 4, 0, 0, 0, 0, 0],
    [7, 0, 1, 0, 8, 0, 4, 0, 5],
    [0, 8, 0, 0, 0, 0, 0, 7, 0],
    [5, 0, 9, 0, 6, 0, 3, 0, 1],
    [0, 0, 0, 0, 0, 6, 7, 5, 0],
    [2, 0, 0, 0, 9, 0, 0, 0, 8],
    [0, 0, 6, 8, 0, 5, 2, 0, 3],
]);

/// A sparser puzzle that takes noticeably more search than [`BASIC`].
pub const TRICKY: Board = Board::new([
    [0, 7, 0, 0, 4, 2, 0, 0, 0],
    [0, 0, 0, 0, 0, 8, 6, 1, 0],
    [3, 9, 0, 0, 0, 0, 0, 0, 7],
    [0, 0, 0, 0, 0, 4, 0, 0, 9],
    [0, 0, 3, 0, 0, 0, 7, 0, 0],
    [5, 0, 0, 1, 0, 0, 0, 0, 0],
    [8, 0, 0, 0, 0, 0, 0, 7, 6],
    [0, 5, 4, 8, 0, 0, 0, 0, 0],
    [0, 0, 0, 6, 1, 0, 0, 5, 0],
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::engine::Backtracker;

    fn clues_conserved(puzzle: &Board, solved: &Board) -> bool {
        Iterator::zip(puzzle.rows().flatten(), solved.rows().flatten())
            .all(|(&clue, &digit)| clue == 0 || clue == digit)
    }

    #[test]
    fn test_basic_solves() {
        let solution = Backtracker::new(BASIC).solve().unwrap();
        assert!(solution.is_solved());
        assert!(clues_conserved(&BASIC, &solution));
    }

    #[test]
    fn test_tricky_solves() {
        let solution = Backtracker::new(TRICKY).solve().unwrap();
        assert!(solution.is_solved());
        assert!(clues_conserved(&TRICKY, &solution));
    }
}
