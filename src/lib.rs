#![deny(missing_docs)]
//! This crate provides a backtracking solver for 9x9 Sudoku puzzles.
//!
//! The puzzle is treated as a constraint-satisfaction problem: the 81 cells
//! are the variables, the digits 1 through 9 the domain, and every row,
//! column and 3x3 block must hold pairwise distinct digits. The search is
//! depth-first with chronological backtracking: assign a digit, recurse,
//! and undo the assignment if the branch below it cannot reach a complete
//! grid. Cell selection and digit order are fixed by default, so the whole
//! search trace is reproducible.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::solver::engine::Backtracker;
//! use sudoku_solver::solver::presets;
//!
//! let mut solver = Backtracker::new(presets::BASIC);
//! let solution = solver.solve().expect("puzzle has a solution");
//! assert!(solution.is_solved());
//! println!("{solution}");
//! ```

/// The `solver` module implements the Sudoku board model and the
/// backtracking search over it.
pub mod solver;
