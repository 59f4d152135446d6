#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Constraint-satisfaction search over a 9x9 Sudoku grid.

/// The board representation: a fixed 9x9 grid of digits.
pub mod board;
/// Row, column and block "all different" validity checks.
pub mod constraints;
/// The recursive depth-first backtracking search.
pub mod engine;
/// Parsing of puzzle text and puzzle files.
pub mod parse;
/// Puzzles shipped with the crate.
pub mod presets;
/// Policies for picking the next unassigned cell.
pub mod selection;
