//! Parsing Sudoku grids from text.
//!
//! The accepted format is nine rows of nine entries: `1` through `9` are
//! clues, and `0`, `.` or `_` mark empty cells. Whitespace and `|` inside a
//! row are ignored, as are blank lines and lines starting with `-` (block
//! rules) or `c` (comments), so both plain and block-decorated grids parse:
//!
//! ```text
//! 6 _ 8 | 7 _ 2 | 1 _ _
//! 4 _ _ | _ 1 _ | _ _ 2
//! _ 2 5 | 4 _ _ | _ _ _
//! ---------------------
//! ...
//! ```

use crate::solver::board::{Board, GRID_SIZE};
use itertools::Itertools;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced when parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    /// A row contains a character that is neither a digit, a placeholder
    /// nor an ignored separator.
    #[error("row {row} contains invalid character {ch:?}")]
    InvalidCharacter {
        /// Zero-based index of the offending row.
        row: usize,
        /// The offending character.
        ch: char,
    },
    /// A row does not contain exactly nine entries.
    #[error("row {row} holds {found} cells instead of the required 9")]
    InvalidRowLength {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of entries the row holds.
        found: usize,
    },
    /// The input ended before nine rows were read.
    #[error("grid holds {0} rows instead of the required 9")]
    NotEnoughRows(usize),
    /// The input continues past the ninth row.
    #[error("grid holds more than 9 rows")]
    TooManyRows,
}

/// Errors produced when reading a puzzle from a file.
#[derive(Debug, Error)]
pub enum PuzzleFileError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file's contents are not a valid grid.
    #[error(transparent)]
    Parse(#[from] ParseBoardError),
}

/// Parses a grid from text.
///
/// # Errors
///
/// Returns a [`ParseBoardError`] if the input is not nine rows of nine
/// valid entries.
pub fn parse_board(input: &str) -> Result<Board, ParseBoardError> {
    let rows = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('-') && !line.starts_with('c'))
        .collect_vec();

    if rows.len() < GRID_SIZE {
        return Err(ParseBoardError::NotEnoughRows(rows.len()));
    }
    if rows.len() > GRID_SIZE {
        return Err(ParseBoardError::TooManyRows);
    }

    let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
    for (row_idx, line) in rows.iter().enumerate() {
        let entries = line
            .chars()
            .filter(|ch| !matches!(ch, '|' | ' ' | '\t'))
            .map(|ch| match ch {
                '1'..='9' => Ok(ch as u8 - b'0'),
                '0' | '.' | '_' => Ok(0),
                _ => Err(ParseBoardError::InvalidCharacter { row: row_idx, ch }),
            })
            .collect::<Result<Vec<u8>, ParseBoardError>>()?;

        if entries.len() != GRID_SIZE {
            return Err(ParseBoardError::InvalidRowLength {
                row: row_idx,
                found: entries.len(),
            });
        }
        grid[row_idx].copy_from_slice(&entries);
    }

    Ok(Board::new(grid))
}

/// Reads and parses a puzzle file.
///
/// # Errors
///
/// Returns [`PuzzleFileError::Io`] if the file cannot be read, and a parse
/// error if its contents are not a valid grid.
pub fn parse_board_file(path: &Path) -> Result<Board, PuzzleFileError> {
    let input = std::fs::read_to_string(path).map_err(|source| PuzzleFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_board(&input)?)
}
