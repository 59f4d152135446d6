//! # sudoku-solver
//!
//! A command-line Sudoku solver built on depth-first backtracking search.
//!
//! Puzzles are nine rows of nine entries: `1` through `9` are clues, and
//! `0`, `.` or `_` mark empty cells. `|` separators, dashed rules and lines
//! starting with `c` are ignored, so both plain and block-decorated grids
//! are accepted.
//!
//! ## Usage
//!
//! ```sh
//! sudoku-solver <path_to_puzzle_file>
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`file`**: Solve a puzzle file.
//!     ```sh
//!     sudoku-solver file --path <path_to_puzzle_file> [OPTIONS]
//!     ```
//! 2.  **`text`**: Solve a puzzle provided as plain text.
//!     ```sh
//!     sudoku-solver text --input "608702100\n..." [OPTIONS]
//!     ```
//! 3.  **`preset`**: Solve one of the built-in puzzles.
//!     ```sh
//!     sudoku-solver preset --name basic
//!     sudoku-solver preset --name tricky
//!     ```
//! 4.  **`batch`**: Solve every puzzle file under a directory.
//!     ```sh
//!     sudoku-solver batch --dir <puzzle_directory> [OPTIONS]
//!     ```
//! 5.  **`completions`**: Generate shell completion scripts.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Enable debug output (default: `false`).
//! -   `-v, --verify`: Re-check the solved grid and the conservation of the
//!     input clues (default: `true`).
//! -   `-s, --stats`: Print solve-time and memory statistics (default:
//!     `true`).
//! -   `--selector`: Cell selection policy, `row-major` (default, the
//!     reproducible reference order) or `min-candidates` (most constrained
//!     cell first).
//!
//! Memory statistics come from `tikv-jemallocator`, which is also the
//! binary's global allocator.

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_solver::solver::board::Board;
use sudoku_solver::solver::engine::{Backtracker, SearchStats};
use sudoku_solver::solver::parse::{parse_board, parse_board_file};
use sudoku_solver::solver::presets;
use sudoku_solver::solver::selection::{MinCandidates, RowMajor};
use tikv_jemalloc_ctl::{epoch, stats};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the Sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "A backtracking Sudoku solver")]
struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `preset`, `batch`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the Sudoku solver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a puzzle file.
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text.
    Text {
        /// Literal grid input: nine rows of nine entries, `0`, `.` or `_`
        /// for empty cells.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve one of the built-in puzzles.
    Preset {
        /// Which built-in puzzle to solve.
        #[arg(short, long, value_enum)]
        name: PresetName,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every puzzle file under a directory.
    Batch {
        /// Directory to scan for puzzle files.
        #[arg(long)]
        dir: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(long, value_enum)]
        shell: clap_complete::Shell,
    },
}

/// The puzzles shipped with the binary.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PresetName {
    /// A lightly constrained starter puzzle.
    Basic,
    /// A sparser puzzle that takes noticeably more search.
    Tricky,
}

impl PresetName {
    const fn board(self) -> Board {
        match self {
            Self::Basic => presets::BASIC,
            Self::Tricky => presets::TRICKY,
        }
    }
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Enable debug output, providing more verbose logging during solving.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Re-check the solved grid: every row, column and block a permutation
    /// of 1-9, every input clue conserved.
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Print solve-time and memory statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Specifies the cell selection policy.
    /// Supported values are "row-major" (first empty cell, reproducible
    /// reference order) and "min-candidates" (most constrained cell first).
    #[arg(long, default_value_t = String::from("row-major"))]
    selector: String,
}

/// Main entry point of the Sudoku solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a path is provided globally without a
    // subcommand. This defaults to solving a puzzle file.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            if !run_file(&path, &cli.common) {
                std::process::exit(1);
            }
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => {
            if !run_file(&path, &common) {
                std::process::exit(1);
            }
        }

        Some(Commands::Text { input, common }) => {
            let time = Instant::now();
            match parse_board(&input) {
                Ok(board) => run_board(board, time.elapsed(), &common),
                Err(e) => {
                    eprintln!("Error parsing puzzle: {e}");
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Preset { name, common }) => {
            run_board(name.board(), Duration::ZERO, &common);
        }

        Some(Commands::Batch { dir, common }) => {
            let failures = run_batch(&dir, &common);
            if failures > 0 {
                eprintln!("{failures} puzzle file(s) failed to parse");
                std::process::exit(1);
            }
        }

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }

        None => {
            // Reached if no subcommand was provided and `cli.path` was also
            // None; a provided path is handled by the first block above.
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

/// Parses and solves a single puzzle file. Returns false if the file could
/// not be read or parsed.
fn run_file(path: &Path, common: &CommonOptions) -> bool {
    println!("Solving: {}", path.display());

    let time = Instant::now();
    match parse_board_file(path) {
        Ok(board) => {
            run_board(board, time.elapsed(), common);
            true
        }
        Err(e) => {
            eprintln!("Error parsing puzzle file: {e}");
            false
        }
    }
}

/// Solves every file under `dir`, skipping none. Returns the number of
/// files that failed to parse.
fn run_batch(dir: &Path, common: &CommonOptions) -> usize {
    let mut failures = 0;

    for entry in walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
    {
        if !run_file(entry.path(), common) {
            failures += 1;
        }
    }

    failures
}

/// Solves one parsed board and reports on it: verification, statistics and
/// the solved grid (or the absence of a solution).
fn run_board(board: Board, parse_time: Duration, common: &CommonOptions) {
    println!("Puzzle:\n{board}");

    let (solution, elapsed, search_stats) = solve(board, common);

    // Advance the epoch so the jemalloc counters reflect the solving phase.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(&board, solution.as_ref());
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            &search_stats,
            allocated_mib,
            resident_mib,
            &solution,
        );
    }

    match solution {
        Some(solved) => println!("Solution:\n{solved}"),
        None => println!("No solution found"),
    }
}

/// Runs the backtracking search with the selection policy named in the
/// options.
///
/// # Returns
/// A tuple containing:
/// * `Option<Board>`: The solved grid if one exists, otherwise `None`.
/// * `Duration`: The time taken by the search.
/// * `SearchStats`: Counters collected during the search.
///
/// # Panics
/// Panics if the selector name is not "row-major" or "min-candidates".
fn solve(board: Board, common: &CommonOptions) -> (Option<Board>, Duration, SearchStats) {
    if common.debug {
        let clues = board.rows().flatten().filter(|&&digit| digit != 0).count();
        println!("Clues: {clues}, selector: {}", common.selector);
    }

    let time = Instant::now();
    match common.selector.as_str() {
        "row-major" => {
            let mut solver = Backtracker::with_selector(board, RowMajor);
            let solution = solver.solve();
            (solution, time.elapsed(), solver.stats())
        }
        "min-candidates" => {
            let mut solver = Backtracker::with_selector(board, MinCandidates);
            let solution = solver.solve();
            (solution, time.elapsed(), solver.stats())
        }
        other => panic!("Unknown selector: {other} (expected \"row-major\" or \"min-candidates\")"),
    }
}

/// Verifies a solved grid against the puzzle it came from.
///
/// Prints whether the verification was successful. If verification fails,
/// it panics. If `solution` is `None` the puzzle was unsolvable and there
/// is nothing to verify.
fn verify_solution(puzzle: &Board, solution: Option<&Board>) {
    if let Some(solved) = solution {
        let ok = solved.is_solved() && clues_conserved(puzzle, solved);
        println!("Verified: {ok:?}");
        if !ok {
            panic!("Solution failed verification!");
        }
    } else {
        println!("UNSOLVABLE");
    }
}

/// True iff every non-zero cell of `puzzle` holds the same digit in
/// `solved`.
fn clues_conserved(puzzle: &Board, solved: &Board) -> bool {
    Iterator::zip(puzzle.rows().flatten(), solved.rows().flatten())
        .all(|(&clue, &digit)| clue == 0 || clue == digit)
}

/// Prints a single statistic line.
fn stat_line<T: std::fmt::Display>(label: &str, value: T) {
    println!("|  {:<20} {:>12}  |", label, value.to_string());
}

/// Prints a single statistic line together with its per-second rate.
#[allow(clippy::cast_precision_loss)]
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {:<20} {:>12} ({:>9.0}/sec)  |", label, value, rate);
}

/// Prints a summary of search statistics.
///
/// # Arguments
/// * `parse_time` - Duration spent parsing the input.
/// * `elapsed` - Duration spent by the search.
/// * `s` - `SearchStats` collected by the solver.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
/// * `solution` - The `Option<Board>` found by the solver.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
    solution: &Option<Board>,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Search Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    if solution.is_some() {
        println!("\nSOLVED");
    } else {
        println!("\nUNSOLVABLE");
    }
}
