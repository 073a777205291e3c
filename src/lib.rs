// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements the puzzle-generation and constraint-solving
//! engines behind two classic grid games. It supports the following key
//! features:
//!
//! * Generating random, fully solved 9x9 Sudoku grids
//! * Solving Sudoku using a perfect backtracking algorithm and deciding
//! whether a grid has a unique solution
//! * Deriving playable Sudoku puzzles by removing clues while the solution
//! stays unique
//! * Generating Flow-style path puzzles of configurable size where colored
//! paths tile the whole board
//! * Checking whether a player's Flow grid connects all endpoint pairs
//! * Parsing and printing grids and boards of both kinds
//!
//! # Generating Sudoku puzzles
//!
//! The easiest way to obtain a playable Sudoku is
//! [generate_puzzle](sudoku::generator::generate_puzzle), which yields a
//! [Puzzle](sudoku::Puzzle) bundling the puzzle grid, its unique solution,
//! and the given-cell mask.
//!
//! ```
//! use puzzlegen::sudoku::generator;
//!
//! let puzzle = generator::generate_puzzle();
//!
//! assert!(puzzle.solution().is_full());
//! assert!(puzzle.puzzle().is_subset(puzzle.solution()));
//! println!("{}", puzzle.puzzle());
//! ```
//!
//! For finer control, instantiate a [Generator](sudoku::generator::Generator)
//! to produce solved grids and a [Reducer](sudoku::generator::Reducer) to
//! remove clues from them. Both are generic over a [Rng](rand::Rng), so
//! generation can be made reproducible with a seeded random number
//! generator.
//!
//! # Solving Sudoku
//!
//! The [BacktrackingSolver](sudoku::solver::BacktrackingSolver) finds the
//! unique solution of a grid, or reports that it has none or more than one.
//!
//! ```
//! use puzzlegen::sudoku::SudokuGrid;
//! use puzzlegen::sudoku::solver::{BacktrackingSolver, Solution};
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//!
//! match BacktrackingSolver.solve(&grid) {
//!     Solution::Unique(solution) => assert!(solution.is_full()),
//!     _ => panic!("riddle from the paper was not unique")
//! }
//! ```
//!
//! # Generating Flow puzzles
//!
//! A [BoardGenerator](flow::generator::BoardGenerator) tiles a board of the
//! requested dimensions with one self-avoiding path per color and derives
//! the starting board that is shown to the player. Generation retries
//! failed attempts until a wall-clock timeout elapses, so infeasible
//! parameters fail with [FlowError::Timeout](error::FlowError::Timeout)
//! instead of hanging.
//!
//! ```
//! use puzzlegen::flow::generator;
//!
//! let puzzle = generator::generate_flow_puzzle(5, 5, 3).unwrap();
//!
//! assert!(puzzle.filled().is_full());
//! println!("{}", puzzle.starting());
//! ```
//!
//! # Checking Flow solutions
//!
//! [check_solution](flow::check::check_solution) judges a player's grid
//! against the endpoints of a starting board.
//!
//! ```
//! use puzzlegen::flow::FlowBoard;
//! use puzzlegen::flow::check;
//!
//! let starting = FlowBoard::parse("3x1;R, ,R").unwrap();
//! let player = FlowBoard::parse("3x1;R,R,R").unwrap();
//!
//! assert!(check::check_solution(&starting, &player));
//! ```

pub mod error;
pub mod flow;
pub mod sudoku;
