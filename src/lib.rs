#![warn(missing_docs)]
//! Tools for the Project Euler sudoku file format
//!
//! ## Overview
//!
//! Project Euler distributes its sudokus as labeled blocks, a two-digit
//! label line followed by nine rows of nine digits:
//!
//! ```text
//! Grid 01
//! 003020600
//! 900305001
//! ...
//! ```
//!
//! This crate flattens every such block onto a single 81-character line,
//! the format the solver consumes, and solves the resulting puzzles.
//!
//! ## Example
//!
//! ```
//! use sudoku_euler::{extract_and_format, Sudoku};
//!
//! let source = "Grid 01\n\
//!     003020600\n\
//!     900305001\n\
//!     001806400\n\
//!     008102900\n\
//!     700000008\n\
//!     006708200\n\
//!     002609500\n\
//!     800203009\n\
//!     005010300\n";
//!
//! for line in extract_and_format(source).lines() {
//!     let sudoku = Sudoku::from_str_line(line).unwrap();
//!     if let Some(solution) = sudoku.solve_one() {
//!         println!("{}", solution.to_str_line());
//!     }
//! }
//! ```

mod board;
mod consts;
mod errors;
mod extract;
mod solver;

pub mod parse_errors;

pub use crate::board::Sudoku;
pub use crate::errors::FileAccessError;
pub use crate::extract::{extract_and_format, grid_bodies, reformat_file, SOURCE_PATH, TARGET_PATH};
