use std::fmt;

use crate::board::{block, col, row};
use crate::consts::N_CELLS;
use crate::parse_errors::{FromBytesError, InvalidEntry, LineParseError};
use crate::solver;

/// The main structure exposing all the functionality of the library
///
/// Stores 81 cells in row-major order. `0` marks an empty cell,
/// `1..=9` a clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sudoku([u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a line-format string.
    ///
    /// The line must contain exactly 81 cells. `1..=9` are clues; `0`, `.`
    /// and `_` all mark an empty cell. This is the format the extractor
    /// writes, one puzzle per line.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0u8;
        for ch in s.chars() {
            if n_cells as usize == N_CELLS {
                return Err(LineParseError::TooManyCells);
            }
            match ch {
                '1'..='9' => grid[n_cells as usize] = ch as u8 - b'0',
                '0' | '.' | '_' => grid[n_cells as usize] = 0,
                _ => return Err(LineParseError::InvalidEntry(InvalidEntry { cell: n_cells, ch })),
            }
            n_cells += 1;
        }
        if (n_cells as usize) < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(Sudoku(grid))
    }

    /// Creates a sudoku from a byte array, `0` marking an empty cell.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&num| num <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Returns the cell contents as a byte array, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the sudoku in line format: 81 digit characters, `0` for
    /// empty cells.
    pub fn to_str_line(self) -> String {
        self.0.iter().map(|&num| char::from(b'0' + num)).collect()
    }

    /// Try to find the first solution. Returns `None` if none exists.
    pub fn solve_one(self) -> Option<Sudoku> {
        solver::solve_one(self)
    }

    /// Solve the sudoku and return the solution, if it is unique.
    pub fn solve_unique(self) -> Option<Sudoku> {
        solver::solve_unique(self)
    }

    /// Check whether the sudoku is completely filled and no row, column
    /// or block contains a digit twice.
    pub fn is_solved(&self) -> bool {
        let mut rows = [0u16; 9];
        let mut cols = [0u16; 9];
        let mut blocks = [0u16; 9];
        for cell in 0..N_CELLS as u8 {
            let num = self.get(cell);
            if num == 0 {
                return false;
            }
            let mask = 1 << num;
            rows[row(cell) as usize] |= mask;
            cols[col(cell) as usize] |= mask;
            blocks[block(cell) as usize] |= mask;
        }
        // bits 1..=9
        const FULL: u16 = 0b11_1111_1110;
        rows.iter()
            .chain(&cols)
            .chain(&blocks)
            .all(|&mask| mask == FULL)
    }

    #[inline]
    pub(crate) fn get(self, cell: u8) -> u8 {
        self.0[cell as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, cell: u8, num: u8) {
        self.0[cell as usize] = num;
    }

    pub(crate) fn first_empty_cell(self) -> Option<u8> {
        (0..N_CELLS as u8).find(|&cell| self.get(cell) == 0)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in 0..N_CELLS as u8 {
            match (row(cell), col(cell)) {
                (0, 0) => {}
                (_, 3) | (_, 6) => write!(f, " ")?,    // separate stacks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate bands in rows
                (_, 0) => writeln!(f)?,
                _ => {}
            }
            match self.get(cell) {
                0 => write!(f, "_")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}
