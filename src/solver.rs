//! Depth-first backtracking solver.
//!
//! Guesses into the first empty cell and recurses. A digit is only tried
//! if it does not already occur in the cell's row, column or block, so
//! every full grid reached this way is a valid solution.

use crate::board::{block, cell_at, col, row, Sudoku};
use crate::consts::N_CELLS;

pub(crate) fn solve_one(sudoku: Sudoku) -> Option<Sudoku> {
    if !clues_consistent(&sudoku) {
        return None;
    }
    let mut grid = sudoku;
    match solve_recursive(&mut grid) {
        true => Some(grid),
        false => None,
    }
}

pub(crate) fn solve_unique(sudoku: Sudoku) -> Option<Sudoku> {
    if !clues_consistent(&sudoku) {
        return None;
    }
    let mut grid = sudoku;
    let mut first_solution = None;
    let n_solutions = count_recursive(&mut grid, &mut first_solution, 2);
    match n_solutions {
        1 => first_solution,
        _ => None,
    }
}

fn solve_recursive(grid: &mut Sudoku) -> bool {
    let cell = match grid.first_empty_cell() {
        Some(cell) => cell,
        None => return true,
    };
    for num in 1..=9 {
        if !conflicts(grid, cell, num) {
            grid.set(cell, num);
            if solve_recursive(grid) {
                return true;
            }
            grid.set(cell, 0);
        }
    }
    false
}

// counts solutions up to `limit` and keeps the first one found
fn count_recursive(grid: &mut Sudoku, first_solution: &mut Option<Sudoku>, limit: usize) -> usize {
    let cell = match grid.first_empty_cell() {
        Some(cell) => cell,
        None => {
            first_solution.get_or_insert(*grid);
            return 1;
        }
    };
    let mut n_solutions = 0;
    for num in 1..=9 {
        if !conflicts(grid, cell, num) {
            grid.set(cell, num);
            n_solutions += count_recursive(grid, first_solution, limit - n_solutions);
            grid.set(cell, 0);
            if n_solutions >= limit {
                break;
            }
        }
    }
    n_solutions
}

fn conflicts(grid: &Sudoku, cell: u8, num: u8) -> bool {
    let (r, c) = (row(cell), col(cell));
    for i in 0..9 {
        if grid.get(cell_at(r, i)) == num || grid.get(cell_at(i, c)) == num {
            return true;
        }
    }
    let band_start = r / 3 * 3;
    let stack_start = c / 3 * 3;
    for block_row in band_start..band_start + 3 {
        for block_col in stack_start..stack_start + 3 {
            if grid.get(cell_at(block_row, block_col)) == num {
                return true;
            }
        }
    }
    false
}

// The search only checks digits it places itself. Conflicts between the
// given clues have to be caught before the search starts, or it would
// exhaust the whole tree without ever noticing them.
fn clues_consistent(grid: &Sudoku) -> bool {
    let mut rows = [0u16; 9];
    let mut cols = [0u16; 9];
    let mut blocks = [0u16; 9];
    for cell in 0..N_CELLS as u8 {
        let num = grid.get(cell);
        if num == 0 {
            continue;
        }
        let mask = 1 << num;
        let (r, c, b) = (row(cell), col(cell), block(cell));
        if rows[r as usize] & mask != 0
            || cols[c as usize] & mask != 0
            || blocks[b as usize] & mask != 0
        {
            return false;
        }
        rows[r as usize] |= mask;
        cols[c as usize] |= mask;
        blocks[b as usize] |= mask;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn conflicting_clues_are_rejected() {
        // two 5s in the top row
        let mut bytes = [0; 81];
        bytes[0] = 5;
        bytes[8] = 5;
        let sudoku = Sudoku::from_bytes(bytes).unwrap();
        assert!(!clues_consistent(&sudoku));
        assert!(sudoku.solve_one().is_none());
    }

    #[test]
    fn solved_grid_solves_to_itself() {
        let line = "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
        let sudoku = Sudoku::from_str_line(line).unwrap();
        assert_eq!(sudoku.solve_one(), Some(sudoku));
    }
}
