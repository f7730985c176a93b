//! The solving core.
//!
//! Solving happens in two stages. [`is_valid`] is the gate: it scans all 27
//! houses once and rejects grids whose clues already conflict, before any
//! search resources are committed. [`SudokuSolver`] then runs a depth-first
//! backtracking search over the empty cells.
//!
//! The search policy is fixed: the first empty cell in reading order is
//! filled next, and its candidate digits are tried in ascending order.
//! Identical inputs therefore explore identical search trees and return
//! identical results, including for sudokus with several solutions.

use crunchy::unroll;

use crate::bitset::Set;
use crate::board::positions::{Cell, House};
use crate::board::{Digit, Sudoku};
use crate::helper::{CellArray, HouseArray, Unsolvable};

/// Checks all 27 houses for digits that occur more than once.
/// Empty cells impose no constraint.
pub(crate) fn is_valid(sudoku: &Sudoku) -> bool {
    for house in House::all() {
        let cells = house.cells();
        let mut seen = Set::<Digit>::NONE;
        unroll! {
            for pos in 0..9 {
                if let Some(digit) = sudoku.digit(Cell::new(cells[pos])) {
                    if seen.overlaps(digit.as_set()) {
                        return false;
                    }
                    seen |= digit;
                }
            }
        }
    }
    true
}

// The solver keeps the grid itself plus derived bookkeeping: the set of
// digits already entered in each house and the set of still empty cells.
// The candidates of a cell fall out of the house masks with three lookups,
// no grid scan is needed during the search.
#[derive(Clone, Copy)]
pub(crate) struct SudokuSolver {
    grid: CellArray<u8>,
    // digits entered in each row, column and block
    house_digits: HouseArray<Set<Digit>>,
    empty_cells: Set<Cell>,
}

// One level of the search: a cell, the digit currently entered there
// and the candidates not yet tried. `placed` is `None` only before the
// first candidate of this frame is entered.
struct Frame {
    cell: Cell,
    placed: Option<Digit>,
    untried: Set<Digit>,
}

impl SudokuSolver {
    /// Builds the house masks from the given clues.
    /// Fails if two clues conflict, which mirrors [`is_valid`] and keeps
    /// inconsistent grids out of the search.
    pub(crate) fn from_sudoku(sudoku: &Sudoku) -> Result<Self, Unsolvable> {
        let mut solver = SudokuSolver {
            grid: CellArray([0; 81]),
            house_digits: HouseArray([Set::NONE; 27]),
            empty_cells: Set::NONE,
        };
        for cell in Cell::all() {
            match sudoku.digit(cell) {
                Some(digit) => solver.insert_clue(cell, digit)?,
                None => solver.empty_cells |= cell,
            }
        }
        Ok(solver)
    }

    fn insert_clue(&mut self, cell: Cell, digit: Digit) -> Result<(), Unsolvable> {
        if !self.candidates(cell).contains(digit) {
            return Err(Unsolvable);
        }
        self.enter(cell, digit);
        Ok(())
    }

    // all digits not present in the cell's row, column or block
    // the cell must be empty
    fn candidates(&self, cell: Cell) -> Set<Digit> {
        !(self.house_digits[cell.row()]
            | self.house_digits[cell.col()]
            | self.house_digits[cell.block()])
    }

    fn enter(&mut self, cell: Cell, digit: Digit) {
        self.grid[cell] = digit.get();
        self.house_digits[cell.row()] |= digit;
        self.house_digits[cell.col()] |= digit;
        self.house_digits[cell.block()] |= digit;
        self.empty_cells.remove(cell.as_set());
    }

    // inverse of `enter`, valid only for digits the search itself entered
    fn undo(&mut self, cell: Cell, digit: Digit) {
        self.grid[cell] = 0;
        let digit = digit.as_set();
        self.house_digits[cell.row()].remove(digit);
        self.house_digits[cell.col()].remove(digit);
        self.house_digits[cell.block()].remove(digit);
        self.empty_cells |= cell;
    }

    // cell selection policy: first empty cell in reading order
    // `Set<Cell>` iterates lowest bit first, which is exactly that order
    fn next_cell(&self) -> Option<Cell> {
        self.empty_cells.smallest()
    }

    /// Runs the backtracking search and returns the first solution found,
    /// or `None` once every branch is exhausted.
    pub(crate) fn solve_one(mut self) -> Option<Sudoku> {
        // Depth-first search with an explicit trail instead of recursion.
        // Each frame undoes its own entry before trying the next candidate
        // or retreating, so entries are unwound in exact reverse order.
        let mut trail: Vec<Frame> = Vec::with_capacity(self.empty_cells.len() as usize);
        loop {
            let cell = match self.next_cell() {
                Some(cell) => cell,
                // no empty cell left: solved
                None => return Some(Sudoku(self.grid.0)),
            };
            trail.push(Frame {
                cell,
                placed: None,
                untried: self.candidates(cell),
            });

            // enter the smallest untried candidate of the deepest frame,
            // dropping exhausted frames along the way
            loop {
                let frame = match trail.last_mut() {
                    Some(frame) => frame,
                    // candidates of the first empty cell are exhausted
                    None => return None,
                };
                if let Some(digit) = frame.placed.take() {
                    self.undo(frame.cell, digit);
                }
                match frame.untried.smallest() {
                    Some(digit) => {
                        frame.untried.remove(digit.as_set());
                        frame.placed = Some(digit);
                        self.enter(frame.cell, digit);
                        break;
                    }
                    None => {
                        trail.pop();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::positions::{Col, Row};

    fn sudoku(line: &str) -> Sudoku {
        Sudoku::from_str_line(line).unwrap()
    }

    #[test]
    fn candidates_exclude_row_col_and_block() {
        #[rustfmt::skip]
        let sudoku = sudoku(concat!(
            "12345....",
            ".........",
            "......7..",
            ".........",
            "........6",
            ".........",
            ".........",
            ".........",
            ".........",
        ));
        let solver = SudokuSolver::from_sudoku(&sudoku).unwrap();

        // (0, 8) sees 1-5 in its row, 6 in its column and 7 in its block
        let cell = Cell::from_coords(Row::new(0), Col::new(8));
        let candidates = solver
            .candidates(cell)
            .into_iter()
            .map(Digit::get)
            .collect::<Vec<_>>();
        assert_eq!(candidates, [8, 9]);
    }

    #[test]
    fn candidates_of_unconstrained_cell_are_all_digits() {
        let solver = SudokuSolver::from_sudoku(&Sudoku([0; 81])).unwrap();
        let candidates = solver.candidates(Cell::new(40));
        assert_eq!(candidates, Set::ALL);
    }

    #[test]
    fn conflicting_clues_fail_fast() {
        // two 5s in the top left block, different row and column
        let mut bytes = [0; 81];
        bytes[0] = 5;
        bytes[10] = 5;
        let sudoku = Sudoku::from_bytes(bytes).unwrap();
        assert!(SudokuSolver::from_sudoku(&sudoku).is_err());
    }

    #[test]
    fn forced_cell_keeps_its_only_candidate() {
        // (0, 0) admits only the 1
        #[rustfmt::skip]
        let sudoku = sudoku(concat!(
            ".23456789",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ));
        let solution = sudoku.solve_one().unwrap();
        assert!(solution.is_solved());
        assert_eq!(solution.to_bytes()[0], 1);
    }
}
