use std::ops::Deref;
use std::{fmt, iter, slice, str};

use crate::board::positions::Cell;
use crate::board::Digit;
use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::helper::Unsolvable;
use crate::parse_errors::{InvalidEntry, LineParseError};
use crate::solver::{self, SudokuSolver};

/// The main structure exposing all the functionality of the library
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

/// Iterator over the cells of a [`Sudoku`], going from left to right, top to bottom
pub type Iter<'a> = iter::Map<slice::Iter<'a, u8>, fn(&u8) -> Option<u8>>;

impl Sudoku {
    /// Creates a sudoku from a byte array. Empty cells are denoted by 0, clues by the digits 1-9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81.
    /// Empty cells are denoted by 0, clues by the digits 1-9.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Sudoku::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Reads a sudoku in the line format.
    ///
    /// The line format is a sequence of exactly 81 cell entries, one per cell in
    /// reading order. An entry is a digit 1-9 for a clue or one of `.`, `_` and `0`
    /// for an empty cell. The line may continue after the 81st entry with a
    /// comment, delimited from the entries by a space or tab.
    ///
    /// An example:
    ///
    /// ```text
    /// ..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.. optional comment
    /// ```
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.chars() {
            if n_cells == N_CELLS {
                // the line may only continue with a delimited comment
                return match ch {
                    ' ' | '\t' => Ok(Sudoku(grid)),
                    '1'..='9' | '0' | '.' | '_' => Err(LineParseError::TooManyCells),
                    _ => Err(LineParseError::MissingCommentDelimiter),
                };
            }
            match ch {
                '1'..='9' => grid[n_cells] = ch as u8 - b'0',
                '0' | '.' | '_' => (),
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }));
                }
            }
            n_cells += 1;
        }
        match n_cells == N_CELLS {
            true => Ok(Sudoku(grid)),
            false => Err(LineParseError::NotEnoughCells(n_cells as u8)),
        }
    }

    /// Checks that no row, column or block contains a digit twice.
    /// Empty cells never conflict. A sudoku that fails this check
    /// cannot be completed and is rejected by the solver up front.
    pub fn is_valid(&self) -> bool {
        solver::is_valid(self)
    }

    /// Checks whether the sudoku is completely filled and [valid](Sudoku::is_valid).
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&num| num != 0) && self.is_valid()
    }

    /// Try to find a solution to the sudoku and fill it in. Returns true if a solution was found.
    /// This is a convenience interface. Use [`solve_one`](Sudoku::solve_one) if you want to keep
    /// the original grid around.
    pub fn solve(&mut self) -> bool {
        match self.solve_one() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }

    /// Find a solution to the sudoku and return it. Returns `None` if the given clues
    /// conflict or no solution exists.
    ///
    /// The search is deterministic: empty cells are filled in reading order and
    /// candidate digits are tried in ascending order, so the same input always
    /// produces the same solution even if several exist.
    pub fn solve_one(self) -> Option<Sudoku> {
        match SudokuSolver::from_sudoku(&self) {
            Ok(solver) => solver.solve_one(),
            Err(Unsolvable) => None,
        }
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Returns an Iterator over the sudoku, going from left to right, top to bottom.
    pub fn iter(&self) -> Iter {
        self.0.iter().map(num_to_opt)
    }

    /// Returns a byte array for the sudoku. Empty cells are denoted by 0, clues by the digits 1-9.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns a representation of the sudoku in line format that can be printed
    /// and which derefs into a [`&str`](str).
    pub fn to_str_line(&self) -> SudokuLine {
        let mut chars = [0; N_CELLS];
        for (ch, &byte) in chars.iter_mut().zip(self.0.iter()) {
            *ch = match byte {
                0 => b'.',
                num => num + b'0',
            };
        }
        SudokuLine(chars)
    }

    /// Returns a wrapper around the sudoku that implements `Display`
    /// with a block layout.
    ///
    /// ```text
    /// __3 _2_ 6__
    /// 9__ 3_5 __1
    /// __1 8_6 4__
    ///
    /// __8 1_2 9__
    /// 7__ ___ __8
    /// __6 7_8 2__
    ///
    /// __2 6_9 5__
    /// 8__ 2_3 __9
    /// __5 _1_ 3__
    /// ```
    pub fn display_block(&self) -> SudokuBlock {
        SudokuBlock(self.0)
    }

    pub(crate) fn digit(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }
}

fn num_to_opt(num: &u8) -> Option<u8> {
    if *num == 0 {
        None
    } else {
        Some(*num)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////

/// The 81-character line representation of a [`Sudoku`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SudokuLine([u8; N_CELLS]);

impl Deref for SudokuLine {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // the buffer contains only ascii digits and '.'
        str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

/// A [`Sudoku`] that implements `Display` with one row per line and
/// blocks separated by blank columns and lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SudokuBlock([u8; N_CELLS]);

impl fmt::Display for SudokuBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &num) in self.0.iter().enumerate() {
            let (row, col) = ((cell / 9) as u8, (cell % 9) as u8);
            match (row, col) {
                (0, 0) => (),
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // empty line between blocks
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, " ")?, // space between blocks
                _ => (),
            };
            match num {
                0 => write!(f, "_")?,
                1..=9 => write!(f, "{}", num)?,
                _ => unreachable!(),
            };
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    // human readable formats carry the line notation, everything else
    // the raw 81 cell bytes
    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sudoku as an 81 character line or as 81 raw bytes")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Sudoku::from_str_line(v).map_err(E::custom)
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            Sudoku::from_bytes_slice(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(SudokuVisitor)
            } else {
                deserializer.deserialize_bytes(SudokuVisitor)
            }
        }
    }
}
