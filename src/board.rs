//! Types for cells, digits and other things on a sudoku board
mod digit;
pub mod positions;
mod sudoku;

pub(crate) use self::positions::*;

#[rustfmt::skip]
pub use self::{
    sudoku::Sudoku,
    sudoku::SudokuLine,
    sudoku::SudokuBlock,
    digit::Digit,
    positions::Cell,
};
