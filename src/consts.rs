// Dimensions of the board. They are not parameters, a sudoku in this
// library is always the classical 9x9 variant.
pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: u8 = 27;

pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
