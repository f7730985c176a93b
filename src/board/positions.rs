//! Coordinates of cells and the houses (rows, columns, blocks) containing them
#![allow(unused, missing_docs)]

use crate::consts::{BLOCK_OFFSET, COL_OFFSET, N_CELLS, N_HOUSES};

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}
#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}
#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    BLOCK[cell as usize]
}

#[rustfmt::skip]
static BLOCK: [u8; N_CELLS] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
];

// cells of each house, ordered row by row, then column by column, then block by block
#[rustfmt::skip]
pub(crate) static CELLS_BY_HOUSE: [[u8; 9]; 27] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [9, 10, 11, 12, 13, 14, 15, 16, 17],
    [18, 19, 20, 21, 22, 23, 24, 25, 26],
    [27, 28, 29, 30, 31, 32, 33, 34, 35],
    [36, 37, 38, 39, 40, 41, 42, 43, 44],
    [45, 46, 47, 48, 49, 50, 51, 52, 53],
    [54, 55, 56, 57, 58, 59, 60, 61, 62],
    [63, 64, 65, 66, 67, 68, 69, 70, 71],
    [72, 73, 74, 75, 76, 77, 78, 79, 80],

    [0, 9, 18, 27, 36, 45, 54, 63, 72],
    [1, 10, 19, 28, 37, 46, 55, 64, 73],
    [2, 11, 20, 29, 38, 47, 56, 65, 74],
    [3, 12, 21, 30, 39, 48, 57, 66, 75],
    [4, 13, 22, 31, 40, 49, 58, 67, 76],
    [5, 14, 23, 32, 41, 50, 59, 68, 77],
    [6, 15, 24, 33, 42, 51, 60, 69, 78],
    [7, 16, 25, 34, 43, 52, 61, 70, 79],
    [8, 17, 26, 35, 44, 53, 62, 71, 80],

    [0, 1, 2, 9, 10, 11, 18, 19, 20],
    [3, 4, 5, 12, 13, 14, 21, 22, 23],
    [6, 7, 8, 15, 16, 17, 24, 25, 26],
    [27, 28, 29, 36, 37, 38, 45, 46, 47],
    [30, 31, 32, 39, 40, 41, 48, 49, 50],
    [33, 34, 35, 42, 43, 44, 51, 52, 53],
    [54, 55, 56, 63, 64, 65, 72, 73, 74],
    [57, 58, 59, 66, 67, 68, 75, 76, 77],
    [60, 61, 62, 69, 70, 71, 78, 79, 80],
];

macro_rules! define_types(
    ($( $vis:tt $name:ident : $limit:expr ),* $(,)*) => {
        $(
            define_types!(@internal $vis $name : $limit );
        )*
    };
    (@internal pub $name:ident : $limit:expr) => {
        #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
        pub struct $name(u8);

        define_types!(@internal $name $limit);
    };
    (@internal $name:ident $limit:expr) => {
        impl $name {
            pub fn new(num: u8) -> Self {
                debug_assert!(num < $limit);
                $name(num)
            }

            pub fn new_checked(num: u8) -> Option<Self> {
                if num < $limit {
                    Some($name(num))
                } else {
                    None
                }
            }

            pub fn get(self) -> u8 {
                self.0
            }

            pub fn as_index(self) -> usize {
                self.0 as _
            }

            pub fn all() -> impl Iterator<Item = Self> {
                (0..$limit).map(Self::new)
            }
        }
    };
);

define_types!(
    pub Cell: 81,
    pub Row: 9,
    pub Col: 9,
    pub Block: 9,
    pub House: 27,
);

impl Cell {
    /// Cell of the given row and column, numbered in reading order.
    pub fn from_coords(row: Row, col: Col) -> Self {
        Cell::new(row.get() * 9 + col.get())
    }

    /// Row of this cell
    pub fn row(self) -> Row {
        Row::new(row(self.0))
    }

    /// Column of this cell
    pub fn col(self) -> Col {
        Col::new(col(self.0))
    }

    /// Block of this cell
    pub fn block(self) -> Block {
        Block::new(block(self.0))
    }
}

impl From<Row> for House {
    fn from(row: Row) -> House {
        House::new(row.0)
    }
}

impl From<Col> for House {
    fn from(col: Col) -> House {
        House::new(col.0 + COL_OFFSET)
    }
}

impl From<Block> for House {
    fn from(block: Block) -> House {
        House::new(block.0 + BLOCK_OFFSET)
    }
}

impl House {
    /// Cells of this house, in ascending order.
    pub(crate) fn cells(self) -> &'static [u8; 9] {
        debug_assert!(self.0 < N_HOUSES);
        &CELLS_BY_HOUSE[self.as_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_of_cell_matches_coords() {
        for cell in Cell::all() {
            let expected = (cell.row().get() / 3) * 3 + cell.col().get() / 3;
            assert_eq!(cell.block().get(), expected);
        }
    }

    #[test]
    fn each_cell_lies_in_exactly_three_houses() {
        for cell in Cell::all() {
            let n_houses = House::all()
                .filter(|house| house.cells().contains(&cell.get()))
                .count();
            assert_eq!(n_houses, 3);
        }
    }

    #[test]
    fn cell_houses_convert_to_distinct_house_indices() {
        for cell in Cell::all() {
            let row: House = cell.row().into();
            let col: House = cell.col().into();
            let block: House = cell.block().into();
            assert!(row < col && col < block);
            for house in &[row, col, block] {
                assert!(house.cells().contains(&cell.get()));
            }
        }
    }
}
