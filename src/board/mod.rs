//! Types for cells, digits and the grids built from them
mod digit;
mod grid;
pub mod positions;
mod sudoku;

pub use self::{
    digit::Digit,
    grid::Grid,
    positions::{Block, Cell, Col, Row},
    sudoku::{Sudoku, SudokuBlock, SudokuLine},
};
