//! Errors that may be encountered when constructing a sudoku from bytes or strings
use crate::board::{Block, Cell, Col, Row};

#[cfg(doc)]
use crate::Sudoku;

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// An invalid entry encountered while parsing a line format sudoku.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first line, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> Row {
        Cell::new(self.cell).row()
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> Col {
        Cell::new(self.cell).col()
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> Block {
        Cell::new(self.cell).block()
    }
}

/// Error for [`Sudoku::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the digits 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Less than 81 cells were supplied. Returns the number of cells encountered.
    #[error("sudoku contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Returned if >=82 valid cell positions are supplied
    #[error("sudoku contains more than 81 cells or is missing the comment delimiter")]
    TooManyCells,
    /// Comments must be delimited by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}
