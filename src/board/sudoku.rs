use crate::bitset::Set;
use crate::board::{Block, Cell, Col, Digit, Grid, Row};
use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError, InvalidEntry, LineParseError};
use crate::solver::Solutions;
use std::ops::Deref;
use std::{fmt, str};

/// The main structure exposing all the functionality of the library
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array. `0` marks an empty cell, `1..=9` are digits.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81.
    /// `0` marks an empty cell, `1..=9` are digits.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Sudoku::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Creates a sudoku from a 9×9 matrix of digits, given row by row.
    /// `0` marks an empty cell, `1..=9` are digits.
    pub fn from_matrix(matrix: [[u8; 9]; 9]) -> Result<Sudoku, FromBytesError> {
        let mut bytes = [0; N_CELLS];
        for (entry, &digit) in bytes.iter_mut().zip(matrix.iter().flatten()) {
            *entry = digit;
        }
        Sudoku::from_bytes(bytes)
    }

    /// Reads a sudoku in the line format.
    ///
    /// The line format is a sequence of exactly 81 cells given left to right,
    /// top to bottom. Accepted values are the digits `1..=9` and `'0'`, `'.'`
    /// or `'_'` for empty cells. An optional comment may follow, delimited by
    /// a space or tab.
    ///
    /// ```text
    /// ..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.. optional comment
    /// ```
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0u8;
        for ch in s.chars() {
            if n_cells as usize == N_CELLS {
                return match ch {
                    ' ' | '\t' => Ok(Sudoku(grid)),
                    '.' | '_' | '0'..='9' => Err(LineParseError::TooManyCells),
                    _ => Err(LineParseError::MissingCommentDelimiter),
                };
            }
            grid[n_cells as usize] = match ch {
                '.' | '_' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(LineParseError::InvalidEntry(InvalidEntry { cell: n_cells, ch })),
            };
            n_cells += 1;
        }
        match n_cells as usize == N_CELLS {
            true => Ok(Sudoku(grid)),
            false => Err(LineParseError::NotEnoughCells(n_cells)),
        }
    }

    /// Returns the underlying byte array. `0` marks an empty cell.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the sudoku as a 9×9 matrix of digits, row by row.
    /// `0` marks an empty cell.
    pub fn to_matrix(&self) -> [[u8; 9]; 9] {
        let mut matrix = [[0; 9]; 9];
        for (row, chunk) in matrix.iter_mut().zip(self.0.chunks(9)) {
            row.copy_from_slice(chunk);
        }
        matrix
    }

    /// Returns an iterator over the cells of the sudoku, going from left to
    /// right, top to bottom. Empty cells are `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&byte| Digit::new_checked(byte))
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&digit| digit != 0).count() as u8
    }

    /// Checks whether the sudoku is completely filled and every row, column
    /// and block contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        let rows = Row::all().map(Row::cells);
        let cols = Col::all().map(Col::cells);
        let blocks = Block::all().map(Block::cells);
        rows.chain(cols)
            .chain(blocks)
            .all(|house| self.house_contains_all_digits(house))
    }

    fn house_contains_all_digits(&self, house: Set<Cell>) -> bool {
        let mut digits = Set::NONE;
        for cell in house {
            match Digit::new_checked(self.0[cell.as_index()]) {
                Some(digit) => digits |= digit,
                None => return false,
            }
        }
        digits.is_full()
    }

    /// Returns a lazy iterator over every solution of this sudoku.
    ///
    /// The iterator may be empty (unsatisfiable clues) or yield many
    /// solutions (under-constrained clues). The enumeration order is
    /// deterministic. Stop consuming the iterator to abandon the rest of
    /// the search.
    pub fn solutions(self) -> Solutions {
        Solutions::new(Grid::from_sudoku(self))
    }

    /// Finds the first solution of the sudoku. If multiple solutions exist,
    /// the rest is not explored. Returns `None` if no solution exists.
    pub fn solve_one(self) -> Option<Sudoku> {
        self.solutions().next()
    }

    /// Solves the sudoku and returns the solution if it is unique,
    /// `None` otherwise.
    pub fn solve_unique(self) -> Option<Sudoku> {
        let mut solutions = self.solutions();
        let solution = solutions.next()?;
        match solutions.next() {
            Some(_) => None,
            None => Some(solution),
        }
    }

    /// Returns the first `limit` solutions. If fewer exist, returns only those.
    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        self.solutions().take(limit).collect()
    }

    /// Counts the solutions of the sudoku, stopping as soon as `limit` were
    /// found.
    pub fn count_at_most(self, limit: usize) -> usize {
        self.solutions().take(limit).count()
    }

    /// Returns the line format representation of the sudoku.
    /// Empty cells are printed as `.`
    pub fn to_str_line(&self) -> SudokuLine {
        let mut line = [0; N_CELLS];
        for (chr, &digit) in line.iter_mut().zip(self.0.iter()) {
            *chr = match digit {
                0 => b'.',
                digit => digit + b'0',
            };
        }
        SudokuLine(line)
    }

    /// Returns a wrapper around the sudoku that implements `Display` in the
    /// block format, with `_` for empty cells and gaps between blocks.
    pub fn display_block(&self) -> SudokuBlock {
        SudokuBlock(self.0)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_str_line())
    }
}

/// The line format representation of a sudoku. Derefs into `&str`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SudokuLine([u8; N_CELLS]);

impl Deref for SudokuLine {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // the line is pure ASCII by construction
        str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

/// The block format representation of a sudoku.
///
/// ```text
/// ___ 2__ _63
/// 3__ __5 4_1
/// __1 __3 98_
///
/// ___ ___ _9_
/// ___ 538 ___
/// _3_ ___ ___
///
/// _26 3__ 5__
/// 5_3 7__ __8
/// 47_ __1 ___
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SudokuBlock([u8; N_CELLS]);

impl fmt::Display for SudokuBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &digit) in Cell::all().zip(self.0.iter()) {
            match (cell.row().get(), cell.col().get()) {
                (0, 0) => {}
                (3, 0) | (6, 0) => write!(f, "\n\n")?,
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, " ")?,
                _ => {}
            }
            match digit {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", digit)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let line = String::deserialize(deserializer)?;
            Sudoku::from_str_line(&line).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a valid, completely filled grid
    const FILLED_LINE: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    #[test]
    fn line_format_round_trip() {
        let sudoku = Sudoku::from_str_line(FILLED_LINE).unwrap();
        assert_eq!(&*sudoku.to_str_line(), FILLED_LINE);
    }

    #[test]
    fn matrix_round_trip() {
        let sudoku = Sudoku::from_str_line(FILLED_LINE).unwrap();
        assert_eq!(Sudoku::from_matrix(sudoku.to_matrix()).unwrap(), sudoku);
    }

    #[test]
    fn line_format_accepts_trailing_comment() {
        let line = format!("{} this is a comment", FILLED_LINE);
        assert_eq!(Sudoku::from_str_line(&line), Sudoku::from_str_line(FILLED_LINE));
    }

    #[test]
    fn line_format_rejects_short_input() {
        assert_eq!(
            Sudoku::from_str_line("123"),
            Err(LineParseError::NotEnoughCells(3))
        );
    }

    #[test]
    fn line_format_rejects_82nd_cell() {
        let line = format!("{}5", FILLED_LINE);
        assert_eq!(Sudoku::from_str_line(&line), Err(LineParseError::TooManyCells));
    }

    #[test]
    fn line_format_rejects_invalid_characters() {
        assert_eq!(
            Sudoku::from_str_line("12x"),
            Err(LineParseError::InvalidEntry(InvalidEntry { cell: 2, ch: 'x' }))
        );
    }

    #[test]
    fn from_bytes_rejects_out_of_range_entries() {
        let mut bytes = [0; 81];
        bytes[80] = 10;
        assert!(Sudoku::from_bytes(bytes).is_err());
    }

    #[test]
    fn from_bytes_slice_rejects_wrong_lengths() {
        assert!(matches!(
            Sudoku::from_bytes_slice(&[0; 80]),
            Err(FromBytesSliceError::WrongLength(80))
        ));
    }

    #[test]
    fn is_solved_on_valid_filled_grid() {
        assert!(Sudoku::from_str_line(FILLED_LINE).unwrap().is_solved());
    }

    #[test]
    fn is_solved_rejects_incomplete_grids() {
        let mut bytes = Sudoku::from_str_line(FILLED_LINE).unwrap().to_bytes();
        bytes[40] = 0;
        assert!(!Sudoku::from_bytes(bytes).unwrap().is_solved());
    }

    #[test]
    fn is_solved_rejects_duplicates_in_a_house() {
        let mut bytes = Sudoku::from_str_line(FILLED_LINE).unwrap().to_bytes();
        // duplicate within the first row
        bytes[0] = bytes[1];
        assert!(!Sudoku::from_bytes(bytes).unwrap().is_solved());
    }
}
