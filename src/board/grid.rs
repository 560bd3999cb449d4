use crate::bitset::Set;
use crate::board::{Cell, Digit, Row, Sudoku};
use crate::helper::CellArray;
use std::fmt;

/// Candidate-tracking working copy of a sudoku board.
///
/// Every cell holds the set of digits still possible for it. A cell becomes
/// *pinned* when a digit is committed to it, either as one of the initial
/// clues or as a decision of the search engine — never through elimination
/// alone. Pinning a digit atomically erases it from the candidate sets of
/// the 20 cells sharing a row, column or block with the pinned cell.
///
/// `Grid` is `Copy`. The search engine branches on plain value copies, so
/// no two branches ever share mutable state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    candidates: CellArray<Set<Digit>>,
    pinned: Set<Cell>,
}

impl Grid {
    /// Builds a grid from a sudoku. Every cell starts out with all nine
    /// candidates and unpinned; every clue is then pinned in row-major scan
    /// order, propagating its constraints immediately.
    ///
    /// Self-contradictory clues are not rejected here. They produce a grid
    /// that the search engine will discover to be unsatisfiable.
    pub fn from_sudoku(sudoku: Sudoku) -> Grid {
        let mut grid = Grid {
            candidates: CellArray([Set::ALL; 81]),
            pinned: Set::NONE,
        };
        for (cell, digit) in Cell::all().zip(sudoku.iter()) {
            if let Some(digit) = digit {
                grid.pin(cell, digit);
            }
        }
        grid
    }

    /// Commits `digit` to `cell`: erases the digit from the candidate set of
    /// every other cell in the same row, column and block, then reduces the
    /// cell to the single candidate and marks it pinned.
    ///
    /// Erasing a digit a neighbor no longer lists is a no-op and erasing a
    /// neighbor's last candidate is allowed. Contradictions are detected by
    /// the search engine, not here.
    pub fn pin(&mut self, cell: Cell, digit: Digit) {
        for neighbor in cell.neighbors() {
            self.candidates[neighbor].remove(digit.as_set());
        }
        self.candidates[cell] = digit.as_set();
        self.pinned |= cell;
    }

    /// The set of digits still possible for `cell`.
    ///
    /// For a pinned cell this is the singleton of the committed digit,
    /// unless a conflicting clue erased it afterwards.
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// Whether a digit has been committed to `cell`.
    pub fn is_pinned(&self, cell: Cell) -> bool {
        self.pinned.contains(cell)
    }

    /// The set of cells not yet committed to a digit.
    pub fn unpinned(&self) -> Set<Cell> {
        !self.pinned
    }

    /// Reads the grid back out as a sudoku: the committed digit for pinned
    /// cells, 0 for everything else. Well-defined on partially determined
    /// grids.
    pub fn to_sudoku(&self) -> Sudoku {
        let mut bytes = [0; 81];
        for cell in self.pinned {
            if let Ok(Some(digit)) = self.candidates[cell].unique() {
                bytes[cell.as_index()] = digit.get();
            }
        }
        Sudoku(bytes)
    }
}

/* Example output
┌──────────────────────────────┬──────────────────────────────┬──────────────────────────────┐
│ 1         2         3        │ 4         5         6        │ 7         8         9        │
│ 45678     45678     45678    │ 12378     12378     12378    │ 123456    123456    123456   │
│ 456789    456789    456789   │ 123789    123789    123789   │ 123456    123456    123456   │
├──────────────────────────────┼──────────────────────────────┼──────────────────────────────┤
│ 23456789  13456789  12456789 │ 12356789  12346789  12345789 │ 12345689  12345679  12345678 │
...
*/
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cell_contents = |cell: Cell| {
            let candidates = self.candidates[cell];
            if self.is_pinned(cell) {
                return match candidates.unique() {
                    Ok(Some(digit)) => digit.get().to_string(),
                    // a conflicting clue erased the committed digit
                    _ => "!".to_string(),
                };
            }
            if candidates.is_empty() {
                return "_".to_string();
            }
            candidates
                .into_iter()
                .map(|digit| (digit.get() + b'0') as char)
                .collect()
        };
        let cells: Vec<String> = Cell::all().map(cell_contents).collect();

        let mut column_widths = [1usize; 9];
        for (cell, contents) in Cell::all().zip(&cells) {
            let width = &mut column_widths[cell.col().as_index()];
            *width = (*width).max(contents.len());
        }

        let stack_width = |stack_nr: usize| {
            column_widths[stack_nr * 3..stack_nr * 3 + 3]
                .iter()
                .sum::<usize>()
                + 6 // spaces in between cells and walls
        };

        let print_horizontal_delimiter =
            |f: &mut fmt::Formatter, leftmost: char, middle: char, rightmost: &str| {
                write!(
                    f,
                    "{left}{0:─<1$}{middle}{0:─<2$}{middle}{0:─<3$}{right}",
                    "",
                    stack_width(0),
                    stack_width(1),
                    stack_width(2),
                    left = leftmost,
                    middle = middle,
                    right = rightmost,
                )
            };

        for row in Row::all() {
            match row.get() {
                0 => print_horizontal_delimiter(f, '┌', '┬', "┐\n")?,
                3 | 6 => print_horizontal_delimiter(f, '├', '┼', "┤\n")?,
                _ => {}
            }
            write!(f, "│")?;
            for stack in 0..3 {
                let base_idx = row.as_index() * 9 + stack * 3;
                write!(
                    f,
                    " {:w1$}  {:w2$}  {:w3$} │",
                    cells[base_idx],
                    cells[base_idx + 1],
                    cells[base_idx + 2],
                    w1 = column_widths[stack * 3],
                    w2 = column_widths[stack * 3 + 1],
                    w3 = column_widths[stack * 3 + 2],
                )?;
            }
            writeln!(f)?;
        }
        print_horizontal_delimiter(f, '└', '┴', "┘")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Col;

    fn empty_grid() -> Grid {
        Grid::from_sudoku(Sudoku::from_bytes([0; 81]).unwrap())
    }

    #[test]
    fn fresh_cells_have_all_nine_candidates() {
        let grid = empty_grid();
        for cell in Cell::all() {
            assert_eq!(grid.candidates(cell), Set::ALL);
            assert!(!grid.is_pinned(cell));
        }
    }

    #[test]
    fn pin_erases_the_digit_from_all_neighbors() {
        let mut grid = empty_grid();
        let cell = Cell::from_row_col(Row::new(4), Col::new(4));
        let digit = Digit::new(5);
        grid.pin(cell, digit);

        assert!(grid.is_pinned(cell));
        assert_eq!(grid.candidates(cell), digit.as_set());
        for other in Cell::all().filter(|&other| other != cell) {
            let expected = match cell.neighbors().contains(other) {
                true => Set::ALL.without(digit.as_set()),
                false => Set::ALL,
            };
            assert_eq!(grid.candidates(other), expected);
            assert!(!grid.is_pinned(other));
        }
    }

    #[test]
    fn snapshots_are_independent() {
        let original = empty_grid();
        let mut branch = original;
        branch.pin(Cell::new(0), Digit::new(1));

        assert_ne!(original, branch);
        assert_eq!(original.candidates(Cell::new(1)), Set::ALL);
        assert!(!original.is_pinned(Cell::new(0)));
    }

    #[test]
    fn clues_are_pinned_on_construction() {
        let sudoku = Sudoku::from_str_line(
            "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...",
        )
        .unwrap();
        let grid = Grid::from_sudoku(sudoku);

        for (cell, digit) in Cell::all().zip(sudoku.iter()) {
            match digit {
                Some(digit) => {
                    assert!(grid.is_pinned(cell));
                    assert_eq!(grid.candidates(cell), digit.as_set());
                }
                None => assert!(!grid.is_pinned(cell)),
            }
        }
    }

    #[test]
    fn conflicting_clues_erase_a_pinned_cells_candidates() {
        // two 5s in the top row
        let mut bytes = [0; 81];
        bytes[0] = 5;
        bytes[2] = 5;
        let grid = Grid::from_sudoku(Sudoku::from_bytes(bytes).unwrap());

        // the second pin erased the first cell's only candidate
        assert!(grid.is_pinned(Cell::new(0)));
        assert!(grid.candidates(Cell::new(0)).is_empty());
        assert_eq!(grid.candidates(Cell::new(2)), Digit::new(5).as_set());
    }

    #[test]
    fn to_sudoku_emits_zero_for_undetermined_cells() {
        let mut grid = empty_grid();
        grid.pin(Cell::new(17), Digit::new(8));

        let sudoku = grid.to_sudoku();
        let mut expected = [0; 81];
        expected[17] = 8;
        assert_eq!(sudoku.to_bytes(), expected);
    }
}
