//! Depth-first enumeration of every completion of a grid.
//!
//! The engine repeatedly picks the unpinned cell with the fewest remaining
//! candidates, branches over those candidates in ascending order and recurses
//! on an independent snapshot per branch. Picking the most constrained cell
//! keeps the branching factor minimal and fails fast: a cell with zero
//! candidates is selected immediately and contributes zero branches.
//!
//! Each branch pins one more cell than its parent, so the search tree has
//! depth at most 81 and the enumeration always terminates.

use crate::bitset::Set;
use crate::board::{Cell, Digit, Grid, Sudoku};
use log::{debug, trace};

// Classification of one grid popped off the search stack.
//
// `Dead` can only come from conflicting clues erasing the candidate of a
// pinned cell: a search-time pin always draws from the cell's own candidate
// set, and a pinned neighbor's digit was already erased from that set, so
// pinned cells never lose their last candidate mid-search.
enum Node {
    Solved,
    Dead,
    Branch(Cell, Set<Digit>),
}

fn classify(grid: &Grid) -> Node {
    let mut best: Option<(Cell, Set<Digit>)> = None;
    for cell in Cell::all() {
        let candidates = grid.candidates(cell);
        if grid.is_pinned(cell) {
            if candidates.is_empty() {
                return Node::Dead;
            }
            continue;
        }
        // strict comparison keeps the first minimum in row-major scan order
        match best {
            Some((_, prev)) if prev.len() <= candidates.len() => {}
            _ => best = Some((cell, candidates)),
        }
    }
    match best {
        Some((cell, candidates)) => Node::Branch(cell, candidates),
        None => Node::Solved,
    }
}

/// Lazy iterator over every solution of a sudoku.
///
/// Created by [`Sudoku::solutions`]. Each call to `next` resumes the
/// depth-first search where it left off and runs until the next solution is
/// found or the search tree is exhausted. Dropping the iterator abandons the
/// unexplored branches; all state is owned by value, so there is nothing to
/// clean up.
#[derive(Debug)]
pub struct Solutions {
    stack: Vec<Grid>,
}

impl Solutions {
    pub(crate) fn new(grid: Grid) -> Solutions {
        Solutions { stack: vec![grid] }
    }
}

impl Iterator for Solutions {
    type Item = Sudoku;

    fn next(&mut self) -> Option<Sudoku> {
        while let Some(grid) = self.stack.pop() {
            match classify(&grid) {
                Node::Solved => {
                    debug!("all 81 cells pinned, emitting solution");
                    return Some(grid.to_sudoku());
                }
                Node::Dead => continue,
                Node::Branch(cell, candidates) => {
                    trace!(
                        "branching on cell {} over {} candidate(s)",
                        cell.get(),
                        candidates.len()
                    );
                    // pushed in descending order so the smallest digit is
                    // explored first; an empty candidate set pushes nothing
                    // and the branch ends right here
                    for digit in candidates.into_iter().rev() {
                        let mut branch = grid;
                        branch.pin(cell, digit);
                        self.stack.push(branch);
                    }
                }
            }
        }
        None
    }
}
