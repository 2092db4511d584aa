//! Placement Committer: writes a validated word and marks its end boundaries.

use crate::puzzle::grid::{Grid, Orientation};

/// Writes `word` at (row, col) and marks the cells just before and after it
/// along its axis as boundaries.
///
/// Callers must run `is_valid_placement` first; nothing is re-checked here.
/// Only the two axis ends are marked, never the cells alongside the word.
pub fn place(grid: &mut Grid, row: usize, col: usize, orientation: Orientation, word: &str) {
    let mut len = 0;
    for (i, letter) in word.chars().enumerate() {
        let (r, c) = orientation.step(row, col, i);
        grid.set_cell(r, c, letter);
        len += 1;
    }

    let size = grid.size();
    match orientation {
        Orientation::Horizontal => {
            if col > 0 {
                grid.mark_boundary(row, col - 1);
            }
            if col + len < size {
                grid.mark_boundary(row, col + len);
            }
        }
        Orientation::Vertical => {
            if row > 0 {
                grid.mark_boundary(row - 1, col);
            }
            if row + len < size {
                grid.mark_boundary(row + len, col);
            }
        }
    }
}
