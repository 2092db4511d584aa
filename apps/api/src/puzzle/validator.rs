//! Placement Validator: decides whether a word fits at a candidate position.

use crate::puzzle::grid::{Grid, Orientation, BLANK};

/// Returns true when `word` can be written at (row, col) in `orientation`.
///
/// Checks, in order:
/// 1. The word plus one trailing boundary cell fits before the far edge.
/// 2. Every target cell is blank or already holds the same letter, and none
///    is a boundary cell.
/// 3. The cells just before and after the word along its axis hold no
///    letter, since the committer turns them into boundary cells.
///
/// Pure: the grid is only read, so repeated calls give the same answer.
pub fn is_valid_placement(
    grid: &Grid,
    row: usize,
    col: usize,
    orientation: Orientation,
    word: &str,
) -> bool {
    let len = word.chars().count();
    if len == 0 {
        return false;
    }

    if !is_within_bounds(grid.size(), row, col, orientation, len) {
        return false;
    }

    let letters_fit = word.chars().enumerate().all(|(i, letter)| {
        let (r, c) = orientation.step(row, col, i);
        match grid.cell(r, c) {
            Some(existing) => {
                (existing == BLANK || existing == letter) && !grid.is_boundary(r, c)
            }
            None => false,
        }
    });

    letters_fit && ends_are_letter_free(grid, row, col, orientation, len)
}

/// A boundary cell never holds a letter, so the cells the committer will mark
/// must be blank (or off the grid) before the word goes in.
fn ends_are_letter_free(
    grid: &Grid,
    row: usize,
    col: usize,
    orientation: Orientation,
    len: usize,
) -> bool {
    let (leading, trailing) = match orientation {
        Orientation::Horizontal => (col.checked_sub(1).map(|c| (row, c)), (row, col + len)),
        Orientation::Vertical => (row.checked_sub(1).map(|r| (r, col)), (row + len, col)),
    };

    leading
        .into_iter()
        .chain(Some(trailing))
        .all(|(r, c)| grid.cell(r, c).map_or(true, |existing| existing == BLANK))
}

/// Only the far edge along the word's axis is checked, and it keeps one cell
/// spare for the trailing boundary. The leading edge is covered by unsigned
/// indices. The perpendicular index is not bounds-checked here: the generator
/// samples it from `[0, size)`, so it is always in range for generated trials.
/// Direct callers passing an out-of-range perpendicular index are rejected by
/// the per-letter `grid.cell` lookup instead.
fn is_within_bounds(
    size: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
    len: usize,
) -> bool {
    let start = match orientation {
        Orientation::Horizontal => col,
        Orientation::Vertical => row,
    };
    start + len + 1 < size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::committer::place;

    #[test]
    fn test_empty_grid_accepts_short_word() {
        let grid = Grid::new(21);
        assert!(is_valid_placement(&grid, 0, 0, Orientation::Horizontal, "CAT"));
        assert!(is_valid_placement(&grid, 0, 0, Orientation::Vertical, "CAT"));
    }

    #[test]
    fn test_word_length_threshold_at_origin() {
        let n = 10;
        let grid = Grid::new(n);
        // L + 1 < N succeeds
        let fits = "A".repeat(n - 2);
        assert!(is_valid_placement(&grid, 0, 0, Orientation::Horizontal, &fits));
        // L + 1 >= N fails
        let too_long = "A".repeat(n - 1);
        assert!(!is_valid_placement(&grid, 0, 0, Orientation::Horizontal, &too_long));
        let way_too_long = "A".repeat(n + 5);
        assert!(!is_valid_placement(&grid, 0, 0, Orientation::Vertical, &way_too_long));
    }

    #[test]
    fn test_trailing_cell_is_reserved() {
        let grid = Grid::new(10);
        // col 6 + 3 letters = ends at col 8, boundary at col 9: 6+3+1 = 10, not < 10
        assert!(!is_valid_placement(&grid, 4, 6, Orientation::Horizontal, "CAT"));
        assert!(is_valid_placement(&grid, 4, 5, Orientation::Horizontal, "CAT"));
        assert!(!is_valid_placement(&grid, 6, 4, Orientation::Vertical, "CAT"));
        assert!(is_valid_placement(&grid, 5, 4, Orientation::Vertical, "CAT"));
    }

    #[test]
    fn test_perpendicular_axis_is_not_bounds_checked_but_cannot_panic() {
        let grid = Grid::new(10);
        // Row 9 is the last row; horizontal words may sit there.
        assert!(is_valid_placement(&grid, 9, 0, Orientation::Horizontal, "CAT"));
        // Out-of-range perpendicular index is rejected, not a panic.
        assert!(!is_valid_placement(&grid, 12, 0, Orientation::Horizontal, "CAT"));
    }

    #[test]
    fn test_conflicting_letter_rejected() {
        let mut grid = Grid::new(21);
        place(&mut grid, 2, 2, Orientation::Horizontal, "CAT");
        // Vertical "DOG" through (2,3) where 'A' sits
        assert!(!is_valid_placement(&grid, 2, 3, Orientation::Vertical, "DOG"));
    }

    #[test]
    fn test_matching_letter_accepted() {
        let mut grid = Grid::new(21);
        place(&mut grid, 2, 2, Orientation::Horizontal, "CAT");
        // Vertical "ANT" starting at the 'A' of CAT
        assert!(is_valid_placement(&grid, 2, 3, Orientation::Vertical, "ANT"));
    }

    #[test]
    fn test_boundary_cell_rejected() {
        let mut grid = Grid::new(21);
        place(&mut grid, 5, 5, Orientation::Horizontal, "CAT");
        assert!(grid.is_boundary(5, 4));
        assert!(grid.is_boundary(5, 8));
        assert!(!is_valid_placement(&grid, 5, 8, Orientation::Horizontal, "DOG"));
        assert!(!is_valid_placement(&grid, 3, 4, Orientation::Vertical, "DOG"));
    }

    #[test]
    fn test_single_conflict_rejects_whole_word() {
        let mut grid = Grid::new(21);
        place(&mut grid, 0, 10, Orientation::Vertical, "Z");
        // "ABCDEFGHIJKL" horizontally at row 0 passes col 10 with 'K' vs 'Z'
        assert!(!is_valid_placement(
            &grid,
            0,
            0,
            Orientation::Horizontal,
            "ABCDEFGHIJKL"
        ));
    }

    #[test]
    fn test_leading_end_on_existing_letter_rejected() {
        let mut grid = Grid::new(21);
        // DOG runs down column 4, its G lands on (5,4).
        place(&mut grid, 3, 4, Orientation::Vertical, "DOG");
        assert_eq!(grid.cell(5, 4), Some('G'));

        // CAT at (5,5) would mark (5,4) as its leading boundary.
        assert!(!is_valid_placement(&grid, 5, 5, Orientation::Horizontal, "CAT"));
        assert!(is_valid_placement(&grid, 5, 6, Orientation::Horizontal, "CAT"));
    }

    #[test]
    fn test_trailing_end_on_existing_letter_rejected() {
        let mut grid = Grid::new(21);
        place(&mut grid, 6, 10, Orientation::Horizontal, "OWL");
        // EMU down column 11 from row 3 would end with its boundary on (6,11).
        assert!(!is_valid_placement(&grid, 3, 11, Orientation::Vertical, "EMU"));
        assert!(is_valid_placement(&grid, 2, 11, Orientation::Vertical, "EMU"));
    }

    #[test]
    fn test_empty_word_never_valid() {
        let grid = Grid::new(21);
        assert!(!is_valid_placement(&grid, 0, 0, Orientation::Horizontal, ""));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut grid = Grid::new(15);
        place(&mut grid, 3, 3, Orientation::Vertical, "HELLO");
        let snapshot = grid.clone();
        for (row, col, orientation, word) in [
            (3, 3, Orientation::Horizontal, "HAT"),
            (4, 2, Orientation::Horizontal, "BEE"),
            (0, 0, Orientation::Vertical, "WORLD"),
        ] {
            let first = is_valid_placement(&grid, row, col, orientation, word);
            let second = is_valid_placement(&grid, row, col, orientation, word);
            assert_eq!(first, second);
        }
        assert_eq!(grid, snapshot, "validation must not mutate the grid");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let grid = Grid::new(6);
        // 4 chars, 8 bytes: 0 + 4 + 1 < 6
        assert!(is_valid_placement(&grid, 0, 0, Orientation::Horizontal, "ÄÖÜÉ"));
    }
}
