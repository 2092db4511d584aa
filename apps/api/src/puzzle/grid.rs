//! Grid Model: the character buffer and the boundary ("black box") mask.
//!
//! Both buffers live in one owned aggregate so the validator and committer
//! always look at the same instance. Reads are public; writes are limited to
//! the puzzle module and only the committer calls them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker stored in cells that hold no letter.
pub const BLANK: char = ' ';

/// Grid size used when a caller does not ask for one.
pub const DEFAULT_GRID_SIZE: usize = 21;

/// Direction a word extends in from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    /// Increasing column index.
    Horizontal,
    /// Increasing row index.
    Vertical,
}

impl Orientation {
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "HORIZONTAL",
            Orientation::Vertical => "VERTICAL",
        }
    }

    /// Cell covered by the `offset`-th letter of a word starting at (row, col).
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A square letter grid plus its parallel boundary mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
    boundaries: Vec<bool>,
}

impl Grid {
    /// Creates a `size`×`size` grid with every cell blank and unmarked.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![BLANK; size * size],
            boundaries: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Character at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// True when (row, col) is a boundary cell. Out-of-range cells are never boundaries.
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .map(|i| self.boundaries[i])
            .unwrap_or(false)
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, letter: char) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = letter;
        }
    }

    pub(crate) fn mark_boundary(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.boundaries[i] = true;
        }
    }

    /// Row-major copy of the character buffer.
    pub fn rows(&self) -> Vec<Vec<char>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[char]>::to_vec).collect()
    }

    /// Row-major copy of the boundary mask.
    pub fn boundary_rows(&self) -> Vec<Vec<bool>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.boundaries
            .chunks(self.size)
            .map(<[bool]>::to_vec)
            .collect()
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == BLANK) && self.boundaries.iter().all(|&b| !b)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let i = row * self.size + col;
                let c = if self.boundaries[i] {
                    '#'
                } else if self.cells[i] == BLANK {
                    '.'
                } else {
                    self.cells[i]
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
