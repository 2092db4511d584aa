//! Generator: shuffles the input words and places each one with a bounded
//! number of random trials.
//!
//! # Randomness
//! The random source is a parameter, never ambient state. Handlers seed a
//! `StdRng` per request so a layout can be replayed from its seed.
//!
//! # Dropped words
//! A word that fails every trial is left out of the placements. Nothing is
//! raised; `PlacementResult::dropped_words` reports the difference between
//! requested and placed words.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::puzzle::committer::place;
use crate::puzzle::grid::{Grid, Orientation};
use crate::puzzle::validator::is_valid_placement;

/// Random trials allowed per word before it is dropped.
pub const MAX_TRIALS: usize = 100;

/// A word committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Everything a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    pub grid: Grid,
    /// Successful placements, in the order they were committed.
    pub placements: Vec<Placement>,
    /// The words exactly as the caller passed them, before shuffling.
    pub requested: Vec<String>,
}

impl PlacementResult {
    /// Placed words in placement order. Duplicates appear once per success.
    pub fn placed_words(&self) -> Vec<String> {
        self.placements.iter().map(|p| p.word.clone()).collect()
    }

    /// Word → (row, col, orientation). A word placed twice keeps its later position.
    pub fn word_positions(&self) -> HashMap<String, (usize, usize, Orientation)> {
        self.placements
            .iter()
            .map(|p| (p.word.clone(), (p.row, p.col, p.orientation)))
            .collect()
    }

    /// Requested words that were not placed, in request order.
    ///
    /// Counted as a multiset: if "CAT" was requested twice and placed once,
    /// one "CAT" is reported.
    pub fn dropped_words(&self) -> Vec<String> {
        let mut placed: HashMap<&str, usize> = HashMap::new();
        for p in &self.placements {
            *placed.entry(p.word.as_str()).or_default() += 1;
        }

        let mut dropped = Vec::new();
        for word in &self.requested {
            match placed.get_mut(word.as_str()) {
                Some(count) if *count > 0 => *count -= 1,
                _ => dropped.push(word.clone()),
            }
        }
        dropped
    }
}

/// Lays out `words` on a `size`×`size` grid.
///
/// Never fails. An empty list yields a blank grid; words that do not fit
/// within `MAX_TRIALS` random trials are dropped. The shuffle order decides
/// which words win when the grid gets crowded.
pub fn generate<R: Rng + ?Sized>(words: &[String], size: usize, rng: &mut R) -> PlacementResult {
    let mut grid = Grid::new(size);
    let mut placements = Vec::with_capacity(words.len());

    let mut order: Vec<&String> = words.iter().collect();
    order.shuffle(rng);

    // Nothing can be sampled from an empty range; every word is dropped.
    if size > 0 {
        for word in order {
            if let Some(placement) = try_place(&mut grid, word, rng) {
                placements.push(placement);
            }
        }
    }

    PlacementResult {
        grid,
        placements,
        requested: words.to_vec(),
    }
}

fn try_place<R: Rng + ?Sized>(grid: &mut Grid, word: &str, rng: &mut R) -> Option<Placement> {
    let size = grid.size();
    for _ in 0..MAX_TRIALS {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        let orientation = if rng.gen_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };

        if is_valid_placement(grid, row, col, orientation, word) {
            place(grid, row, col, orientation, word);
            return Some(Placement {
                word: word.to_string(),
                row,
                col,
                orientation,
            });
        }
    }
    None
}
