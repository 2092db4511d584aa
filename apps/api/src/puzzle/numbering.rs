//! Display numbers for placed words. Horizontal and vertical words are
//! counted separately, each from 1, in placement order.

use serde::{Deserialize, Serialize};

use crate::puzzle::generator::Placement;
use crate::puzzle::grid::Orientation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNumber {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub number: u32,
}

pub fn number_placements(placements: &[Placement]) -> Vec<WordNumber> {
    let mut horizontal = 0u32;
    let mut vertical = 0u32;

    placements
        .iter()
        .map(|p| {
            let counter = match p.orientation {
                Orientation::Horizontal => &mut horizontal,
                Orientation::Vertical => &mut vertical,
            };
            *counter += 1;
            WordNumber {
                word: p.word.clone(),
                row: p.row,
                col: p.col,
                orientation: p.orientation,
                number: *counter,
            }
        })
        .collect()
}
