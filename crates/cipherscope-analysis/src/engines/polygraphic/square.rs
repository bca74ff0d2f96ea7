//! 5x5 key squares shared by Playfair and four-square.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::alphabet::index_of;

/// Index of `J`, folded into `I` in every square.
const J: u8 = 9;
const I: u8 = 8;

/// log10(25!)
pub const LOG10_SQUARES: f64 = 25.1906;

/// Letter indices of `text` with `J` folded into `I`, non-letters dropped.
pub fn square_letters(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(index_of)
        .map(|i| if i == J { I } else { i })
        .collect()
}

/// A 5x5 arrangement of the 25 letters other than `J`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [u8; 25],
    /// Cell of each letter index; `J` shares the cell of `I`.
    position: [u8; 26],
}

impl KeySquare {
    /// Keyword letters first (deduplicated, `J` as `I`), then the rest of
    /// the alphabet in order.
    pub fn from_keyword(keyword: &str) -> Self {
        let mut used = [false; 26];
        used[J as usize] = true;
        let mut cells = Vec::with_capacity(25);
        let rest = (0..26u8).filter(|&i| i != J);
        for letter in square_letters(keyword).into_iter().chain(rest) {
            if !used[letter as usize] {
                used[letter as usize] = true;
                cells.push(letter);
            }
        }
        let mut array = [0u8; 25];
        array.copy_from_slice(&cells);
        Self::from_cells(array)
    }

    fn from_cells(cells: [u8; 25]) -> Self {
        let mut position = [0u8; 26];
        for (cell, &letter) in cells.iter().enumerate() {
            position[letter as usize] = cell as u8;
        }
        position[J as usize] = position[I as usize];
        Self { cells, position }
    }

    #[inline]
    pub fn locate(&self, letter: u8) -> (usize, usize) {
        let cell = self.position[letter as usize] as usize;
        (cell / 5, cell % 5)
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[(row % 5) * 5 + col % 5]
    }

    /// The 25 letters row by row; parses back to the same square.
    pub fn to_keyword(&self) -> String {
        self.cells.iter().map(|&i| (b'A' + i) as char).collect()
    }

    pub fn random(rng: &mut dyn RngCore) -> Self {
        let mut cells: Vec<u8> = (0..26u8).filter(|&i| i != J).collect();
        cells.shuffle(rng);
        let mut array = [0u8; 25];
        array.copy_from_slice(&cells);
        Self::from_cells(array)
    }

    /// A nearby square: usually two cells swapped, sometimes two whole rows
    /// or two whole columns.
    pub fn perturbed(&self, rng: &mut dyn RngCore) -> Self {
        let mut cells = self.cells;
        let (a, b) = distinct_pair(rng, 5);
        match rng.gen_range(0..10) {
            0 => {
                for col in 0..5 {
                    cells.swap(a * 5 + col, b * 5 + col);
                }
            }
            1 => {
                for row in 0..5 {
                    cells.swap(row * 5 + a, row * 5 + b);
                }
            }
            _ => {
                let (x, y) = distinct_pair(rng, 25);
                cells.swap(x, y);
            }
        }
        Self::from_cells(cells)
    }
}

fn distinct_pair(rng: &mut dyn RngCore, n: usize) -> (usize, usize) {
    let a = rng.gen_range(0..n);
    let mut b = rng.gen_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}
