//! Word search over a letter grid.
//!
//! Words may run in any of the eight directions and may overlap. An X-MAS is
//! an `A` whose two diagonals each read `MAS` in either direction.

use crate::core::grid::{Cell, Grid};

pub const WORD: &str = "XMAS";

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Occurrences of `word` in every direction, overlaps included.
pub fn count_word(grid: &Grid, word: &str) -> usize {
    let word = word.as_bytes();
    let Some(&first) = word.first() else {
        return 0;
    };
    grid.cells()
        .filter(|&cell| grid.at(cell) == first)
        .map(|cell| {
            DIRECTIONS
                .iter()
                .filter(|&&direction| reads_word(grid, cell, direction, word))
                .count()
        })
        .sum()
}

fn reads_word(grid: &Grid, start: Cell, direction: (isize, isize), word: &[u8]) -> bool {
    let mut cell = start;
    for (index, &letter) in word.iter().enumerate() {
        if index > 0 {
            match grid.offset(cell, direction) {
                Some(next) => cell = next,
                None => return false,
            }
        }
        if grid.at(cell) != letter {
            return false;
        }
    }
    true
}

/// `A`s crossed by `MAS` on both diagonals.
pub fn count_crosses(grid: &Grid) -> usize {
    grid.cells()
        .filter(|&cell| grid.at(cell) == b'A')
        .filter(|&cell| {
            diagonal_is_mas(grid, cell, (-1, -1), (1, 1))
                && diagonal_is_mas(grid, cell, (-1, 1), (1, -1))
        })
        .count()
}

fn diagonal_is_mas(grid: &Grid, centre: Cell, one: (isize, isize), other: (isize, isize)) -> bool {
    let ends = (
        grid.offset(centre, one).map(|cell| grid.at(cell)),
        grid.offset(centre, other).map(|cell| grid.at(cell)),
    );
    matches!(ends, (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
}
