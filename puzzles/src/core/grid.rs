//! Rectangular character grids shared by the map-based solvers.

use anyhow::{Result, bail};

/// `(row, col)`, origin at the top left.
pub type Cell = (usize, usize);

/// The four orthogonal headings, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    pub fn turn_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    pub fn reverse(self) -> Heading {
        self.turn_right().turn_right()
    }

    /// `(row, col)` delta of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
    width: usize,
}

/// Parse non-blank lines into a rectangular grid of ASCII bytes.
pub fn parse_grid(input: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<u8>> = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if !line.is_ascii() {
            bail!("line {}: grid must be ASCII", index + 1);
        }
        if let Some(first) = rows.first()
            && first.len() != line.len()
        {
            bail!(
                "line {}: expected {} columns, found {}",
                index + 1,
                first.len(),
                line.len()
            );
        }
        rows.push(line.as_bytes().to_vec());
    }
    if rows.is_empty() {
        bail!("grid is empty");
    }
    let width = rows[0].len();
    Ok(Grid { rows, width })
}

impl Grid {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Byte at an in-bounds cell.
    pub fn at(&self, (row, col): Cell) -> u8 {
        self.rows[row][col]
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height()).flat_map(move |row| (0..self.width).map(move |col| (row, col)))
    }

    /// First cell holding `value`, in row-major order.
    pub fn find(&self, value: u8) -> Option<Cell> {
        self.cells().find(|&cell| self.at(cell) == value)
    }

    /// Cell displaced by `(d_row, d_col)`, if it stays on the grid.
    pub fn offset(&self, (row, col): Cell, (d_row, d_col): (isize, isize)) -> Option<Cell> {
        let row = row.checked_add_signed(d_row)?;
        let col = col.checked_add_signed(d_col)?;
        (row < self.height() && col < self.width).then_some((row, col))
    }

    pub fn step(&self, cell: Cell, heading: Heading) -> Option<Cell> {
        self.offset(cell, heading.delta())
    }

    /// On-grid orthogonal neighbours.
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Heading::ALL
            .into_iter()
            .filter_map(move |heading| self.step(cell, heading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stay_on_the_grid() {
        let grid = parse_grid("ab\ncd\n").expect("parse");
        assert_eq!(grid.step((0, 0), Heading::North), None);
        assert_eq!(grid.step((0, 0), Heading::East), Some((0, 1)));
        assert_eq!(grid.step((1, 1), Heading::South), None);
        assert_eq!(grid.neighbours((0, 0)).count(), 2);
        assert_eq!(grid.find(b'd'), Some((1, 1)));
    }

    #[test]
    fn headings_rotate_clockwise() {
        assert_eq!(Heading::North.turn_right(), Heading::East);
        assert_eq!(Heading::North.turn_left(), Heading::West);
        assert_eq!(Heading::East.reverse(), Heading::West);
    }

    #[test]
    fn rejects_ragged_and_empty_grids() {
        let err = parse_grid("abc\nde\n").expect_err("should fail");
        assert!(err.to_string().contains("expected 3 columns"));
        assert!(parse_grid("\n\n").is_err());
    }
}
