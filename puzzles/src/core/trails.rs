//! Hiking trails on a topographic map.
//!
//! A trail starts at height 0, ends at height 9, and climbs exactly one level
//! per orthogonal step.

use std::collections::{HashSet, VecDeque};

use anyhow::{Result, bail};

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

type Cell = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoMap {
    heights: Vec<Vec<u8>>,
    width: usize,
}

/// Parse a rectangular grid of digit heights.
pub fn parse_topo_map(input: &str) -> Result<TopoMap> {
    let mut heights: Vec<Vec<u8>> = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .chars()
            .map(|ch| ch.to_digit(10).map(|height| height as u8))
            .collect::<Option<Vec<u8>>>();
        let Some(row) = row else {
            bail!("line {}: heights must be digits", index + 1);
        };
        if let Some(first) = heights.first()
            && first.len() != row.len()
        {
            bail!(
                "line {}: expected {} columns, found {}",
                index + 1,
                first.len(),
                row.len()
            );
        }
        heights.push(row);
    }
    let width = heights.first().map_or(0, Vec::len);
    Ok(TopoMap { heights, width })
}

impl TopoMap {
    fn height(&self, (row, col): Cell) -> u8 {
        self.heights[row][col]
    }

    fn trailheads(&self) -> impl Iterator<Item = Cell> + '_ {
        self.heights.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &height)| height == TRAILHEAD)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Orthogonal neighbours exactly one level higher.
    fn uphill(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let (row, col) = cell;
        let target = self.height(cell) + 1;
        [
            row.checked_sub(1).map(|r| (r, col)),
            col.checked_sub(1).map(|c| (row, c)),
            (row + 1 < self.heights.len()).then_some((row + 1, col)),
            (col + 1 < self.width).then_some((row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |&next| self.height(next) == target)
    }

    /// Sum over trailheads of the number of distinct summits reachable.
    pub fn total_score(&self) -> usize {
        self.trailheads().map(|head| self.score(head)).sum()
    }

    fn score(&self, head: Cell) -> usize {
        let mut visited = HashSet::from([head]);
        let mut queue = VecDeque::from([head]);
        let mut summits = 0;
        while let Some(cell) = queue.pop_front() {
            if self.height(cell) == SUMMIT {
                summits += 1;
                continue;
            }
            for next in self.uphill(cell) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        summits
    }

    /// Sum over trailheads of the number of distinct trails.
    pub fn total_rating(&self) -> usize {
        let mut memo = vec![vec![None; self.width]; self.heights.len()];
        self.trailheads()
            .map(|head| self.rating(head, &mut memo))
            .sum()
    }

    fn rating(&self, cell: Cell, memo: &mut [Vec<Option<usize>>]) -> usize {
        if self.height(cell) == SUMMIT {
            return 1;
        }
        if let Some(known) = memo[cell.0][cell.1] {
            return known;
        }
        let paths = self.uphill(cell).map(|next| self.rating(next, memo)).sum();
        memo[cell.0][cell.1] = Some(paths);
        paths
    }
}
