//! Reindeer maze scored by moves and turns.
//!
//! The reindeer starts on `S` facing east. Stepping forward costs 1 point and
//! turning 90 degrees in place costs 1000. The goal is `E`, reached with any
//! heading.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use anyhow::{Context, Result};

use crate::core::grid::{Cell, Grid, Heading, parse_grid};

pub const STEP_COST: u64 = 1;
pub const TURN_COST: u64 = 1000;
const WALL: u8 = b'#';
const UNREACHED: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Cell,
    end: Cell,
}

/// Lowest score and the tiles lying on at least one lowest-score path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestPaths {
    pub score: u64,
    pub tiles: usize,
}

pub fn parse_maze(input: &str) -> Result<Maze> {
    let grid = parse_grid(input)?;
    let start = grid.find(b'S').context("maze has no start tile 'S'")?;
    let end = grid.find(b'E').context("maze has no end tile 'E'")?;
    Ok(Maze { grid, start, end })
}

type State = (Cell, Heading);

impl Maze {
    fn index(&self, ((row, col), heading): State) -> usize {
        (row * self.grid.width() + col) * 4 + heading.index()
    }

    fn open(&self, cell: Cell) -> bool {
        self.grid.at(cell) != WALL
    }

    /// Dijkstra over `(cell, heading)` states. Walking `backward` follows every
    /// move in reverse, which yields the cost to finish from each state.
    fn scores(&self, sources: &[State], backward: bool) -> Vec<u64> {
        let mut best = vec![UNREACHED; self.grid.height() * self.grid.width() * 4];
        let mut queue = BinaryHeap::new();
        for &source in sources {
            best[self.index(source)] = 0;
            queue.push(Reverse((0, source)));
        }

        while let Some(Reverse((score, state))) = queue.pop() {
            if score > best[self.index(state)] {
                continue;
            }
            let (cell, heading) = state;
            let travel = if backward { heading.reverse() } else { heading };
            let forward = self
                .grid
                .step(cell, travel)
                .filter(|&next| self.open(next))
                .map(|next| ((next, heading), STEP_COST));
            let turns = [heading.turn_left(), heading.turn_right()]
                .map(|turned| ((cell, turned), TURN_COST));

            for (next, cost) in forward.into_iter().chain(turns) {
                let next_score = score + cost;
                let slot = &mut best[self.index(next)];
                if next_score < *slot {
                    *slot = next_score;
                    queue.push(Reverse((next_score, next)));
                }
            }
        }
        best
    }

    pub fn best_paths(&self) -> Result<BestPaths> {
        let from_start = self.scores(&[(self.start, Heading::East)], false);
        let finishes = Heading::ALL.map(|heading| (self.end, heading));
        let to_end = self.scores(&finishes, true);

        let score = finishes
            .iter()
            .map(|&state| from_start[self.index(state)])
            .min()
            .filter(|&score| score != UNREACHED)
            .context("end tile is unreachable")?;

        let mut tiles = HashSet::new();
        for cell in self.grid.cells() {
            for heading in Heading::ALL {
                let index = self.index((cell, heading));
                let (there, onward) = (from_start[index], to_end[index]);
                if there != UNREACHED && onward != UNREACHED && there + onward == score {
                    tiles.insert(cell);
                }
            }
        }
        Ok(BestPaths {
            score,
            tiles: tiles.len(),
        })
    }
}
