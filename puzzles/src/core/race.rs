//! Race condition: shortcuts through the walls of a single-lane racetrack.
//!
//! Once per race a program may cheat, passing through walls for up to a fixed
//! number of steps. A cheat is identified by its start and end track cells,
//! and costs the Manhattan distance between them.

use anyhow::{Context, Result};

use crate::core::grid::{Cell, Grid, parse_grid};

pub const SHORT_CHEAT: usize = 2;
pub const LONG_CHEAT: usize = 20;
pub const DEFAULT_THRESHOLD: u32 = 100;
const WALL: u8 = b'#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Racetrack {
    grid: Grid,
    start: Cell,
    end: Cell,
}

pub fn parse_racetrack(input: &str) -> Result<Racetrack> {
    let grid = parse_grid(input)?;
    let start = grid.find(b'S').context("racetrack has no start 'S'")?;
    let end = grid.find(b'E').context("racetrack has no end 'E'")?;
    Ok(Racetrack { grid, start, end })
}

impl Racetrack {
    /// Steps from `source` to every track cell, by BFS without cheating.
    fn distances(&self, source: Cell) -> Vec<Option<usize>> {
        let width = self.grid.width();
        let mut distance = vec![None; self.grid.height() * width];
        let mut frontier = vec![source];
        distance[source.0 * width + source.1] = Some(0);
        let mut steps = 0;
        while !frontier.is_empty() {
            steps += 1;
            let mut next = Vec::new();
            for cell in frontier {
                for neighbour in self.grid.neighbours(cell) {
                    let slot = &mut distance[neighbour.0 * width + neighbour.1];
                    if slot.is_none() && self.grid.at(neighbour) != WALL {
                        *slot = Some(steps);
                        next.push(neighbour);
                    }
                }
            }
            frontier = next;
        }
        distance
    }

    /// Race time without cheating.
    pub fn fair_time(&self) -> Result<usize> {
        let width = self.grid.width();
        self.distances(self.start)[self.end.0 * width + self.end.1]
            .context("end is unreachable without cheating")
    }

    /// Cheats of at most `max_cheat` steps that save at least `threshold`
    /// steps.
    pub fn count_cheats(&self, max_cheat: usize, threshold: usize) -> Result<usize> {
        let width = self.grid.width();
        let from_start = self.distances(self.start);
        let to_end = self.distances(self.end);
        let fair = from_start[self.end.0 * width + self.end.1]
            .context("end is unreachable without cheating")?;
        let reach = isize::try_from(max_cheat).context("cheat length out of range")?;

        let mut count = 0;
        for cell in self.grid.cells() {
            let Some(before) = from_start[cell.0 * width + cell.1] else {
                continue;
            };
            for d_row in -reach..=reach {
                let spare = reach - d_row.abs();
                for d_col in -spare..=spare {
                    let Some(exit) = self.grid.offset(cell, (d_row, d_col)) else {
                        continue;
                    };
                    let Some(after) = to_end[exit.0 * width + exit.1] else {
                        continue;
                    };
                    let cheat = d_row.unsigned_abs() + d_col.unsigned_abs();
                    if cheat > 0 && before + cheat + after + threshold <= fair {
                        count += 1;
                    }
                }
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RACE_SAMPLE;

    #[test]
    fn sample_fair_time() {
        let track = parse_racetrack(RACE_SAMPLE).expect("parse");
        assert_eq!(track.fair_time().expect("time"), 84);
    }

    #[test]
    fn sample_short_cheats() {
        let track = parse_racetrack(RACE_SAMPLE).expect("parse");
        assert_eq!(track.count_cheats(SHORT_CHEAT, 1).expect("count"), 44);
        assert_eq!(track.count_cheats(SHORT_CHEAT, 20).expect("count"), 5);
        assert_eq!(track.count_cheats(SHORT_CHEAT, 64).expect("count"), 1);
        assert_eq!(track.count_cheats(SHORT_CHEAT, 65).expect("count"), 0);
    }

    #[test]
    fn sample_long_cheats() {
        let track = parse_racetrack(RACE_SAMPLE).expect("parse");
        assert_eq!(track.count_cheats(LONG_CHEAT, 50).expect("count"), 285);
        assert_eq!(track.count_cheats(LONG_CHEAT, 76).expect("count"), 3);
    }

    #[test]
    fn blocked_track_is_an_error() {
        let track = parse_racetrack("#####\n#S#E#\n#####\n").expect("parse");
        let err = track.count_cheats(SHORT_CHEAT, 1).expect_err("should fail");
        assert!(err.to_string().contains("unreachable"));
    }
}
