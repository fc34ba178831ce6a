//! Guard patrol on a lab floor map.
//!
//! The guard (`^`, `>`, `v` or `<`) walks straight ahead and turns right in
//! front of an obstruction (`#`) until stepping off the map. Returning to a
//! cell with the same heading means the patrol loops forever.

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::core::grid::{Cell, Grid, Heading, parse_grid};

const OBSTRUCTION: u8 = b'#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lab {
    grid: Grid,
    start: Cell,
    heading: Heading,
}

/// Outcome of one patrol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub visited: HashSet<Cell>,
    pub loops: bool,
}

pub fn parse_lab(input: &str) -> Result<Lab> {
    let grid = parse_grid(input)?;
    let (start, heading) = {
        let mut guards = grid.cells().filter_map(|cell| {
            let heading = match grid.at(cell) {
                b'^' => Heading::North,
                b'>' => Heading::East,
                b'v' => Heading::South,
                b'<' => Heading::West,
                _ => return None,
            };
            Some((cell, heading))
        });
        let Some((start, heading)) = guards.next() else {
            bail!("no guard on the map");
        };
        if guards.next().is_some() {
            bail!("more than one guard on the map");
        }
        (start, heading)
    };
    Ok(Lab {
        grid,
        start,
        heading,
    })
}

impl Lab {
    /// Walk the guard, optionally with one extra obstruction.
    pub fn patrol(&self, extra: Option<Cell>) -> Route {
        let width = self.grid.width();
        let mut seen = vec![0u8; self.grid.height() * width];
        let mut route = Route::default();
        let (mut cell, mut heading) = (self.start, self.heading);
        route.visited.insert(cell);

        loop {
            let mask = 1 << heading.index();
            let state = &mut seen[cell.0 * width + cell.1];
            if *state & mask != 0 {
                route.loops = true;
                return route;
            }
            *state |= mask;

            let Some(next) = self.grid.step(cell, heading) else {
                return route;
            };
            if self.grid.at(next) == OBSTRUCTION || Some(next) == extra {
                heading = heading.turn_right();
            } else {
                cell = next;
                route.visited.insert(cell);
            }
        }
    }

    /// Cells where a single new obstruction traps the guard in a loop.
    ///
    /// Only cells on the unobstructed route can change the patrol, and the
    /// guard's starting cell is never a candidate.
    pub fn loop_obstructions(&self) -> usize {
        self.patrol(None)
            .visited
            .into_iter()
            .filter(|&cell| cell != self.start)
            .filter(|&cell| self.patrol(Some(cell)).loops)
            .count()
    }
}
