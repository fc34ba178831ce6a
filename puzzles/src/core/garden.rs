//! Fencing garden regions.
//!
//! A region is a maximal group of orthogonally connected plots growing the
//! same plant. Fence price is area times perimeter; the bulk discount price
//! is area times the number of straight sides.

use crate::core::grid::{Cell, Grid, Heading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub plant: u8,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

/// Every region, ordered by its first plot in row-major order.
pub fn regions(grid: &Grid) -> Vec<Region> {
    let width = grid.width();
    let mut region_of = vec![usize::MAX; grid.height() * width];
    let mut found = Vec::new();

    for start in grid.cells() {
        if region_of[start.0 * width + start.1] != usize::MAX {
            continue;
        }
        let id = found.len();
        let plant = grid.at(start);
        let mut plots = vec![start];
        let mut stack = vec![start];
        region_of[start.0 * width + start.1] = id;
        while let Some(cell) = stack.pop() {
            for next in grid.neighbours(cell) {
                let slot = &mut region_of[next.0 * width + next.1];
                if *slot == usize::MAX && grid.at(next) == plant {
                    *slot = id;
                    plots.push(next);
                    stack.push(next);
                }
            }
        }

        let inside =
            |cell: Option<Cell>| cell.is_some_and(|(row, col)| region_of[row * width + col] == id);
        let mut perimeter = 0;
        let mut sides = 0;
        for &plot in &plots {
            for heading in Heading::ALL {
                let ahead = grid.step(plot, heading);
                if !inside(ahead) {
                    perimeter += 1;
                }
                // Each corner of the outline ends exactly one side.
                let beside = grid.step(plot, heading.turn_right());
                let diagonal = ahead.and_then(|cell| grid.step(cell, heading.turn_right()));
                match (inside(ahead), inside(beside)) {
                    (false, false) => sides += 1,
                    (true, true) if !inside(diagonal) => sides += 1,
                    _ => {}
                }
            }
        }

        found.push(Region {
            plant,
            area: plots.len(),
            perimeter,
            sides,
        });
    }
    found
}

/// Total fence price and total bulk discount price.
pub fn fence_prices(regions: &[Region]) -> (usize, usize) {
    regions.iter().fold((0, 0), |(full, bulk), region| {
        (
            full + region.area * region.perimeter,
            bulk + region.area * region.sides,
        )
    })
}
