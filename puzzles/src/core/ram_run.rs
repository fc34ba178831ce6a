//! Escaping a square memory space while bytes fall into it.
//!
//! Each input line `x,y` corrupts one cell, in order. The walk starts at
//! `0,0` and exits at the opposite corner, moving orthogonally through
//! uncorrupted cells.

use std::collections::VecDeque;

use anyhow::{Context, Result, bail};

pub const DEFAULT_SIZE: u32 = 71;
pub const DEFAULT_FALLEN: u32 = 1024;

/// `(x, y)`: column then row.
pub type Coord = (usize, usize);

const NEVER: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySpace {
    size: usize,
    bytes: Vec<Coord>,
    /// Index of the first byte to land on each cell.
    fall_time: Vec<usize>,
}

/// Parse `x,y` lines; every coordinate must lie inside a `size` by `size`
/// square.
pub fn parse_memory_space(input: &str, size: usize) -> Result<MemorySpace> {
    if size == 0 {
        bail!("memory space size must be > 0");
    }
    let mut space = MemorySpace {
        size,
        bytes: Vec::new(),
        fall_time: vec![NEVER; size * size],
    };
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (x, y) = line
            .split_once(',')
            .with_context(|| format!("line {line_no}: expected '<x>,<y>'"))?;
        let x = parse_coordinate(x, line_no)?;
        let y = parse_coordinate(y, line_no)?;
        if x >= size || y >= size {
            bail!("line {line_no}: byte {x},{y} falls outside a {size}x{size} space");
        }
        let slot = &mut space.fall_time[y * size + x];
        if *slot == NEVER {
            *slot = space.bytes.len();
        }
        space.bytes.push((x, y));
    }
    Ok(space)
}

fn parse_coordinate(token: &str, line_no: usize) -> Result<usize> {
    let token = token.trim();
    token
        .parse::<usize>()
        .with_context(|| format!("line {line_no}: invalid coordinate '{token}'"))
}

impl MemorySpace {
    pub fn bytes(&self) -> &[Coord] {
        &self.bytes
    }

    /// Fewest steps to the exit once the first `fallen` bytes have landed.
    pub fn steps_after(&self, fallen: usize) -> Option<usize> {
        let size = self.size;
        let open = |(x, y): Coord| self.fall_time[y * size + x] >= fallen;
        let exit = (size - 1, size - 1);
        if !open((0, 0)) || !open(exit) {
            return None;
        }

        let mut steps = vec![NEVER; size * size];
        let mut queue = VecDeque::from([(0, 0)]);
        steps[0] = 0;
        while let Some((x, y)) = queue.pop_front() {
            let here = steps[y * size + x];
            if (x, y) == exit {
                return Some(here);
            }
            let around = [
                x.checked_sub(1).map(|x| (x, y)),
                y.checked_sub(1).map(|y| (x, y)),
                (x + 1 < size).then_some((x + 1, y)),
                (y + 1 < size).then_some((x, y + 1)),
            ];
            for next in around.into_iter().flatten() {
                let slot = &mut steps[next.1 * size + next.0];
                if *slot == NEVER && open(next) {
                    *slot = here + 1;
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// The first byte whose landing cuts the exit off, if any does.
    pub fn first_blocker(&self) -> Option<Coord> {
        if self.steps_after(self.bytes.len()).is_some() {
            return None;
        }
        // Reachable after `low` bytes, cut off after `high`.
        let (mut low, mut high) = (0, self.bytes.len());
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if self.steps_after(mid).is_some() {
                low = mid;
            } else {
                high = mid;
            }
        }
        Some(self.bytes[high - 1])
    }
}
