//! Orchestration for `puzzles <command>`: load input, solve, render answers.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::claws::{PRESS_LIMIT, PRIZE_OFFSET, parse_machines, total_tokens};
use crate::core::computer::{parse_computer, render_output};
use crate::core::disk::{checksum, compact_files, parse_disk_map};
use crate::core::garden::{fence_prices, regions};
use crate::core::grid::parse_grid;
use crate::core::locations::parse_location_lists;
use crate::core::maze::parse_maze;
use crate::core::memory::{scan_instructions, sum_products};
use crate::core::ordering::parse_print_queue;
use crate::core::patrol::parse_lab;
use crate::core::race::{LONG_CHEAT, SHORT_CHEAT, parse_racetrack};
use crate::core::ram_run::parse_memory_space;
use crate::core::reports::{count_safe, parse_reports};
use crate::core::stones::{count_after, parse_stones};
use crate::core::towels::{parse_towels, tally};
use crate::core::trails::parse_topo_map;
use crate::core::wordsearch::{WORD, count_crosses, count_word};
use crate::io::input::load_input;

/// A solver together with its run-time parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    PrintQueue,
    Locations,
    Reports,
    Memory,
    Disk,
    Trails,
    Stones { blinks: u32 },
    Towels,
    WordSearch,
    Patrol,
    Garden,
    Claws,
    Maze,
    Computer,
    RamRun { size: u32, fallen: u32 },
    Race { threshold: u32 },
}

/// Read `path` and solve it, returning the lines to print.
pub fn solve_file(puzzle: Puzzle, path: &Path) -> Result<Vec<String>> {
    let input = load_input(path)?;
    solve(puzzle, &input).with_context(|| format!("solve {}", path.display()))
}

/// Solve already-loaded input, returning the lines to print.
pub fn solve(puzzle: Puzzle, input: &str) -> Result<Vec<String>> {
    debug!(?puzzle, "solving");
    match puzzle {
        Puzzle::PrintQueue => {
            let queue = parse_print_queue(input)?;
            info!(
                rules = queue.rules.len(),
                updates = queue.updates.len(),
                "print queue parsed"
            );
            let summary = queue.summarize()?;
            info!(
                valid = summary.valid_updates,
                corrected = summary.corrected_updates,
                valid_middle_sum = summary.valid_middle_sum,
                "print queue checked"
            );
            Ok(vec![format!(
                "Sum of middle numbers after correction: {}",
                summary.corrected_middle_sum
            )])
        }
        Puzzle::Locations => {
            let lists = parse_location_lists(input)?;
            Ok(vec![
                format!("Total distance: {}", lists.total_distance()?),
                format!("Similarity score: {}", lists.similarity_score()?),
            ])
        }
        Puzzle::Reports => {
            let reports = parse_reports(input)?;
            Ok(vec![
                format!("Safe reports: {}", count_safe(&reports, false)),
                format!("Safe lines with dampener: {}", count_safe(&reports, true)),
            ])
        }
        Puzzle::Memory => {
            let instructions = scan_instructions(input)?;
            let totals = sum_products(&instructions)?;
            info!(
                instructions = instructions.len(),
                all = totals.all,
                "memory scanned"
            );
            Ok(vec![format!("Result: {}", totals.enabled)])
        }
        Puzzle::Disk => {
            let mut blocks = parse_disk_map(input)?;
            compact_files(&mut blocks);
            Ok(vec![format!("Filesystem checksum: {}", checksum(&blocks))])
        }
        Puzzle::Trails => {
            let map = parse_topo_map(input)?;
            Ok(vec![
                format!("Trailhead scores: {}", map.total_score()),
                format!("Trailhead ratings: {}", map.total_rating()),
            ])
        }
        Puzzle::Stones { blinks } => {
            let stones = parse_stones(input)?;
            if stones.is_empty() {
                warn!("no stones in input");
            }
            Ok(vec![count_after(&stones, blinks)?.to_string()])
        }
        Puzzle::Towels => {
            let towels = parse_towels(input)?;
            let (possible, total) = tally(&towels)?;
            Ok(vec![
                format!("Possible designs: {possible}"),
                format!("Total arrangements: {total}"),
            ])
        }
        Puzzle::WordSearch => {
            let grid = parse_grid(input)?;
            Ok(vec![
                format!("XMAS occurrences: {}", count_word(&grid, WORD)),
                format!("X-MAS crosses: {}", count_crosses(&grid)),
            ])
        }
        Puzzle::Patrol => {
            let lab = parse_lab(input)?;
            let route = lab.patrol(None);
            if route.loops {
                warn!("guard never leaves the map");
            }
            Ok(vec![
                format!("Distinct positions: {}", route.visited.len()),
                format!("Loop obstructions: {}", lab.loop_obstructions()),
            ])
        }
        Puzzle::Garden => {
            let found = regions(&parse_grid(input)?);
            info!(regions = found.len(), "garden mapped");
            let (full, bulk) = fence_prices(&found);
            Ok(vec![
                format!("Fence price: {full}"),
                format!("Bulk discount price: {bulk}"),
            ])
        }
        Puzzle::Claws => {
            let machines = parse_machines(input)?;
            let (won, tokens) = total_tokens(&machines, 0, Some(PRESS_LIMIT))?;
            let (won_far, tokens_far) = total_tokens(&machines, PRIZE_OFFSET, None)?;
            info!(
                machines = machines.len(),
                won, won_far, "claw machines solved"
            );
            Ok(vec![
                format!("Tokens for winnable prizes: {tokens}"),
                format!("Tokens after unit conversion: {tokens_far}"),
            ])
        }
        Puzzle::Maze => {
            let best = parse_maze(input)?.best_paths()?;
            Ok(vec![
                format!("Lowest score: {}", best.score),
                format!("Best path tiles: {}", best.tiles),
            ])
        }
        Puzzle::Computer => {
            let computer = parse_computer(input)?;
            let output = computer.output()?;
            let quine = match computer.lowest_quine()? {
                Some(a) => a.to_string(),
                None => {
                    warn!("no register A value makes the program print itself");
                    "none".to_string()
                }
            };
            Ok(vec![
                format!("Program output: {}", render_output(&output)),
                format!("Lowest self-replicating register A: {quine}"),
            ])
        }
        Puzzle::RamRun { size, fallen } => {
            let size = usize::try_from(size).context("memory space size out of range")?;
            let fallen = usize::try_from(fallen).context("fallen byte count out of range")?;
            let space = parse_memory_space(input, size)?;
            if fallen > space.bytes().len() {
                warn!(
                    fallen,
                    bytes = space.bytes().len(),
                    "fewer bytes in input than requested"
                );
            }
            let steps = space
                .steps_after(fallen)
                .map_or_else(|| "unreachable".to_string(), |steps| steps.to_string());
            let blocker = match space.first_blocker() {
                Some((x, y)) => format!("First blocking byte: {x},{y}"),
                None => "The exit is always reachable.".to_string(),
            };
            Ok(vec![
                format!("Minimum steps after {fallen} bytes: {steps}"),
                blocker,
            ])
        }
        Puzzle::Race { threshold } => {
            let track = parse_racetrack(input)?;
            let saving = usize::try_from(threshold).context("threshold out of range")?;
            debug!(fair_time = track.fair_time()?, "racetrack timed");
            Ok(vec![
                format!(
                    "Cheats saving at least {threshold} with {SHORT_CHEAT} steps: {}",
                    track.count_cheats(SHORT_CHEAT, saving)?
                ),
                format!(
                    "Cheats saving at least {threshold} with {LONG_CHEAT} steps: {}",
                    track.count_cheats(LONG_CHEAT, saving)?
                ),
            ])
        }
    }
}
