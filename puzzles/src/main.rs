//! Puzzle solver CLI.
//!
//! Every command reads one input file (default `input.txt`, or the `input`
//! key of `puzzles.toml`) and prints its answers to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use puzzles::exit_codes;
use puzzles::io::config::{DEFAULT_CONFIG, PuzzlesConfig, load_config};
use puzzles::logging;
use puzzles::solve::{Puzzle, solve_file};
use tracing::debug;

#[derive(Parser)]
#[command(name = "puzzles", version, about = "Line-oriented puzzle solvers")]
struct Cli {
    /// TOML config file; a missing file means built-in defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Default)]
struct InputArgs {
    /// Input file (overrides the configured `input`).
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Sum the middle pages of updates after reordering them to satisfy the rules.
    PrintQueue(InputArgs),
    /// Distance and similarity between two columns of location ids.
    Locations(InputArgs),
    /// Count safe reactor reports, with and without the problem dampener.
    Reports(InputArgs),
    /// Sum enabled `mul(X,Y)` instructions in corrupted memory.
    Memory(InputArgs),
    /// Checksum after compacting whole files on the disk map.
    Disk(InputArgs),
    /// Trailhead scores and ratings on a topographic map.
    Trails(InputArgs),
    /// Number of stones after blinking.
    Stones {
        #[command(flatten)]
        input: InputArgs,
        /// Blinks to simulate (overrides `stones.blinks`).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        blinks: Option<u32>,
    },
    /// Count towel arrangements for each design.
    Towels(InputArgs),
    /// Count XMAS words and X-MAS crosses in a letter grid.
    WordSearch(InputArgs),
    /// Cells the guard visits, and obstructions that trap it in a loop.
    Patrol(InputArgs),
    /// Fence prices for every garden region.
    Garden(InputArgs),
    /// Tokens needed to win every winnable claw machine prize.
    Claws(InputArgs),
    /// Lowest reindeer maze score and the tiles on best paths.
    Maze(InputArgs),
    /// Run the three-bit program and search for a self-replicating register A.
    Computer(InputArgs),
    /// Shortest escape from a memory space as bytes fall into it.
    RamRun {
        #[command(flatten)]
        input: InputArgs,
        /// Side length of the square space (overrides `ram_run.size`).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        size: Option<u32>,
        /// Bytes fallen before measuring the path (overrides `ram_run.fallen`).
        #[arg(long)]
        fallen: Option<u32>,
    },
    /// Count racetrack cheats that save enough time.
    Race {
        #[command(flatten)]
        input: InputArgs,
        /// Minimum saving for a cheat to count (overrides `race.threshold`).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        threshold: Option<u32>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config).context("load config")?;
    debug!(config = %cli.config.display(), "config loaded");

    let (puzzle, args) = match cli.command {
        Command::PrintQueue(args) => (Puzzle::PrintQueue, args),
        Command::Locations(args) => (Puzzle::Locations, args),
        Command::Reports(args) => (Puzzle::Reports, args),
        Command::Memory(args) => (Puzzle::Memory, args),
        Command::Disk(args) => (Puzzle::Disk, args),
        Command::Trails(args) => (Puzzle::Trails, args),
        Command::Stones { input, blinks } => (
            Puzzle::Stones {
                blinks: blinks.unwrap_or(cfg.stones.blinks),
            },
            input,
        ),
        Command::Towels(args) => (Puzzle::Towels, args),
        Command::WordSearch(args) => (Puzzle::WordSearch, args),
        Command::Patrol(args) => (Puzzle::Patrol, args),
        Command::Garden(args) => (Puzzle::Garden, args),
        Command::Claws(args) => (Puzzle::Claws, args),
        Command::Maze(args) => (Puzzle::Maze, args),
        Command::Computer(args) => (Puzzle::Computer, args),
        Command::RamRun {
            input,
            size,
            fallen,
        } => (
            Puzzle::RamRun {
                size: size.unwrap_or(cfg.ram_run.size),
                fallen: fallen.unwrap_or(cfg.ram_run.fallen),
            },
            input,
        ),
        Command::Race { input, threshold } => (
            Puzzle::Race {
                threshold: threshold.unwrap_or(cfg.race.threshold),
            },
            input,
        ),
        Command::Config => return cmd_config(&cfg),
    };

    let input = args.input.unwrap_or_else(|| cfg.input.clone());
    for line in solve_file(puzzle, &input)? {
        println!("{line}");
    }
    Ok(())
}

fn cmd_config(cfg: &PuzzlesConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(cfg).context("serialize config toml")?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_print_queue_defaults() {
        let cli = Cli::parse_from(["puzzles", "print-queue"]);
        assert_eq!(cli.config, PathBuf::from("puzzles.toml"));
        assert!(matches!(
            cli.command,
            Command::PrintQueue(InputArgs { input: None })
        ));
    }

    #[test]
    fn parse_input_override() {
        let cli = Cli::parse_from(["puzzles", "memory", "--input", "day3.txt"]);
        match cli.command {
            Command::Memory(args) => assert_eq!(args.input, Some(PathBuf::from("day3.txt"))),
            _ => panic!("expected memory command"),
        }
    }

    #[test]
    fn parse_stones_blinks() {
        let cli = Cli::parse_from(["puzzles", "stones", "--blinks", "25"]);
        assert!(matches!(
            cli.command,
            Command::Stones {
                blinks: Some(25),
                ..
            }
        ));
    }

    #[test]
    fn parse_rejects_zero_blinks() {
        assert!(Cli::try_parse_from(["puzzles", "stones", "--blinks", "0"]).is_err());
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["puzzles", "towels", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn parse_ram_run_overrides() {
        let cli = Cli::parse_from(["puzzles", "ram-run", "--size", "7", "--fallen", "12"]);
        assert!(matches!(
            cli.command,
            Command::RamRun {
                size: Some(7),
                fallen: Some(12),
                ..
            }
        ));
        assert!(Cli::try_parse_from(["puzzles", "ram-run", "--size", "0"]).is_err());
    }

    #[test]
    fn parse_race_threshold() {
        let cli = Cli::parse_from(["puzzles", "race", "--threshold", "50"]);
        assert!(matches!(
            cli.command,
            Command::Race {
                threshold: Some(50),
                ..
            }
        ));
        assert!(Cli::try_parse_from(["puzzles", "race", "--threshold", "0"]).is_err());
    }
}
