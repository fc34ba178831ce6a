//! Deterministic, pure puzzle logic.
//!
//! Core modules must be free of I/O side effects. Each one parses its input
//! text into in-memory structures and computes answers from them, returning
//! deterministic outputs suitable for tests.

pub mod claws;
pub mod computer;
pub mod digits;
pub mod disk;
pub mod garden;
pub mod grid;
pub mod locations;
pub mod maze;
pub mod memory;
pub mod ordering;
pub mod patrol;
pub mod race;
pub mod ram_run;
pub mod reports;
pub mod stones;
pub mod towels;
pub mod trails;
pub mod wordsearch;
