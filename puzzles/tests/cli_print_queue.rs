//! CLI tests for `puzzles print-queue`.
//!
//! Spawns the puzzles binary in a temp directory and verifies stdout and exit
//! codes for the default input file, an explicit input, and failure paths.

use std::fs;
use std::process::Command;

use puzzles::exit_codes;
use puzzles::test_support::{PRINT_QUEUE_SAMPLE, TempInput};

#[test]
fn print_queue_reads_input_txt_from_working_directory() {
    let input = TempInput::new(PRINT_QUEUE_SAMPLE).expect("temp input");

    let output = Command::new(env!("CARGO_BIN_EXE_puzzles"))
        .current_dir(input.root())
        .arg("print-queue")
        .output()
        .expect("puzzles print-queue");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Sum of middle numbers after correction: 123\n"
    );
}

#[test]
fn print_queue_missing_input_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_puzzles"))
        .current_dir(temp.path())
        .arg("print-queue")
        .output()
        .expect("puzzles print-queue");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not open input.txt"));
}

#[test]
fn print_queue_malformed_page_exits_with_invalid_code() {
    let input = TempInput::new("47|53\n\n47,5x\n").expect("temp input");

    let output = Command::new(env!("CARGO_BIN_EXE_puzzles"))
        .current_dir(input.root())
        .arg("print-queue")
        .output()
        .expect("puzzles print-queue");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid page number '5x'"));
}

#[test]
fn print_queue_uses_configured_input() {
    let input = TempInput::new("").expect("temp input");
    fs::write(input.root().join("day5.txt"), PRINT_QUEUE_SAMPLE).expect("write day5");
    fs::write(input.root().join("puzzles.toml"), "input = \"day5.txt\"\n").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_puzzles"))
        .current_dir(input.root())
        .arg("print-queue")
        .output()
        .expect("puzzles print-queue");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Sum of middle numbers after correction: 123\n"
    );
}
