//! Engraved stones that change every time you blink.
//!
//! Rules, applied to every stone at once:
//! - `0` becomes `1`.
//! - An even number of digits splits into two stones (left and right halves).
//! - Anything else is multiplied by 2024.
//!
//! Stones never interact, so equal engravings are tracked as a single entry
//! with a multiplicity.

use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};

use crate::core::digits::Digits;

pub const BLINK_FACTOR: u32 = 2024;

/// Parse whitespace-separated engravings.
pub fn parse_stones(input: &str) -> Result<Vec<Digits>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<Digits>()
                .with_context(|| format!("stone {}: invalid engraving '{token}'", index + 1))
        })
        .collect()
}

/// Apply one blink to a single stone. The second stone exists only when the
/// engraving was split.
pub fn blink_stone(stone: &Digits) -> (Digits, Option<Digits>) {
    if stone.is_zero() {
        return (Digits::one(), None);
    }
    match stone.split_even() {
        Some((left, right)) => (left, Some(right)),
        None => (stone.mul_small(BLINK_FACTOR), None),
    }
}

/// One blink over an ordered row of stones.
pub fn blink_row(stones: &[Digits]) -> Vec<Digits> {
    let mut next = Vec::with_capacity(stones.len() * 2);
    for stone in stones {
        let (first, second) = blink_stone(stone);
        next.push(first);
        next.extend(second);
    }
    next
}

/// Number of stones after `blinks` blinks.
pub fn count_after(stones: &[Digits], blinks: u32) -> Result<u64> {
    let mut counts: HashMap<Digits, u64> = HashMap::new();
    for stone in stones {
        *counts.entry(stone.clone()).or_default() += 1;
    }

    for _ in 0..blinks {
        let mut next: HashMap<Digits, u64> = HashMap::with_capacity(counts.len() * 2);
        for (stone, count) in &counts {
            let (first, second) = blink_stone(stone);
            add_count(&mut next, first, *count)?;
            if let Some(second) = second {
                add_count(&mut next, second, *count)?;
            }
        }
        counts = next;
    }

    counts.values().try_fold(0u64, |total, &count| {
        total
            .checked_add(count)
            .ok_or_else(|| anyhow!("stone count overflowed u64"))
    })
}

fn add_count(counts: &mut HashMap<Digits, u64>, stone: Digits, count: u64) -> Result<()> {
    let entry = counts.entry(stone).or_default();
    *entry = entry
        .checked_add(count)
        .ok_or_else(|| anyhow!("stone count overflowed u64"))?;
    Ok(())
}
