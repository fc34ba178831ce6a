//! Scanner for `mul(X,Y)` instructions hidden in corrupted memory.
//!
//! `do()` and `don't()` toggle whether subsequent multiplications count. The
//! most recent toggle before a `mul` wins; scanning starts enabled.

use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").expect("instruction regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

/// Every well-formed instruction, in input order.
pub fn scan_instructions(memory: &str) -> Result<Vec<Instruction>> {
    INSTRUCTION
        .captures_iter(memory)
        .map(|caps| -> Result<Instruction> {
            match (caps.get(1), caps.get(2)) {
                (Some(left), Some(right)) => {
                    let left = left
                        .as_str()
                        .parse::<u64>()
                        .with_context(|| format!("operand out of range in '{}'", &caps[0]))?;
                    let right = right
                        .as_str()
                        .parse::<u64>()
                        .with_context(|| format!("operand out of range in '{}'", &caps[0]))?;
                    Ok(Instruction::Mul(left, right))
                }
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            }
        })
        .collect()
}

/// Totals of the multiplications found in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MulTotals {
    /// Every `mul`, ignoring toggles.
    pub all: u64,
    /// Only `mul`s enabled at the point they occur.
    pub enabled: u64,
}

pub fn sum_products(instructions: &[Instruction]) -> Result<MulTotals> {
    let mut totals = MulTotals::default();
    let mut enabled = true;
    for instruction in instructions {
        match *instruction {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
            Instruction::Mul(left, right) => {
                let product = left
                    .checked_mul(right)
                    .ok_or_else(|| anyhow!("mul({left},{right}) overflows u64"))?;
                totals.all = checked_total(totals.all, product)?;
                if enabled {
                    totals.enabled = checked_total(totals.enabled, product)?;
                }
            }
        }
    }
    Ok(totals)
}

fn checked_total(total: u64, product: u64) -> Result<u64> {
    total
        .checked_add(product)
        .ok_or_else(|| anyhow!("sum of products overflows u64"))
}
