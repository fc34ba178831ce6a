//! Claw machines with two buttons.
//!
//! Button A costs 3 tokens and button B costs 1. Each press moves the claw by
//! that button's offset; a prize is won when the claw lands exactly on it.

use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow, bail};
use regex::Regex;

pub const A_COST: i128 = 3;
pub const B_COST: i128 = 1;
/// Press limit per button before the unit conversion.
pub const PRESS_LIMIT: i128 = 100;
/// Added to both prize coordinates after the unit conversion.
pub const PRIZE_OFFSET: i128 = 10_000_000_000_000;

static MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Button A: X\+(\d+), Y\+(\d+)\nButton B: X\+(\d+), Y\+(\d+)\nPrize: X=(\d+), Y=(\d+)$",
    )
    .expect("machine regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClawMachine {
    pub button_a: (i128, i128),
    pub button_b: (i128, i128),
    pub prize: (i128, i128),
}

/// Blank-line separated blocks of `Button A`, `Button B` and `Prize` lines.
pub fn parse_machines(input: &str) -> Result<Vec<ClawMachine>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current = Vec::new();
    for line in input.lines().map(str::trim) {
        if !line.is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let text = block.join("\n");
            let machine_no = index + 1;
            let caps = MACHINE.captures(&text).with_context(|| {
                format!("machine {machine_no}: expected Button A, Button B and Prize lines")
            })?;
            let mut values = [0i128; 6];
            for (slot, value) in values.iter_mut().enumerate() {
                let token = &caps[slot + 1];
                *value = token.parse::<i64>().map(i128::from).with_context(|| {
                    format!("machine {machine_no}: value out of range '{token}'")
                })?;
            }
            Ok(ClawMachine {
                button_a: (values[0], values[1]),
                button_b: (values[2], values[3]),
                prize: (values[4], values[5]),
            })
        })
        .collect()
}

impl ClawMachine {
    /// The same machine with the prize moved by `offset` on both axes.
    pub fn shifted(&self, offset: i128) -> ClawMachine {
        ClawMachine {
            prize: (self.prize.0 + offset, self.prize.1 + offset),
            ..*self
        }
    }

    /// Presses of A and B that land on the prize.
    ///
    /// Fails when the two buttons move along the same line, since the press
    /// counts are then not unique.
    pub fn presses(&self) -> Result<Option<(i128, i128)>> {
        let (ax, ay) = self.button_a;
        let (bx, by) = self.button_b;
        let (px, py) = self.prize;
        let det = ax * by - ay * bx;
        if det == 0 {
            bail!("buttons A and B move along the same line");
        }
        let a_num = px * by - py * bx;
        let b_num = ax * py - ay * px;
        if a_num % det != 0 || b_num % det != 0 {
            return Ok(None);
        }
        let (a, b) = (a_num / det, b_num / det);
        Ok((a >= 0 && b >= 0).then_some((a, b)))
    }

    /// Tokens needed to win the prize, if it can be won within `limit` presses
    /// per button.
    pub fn tokens(&self, limit: Option<i128>) -> Result<Option<i128>> {
        let Some((a, b)) = self.presses()? else {
            return Ok(None);
        };
        if limit.is_some_and(|limit| a > limit || b > limit) {
            return Ok(None);
        }
        a.checked_mul(A_COST)
            .and_then(|cost| cost.checked_add(b * B_COST))
            .map(Some)
            .ok_or_else(|| anyhow!("token cost overflows i128"))
    }
}

/// Prizes won and total tokens spent over every winnable machine.
pub fn total_tokens(
    machines: &[ClawMachine],
    offset: i128,
    limit: Option<i128>,
) -> Result<(usize, i128)> {
    let mut won = 0;
    let mut total: i128 = 0;
    for (index, machine) in machines.iter().enumerate() {
        let tokens = machine
            .shifted(offset)
            .tokens(limit)
            .with_context(|| format!("machine {}", index + 1))?;
        if let Some(tokens) = tokens {
            won += 1;
            total = total
                .checked_add(tokens)
                .ok_or_else(|| anyhow!("total tokens overflow i128"))?;
        }
    }
    Ok((won, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CLAWS_SAMPLE;

    #[test]
    fn sample_tokens_before_conversion() {
        let machines = parse_machines(CLAWS_SAMPLE).expect("parse");
        assert_eq!(machines.len(), 4);
        let first = machines[0].tokens(Some(PRESS_LIMIT)).expect("tokens");
        assert_eq!(first, Some(280));
        let second = machines[1].tokens(Some(PRESS_LIMIT)).expect("tokens");
        assert_eq!(second, None);
        assert_eq!(
            total_tokens(&machines, 0, Some(PRESS_LIMIT)).expect("total"),
            (2, 480)
        );
    }

    #[test]
    fn sample_tokens_after_conversion() {
        let machines = parse_machines(CLAWS_SAMPLE).expect("parse");
        assert_eq!(
            total_tokens(&machines, PRIZE_OFFSET, None).expect("total"),
            (2, 875_318_608_908)
        );
    }

    #[test]
    fn press_limit_excludes_distant_prizes() {
        let machine = ClawMachine {
            button_a: (1, 0),
            button_b: (0, 1),
            prize: (101, 5),
        };
        assert_eq!(machine.presses().expect("presses"), Some((101, 5)));
        assert_eq!(machine.tokens(Some(PRESS_LIMIT)).expect("tokens"), None);
        assert_eq!(machine.tokens(None).expect("tokens"), Some(308));
    }

    #[test]
    fn parallel_buttons_are_an_error() {
        let machine = ClawMachine {
            button_a: (2, 4),
            button_b: (1, 2),
            prize: (10, 20),
        };
        assert!(machine.presses().is_err());
    }

    #[test]
    fn parse_rejects_incomplete_machine() {
        let err = parse_machines("Button A: X+1, Y+2\nPrize: X=3, Y=4\n").expect_err("should fail");
        assert!(err.to_string().contains("machine 1"));
    }
}
