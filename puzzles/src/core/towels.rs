//! Towel patterns concatenated into requested designs.

use anyhow::{Context, Result, anyhow, bail};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TowelInput {
    pub patterns: Vec<String>,
    pub designs: Vec<String>,
}

/// First line: comma-separated patterns. Then blank line(s), then one design
/// per line.
pub fn parse_towels(input: &str) -> Result<TowelInput> {
    let mut lines = input.lines();
    let Some(header) = lines.next() else {
        bail!("missing towel pattern line");
    };
    let patterns: Vec<String> = header
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect();
    if patterns.is_empty() {
        bail!("line 1: no towel patterns");
    }
    let designs = lines
        .map(str::trim)
        .filter(|design| !design.is_empty())
        .map(str::to_string)
        .collect();
    Ok(TowelInput { patterns, designs })
}

/// Number of ordered ways to build `design` from `patterns`, each usable any
/// number of times.
pub fn count_arrangements(design: &str, patterns: &[String]) -> Result<u64> {
    let design = design.as_bytes();
    let mut ways = vec![0u64; design.len() + 1];
    ways[0] = 1;
    for end in 1..=design.len() {
        for pattern in patterns {
            let pattern = pattern.as_bytes();
            if pattern.len() <= end && &design[end - pattern.len()..end] == pattern {
                ways[end] = ways[end]
                    .checked_add(ways[end - pattern.len()])
                    .ok_or_else(|| anyhow!("arrangement count overflows u64"))?;
            }
        }
    }
    Ok(ways[design.len()])
}

/// Designs that can be built at all, and the total arrangement count.
pub fn tally(input: &TowelInput) -> Result<(usize, u64)> {
    let mut possible = 0;
    let mut total = 0u64;
    for (index, design) in input.designs.iter().enumerate() {
        let ways = count_arrangements(design, &input.patterns)
            .with_context(|| format!("design {} '{design}'", index + 1))?;
        possible += usize::from(ways > 0);
        total = total
            .checked_add(ways)
            .ok_or_else(|| anyhow!("total arrangements overflow u64"))?;
    }
    Ok((possible, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TOWELS_SAMPLE;

    #[test]
    fn sample_tally() {
        let input = parse_towels(TOWELS_SAMPLE).expect("parse");
        assert_eq!(input.patterns.len(), 8);
        assert_eq!(input.designs.len(), 8);
        assert_eq!(tally(&input).expect("tally"), (6, 16));
    }

    #[test]
    fn counts_each_split() {
        let input = parse_towels(TOWELS_SAMPLE).expect("parse");
        assert_eq!(
            count_arrangements("brwrr", &input.patterns).expect("count"),
            2
        );
        assert_eq!(
            count_arrangements("rrbgbr", &input.patterns).expect("count"),
            6
        );
        assert_eq!(
            count_arrangements("ubwu", &input.patterns).expect("count"),
            0
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_towels("").is_err());
        assert!(parse_towels(" , \n\nab\n").is_err());
    }

    #[test]
    fn arrangement_overflow_is_an_error() {
        let patterns = vec!["a".to_string(), "aa".to_string()];
        // Arrangements of a run of `a`s follow the Fibonacci sequence.
        assert_eq!(
            count_arrangements(&"a".repeat(90), &patterns).expect("count"),
            4_660_046_610_375_530_309
        );
        let err = count_arrangements(&"a".repeat(100), &patterns).expect_err("should overflow");
        assert!(err.to_string().contains("overflows u64"));

        let input = TowelInput {
            patterns,
            designs: vec!["a".repeat(100)],
        };
        let err = tally(&input).expect_err("should overflow");
        assert!(format!("{err:#}").contains("design 1"));
    }
}
