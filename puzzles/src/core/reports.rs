//! Reactor level reports and the single-level problem dampener.

use std::cmp::Ordering;

use anyhow::{Context, Result};

/// Parse one report per line, levels separated by whitespace.
pub fn parse_reports(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.split_whitespace()
                .map(|token| {
                    token
                        .parse::<i64>()
                        .with_context(|| format!("line {}: invalid level '{token}'", index + 1))
                })
                .collect()
        })
        .collect()
}

/// Levels move in one direction only, by 1 to 3 per step.
pub fn is_safe(report: &[i64]) -> bool {
    let mut increasing = true;
    let mut decreasing = true;
    for pair in report.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if !(1..=3).contains(&from.abs_diff(to)) {
            return false;
        }
        match to.cmp(&from) {
            Ordering::Less => increasing = false,
            _ => decreasing = false,
        }
    }
    increasing || decreasing
}

/// Safe as-is, or safe once any single level is removed.
pub fn is_safe_with_dampener(report: &[i64]) -> bool {
    if is_safe(report) {
        return true;
    }
    (0..report.len()).any(|skip| {
        let trimmed: Vec<i64> = report
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != skip)
            .map(|(_, &level)| level)
            .collect();
        is_safe(&trimmed)
    })
}

pub fn count_safe(reports: &[Vec<i64>], dampened: bool) -> usize {
    reports
        .iter()
        .filter(|report| {
            if dampened {
                is_safe_with_dampener(report)
            } else {
                is_safe(report)
            }
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::REPORTS_SAMPLE;

    #[test]
    fn sample_counts() {
        let reports = parse_reports(REPORTS_SAMPLE).expect("parse");
        assert_eq!(count_safe(&reports, false), 2);
        assert_eq!(count_safe(&reports, true), 4);
    }

    #[test]
    fn dampener_removes_one_bad_level() {
        assert!(!is_safe(&[1, 3, 2, 4, 5]));
        assert!(is_safe_with_dampener(&[1, 3, 2, 4, 5]));
        assert!(!is_safe_with_dampener(&[1, 2, 7, 8, 9]));
    }

    #[test]
    fn short_reports_are_safe() {
        assert!(is_safe(&[]));
        assert!(is_safe(&[42]));
    }

    #[test]
    fn extreme_levels_are_unsafe() {
        let reports = parse_reports("9223372036854775807 -9223372036854775808\n").expect("parse");
        assert_eq!(count_safe(&reports, false), 0);
        assert!(is_safe(&[i64::MIN, i64::MIN + 3]));
        assert!(!is_safe(&[i64::MAX, i64::MIN]));
    }
}
