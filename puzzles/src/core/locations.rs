//! Two columns of location ids compared pairwise.

use std::collections::HashMap;

use anyhow::{Context, Result, anyhow, bail};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

/// Parse lines of exactly two whitespace-separated ids. Blank lines are skipped.
pub fn parse_location_lists(input: &str) -> Result<LocationLists> {
    let mut lists = LocationLists::default();
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [left, right] => {
                lists.left.push(parse_id(left, line_no)?);
                lists.right.push(parse_id(right, line_no)?);
            }
            _ => bail!("line {line_no}: expected two ids, found {}", fields.len()),
        }
    }
    Ok(lists)
}

fn parse_id(token: &str, line_no: usize) -> Result<i64> {
    token
        .parse::<i64>()
        .with_context(|| format!("line {line_no}: invalid location id '{token}'"))
}

impl LocationLists {
    /// Pair the smallest with the smallest and so on, summing the gaps.
    pub fn total_distance(&self) -> Result<u64> {
        let mut left = self.left.clone();
        let mut right = self.right.clone();
        left.sort_unstable();
        right.sort_unstable();
        left.iter().zip(&right).try_fold(0u64, |total, (l, r)| {
            total
                .checked_add(l.abs_diff(*r))
                .ok_or_else(|| anyhow!("total distance overflows u64"))
        })
    }

    /// Each left id weighted by how often it occurs on the right.
    pub fn similarity_score(&self) -> Result<i64> {
        let mut occurrences: HashMap<i64, i64> = HashMap::new();
        for &id in &self.right {
            *occurrences.entry(id).or_default() += 1;
        }
        self.left.iter().try_fold(0i64, |total, &id| {
            let count = occurrences.get(&id).copied().unwrap_or(0);
            id.checked_mul(count)
                .and_then(|weighted| total.checked_add(weighted))
                .ok_or_else(|| anyhow!("similarity score overflows i64"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::LOCATIONS_SAMPLE;

    #[test]
    fn sample_distance_and_similarity() {
        let lists = parse_location_lists(LOCATIONS_SAMPLE).expect("parse");
        assert_eq!(lists.left.len(), 6);
        assert_eq!(lists.total_distance().expect("distance"), 11);
        assert_eq!(lists.similarity_score().expect("similarity"), 31);
    }

    #[test]
    fn rejects_line_with_one_id() {
        let err = parse_location_lists("3 4\n5\n").expect_err("should fail");
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn extreme_ids_measure_distance_without_overflow() {
        let lists = parse_location_lists("9223372036854775807 -1\n").expect("parse");
        assert_eq!(
            lists.total_distance().expect("distance"),
            9_223_372_036_854_775_808
        );
        assert_eq!(lists.similarity_score().expect("similarity"), 0);
    }

    #[test]
    fn totals_past_integer_range_are_errors() {
        let wide = "9223372036854775807 -9223372036854775808\n".repeat(2);
        let lists = parse_location_lists(&wide).expect("parse");
        let err = lists.total_distance().expect_err("should overflow");
        assert!(err.to_string().contains("total distance overflows"));

        let repeated = "9223372036854775807 9223372036854775807\n".repeat(2);
        let lists = parse_location_lists(&repeated).expect("parse");
        let err = lists.similarity_score().expect_err("should overflow");
        assert!(err.to_string().contains("similarity score overflows"));
    }
}
