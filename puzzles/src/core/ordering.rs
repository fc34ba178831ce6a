//! Page-ordering rules and the print queue checker.
//!
//! Rules are pairwise precedence constraints (`before|after`). An update is a
//! sequence of pages; it is valid when no later page must precede an earlier
//! one, directly or through a chain of rules among the update's own pages.
//! Invalid updates are repaired with Kahn's algorithm over the same restricted
//! graph.

use std::collections::{HashMap, HashSet, VecDeque};

use anyhow::{Context, Result, anyhow, bail};

/// Page identifier as written in the input.
pub type Page = i64;

/// Directed precedence graph built once while parsing and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingRules {
    successors: HashMap<Page, Vec<Page>>,
}

impl OrderingRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `before` must precede `after` whenever both are present.
    ///
    /// Repeated rules are stored once. Cycles are accepted here; they only
    /// matter when every page on the cycle shows up in the same update.
    pub fn add_rule(&mut self, before: Page, after: Page) {
        let successors = self.successors.entry(before).or_default();
        if !successors.contains(&after) {
            successors.push(after);
        }
    }

    /// Number of distinct rules.
    pub fn len(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Pages that `page` must precede, in rule insertion order.
    pub fn successors(&self, page: Page) -> &[Page] {
        self.successors
            .get(&page)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True if no page in `update` can reach an earlier page through rules
    /// restricted to the update's pages.
    ///
    /// A page reaches itself, so an update that repeats a page is invalid.
    pub fn is_valid(&self, update: &[Page]) -> bool {
        let pages: HashSet<Page> = update.iter().copied().collect();
        for (i, &earlier) in update.iter().enumerate() {
            for &later in &update[i + 1..] {
                if self.has_path(later, earlier, &pages) {
                    return false;
                }
            }
        }
        true
    }

    /// Breadth-first reachability that ignores edges leaving `pages`.
    fn has_path(&self, start: Page, end: Page, pages: &HashSet<Page>) -> bool {
        if start == end {
            return true;
        }

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &next in self.successors(current) {
                if !pages.contains(&next) {
                    continue;
                }
                if next == end {
                    return true;
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Reorder `update` into a sequence that satisfies every applicable rule.
    ///
    /// Zero in-degree pages are released in the order they first appear in
    /// `update`, so the result is deterministic. Each distinct page is emitted
    /// once. Fails if the rules restricted to the update's pages contain a
    /// cycle.
    pub fn corrected_order(&self, update: &[Page]) -> Result<Vec<Page>> {
        let mut distinct = Vec::with_capacity(update.len());
        let mut pages = HashSet::with_capacity(update.len());
        for &page in update {
            if pages.insert(page) {
                distinct.push(page);
            }
        }

        let mut in_degree: HashMap<Page, usize> = distinct.iter().map(|&page| (page, 0)).collect();
        for &page in &distinct {
            for next in self.restricted_successors(page, &pages) {
                *in_degree.entry(next).or_default() += 1;
            }
        }

        let mut queue: VecDeque<Page> = distinct
            .iter()
            .copied()
            .filter(|page| in_degree[page] == 0)
            .collect();
        let mut ordered = Vec::with_capacity(distinct.len());
        while let Some(current) = queue.pop_front() {
            ordered.push(current);
            for next in self.restricted_successors(current, &pages) {
                let degree = in_degree
                    .get_mut(&next)
                    .context("restricted successor missing from in-degree table")?;
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(next);
                }
            }
        }

        if ordered.len() < distinct.len() {
            let placed: HashSet<Page> = ordered.iter().copied().collect();
            let stuck: Vec<String> = distinct
                .iter()
                .filter(|page| !placed.contains(page))
                .map(Page::to_string)
                .collect();
            bail!(
                "ordering rules form a cycle among pages {}",
                stuck.join(",")
            );
        }
        Ok(ordered)
    }

    fn restricted_successors<'a>(
        &'a self,
        page: Page,
        pages: &'a HashSet<Page>,
    ) -> impl Iterator<Item = Page> + 'a {
        self.successors(page)
            .iter()
            .copied()
            .filter(move |next| pages.contains(next))
    }
}

/// Element at index `len / 2`: the true middle for odd lengths, the element
/// just past the centre for even lengths. `None` for an empty update.
pub fn middle_page(update: &[Page]) -> Option<Page> {
    update.get(update.len() / 2).copied()
}

/// Parsed print queue input: the rule section plus every update line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintQueue {
    pub rules: OrderingRules,
    pub updates: Vec<Vec<Page>>,
}

/// Totals over every update in a [`PrintQueue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueSummary {
    pub valid_updates: usize,
    pub corrected_updates: usize,
    /// Sum of middle pages of updates that were already in order.
    pub valid_middle_sum: i64,
    /// Sum of middle pages of invalid updates after correction.
    pub corrected_middle_sum: i64,
}

impl PrintQueue {
    /// Validate every update, repairing the invalid ones.
    pub fn summarize(&self) -> Result<QueueSummary> {
        let mut summary = QueueSummary::default();
        for (index, update) in self.updates.iter().enumerate() {
            if self.rules.is_valid(update) {
                summary.valid_updates += 1;
                let middle = middle_page(update)
                    .with_context(|| format!("update {} is empty", index + 1))?;
                summary.valid_middle_sum = add_middle(summary.valid_middle_sum, middle)
                    .with_context(|| format!("update {}", index + 1))?;
                continue;
            }
            let corrected = self
                .rules
                .corrected_order(update)
                .with_context(|| format!("correct update {}", index + 1))?;
            summary.corrected_updates += 1;
            let middle = middle_page(&corrected)
                .with_context(|| format!("update {} is empty", index + 1))?;
            summary.corrected_middle_sum = add_middle(summary.corrected_middle_sum, middle)
                .with_context(|| format!("correct update {}", index + 1))?;
        }
        Ok(summary)
    }
}

fn add_middle(total: i64, middle: Page) -> Result<i64> {
    total
        .checked_add(middle)
        .ok_or_else(|| anyhow!("sum of middle pages overflows i64"))
}

/// Parse `before|after` rule lines, a blank separator, then comma-separated
/// updates.
pub fn parse_print_queue(input: &str) -> Result<PrintQueue> {
    let mut queue = PrintQueue::default();
    let mut parsing_rules = true;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            parsing_rules = false;
            continue;
        }

        if parsing_rules {
            let (before, after) = line
                .split_once('|')
                .with_context(|| format!("line {line_no}: expected '<page>|<page>'"))?;
            queue
                .rules
                .add_rule(parse_page(before, line_no)?, parse_page(after, line_no)?);
        } else {
            let update = line
                .split(',')
                .map(|token| parse_page(token, line_no))
                .collect::<Result<Vec<_>>>()?;
            queue.updates.push(update);
        }
    }

    Ok(queue)
}

fn parse_page(token: &str, line_no: usize) -> Result<Page> {
    let token = token.trim();
    token
        .parse::<Page>()
        .with_context(|| format!("line {line_no}: invalid page number '{token}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::PRINT_QUEUE_SAMPLE;

    const RULES: [(Page, Page); 17] = [
        (47, 53),
        (97, 13),
        (97, 61),
        (97, 47),
        (75, 29),
        (61, 13),
        (75, 53),
        (29, 13),
        (97, 53),
        (61, 29),
        (47, 13),
        (75, 47),
        (97, 75),
        (75, 61),
        (47, 29),
        (75, 13),
        (53, 13),
    ];

    fn rules() -> OrderingRules {
        let mut rules = OrderingRules::new();
        for (before, after) in RULES {
            rules.add_rule(before, after);
        }
        rules
    }

    #[test]
    fn out_of_order_update_is_corrected() {
        let rules = rules();
        let update = [75, 97, 47, 61, 53];
        assert!(!rules.is_valid(&update));

        let corrected = rules.corrected_order(&update).expect("acyclic");
        assert_eq!(corrected, vec![97, 75, 47, 61, 53]);
        assert_eq!(middle_page(&corrected), Some(47));
    }

    #[test]
    fn ordered_update_is_valid() {
        let rules = rules();
        let update = [75, 29, 13];
        assert!(rules.is_valid(&update));
        assert_eq!(middle_page(&update), Some(29));
    }

    #[test]
    fn single_page_update_is_its_own_middle() {
        let rules = rules();
        assert!(rules.is_valid(&[61]));
        assert_eq!(rules.corrected_order(&[61]).expect("acyclic"), vec![61]);
        assert_eq!(middle_page(&[61]), Some(61));
    }

    #[test]
    fn middle_page_uses_integer_division() {
        assert_eq!(middle_page(&[1, 2, 3, 4, 5]), Some(3));
        assert_eq!(middle_page(&[1, 2, 3, 4]), Some(3));
        assert_eq!(middle_page(&[]), None);
    }

    #[test]
    fn transitive_violation_through_update_pages_is_detected() {
        let mut rules = OrderingRules::new();
        rules.add_rule(1, 2);
        rules.add_rule(2, 3);
        assert!(!rules.is_valid(&[3, 2, 1]));
        assert!(!rules.is_valid(&[3, 1, 2]));
        assert!(rules.is_valid(&[1, 2, 3]));
    }

    #[test]
    fn paths_through_absent_pages_are_ignored() {
        let mut rules = OrderingRules::new();
        rules.add_rule(3, 2);
        rules.add_rule(2, 1);
        // 3 only reaches 1 via 2, which is not in the update.
        assert!(rules.is_valid(&[1, 3]));
        assert_eq!(rules.corrected_order(&[1, 3]).expect("acyclic"), vec![1, 3]);
    }

    #[test]
    fn cycle_outside_update_is_harmless() {
        let mut rules = OrderingRules::new();
        rules.add_rule(1, 2);
        rules.add_rule(2, 3);
        rules.add_rule(3, 1);
        assert!(rules.is_valid(&[1, 2]));
        assert_eq!(rules.corrected_order(&[2, 1]).expect("acyclic"), vec![1, 2]);
    }

    #[test]
    fn cycle_inside_update_is_reported() {
        let mut rules = OrderingRules::new();
        rules.add_rule(1, 2);
        rules.add_rule(2, 3);
        rules.add_rule(3, 2);
        let err = rules
            .corrected_order(&[3, 2, 1])
            .expect_err("cycle should fail");
        assert!(err.to_string().contains("cycle among pages 3,2"));
    }

    #[test]
    fn repeated_page_is_invalid_and_corrected_once() {
        let rules = rules();
        assert!(!rules.is_valid(&[97, 75, 97]));
        assert_eq!(
            rules.corrected_order(&[97, 75, 97]).expect("acyclic"),
            vec![97, 75]
        );
    }

    #[test]
    fn duplicate_rules_are_stored_once() {
        let mut rules = OrderingRules::new();
        rules.add_rule(1, 2);
        rules.add_rule(1, 2);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.successors(1), &[2]);
        assert_eq!(rules.corrected_order(&[2, 1]).expect("acyclic"), vec![1, 2]);
    }

    #[test]
    fn corrected_orders_of_sample_updates_are_valid() {
        let queue = parse_print_queue(PRINT_QUEUE_SAMPLE).expect("parse");
        for update in &queue.updates {
            let corrected = queue.rules.corrected_order(update).expect("acyclic");
            assert!(queue.rules.is_valid(&corrected), "{corrected:?}");
            assert_eq!(corrected.len(), update.len());
        }
    }

    #[test]
    fn sample_summary() {
        let queue = parse_print_queue(PRINT_QUEUE_SAMPLE).expect("parse");
        assert_eq!(queue.rules.len(), 21);
        assert_eq!(queue.updates.len(), 6);

        let summary = queue.summarize().expect("summarize");
        assert_eq!(
            summary,
            QueueSummary {
                valid_updates: 3,
                corrected_updates: 3,
                valid_middle_sum: 143,
                corrected_middle_sum: 123,
            }
        );
    }

    #[test]
    fn middle_sum_overflow_is_an_error() {
        let valid = parse_print_queue("1|2\n\n1,9223372036854775807,2\n1,9223372036854775807,2\n")
            .expect("parse");
        let err = valid.summarize().expect_err("should overflow");
        let message = format!("{err:#}");
        assert!(message.contains("update 2"), "{message}");
        assert!(message.contains("overflows i64"), "{message}");

        let corrected =
            parse_print_queue("2|1\n\n1,2,9223372036854775807\n1,2,9223372036854775807\n")
                .expect("parse");
        let err = corrected.summarize().expect_err("should overflow");
        let message = format!("{err:#}");
        assert!(message.contains("correct update 2"), "{message}");
        assert!(message.contains("overflows i64"), "{message}");
    }

    #[test]
    fn parse_rejects_malformed_rule() {
        let err = parse_print_queue("47-53\n\n47,53\n").expect_err("should fail");
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn parse_rejects_non_numeric_page() {
        let err = parse_print_queue("47|53\n\n47,x\n").expect_err("should fail");
        assert!(err.to_string().contains("invalid page number 'x'"));
    }
}
