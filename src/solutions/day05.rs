use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Data, PuzzleError};

/// `rules[a]` holds every page that has to come after `a`.
struct PageRules {
    rules: FxHashMap<u32, FxHashSet<u32>>,
}

impl PageRules {
    fn parse(input: &str) -> Result<Self> {
        let mut rules: FxHashMap<u32, FxHashSet<u32>> = FxHashMap::default();
        for line in input.lines() {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| PuzzleError::malformed(line, "ordering rule"))?;
            rules
                .entry(before.parse()?)
                .or_default()
                .insert(after.parse()?);
        }
        Ok(PageRules { rules })
    }

    fn must_precede(&self, page: u32, other: u32) -> bool {
        self.rules.get(&page).is_some_and(|after| after.contains(&other))
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.iter().enumerate().all(|(i, &earlier)| {
            update[i + 1..]
                .iter()
                .all(|&later| !self.must_precede(later, earlier))
        })
    }

    /// Rotates pages to the back until each one has no remaining page that must precede it.
    fn fix(&self, update: &[u32]) -> Result<Vec<u32>> {
        let mut pending: std::collections::VecDeque<u32> = update.iter().copied().collect();
        let mut fixed = Vec::with_capacity(update.len());
        let mut deferred = 0;
        while let Some(page) = pending.pop_front() {
            if pending.iter().all(|&other| !self.must_precede(other, page)) {
                fixed.push(page);
                deferred = 0;
                continue;
            }
            pending.push_back(page);
            deferred += 1;
            if deferred > pending.len() {
                anyhow::bail!("ordering rules for {:?} contain a cycle", update);
            }
        }
        Ok(fixed)
    }
}

fn middle(update: &[u32]) -> u64 {
    update.get(update.len() / 2).copied().unwrap_or(0) as u64
}

#[tracing::instrument(skip(input))]
pub fn day5(input: &str, _data: Data) -> Result<(u64, u64)> {
    let (rules, updates) = input
        .split_once("\n\n")
        .context("missing blank line between rules and updates")?;
    let rules = PageRules::parse(rules)?;

    let mut part1 = 0;
    let mut part2 = 0;
    for line in updates.lines() {
        let update = line
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()
            .with_context(|| format!("bad update {:?}", line))?;
        if rules.is_ordered(&update) {
            part1 += middle(&update);
        } else {
            part2 += middle(&rules.fix(&update)?);
        }
    }

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::test_util::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        47|53
        97|13
        97|61
        97|47
        75|29
        61|13
        75|53
        29|13
        97|29
        53|29
        61|53
        97|53
        61|29
        47|13
        75|47
        97|75
        47|61
        75|61
        47|29
        75|13
        53|13

        75,47,61,53,29
        97,61,53,29,13
        75,29,13
        75,97,47,61,53
        61,13,29
        97,13,75,29,47
    "};

    #[test]
    fn test_day5() -> Result<()> {
        assert_eq!(execute_day_input_twice(day5, EXAMPLE)?, (143, 123));
        Ok(())
    }

    #[test]
    fn test_fix() -> Result<()> {
        let (rules, _) = EXAMPLE.split_once("\n\n").context("fixture")?;
        let rules = PageRules::parse(rules)?;
        assert!(rules.is_ordered(&[75, 47, 61, 53, 29]));
        assert!(!rules.is_ordered(&[75, 97, 47, 61, 53]));
        assert_eq!(rules.fix(&[75, 97, 47, 61, 53])?, [97, 75, 47, 61, 53]);
        assert_eq!(rules.fix(&[61, 13, 29])?, [61, 29, 13]);
        assert_eq!(rules.fix(&[97, 13, 75, 29, 47])?, [97, 75, 47, 29, 13]);
        Ok(())
    }

    #[test]
    fn test_cyclic_rules() -> Result<()> {
        let rules = PageRules::parse("1|2\n2|1")?;
        assert!(rules.fix(&[1, 2]).is_err());
        assert_eq!(execute_day_input(day5, "1|2\n\n1,2,3")?, (2, 0));
        Ok(())
    }
}
