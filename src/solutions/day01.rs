use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::Data;

#[tracing::instrument(skip(input))]
pub fn day1(input: &str, _data: Data) -> Result<(u64, u64)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for line in input.lines() {
        let mut ids = line.split_whitespace().map(str::parse::<u64>);
        let (Some(a), Some(b)) = (ids.next(), ids.next()) else {
            anyhow::bail!(crate::PuzzleError::malformed(line, "location id pair"));
        };
        left.push(a.with_context(|| format!("bad id in {:?}", line))?);
        right.push(b.with_context(|| format!("bad id in {:?}", line))?);
    }

    let mut counts: FxHashMap<u64, u64> = FxHashMap::default();
    for &id in &right {
        *counts.entry(id).or_insert(0) += 1;
    }
    let similarity: u64 = left
        .iter()
        .map(|id| id * counts.get(id).copied().unwrap_or(0))
        .sum();

    left.sort_unstable();
    right.sort_unstable();
    let distance: u64 = left.iter().zip(&right).map(|(a, b)| a.abs_diff(*b)).sum();

    Ok((distance, similarity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::test_util::*;

    use indoc::indoc;

    #[test]
    fn test_day1() -> Result<()> {
        let example = indoc! {"
            3   4
            4   3
            2   5
            1   3
            3   9
            3   3
        "};
        assert_eq!(execute_day_input_twice(day1, example)?, (11, 31));
        assert_eq!(execute_day_input(day1, "")?, (0, 0));
        assert_eq!(execute_day_input(day1, "5 5")?, (0, 5));
        assert!(execute_day_input(day1, "5").is_err());
        Ok(())
    }
}
