use anyhow::{Context, Result};
use itertools::Itertools;

use crate::Data;

/// Direction is fixed by the first pair; every step must move by 1 to 3.
fn is_safe(levels: &[i64]) -> bool {
    let Some((&first, &second)) = levels.iter().tuple_windows().next() else {
        return true;
    };
    let increasing = first < second;
    levels.iter().tuple_windows().all(|(&a, &b)| {
        (if increasing { a < b } else { a > b }) && (1..=3).contains(&a.abs_diff(b))
    })
}

fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let rest: Vec<i64> = levels
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &l)| l)
                .collect();
            is_safe(&rest)
        })
}

#[tracing::instrument(skip(input))]
pub fn day2(input: &str, _data: Data) -> Result<(u64, u64)> {
    let reports = input
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<i64>, _>>()
                .with_context(|| format!("bad report {:?}", line))
        })
        .collect::<Result<Vec<_>>>()?;

    let part1 = reports.iter().filter(|r| is_safe(r)).count();
    let part2 = reports.iter().filter(|r| is_safe_dampened(r)).count();
    Ok((part1 as u64, part2 as u64))
}
