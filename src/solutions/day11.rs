use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::Data;

/// Stone label to number of stones carrying it. Order of stones never matters.
type Stones = FxHashMap<u64, u64>;

fn blink_stone(label: u64) -> Result<(u64, Option<u64>)> {
    if label == 0 {
        return Ok((1, None));
    }
    let digits = label.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Ok((label / half, Some(label % half)))
    } else {
        let scaled = label
            .checked_mul(2024)
            .with_context(|| format!("stone label {} overflows when scaled", label))?;
        Ok((scaled, None))
    }
}

fn blink(stones: &Stones) -> Result<Stones> {
    let mut next = Stones::default();
    for (&label, &count) in stones {
        let (left, right) = blink_stone(label)?;
        *next.entry(left).or_default() += count;
        if let Some(right) = right {
            *next.entry(right).or_default() += count;
        }
    }
    Ok(next)
}

fn blink_times(mut stones: Stones, times: usize) -> Result<Stones> {
    for _ in 0..times {
        stones = blink(&stones)?;
    }
    Ok(stones)
}

#[tracing::instrument(skip(input))]
pub fn day11(input: &str, _data: Data) -> Result<(u64, u64)> {
    let mut stones = Stones::default();
    for label in input.split_whitespace() {
        let label = label
            .parse()
            .with_context(|| format!("bad stone label {:?}", label))?;
        *stones.entry(label).or_default() += 1;
    }

    let stones = blink_times(stones, 25)?;
    let part1: u64 = stones.values().sum();
    tracing::debug!(labels = stones.len(), "after 25 blinks");
    let part2: u64 = blink_times(stones, 50)?.values().sum();
    Ok((part1, part2))
}
