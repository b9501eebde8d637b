use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::Data;

struct TopoMap {
    heights: Vec<Vec<Option<u8>>>,
}

impl TopoMap {
    fn parse(input: &str) -> Self {
        let heights = input
            .lines()
            .map(|line| {
                line.bytes()
                    .map(|b| b.is_ascii_digit().then(|| b - b'0'))
                    .collect()
            })
            .collect();
        TopoMap { heights }
    }

    fn height(&self, row: usize, col: usize) -> Option<u8> {
        *self.heights.get(row)?.get(col)?
    }

    fn uphill(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let next = self.height(row, col).map(|h| h + 1);
        [(-1, 0), (0, 1), (1, 0), (0, -1)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (self.height(r, c).is_some() && self.height(r, c) == next).then_some((r, c))
            })
    }

    /// Collects every peak reachable from `(row, col)` and returns the number of distinct trails.
    fn explore(&self, row: usize, col: usize, peaks: &mut FxHashSet<(usize, usize)>) -> u64 {
        if self.height(row, col) == Some(9) {
            peaks.insert((row, col));
            return 1;
        }
        self.uphill(row, col)
            .map(|(r, c)| self.explore(r, c, peaks))
            .sum()
    }

    fn trailheads(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.heights.iter().enumerate().flat_map(|(r, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &h)| h == Some(0))
                .map(move |(c, _)| (r, c))
        })
    }
}

#[tracing::instrument(skip(input))]
pub fn day10(input: &str, _data: Data) -> Result<(u64, u64)> {
    let map = TopoMap::parse(input);
    let mut score = 0;
    let mut rating = 0;
    for (row, col) in map.trailheads() {
        let mut peaks = FxHashSet::default();
        rating += map.explore(row, col, &mut peaks);
        score += peaks.len() as u64;
    }
    Ok((score, rating))
}
