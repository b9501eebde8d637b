use anyhow::Result;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Data;

type Pos = (i64, i64);

struct Antennas {
    by_frequency: FxHashMap<u8, Vec<Pos>>,
    rows: i64,
    cols: i64,
}

impl Antennas {
    fn parse(input: &str) -> Self {
        let mut by_frequency: FxHashMap<u8, Vec<Pos>> = FxHashMap::default();
        let mut rows = 0;
        let mut cols = 0;
        for (row, line) in input.lines().enumerate() {
            rows = rows.max(row as i64 + 1);
            cols = cols.max(line.len() as i64);
            for (col, b) in line.bytes().enumerate() {
                if b != b'.' {
                    by_frequency
                        .entry(b)
                        .or_default()
                        .push((row as i64, col as i64));
                }
            }
        }
        Antennas {
            by_frequency,
            rows,
            cols,
        }
    }

    fn in_bounds(&self, (r, c): Pos) -> bool {
        (0..self.rows).contains(&r) && (0..self.cols).contains(&c)
    }

    fn pairs(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
        self.by_frequency.values().flat_map(|group| {
            group.iter().flat_map(move |&a| {
                group
                    .iter()
                    .filter(move |&&b| b != a)
                    .map(move |&b| (a, b))
            })
        })
    }

    fn antinodes(&self, resonant: bool) -> FxHashSet<Pos> {
        let mut antinodes = FxHashSet::default();
        for ((ar, ac), (br, bc)) in self.pairs() {
            let (dr, dc) = (ar - br, ac - bc);
            if !resonant {
                let node = (ar + dr, ac + dc);
                if self.in_bounds(node) {
                    antinodes.insert(node);
                }
                continue;
            }
            let mut node = (ar, ac);
            while self.in_bounds(node) {
                antinodes.insert(node);
                node = (node.0 + dr, node.1 + dc);
            }
        }
        antinodes
    }
}

#[tracing::instrument(skip(input))]
pub fn day8(input: &str, _data: Data) -> Result<(u64, u64)> {
    let antennas = Antennas::parse(input);
    Ok((
        antennas.antinodes(false).len() as u64,
        antennas.antinodes(true).len() as u64,
    ))
}
