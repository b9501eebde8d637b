use std::collections::BTreeMap;

use anyhow::{bail, Result};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::{keys_where, Data, PuzzleError};

/// Taking a shortcut through one wall still costs two steps.
const SHORTCUT_COST: u64 = 2;

type Cell = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tile {
    Wall,
    Track,
    Start,
    End,
}

struct Racetrack {
    tiles: IndexMap<Cell, Tile>,
}

impl Racetrack {
    fn parse(input: &str) -> Result<Self> {
        let mut tiles = IndexMap::new();
        for (row, line) in input.lines().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                let tile = match glyph {
                    '#' => Tile::Wall,
                    '.' => Tile::Track,
                    'S' => Tile::Start,
                    'E' => Tile::End,
                    _ => return Err(PuzzleError::UnknownGlyph { glyph, row, col }.into()),
                };
                tiles.insert((row, col), tile);
            }
        }
        Ok(Racetrack { tiles })
    }

    fn find(&self, tile: Tile, name: &'static str) -> Result<Cell> {
        match keys_where(&self.tiles, |&t| t, &tile)[..] {
            [&cell] => Ok(cell),
            [] => Err(PuzzleError::MissingActor(name).into()),
            _ => bail!("more than one {} on the track", name),
        }
    }

    fn is_track(&self, cell: Cell) -> bool {
        self.tiles.get(&cell).is_some_and(|&t| t != Tile::Wall)
    }

    /// Steps from the start for every cell of the corridor. The corridor must not branch.
    fn distances(&self) -> Result<FxHashMap<Cell, u64>> {
        let start = self.find(Tile::Start, "start")?;
        let end = self.find(Tile::End, "end")?;
        let mut distances = FxHashMap::default();
        distances.insert(start, 0);
        let mut cell = start;
        let mut steps = 0;
        while cell != end {
            let (row, col) = cell;
            let mut next = [
                row.checked_sub(1).map(|r| (r, col)),
                Some((row + 1, col)),
                Some((row, col + 1)),
                col.checked_sub(1).map(|c| (row, c)),
            ]
            .into_iter()
            .flatten()
            .filter(|&n| self.is_track(n) && !distances.contains_key(&n));
            let (Some(n), None) = (next.next(), next.next()) else {
                bail!("track at {:?} does not continue as a single corridor", cell);
            };
            steps += 1;
            distances.insert(n, steps);
            cell = n;
        }
        Ok(distances)
    }
}

/// Histogram of time saved by removing each single wall, keyed by the saving.
fn shortcuts(track: &Racetrack) -> Result<BTreeMap<u64, u64>> {
    let distances = track.distances()?;
    let mut savings = BTreeMap::new();
    let across = |a: Option<Cell>, b: Option<Cell>| match (
        a.and_then(|a| distances.get(&a)),
        b.and_then(|b| distances.get(&b)),
    ) {
        (Some(da), Some(db)) => da.abs_diff(*db),
        _ => 0,
    };
    for (&(row, col), &tile) in &track.tiles {
        if tile != Tile::Wall {
            continue;
        }
        let west = col.checked_sub(1).map(|c| (row, c));
        let north = row.checked_sub(1).map(|r| (r, col));
        let saved = across(west, Some((row, col + 1))).max(across(north, Some((row + 1, col))));
        if saved > SHORTCUT_COST {
            *savings.entry(saved - SHORTCUT_COST).or_insert(0) += 1;
        }
    }
    Ok(savings)
}

/// Number of single-wall shortcuts saving at least `threshold` steps.
pub fn count_cheats(input: &str, threshold: u64) -> Result<u64> {
    let savings = shortcuts(&Racetrack::parse(input)?)?;
    tracing::debug!(?savings, "shortcut savings");
    Ok(savings.range(threshold..).map(|(_, count)| count).sum())
}

#[tracing::instrument(skip(input))]
pub fn day20(input: &str, data: Data) -> Result<(u64, u64)> {
    Ok((
        count_cheats(input, data.pick(10, 100))?,
        count_cheats(input, data.pick(50, 100))?,
    ))
}
