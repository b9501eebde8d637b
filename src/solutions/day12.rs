use anyhow::Result;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::{rotate_clockwise, Data};

type Cell = (usize, usize);
type Region = FxHashSet<Cell>;

fn neighbours((row, col): Cell) -> impl Iterator<Item = Option<Cell>> {
    [(-1, 0), (0, 1), (1, 0), (0, -1)]
        .into_iter()
        .map(move |(dr, dc)| Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)))
}

fn touches(region: &Region, cell: Cell) -> bool {
    neighbours(cell).flatten().any(|n| region.contains(&n))
}

/// Plots grouped by plant. Each cell joins the first touching region of its plant as it is read,
/// so a plant's regions may still need merging afterwards.
fn read_regions(input: &str) -> IndexMap<u8, Vec<Region>> {
    let mut by_plant: IndexMap<u8, Vec<Region>> = IndexMap::new();
    for (row, line) in input.lines().enumerate() {
        for (col, plant) in line.bytes().enumerate() {
            let regions = by_plant.entry(plant).or_default();
            match regions.iter_mut().find(|r| touches(r, (row, col))) {
                Some(region) => {
                    region.insert((row, col));
                }
                None => regions.push(Region::from_iter([(row, col)])),
            }
        }
    }
    by_plant
}

/// Merges one pair of touching regions. Returns false once no pair touches.
fn merge_once(regions: &mut Vec<Region>) -> bool {
    for i in 0..regions.len() {
        for j in i + 1..regions.len() {
            if regions[j].iter().any(|&cell| touches(&regions[i], cell)) {
                let other = regions.swap_remove(j);
                regions[i].extend(other);
                return true;
            }
        }
    }
    false
}

fn consolidate(by_plant: &mut IndexMap<u8, Vec<Region>>) {
    for regions in by_plant.values_mut() {
        while merge_once(regions) {}
    }
}

fn perimeter(region: &Region) -> usize {
    region
        .iter()
        .flat_map(|&cell| neighbours(cell))
        .filter(|n| n.map_or(true, |n| !region.contains(&n)))
        .count()
}

/// Runs of cells whose upper edge is exposed. Each run is one straight side.
fn top_sides(mask: &[Vec<bool>]) -> usize {
    let mut sides = 0;
    for (i, row) in mask.iter().enumerate() {
        let mut in_run = false;
        for (j, &filled) in row.iter().enumerate() {
            let exposed = filled && !(i > 0 && mask[i - 1][j]);
            if exposed && !in_run {
                sides += 1;
            }
            in_run = exposed;
        }
    }
    sides
}

fn sides(region: &Region) -> usize {
    let (Some(top), Some(left)) = (
        region.iter().map(|c| c.0).min(),
        region.iter().map(|c| c.1).min(),
    ) else {
        return 0;
    };
    let bottom = region.iter().map(|c| c.0).max().unwrap_or(top);
    let right = region.iter().map(|c| c.1).max().unwrap_or(left);

    let mut mask: Vec<Vec<bool>> = (top..=bottom)
        .map(|r| (left..=right).map(|c| region.contains(&(r, c))).collect())
        .collect();
    let mut total = 0;
    for _ in 0..4 {
        total += top_sides(&mask);
        mask = rotate_clockwise(&mask);
    }
    total
}

#[tracing::instrument(skip(input))]
pub fn day12(input: &str, _data: Data) -> Result<(u64, u64)> {
    let mut by_plant = read_regions(input);
    consolidate(&mut by_plant);

    let mut part1 = 0;
    let mut part2 = 0;
    for region in by_plant.values().flatten() {
        part1 += region.len() * perimeter(region);
        part2 += region.len() * sides(region);
    }
    Ok((part1 as u64, part2 as u64))
}
