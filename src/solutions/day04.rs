use anyhow::Result;

use crate::Data;

const DIRECTIONS: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

struct WordSearch {
    grid: Vec<Vec<u8>>,
}

impl WordSearch {
    fn new(input: &str) -> Self {
        WordSearch {
            grid: input.lines().map(|l| l.as_bytes().to_vec()).collect(),
        }
    }

    fn get(&self, row: isize, col: isize) -> Option<u8> {
        let row = self.grid.get(usize::try_from(row).ok()?)?;
        row.get(usize::try_from(col).ok()?).copied()
    }

    /// Reads up to `len` letters from `(row, col)` along `(dr, dc)`, stopping at the border.
    fn fetch_word(
        &self,
        (row, col): (isize, isize),
        (dr, dc): (isize, isize),
        len: usize,
    ) -> Vec<u8> {
        if (dr, dc) == (0, 0) {
            return Vec::new();
        }
        (0..len as isize)
            .map_while(|i| self.get(row + i * dr, col + i * dc))
            .collect()
    }

    fn cells(&self) -> impl Iterator<Item = (isize, isize, u8)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, line)| {
            line.iter()
                .enumerate()
                .map(move |(c, &b)| (r as isize, c as isize, b))
        })
    }

    fn count_word(&self, word: &[u8]) -> usize {
        self.cells()
            .filter(|&(_, _, b)| Some(&b) == word.first())
            .map(|(r, c, _)| {
                DIRECTIONS
                    .iter()
                    .filter(|&&dir| self.fetch_word((r, c), dir, word.len()) == word)
                    .count()
            })
            .sum()
    }

    /// Both diagonals through an `A` must read `MAS` in either direction.
    fn count_cross(&self) -> usize {
        self.cells()
            .filter(|&(r, c, b)| {
                b == b'A'
                    && [
                        self.fetch_word((r + 1, c - 1), (-1, 1), 3),
                        self.fetch_word((r - 1, c - 1), (1, 1), 3),
                    ]
                    .iter()
                    .all(|w| w == b"MAS" || w == b"SAM")
            })
            .count()
    }
}

#[tracing::instrument(skip(input))]
pub fn day4(input: &str, _data: Data) -> Result<(u64, u64)> {
    let search = WordSearch::new(input);
    Ok((search.count_word(b"XMAS") as u64, search.count_cross() as u64))
}
