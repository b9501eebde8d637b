use anyhow::Result;

use crate::{Data, PuzzleError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn from_glyph(glyph: u8) -> Option<Self> {
        match glyph {
            b'^' => Some(Heading::Up),
            b'>' => Some(Heading::Right),
            b'v' => Some(Heading::Down),
            b'<' => Some(Heading::Left),
            _ => None,
        }
    }

    fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Patrol {
    /// Guard walked off the map; carries the visited-cell mask.
    Exit(Vec<Vec<u8>>),
    Loop,
}

struct Lab {
    obstructed: Vec<Vec<bool>>,
    start: (usize, usize),
    heading: Heading,
}

impl Lab {
    fn parse(input: &str) -> Result<Self> {
        let mut guard = None;
        let mut obstructed = Vec::new();
        for (row, line) in input.lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, glyph) in line.bytes().enumerate() {
                match glyph {
                    b'#' => cells.push(true),
                    b'.' => cells.push(false),
                    _ => {
                        let heading = Heading::from_glyph(glyph).ok_or(PuzzleError::UnknownGlyph {
                            glyph: glyph as char,
                            row,
                            col,
                        })?;
                        guard.get_or_insert(((row, col), heading));
                        cells.push(false);
                    }
                }
            }
            obstructed.push(cells);
        }
        let (start, heading) = guard.ok_or(PuzzleError::MissingActor("guard"))?;
        Ok(Lab {
            obstructed,
            start,
            heading,
        })
    }

    fn ahead(&self, (row, col): (usize, usize), heading: Heading) -> Option<(usize, usize)> {
        let (dr, dc) = heading.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        self.obstructed.get(row)?.get(col)?;
        Some((row, col))
    }

    /// Marks each cell with every heading the guard held on it. Standing on a cell with an
    /// already marked heading means the guard is looping.
    fn patrol(&self, extra: Option<(usize, usize)>) -> Patrol {
        let mut seen: Vec<Vec<u8>> = self.obstructed.iter().map(|r| vec![0; r.len()]).collect();
        let mut pos = self.start;
        let mut heading = self.heading;
        loop {
            let mark = &mut seen[pos.0][pos.1];
            if *mark & heading.bit() != 0 {
                return Patrol::Loop;
            }
            *mark |= heading.bit();
            let Some(next) = self.ahead(pos, heading) else {
                return Patrol::Exit(seen);
            };
            if self.obstructed[next.0][next.1] || Some(next) == extra {
                heading = heading.turn_right();
            } else {
                pos = next;
            }
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn day6(input: &str, _data: Data) -> Result<(u64, u64)> {
    let lab = Lab::parse(input)?;
    let Patrol::Exit(seen) = lab.patrol(None) else {
        anyhow::bail!("guard never leaves the lab");
    };

    // An obstruction off the unobstructed route never changes the route.
    let candidates: Vec<(usize, usize)> = seen
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &mark)| mark != 0)
                .map(move |(c, _)| (r, c))
        })
        .collect();
    tracing::debug!(candidates = candidates.len(), "replaying patrol");

    let loops = candidates
        .iter()
        .filter(|&&cell| cell != lab.start && lab.patrol(Some(cell)) == Patrol::Loop)
        .count();

    Ok((candidates.len() as u64, loops as u64))
}
