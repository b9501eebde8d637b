use std::collections::VecDeque;

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

use crate::{Data, PuzzleError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tile {
    Empty,
    Wall,
    Crate,
    CrateLeft,
    CrateRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    fn parse(c: char) -> Result<Self, PuzzleError> {
        Ok(match c {
            '^' => Move::Up,
            'v' => Move::Down,
            '<' => Move::Left,
            '>' => Move::Right,
            _ => return Err(PuzzleError::UnknownMove(c)),
        })
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Move::Up | Move::Down)
    }
}

type Cell = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Warehouse {
    tiles: Vec<Vec<Tile>>,
    robot: Cell,
}

impl Warehouse {
    fn parse(input: &str, wide: bool) -> Result<Self> {
        let mut robot = None;
        let mut tiles = Vec::new();
        for (row, line) in input.lines().enumerate() {
            let mut tiles_row = Vec::new();
            for (col, glyph) in line.chars().enumerate() {
                let tile = match glyph {
                    '.' | '@' => Tile::Empty,
                    '#' => Tile::Wall,
                    'O' => Tile::Crate,
                    _ => return Err(PuzzleError::UnknownGlyph { glyph, row, col }.into()),
                };
                if glyph == '@' {
                    robot = Some((row, tiles_row.len()));
                }
                match (wide, tile) {
                    (false, _) => tiles_row.push(tile),
                    (true, Tile::Crate) => tiles_row.extend([Tile::CrateLeft, Tile::CrateRight]),
                    (true, _) => tiles_row.extend([tile, tile]),
                }
            }
            tiles.push(tiles_row);
        }
        let robot = robot.ok_or(PuzzleError::MissingActor("robot"))?;
        Ok(Warehouse { tiles, robot })
    }

    /// Anything outside the map behaves like a wall.
    fn tile(&self, (row, col): Cell) -> Tile {
        self.tiles
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Tile::Wall)
    }

    fn offset((row, col): Cell, (dr, dc): (isize, isize)) -> Option<Cell> {
        Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
    }

    /// Gathers every crate cell the move would push. Vertical pushes pull in the other half of
    /// each wide crate. Returns `None` if anything in the gathered set is blocked.
    fn pushed_cells(&self, start: Cell, mv: Move) -> Option<Vec<Cell>> {
        let delta = mv.delta();
        let mut queue = VecDeque::from([start]);
        let mut seen = FxHashSet::default();
        let mut pushed = Vec::new();
        while let Some(cell) = queue.pop_front() {
            if !seen.insert(cell) {
                continue;
            }
            let partner = match self.tile(cell) {
                Tile::Wall => return None,
                Tile::Empty => continue,
                Tile::Crate => None,
                Tile::CrateLeft => Some((cell.0, cell.1 + 1)),
                Tile::CrateRight => Some((cell.0, cell.1.checked_sub(1)?)),
            };
            pushed.push(cell);
            queue.push_back(Self::offset(cell, delta)?);
            if let Some(partner) = partner.filter(|_| mv.is_vertical()) {
                queue.push_back(partner);
            }
        }
        Some(pushed)
    }

    fn step(&mut self, mv: Move) {
        let delta = mv.delta();
        let Some(target) = Self::offset(self.robot, delta) else {
            return;
        };
        let Some(pushed) = self.pushed_cells(target, mv) else {
            return;
        };
        let moved: Vec<(Cell, Tile)> = pushed
            .iter()
            .map(|&cell| (cell, self.tile(cell)))
            .collect();
        for &(cell, _) in &moved {
            self.tiles[cell.0][cell.1] = Tile::Empty;
        }
        for (cell, tile) in moved {
            // Pushed cells always have an in-bounds, non-wall cell beyond them.
            if let Some((row, col)) = Self::offset(cell, delta) {
                self.tiles[row][col] = tile;
            }
        }
        self.robot = target;
    }

    /// Sum of `100 * row + col` over the left edge of every crate.
    fn gps_sum(&self) -> u64 {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(row, tiles)| {
                tiles
                    .iter()
                    .enumerate()
                    .filter(|(_, &t)| matches!(t, Tile::Crate | Tile::CrateLeft))
                    .map(move |(col, _)| (100 * row + col) as u64)
            })
            .sum()
    }
}

fn parse_moves(input: &str) -> Result<Vec<Move>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Move::parse(c).map_err(anyhow::Error::from))
        .collect()
}

fn run(map: &str, moves: &[Move], wide: bool) -> Result<u64> {
    let mut warehouse = Warehouse::parse(map, wide)?;
    for &mv in moves {
        warehouse.step(mv);
    }
    Ok(warehouse.gps_sum())
}

#[tracing::instrument(skip(input))]
pub fn day15(input: &str, _data: Data) -> Result<(u64, u64)> {
    let (map, moves) = input
        .split_once("\n\n")
        .context("missing blank line between map and moves")?;
    let moves = parse_moves(moves)?;
    Ok((run(map, &moves, false)?, run(map, &moves, true)?))
}
