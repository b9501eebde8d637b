pub mod error;
pub mod solutions;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use indexmap::IndexMap;

pub use error::{InputError, PuzzleError};

/// Which input set a solver runs against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Data {
    #[default]
    Actual,
    Test,
}

impl Data {
    /// Picks the fixture constant or the real-data constant.
    pub fn pick<T>(self, test: T, actual: T) -> T {
        match self {
            Data::Test => test,
            Data::Actual => actual,
        }
    }
}

impl std::fmt::Display for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Data::Actual => write!(f, "Actual Data"),
            Data::Test => write!(f, "Test Data"),
        }
    }
}

pub type Solution = fn(&str, Data) -> Result<(u64, u64)>;

pub struct Puzzle {
    pub day: u8,
    pub solve: Solution,
    /// Whether the worked examples differ between parts (`part{N}-test-input.txt`).
    pub split_fixtures: bool,
}

impl Puzzle {
    const fn new(day: u8, solve: Solution) -> Self {
        Puzzle {
            day,
            solve,
            split_fixtures: false,
        }
    }

    const fn with_split_fixtures(day: u8, solve: Solution) -> Self {
        Puzzle {
            day,
            solve,
            split_fixtures: true,
        }
    }
}

pub static ALL_SOLUTIONS: [Puzzle; 17] = {
    use solutions::*;
    [
        Puzzle::new(1, day1),
        Puzzle::new(2, day2),
        Puzzle::with_split_fixtures(3, day3),
        Puzzle::new(4, day4),
        Puzzle::new(5, day5),
        Puzzle::new(6, day6),
        Puzzle::new(7, day7),
        Puzzle::new(8, day8),
        Puzzle::new(9, day9),
        Puzzle::new(10, day10),
        Puzzle::new(11, day11),
        Puzzle::new(12, day12),
        Puzzle::new(13, day13),
        Puzzle::new(14, day14),
        Puzzle::new(15, day15),
        Puzzle::new(19, day19),
        Puzzle::new(20, day20),
    ]
};

pub fn find_puzzle(day: u8) -> Option<&'static Puzzle> {
    ALL_SOLUTIONS.iter().find(|p| p.day == day)
}

pub const DEFAULT_INPUT_DIR: &str = "days";

pub fn input_path(root: &Path, day: u8, part: Option<u8>, data: Data) -> PathBuf {
    let file = match (data, part) {
        (Data::Test, Some(part)) => format!("part{}-test-input.txt", part),
        (Data::Test, None) => "test-input.txt".to_string(),
        (Data::Actual, _) => "input.txt".to_string(),
    };
    root.join(format!("day{:02}", day)).join(file)
}

/// Reads the input for `day` below `root`, trimmed of surrounding whitespace.
pub fn load_input(
    root: &Path,
    day: u8,
    part: Option<u8>,
    data: Data,
) -> Result<String, InputError> {
    let path = input_path(root, day, part, data);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(contents.trim().to_string()),
        Err(source) => Err(InputError::Read { path, source }),
    }
}

pub fn default_input(day: u8) -> Result<String, InputError> {
    load_input(Path::new(DEFAULT_INPUT_DIR), day, None, Data::Actual)
}

/// Modulo that always lands in `0..m` for positive `m`.
pub fn positive_mod(a: i64, m: i64) -> i64 {
    a.rem_euclid(m)
}

/// All positive divisors of `n` in ascending order. Empty for `n <= 0`.
pub fn factors(n: i64) -> Vec<i64> {
    (1..=n.max(0)).filter(|i| n % i == 0).collect()
}

pub fn round_to_decimals(num: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (num * factor).round() / factor
}

/// Rotates a rectangular matrix by 90° clockwise. A `r x c` matrix becomes `c x r`.
pub fn rotate_clockwise<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|c| matrix.iter().rev().map(|row| row[c].clone()).collect())
        .collect()
}

/// Keys (in insertion order) whose value projects to `value` under `property`.
pub fn keys_where<'a, K, V, P, F>(map: &'a IndexMap<K, V>, property: F, value: &P) -> Vec<&'a K>
where
    F: Fn(&V) -> P,
    P: PartialEq,
{
    map.iter()
        .filter(|(_, v)| property(v) == *value)
        .map(|(k, _)| k)
        .collect()
}
