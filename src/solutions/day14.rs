use anyhow::Result;
use regex::Regex;

use crate::{positive_mod, Data, PuzzleError};

const SEARCH_CAP: u64 = 10_000;
const WEDGE_ROWS: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Robot {
    pos: (i64, i64),
    vel: (i64, i64),
}

#[derive(Clone, Copy, Debug)]
struct Floor {
    width: i64,
    height: i64,
}

impl Floor {
    fn step(&self, robot: &mut Robot, ticks: i64) {
        robot.pos = (
            positive_mod(robot.pos.0 + robot.vel.0 * ticks, self.width),
            positive_mod(robot.pos.1 + robot.vel.1 * ticks, self.height),
        );
    }

    fn occupancy(&self, robots: &[Robot]) -> Vec<Vec<u32>> {
        let mut counts = vec![vec![0; self.width as usize]; self.height as usize];
        for robot in robots {
            counts[robot.pos.1 as usize][robot.pos.0 as usize] += 1;
        }
        counts
    }

    /// Product of the robot counts in the four quadrants. The middle row and column of an odd
    /// sized floor belong to no quadrant.
    fn safety_factor(&self, robots: &[Robot]) -> u64 {
        let mut quadrants = [0u64; 4];
        for &Robot { pos: (x, y), .. } in robots {
            let horizontal = if x < self.width / 2 {
                0
            } else if x >= (self.width + 1) / 2 {
                1
            } else {
                continue;
            };
            let vertical = if y < self.height / 2 {
                0
            } else if y >= (self.height + 1) / 2 {
                2
            } else {
                continue;
            };
            quadrants[horizontal + vertical] += 1;
        }
        quadrants.iter().product()
    }
}

/// A robot with fully occupied rows of width 3, 5, 7, 9 and 11 centred below it.
fn has_wedge(counts: &[Vec<u32>]) -> bool {
    let occupied = |x: i64, y: i64| {
        usize::try_from(y)
            .ok()
            .and_then(|y| counts.get(y))
            .zip(usize::try_from(x).ok())
            .and_then(|(row, x)| row.get(x))
            .is_some_and(|&count| count != 0)
    };
    counts.iter().enumerate().any(|(y, row)| {
        row.iter().enumerate().any(|(x, &count)| {
            let (x, y) = (x as i64, y as i64);
            count != 0
                && (1..=WEDGE_ROWS).all(|k| (x - k..=x + k).all(|wx| occupied(wx, y + k)))
        })
    })
}

fn parse_robots(input: &str) -> Result<Vec<Robot>> {
    let re = Regex::new(r"^p=(-?[0-9]+),(-?[0-9]+) v=(-?[0-9]+),(-?[0-9]+)$")?;
    input
        .lines()
        .map(|line| -> Result<Robot> {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| PuzzleError::malformed(line, "robot"))?;
            Ok(Robot {
                pos: (caps[1].parse()?, caps[2].parse()?),
                vel: (caps[3].parse()?, caps[4].parse()?),
            })
        })
        .collect()
}

pub fn safety_factor(input: &str, width: i64, height: i64, ticks: i64) -> Result<u64> {
    let floor = Floor { width, height };
    let mut robots = parse_robots(input)?;
    for robot in &mut robots {
        floor.step(robot, ticks);
    }
    Ok(floor.safety_factor(&robots))
}

/// First tick whose occupancy shows the wedge, or the search cap.
fn first_wedge(floor: Floor, mut robots: Vec<Robot>) -> u64 {
    for tick in 1..=SEARCH_CAP {
        for robot in &mut robots {
            floor.step(robot, 1);
        }
        if has_wedge(&floor.occupancy(&robots)) {
            tracing::debug!(tick, "wedge found");
            return tick;
        }
    }
    SEARCH_CAP
}

#[tracing::instrument(skip(input))]
pub fn day14(input: &str, data: Data) -> Result<(u64, u64)> {
    let (width, height) = data.pick((11, 7), (101, 103));
    let part1 = safety_factor(input, width, height, 100)?;
    let part2 = first_wedge(Floor { width, height }, parse_robots(input)?);
    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::test_util::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        p=0,4 v=3,-3
        p=6,3 v=-1,-3
        p=10,3 v=-1,2
        p=2,0 v=2,-1
        p=0,0 v=1,3
        p=3,0 v=-2,-2
        p=7,6 v=-1,-3
        p=3,0 v=-1,-2
        p=9,3 v=2,3
        p=7,3 v=-1,2
        p=2,4 v=2,-3
        p=9,5 v=-3,-3
    "};

    #[test]
    fn test_day14() -> Result<()> {
        assert_eq!(execute_day_input_twice(day14, EXAMPLE)?, (12, SEARCH_CAP));
        Ok(())
    }

    #[test]
    fn test_wraparound() -> Result<()> {
        let floor = Floor {
            width: 11,
            height: 7,
        };
        let mut robot = parse_robots("p=2,4 v=2,-3")?[0];
        let expected = [(4, 1), (6, 5), (8, 2), (10, 6), (1, 3)];
        for pos in expected {
            floor.step(&mut robot, 1);
            assert_eq!(robot.pos, pos);
        }
        let mut jumped = parse_robots("p=2,4 v=2,-3")?[0];
        floor.step(&mut jumped, 5);
        assert_eq!(jumped, robot);
        Ok(())
    }

    #[test]
    fn test_middle_excluded() -> Result<()> {
        // Robots on the middle column and row count for no quadrant.
        assert_eq!(safety_factor("p=5,0 v=0,0\np=0,3 v=0,0", 11, 7, 100)?, 0);
        let corners = "p=0,0 v=0,0\np=10,0 v=0,0\np=0,6 v=0,0\np=10,6 v=0,0\np=10,6 v=0,0";
        assert_eq!(safety_factor(corners, 11, 7, 100)?, 2);
        Ok(())
    }

    #[test]
    fn test_wedge() -> Result<()> {
        let mut robots = String::new();
        robots.push_str("p=10,0 v=0,0\n");
        for k in 1..=5i64 {
            for x in 10 - k..=10 + k {
                robots.push_str(&format!("p={},{} v=0,0\n", x, k));
            }
        }
        let robots = parse_robots(&robots)?;
        let floor = Floor {
            width: 21,
            height: 8,
        };
        assert!(has_wedge(&floor.occupancy(&robots)));
        assert_eq!(first_wedge(floor, robots.clone()), 1);

        let clipped = Floor {
            width: 15,
            height: 8,
        };
        let shifted: Vec<Robot> = robots
            .iter()
            .map(|r| Robot {
                pos: (r.pos.0 - 6, r.pos.1),
                ..*r
            })
            .filter(|r| r.pos.0 >= 0)
            .collect();
        // The widest row is missing its cell at x = -1.
        assert!(!has_wedge(&clipped.occupancy(&shifted)));
        Ok(())
    }

    #[test]
    fn test_malformed_robot() {
        assert!(parse_robots("p=1,2 v=3").is_err());
    }
}
