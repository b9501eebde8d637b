use anyhow::Result;
use num::{BigInt, BigRational, ToPrimitive, Zero};
use regex::Regex;

use crate::{Data, PuzzleError};

const A_COST: u64 = 3;
const B_COST: u64 = 1;
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    fn parse_all(input: &str) -> Result<Vec<Machine>> {
        let numbers = Regex::new(r"[0-9]+")?;
        input
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(|block| -> Result<Machine> {
                let n = numbers
                    .find_iter(block)
                    .map(|m| m.as_str().parse::<i64>())
                    .collect::<Result<Vec<_>, _>>()?;
                let &[ax, ay, bx, by, px, py] = n.as_slice() else {
                    return Err(PuzzleError::malformed(block, "claw machine").into());
                };
                Ok(Machine {
                    a: (ax, ay),
                    b: (bx, by),
                    prize: (px, py),
                })
            })
            .collect()
    }

    fn cost(a: i64, b: i64) -> u64 {
        a as u64 * A_COST + b as u64 * B_COST
    }

    /// Cheapest way to the prize with at most `limit` presses per button.
    fn cheapest_bounded(&self, limit: i64) -> Option<u64> {
        (0..=limit)
            .flat_map(|a| (0..=limit).map(move |b| (a, b)))
            .filter(|&(a, b)| {
                a * self.a.0 + b * self.b.0 == self.prize.0
                    && a * self.a.1 + b * self.b.1 == self.prize.1
            })
            .map(|(a, b)| Self::cost(a, b))
            .min()
    }

    /// Intersects the line of A presses from the origin with the line of B presses leading
    /// into the prize. Only a unique, integral, in-bounds intersection counts.
    fn cheapest_exact(&self) -> Option<u64> {
        let r = |v: i64| BigRational::from_integer(BigInt::from(v));
        let (ax, ay) = (r(self.a.0), r(self.a.1));
        let (bx, by) = (r(self.b.0), r(self.b.1));
        let (px, py) = (r(self.prize.0), r(self.prize.1));
        if ax.is_zero() || bx.is_zero() {
            return None;
        }

        let slope_a = &ay / &ax;
        let slope_b = &by / &bx;
        if slope_a == slope_b {
            return None;
        }
        let intercept_b = &py - &slope_b * &px;
        let ix = &intercept_b / (&slope_a - &slope_b);
        let iy = &slope_b * &ix + &intercept_b;
        let zero = BigRational::zero();
        if ix < zero || ix > px || iy < zero || iy > py {
            return None;
        }

        let presses_a = &ix / &ax;
        let presses_b = (&px - &ax * &presses_a) / &bx;
        if !presses_a.is_integer() || !presses_b.is_integer() {
            return None;
        }
        let a = presses_a.to_integer().to_i64()?;
        let b = presses_b.to_integer().to_i64()?;
        Some(Self::cost(a, b))
    }

    fn far_away(self) -> Self {
        Machine {
            prize: (self.prize.0 + PRIZE_OFFSET, self.prize.1 + PRIZE_OFFSET),
            ..self
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn day13(input: &str, _data: Data) -> Result<(u64, u64)> {
    let machines = Machine::parse_all(input)?;

    let part1: u64 = machines.iter().filter_map(|m| m.cheapest_bounded(100)).sum();
    let winnable: Vec<u64> = machines
        .iter()
        .filter_map(|m| m.far_away().cheapest_exact())
        .collect();
    tracing::debug!(
        machines = machines.len(),
        winnable = winnable.len(),
        "claw machines"
    );
    Ok((part1, winnable.iter().sum::<u64>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::test_util::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Button A: X+94, Y+34
        Button B: X+22, Y+67
        Prize: X=8400, Y=5400

        Button A: X+26, Y+66
        Button B: X+67, Y+21
        Prize: X=12748, Y=12176

        Button A: X+17, Y+86
        Button B: X+84, Y+37
        Prize: X=7870, Y=6450

        Button A: X+69, Y+23
        Button B: X+27, Y+71
        Prize: X=18641, Y=10279
    "};

    #[test]
    fn test_day13() -> Result<()> {
        assert_eq!(execute_day_input_twice(day13, EXAMPLE)?, (480, 875318608908));
        Ok(())
    }

    #[test]
    fn test_exact_matches_bounded() -> Result<()> {
        let machines = Machine::parse_all(EXAMPLE)?;
        let exact: Vec<_> = machines.iter().map(Machine::cheapest_exact).collect();
        assert_eq!(exact, [Some(280), None, Some(200), None]);
        let bounded: Vec<_> = machines.iter().map(|m| m.cheapest_bounded(100)).collect();
        assert_eq!(bounded, exact);
        Ok(())
    }

    #[test]
    fn test_degenerate_machines() -> Result<()> {
        let parallel = Machine {
            a: (1, 1),
            b: (2, 2),
            prize: (10, 10),
        };
        assert_eq!(parallel.cheapest_exact(), None);
        assert_eq!(parallel.cheapest_bounded(100), Some(5));

        let zero = Machine {
            a: (0, 1),
            b: (1, 0),
            prize: (3, 4),
        };
        assert_eq!(zero.cheapest_exact(), None);

        assert!(Machine::parse_all("Button A: X+1, Y+2").is_err());
        assert_eq!(execute_day_input(day13, "")?, (0, 0));
        Ok(())
    }

    #[test]
    fn test_ascii_digits_only() -> Result<()> {
        let machines = Machine::parse_all(indoc! {"
            Button A\u{0663}: X+94, Y+34
            Button B: X+22, Y+67
            Prize: X=8400, Y=5400
        "})?;
        assert_eq!(
            machines,
            [Machine {
                a: (94, 34),
                b: (22, 67),
                prize: (8400, 5400),
            }]
        );
        Ok(())
    }
}
