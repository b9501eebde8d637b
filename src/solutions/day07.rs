use anyhow::{Context, Result};

use crate::{Data, PuzzleError};

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Mul,
    Concat,
}

impl Op {
    fn apply(self, acc: u64, n: u64) -> Option<u64> {
        match self {
            Op::Add => acc.checked_add(n),
            Op::Mul => acc.checked_mul(n),
            Op::Concat => {
                let digits = n.checked_ilog10().unwrap_or(0) + 1;
                acc.checked_mul(10u64.checked_pow(digits)?)?.checked_add(n)
            }
        }
    }
}

/// Operators are applied left to right starting from an accumulator of 0. Every operator is
/// non-decreasing, so a branch is dropped once it passes the target.
fn can_produce(target: u64, acc: u64, numbers: &[u64], ops: &[Op]) -> bool {
    if acc > target {
        return false;
    }
    let Some((&first, rest)) = numbers.split_first() else {
        return acc == target;
    };
    ops.iter().any(|op| {
        op.apply(acc, first)
            .is_some_and(|next| can_produce(target, next, rest, ops))
    })
}

#[tracing::instrument(skip(input))]
pub fn day7(input: &str, _data: Data) -> Result<(u64, u64)> {
    let mut part1 = 0;
    let mut part2 = 0;
    for line in input.lines() {
        let (target, numbers) = line
            .split_once(':')
            .ok_or_else(|| PuzzleError::malformed(line, "equation"))?;
        let target: u64 = target.parse().with_context(|| format!("bad target in {:?}", line))?;
        let numbers = numbers
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()
            .with_context(|| format!("bad operand in {:?}", line))?;

        if can_produce(target, 0, &numbers, &[Op::Add, Op::Mul]) {
            part1 += target;
            part2 += target;
        } else if can_produce(target, 0, &numbers, &[Op::Add, Op::Mul, Op::Concat]) {
            part2 += target;
        }
    }
    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::test_util::*;

    use indoc::indoc;

    #[test]
    fn test_day7() -> Result<()> {
        let example = indoc! {"
            190: 10 19
            3267: 81 40 27
            83: 17 5
            156: 15 6
            7290: 6 8 6 15
            161011: 16 10 13
            192: 17 8 14
            21037: 9 7 18 13
            292: 11 6 16 20
        "};
        assert_eq!(execute_day_input_twice(day7, example)?, (3749, 11387));
        Ok(())
    }

    #[test]
    fn test_day7_unsatisfiable() -> Result<()> {
        assert_eq!(execute_day_input(day7, "100: 1 2 3")?, (0, 0));
        assert_eq!(execute_day_input(day7, "5:")?, (0, 0));
        assert_eq!(execute_day_input(day7, "0:")?, (0, 0));
        assert_eq!(
            execute_day_input(day7, "18446744073709551615: 18446744073709551615 10")?,
            (0, 0)
        );
        Ok(())
    }

    #[test]
    fn test_concat() {
        assert_eq!(Op::Concat.apply(12, 345), Some(12345));
        assert_eq!(Op::Concat.apply(0, 7), Some(7));
        assert_eq!(Op::Concat.apply(5, 0), Some(50));
        assert_eq!(Op::Concat.apply(u64::MAX, 1), None);
    }
}
