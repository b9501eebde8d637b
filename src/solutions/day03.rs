use anyhow::Result;
use regex::Regex;

use crate::Data;

#[tracing::instrument(skip(input))]
pub fn day3(input: &str, _data: Data) -> Result<(u64, u64)> {
    let re = Regex::new(r"mul\(([0-9]{1,3}),([0-9]{1,3})\)|do\(\)|don't\(\)")?;

    let mut part1 = 0;
    let mut part2 = 0;
    let mut enabled = true;
    for caps in re.captures_iter(input) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ => {
                let product = caps[1].parse::<u64>()? * caps[2].parse::<u64>()?;
                part1 += product;
                if enabled {
                    part2 += product;
                }
            }
        }
    }

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::test_util::*;

    #[test]
    fn test_day3() -> Result<()> {
        let example_part1 =
            "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        let example_part2 =
            "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(execute_day_input_twice(day3, example_part1)?.0, 161);
        assert_eq!(execute_day_input_twice(day3, example_part2)?, (161, 48));
        Ok(())
    }

    #[test]
    fn test_day3_operands() -> Result<()> {
        assert_eq!(
            execute_day_input(day3, "mul(1234,2)mul( 2,3)mul(2,3 )")?,
            (0, 0)
        );
        assert_eq!(
            execute_day_input(day3, "mul(999,1)don't()do()mul(2,2)")?,
            (1003, 1003)
        );
        assert_eq!(
            execute_day_input(day3, "don't()mul(2,2)don't()mul(3,3)")?,
            (13, 0)
        );
        assert_eq!(execute_day_input(day3, "mul(2,3)mul(\u{0663},2)")?, (6, 6));
        Ok(())
    }
}
