use anyhow::{Context, Result};
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::Data;

/// Number of ways `design` splits into towels. Suffixes that cannot be built are cached as 0.
fn arrangements<'a>(design: &'a str, towels: &[&str], cache: &mut FxHashMap<&'a str, u64>) -> u64 {
    if design.is_empty() {
        return 1;
    }
    if let Some(&count) = cache.get(design) {
        return count;
    }
    let count = towels
        .iter()
        .filter_map(|towel| design.strip_prefix(towel))
        .map(|rest| arrangements(rest, towels, cache))
        .sum();
    cache.insert(design, count);
    count
}

#[tracing::instrument(skip(input))]
pub fn day19(input: &str, _data: Data) -> Result<(u64, u64)> {
    let (towels, designs) = input
        .split_once("\n\n")
        .context("missing blank line between towels and designs")?;
    let towels: Vec<&str> = towels
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    let tiling = Regex::new(&format!(
        "^(?:{})+$",
        towels.iter().map(|t| regex::escape(t)).join("|")
    ))?;

    let mut cache = FxHashMap::default();
    let mut possible = 0;
    let mut ways = 0;
    for design in designs.lines().map(str::trim).filter(|d| !d.is_empty()) {
        if !tiling.is_match(design) {
            continue;
        }
        possible += 1;
        ways += arrangements(design, &towels, &mut cache);
    }
    Ok((possible, ways))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::test_util::*;

    use indoc::indoc;

    #[test]
    fn test_day19() -> Result<()> {
        let example = indoc! {"
            r, wr, b, g, bwu, rb, gb, br

            brwrr
            bggr
            gbbr
            rrbgbr
            ubwu
            bwurrg
            brgr
            bbrgwb
        "};
        assert_eq!(execute_day_input_twice(day19, example)?, (6, 16));
        Ok(())
    }

    #[test]
    fn test_arrangements() {
        let towels = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        let mut cache = FxHashMap::default();
        assert_eq!(arrangements("gbbr", &towels, &mut cache), 4);
        assert_eq!(arrangements("rrbgbr", &towels, &mut cache), 6);
        assert_eq!(arrangements("ubwu", &towels, &mut cache), 0);
        assert_eq!(cache.get("ubwu"), Some(&0));
        assert_eq!(arrangements("", &towels, &mut cache), 1);
    }

    #[test]
    fn test_day19_anchoring() -> Result<()> {
        // A design only counts if the towels cover all of it.
        assert_eq!(execute_day_input(day19, "ab, c\n\nxabc\nabcx\nabcab\nc")?, (2, 2));
        // Towels containing regex metacharacters are matched literally.
        assert_eq!(execute_day_input(day19, "a+, .\n\na+.\naa")?, (1, 1));
        Ok(())
    }
}
