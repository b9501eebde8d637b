use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;

use aoc2024::{find_puzzle, load_input, Data, Puzzle, ALL_SOLUTIONS, DEFAULT_INPUT_DIR};

/// Runs the Advent of Code 2024 solutions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Day to run. Runs every solved day on actual data when omitted.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: Option<u8>,
    /// Part of the day to print.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
    /// Input set to run against.
    #[arg(value_enum, default_value = "actual")]
    data: Data,
    /// Directory holding one `dayNN` folder per day.
    #[arg(long, env = "AOC_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,
}

fn main() -> ExitCode {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        Ok(layer) => layer,
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();
    let result = match (cli.day, cli.part) {
        (Some(day), Some(part)) => execute_part(&cli, day, part),
        (Some(day), None) => execute_day(&cli, day, Data::Actual).map(|_| ()),
        (None, _) => execute_all(&cli),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn puzzle(day: u8) -> Result<&'static Puzzle> {
    find_puzzle(day).ok_or_else(|| anyhow!("day {} has no solution", day))
}

fn solve(puzzle: &Puzzle, input: &str, data: Data) -> Result<((u64, u64), Duration)> {
    let start = Instant::now();
    let answers = (puzzle.solve)(input, data)?;
    Ok((answers, start.elapsed()))
}

fn execute_part(cli: &Cli, day: u8, part: u8) -> Result<()> {
    let puzzle = puzzle(day)?;
    let fixture_part = (puzzle.split_fixtures && cli.data == Data::Test).then_some(part);
    let input = load_input(&cli.input_dir, day, fixture_part, cli.data)?;

    println!("Running Day {}, Part {} Solution ({})...", day, part, cli.data);
    let ((part1, part2), elapsed) = solve(puzzle, &input, cli.data)?;
    let answer = if part == 1 { part1 } else { part2 };
    println!("Day {}, Part {} Solution ({}): {}", day, part, cli.data, answer);
    println!("Execution time: {}", format_duration(elapsed));
    Ok(())
}

fn execute_day(cli: &Cli, day: u8, data: Data) -> Result<Duration> {
    let puzzle = puzzle(day)?;
    println!("Day {}:", day);
    let input = load_input(&cli.input_dir, day, None, data)?;

    let ((part1, part2), elapsed) = solve(puzzle, &input, data)?;

    println!("  Part 1: {}", part1);
    println!("  Part 2: {}", part2);
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}

fn execute_all(cli: &Cli) -> Result<()> {
    let mut total = Duration::default();
    for puzzle in &ALL_SOLUTIONS {
        total += execute_day(cli, puzzle.day, Data::Actual)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsString;

    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() -> Result<()> {
        let cli = Cli::try_parse_from(["aoc2024", "3", "2", "test"])?;
        assert_eq!((cli.day, cli.part, cli.data), (Some(3), Some(2), Data::Test));

        let cli = Cli::try_parse_from(["aoc2024", "14", "1"])?;
        assert_eq!((cli.day, cli.part, cli.data), (Some(14), Some(1), Data::Actual));

        let cli = Cli::try_parse_from(["aoc2024"])?;
        assert_eq!((cli.day, cli.part), (None, None));

        assert!(Cli::try_parse_from(["aoc2024", "26", "1"]).is_err());
        assert!(Cli::try_parse_from(["aoc2024", "1", "3"]).is_err());
        assert!(Cli::try_parse_from(["aoc2024", "1", "1", "bogus"]).is_err());
        Ok(())
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250 us");
        assert_eq!(format_duration(Duration::from_millis(42)), "42 ms");
    }

    #[test]
    fn test_execute_part() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("day03"))?;
        std::fs::write(
            dir.path().join("day03/part2-test-input.txt"),
            "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))\n",
        )?;
        let mut args: Vec<OsString> = ["aoc2024", "3", "2", "test", "--input-dir"]
            .iter()
            .map(Into::into)
            .collect();
        args.push(dir.path().into());
        let cli = Cli::try_parse_from(args)?;
        execute_part(&cli, 3, 2)?;
        // Day 3 reads per-part fixtures and there is no part 1 file here.
        assert!(execute_part(&cli, 3, 1).is_err());
        assert!(execute_part(&cli, 16, 1).is_err());
        Ok(())
    }
}
