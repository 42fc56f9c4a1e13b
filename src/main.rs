use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use aoc2025::{InputKind, Solution, ALL_SOLUTIONS};

/// Advent of Code 2025 solutions
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct RunConfig {
    /// Read `inputs/<day>_example.txt` instead of `inputs/<day>.txt`
    #[arg(short, long)]
    example: bool,

    /// Day to run, may be repeated; every day if omitted
    #[arg(short, long, value_parser = parse_day)]
    day: Vec<usize>,
}

fn parse_day(s: &str) -> Result<usize, String> {
    let day: usize = s.parse().map_err(|_| format!("invalid day {:?}", s))?;
    if ALL_SOLUTIONS.iter().any(|&(n, _)| n == day) {
        Ok(day)
    } else {
        Err(format!("no solution for day {}", day))
    }
}

impl RunConfig {
    fn input(&self) -> InputKind {
        if self.example {
            InputKind::Example
        } else {
            InputKind::Real
        }
    }

    fn wants(&self, day: usize) -> bool {
        self.day.is_empty() || self.day.contains(&day)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = RunConfig::parse();
    let total = run(&cfg, &ALL_SOLUTIONS)?;
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

/// Runs every selected day even if an earlier one fails; fails afterwards if any did.
fn run(cfg: &RunConfig, solutions: &[(usize, Solution)]) -> Result<Duration> {
    let mut total = Duration::default();
    let mut failed = Vec::new();
    for &(n, day) in solutions {
        if !cfg.wants(n) {
            continue;
        }
        match execute_day(n, day, cfg.input()) {
            Ok(elapsed) => total += elapsed,
            Err(err) => {
                tracing::error!(day = n, "{:#}", err);
                println!("---------------------");
                failed.push(n);
            }
        }
    }
    if !failed.is_empty() {
        bail!("failed days: {:?}", failed);
    }
    Ok(total)
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_day<S: Display, T: Display>(
    n: usize,
    f: fn(&str) -> Result<(S, T)>,
    input_kind: InputKind,
) -> Result<Duration> {
    println!("Day {}:", n);
    let input = input_kind.load(n)?;

    let start = Instant::now();
    let (part1, part2) = f(&input).with_context(|| format!("day {} failed", n))?;
    let elapsed = start.elapsed();

    println!("  Part 1: {}", part1);
    println!("  Part 2: {}", part2);
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
