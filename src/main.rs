use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use race_track::generate::{random_batch, GenerateParams};
use race_track::{read_batch, write_batch, Batch, CaseReport, SolverConfig, StepLimit};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Finds the fewest steps for a car to cross a grid race track")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solves every case in a batch file.
    Solve(SolveArgs),
    /// Writes a batch of random puzzles to stdout.
    Generate(GenerateArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// The batch file to read.
    input: PathBuf,
    /// Print one JSON object per case.
    #[arg(long)]
    json: bool,
    /// The step cutoff: `cells`, `states`, or a number of steps.
    #[arg(long, default_value = "states", value_parser = parse_step_limit)]
    bound: StepLimit,
    /// Expand states even if their position and velocity were already queued.
    #[arg(long)]
    no_dedup: bool,
    /// Give up on a case after expanding this many states.
    #[arg(long)]
    max_expansions: Option<usize>,
}

#[derive(Args)]
struct GenerateArgs {
    /// The number of cases.
    #[arg(long, default_value_t = 10)]
    cases: usize,
    /// The grid width.
    #[arg(long, default_value_t = 10)]
    width: i32,
    /// The grid height.
    #[arg(long, default_value_t = 10)]
    height: i32,
    /// The number of obstacles per case.
    #[arg(long, default_value_t = 3)]
    obstacles: usize,
    /// Seed for the random number generator.
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_step_limit(value: &str) -> Result<StepLimit, String> {
    match value {
        "cells" => Ok(StepLimit::CellCount),
        "states" => Ok(StepLimit::StateSpace),
        steps => steps
            .parse()
            .map(StepLimit::Fixed)
            .map_err(|_| format!("expected `cells`, `states` or a step count, found `{steps}`")),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Solve(args) => solve(args),
        Command::Generate(args) => generate(args),
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let batch = read_batch(BufReader::new(file))
        .with_context(|| format!("Failed to read batch from {}", args.input.display()))?
        .into_iter()
        .collect::<Batch>();

    let config = SolverConfig {
        step_limit: args.bound,
        dedup: !args.no_dedup,
        max_expansions: args.max_expansions,
    };
    log::info!("Solving {} cases with {:?}", batch.len(), config);

    for (idx, CaseReport { result, .. }) in batch.solve_all(&config).into_iter().enumerate() {
        let case = idx + 1;
        if args.json {
            let line = match result {
                Ok((outcome, stats)) => serde_json::json!({
                    "case": case,
                    "steps": outcome.as_steps(),
                    "stats": stats,
                }),
                Err(err) => serde_json::json!({ "case": case, "error": err.to_string() }),
            };
            println!("{line}");
        } else {
            match result {
                Ok((outcome, _)) => println!("Case {case}: {outcome}"),
                Err(err) => println!("Case {case}: error: {err}"),
            }
        }
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let params = GenerateParams {
        width: args.width,
        height: args.height,
        obstacles: args.obstacles,
        ..Default::default()
    };
    let puzzles =
        random_batch(&mut rng, &params, args.cases).context("Failed to generate puzzles")?;
    write_batch(io::stdout().lock(), &puzzles).context("Failed to write batch")?;
    Ok(())
}
