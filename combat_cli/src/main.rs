//! combat - run and inspect combat simulations from the command line
//!
//! Requests are JSON (or TOML when the file ends in `.toml`) holding a
//! `player`, an `opponent` and an optional `seed`. Logs go to stderr;
//! results go to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use combat_core::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "combat")]
#[command(about = "Deterministic turn-based combat simulator")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one combat and print its log
    Simulate {
        /// Request file (JSON, or TOML by extension); `-` reads JSON from stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Override the request's seed
        #[arg(long)]
        seed: Option<u64>,

        /// Constants file (TOML); defaults apply when omitted
        #[arg(long, short = 'c')]
        constants: Option<PathBuf>,

        /// Pretty-print the JSON log
        #[arg(long)]
        pretty: bool,

        /// Print per-turn summary lines instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Simulate the same matchup over a range of seeds
    Batch {
        /// Request file (JSON, or TOML by extension); its seed is ignored
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Number of simulations
        #[arg(long, short = 'n', default_value_t = 1000)]
        runs: u32,

        /// First seed; run k uses seed_start + k
        #[arg(long, default_value_t = 0)]
        seed_start: u64,

        /// Constants file (TOML); defaults apply when omitted
        #[arg(long, short = 'c')]
        constants: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List accepted character classes
    Classes,

    /// List accepted elements
    Elements,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Simulate {
            input,
            seed,
            constants,
            pretty,
            summary,
        } => {
            let mut request = read_request(&input)?;
            if seed.is_some() {
                request.seed = seed;
            }
            let constants = read_constants(constants.as_deref())?;
            tracing::debug!(input = %input.display(), seed = ?request.seed, "simulating request");

            let log = simulate_request(&request, &constants)?;
            if summary {
                println!("{}", log.summary());
            } else if pretty {
                println!("{}", log.to_json_pretty()?);
            } else {
                println!("{}", log.to_json()?);
            }
        }

        Command::Batch {
            input,
            runs,
            seed_start,
            constants,
            json,
        } => {
            let request = read_request(&input)?;
            let constants = read_constants(constants.as_deref())?;
            constants.validate()?;
            let (player, opponent) = request.validate()?;

            let seeds: Vec<u64> = (0..u64::from(runs))
                .map(|k| seed_start.wrapping_add(k))
                .collect();
            tracing::debug!(
                runs,
                seed_start,
                player = %player.id,
                opponent = %opponent.id,
                "starting batch"
            );
            let simulator = Simulator::with_constants(constants);
            let summary = simulate_batch(&simulator, &player, &opponent, &seeds);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} vs {}", player.name, opponent.name);
                println!("{}", summary.summary());
            }
        }

        Command::Classes => {
            for class in CharacterClass::all() {
                println!("{}", class);
            }
        }

        Command::Elements => {
            for element in Element::all() {
                println!("{}", element);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_request(path: &Path) -> Result<CombatRequest> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read request from stdin")?;
        return Ok(CombatRequest::from_json(&content)?);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let request = if is_toml {
        CombatRequest::from_toml(&content)
    } else {
        CombatRequest::from_json(&content)
    };

    request.with_context(|| format!("Invalid request in {}", path.display()))
}

fn read_constants(path: Option<&Path>) -> Result<CombatConstants> {
    match path {
        Some(path) => load_constants(path)
            .with_context(|| format!("Failed to load constants from {}", path.display())),
        None => Ok(CombatConstants::default()),
    }
}
