//! Clubsim CLI
//!
//! Runs match simulations from request JSON files, for backend smoke
//! tests and balance tuning runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use clubsim_core::{simulate_batch, simulate_match_json, MatchRequest};

#[derive(Parser)]
#[command(name = "clubsim")]
#[command(about = "Simulate matches from request JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one match from a MatchRequest JSON file
    Simulate {
        /// Input request JSON file path
        #[arg(long)]
        request: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pretty-print the response JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Run one fixture across a seed range and print the score table
    Sweep {
        /// Input request JSON file path (its seed field is ignored)
        #[arg(long)]
        request: PathBuf,

        /// Number of seeds to run, starting at 0
        #[arg(long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..))]
        seeds: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { request, out, pretty } => {
            let request_json = std::fs::read_to_string(&request)
                .with_context(|| format!("reading {}", request.display()))?;
            let response = simulate_match_json(&request_json)?;
            let output = if pretty {
                let value: serde_json::Value = serde_json::from_str(&response)?;
                serde_json::to_string_pretty(&value)?
            } else {
                response
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, output)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("response written to {}", path.display());
                }
                None => println!("{output}"),
            }
        }
        Commands::Sweep { request, seeds } => {
            let request_json = std::fs::read_to_string(&request)
                .with_context(|| format!("reading {}", request.display()))?;
            let parsed: MatchRequest = serde_json::from_str(&request_json)?;
            let seed_list: Vec<u64> = (0..seeds).collect();
            let results = simulate_batch(
                &parsed.home_team,
                &parsed.away_team,
                parsed.config,
                &seed_list,
            )?;
            let mut home_total = 0u64;
            let mut away_total = 0u64;
            for (seed, result) in seed_list.iter().zip(&results) {
                println!("seed {:>6}: {} - {}", seed, result.score.home, result.score.away);
                home_total += u64::from(result.score.home);
                away_total += u64::from(result.score.away);
            }
            println!(
                "mean over {} seeds: {:.2} - {:.2}",
                seeds,
                home_total as f64 / seeds as f64,
                away_total as f64 / seeds as f64,
            );
        }
    }
    Ok(())
}
