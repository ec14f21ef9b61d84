//! Gambit CLI - play runs, inspect generated stages and shops, sweep balance.

// Allow print in the CLI binary, unwrap in its tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Gambit - a deterministic roguelike chess run engine
#[derive(Parser, Debug)]
#[command(name = "gambit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a run interactively; black replies with random legal moves
    Play {
        /// Run seed (default: from config, else random)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Run configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Army slots (overrides config)
        #[arg(long)]
        slots: Option<usize>,

        /// Interest cap (overrides config)
        #[arg(long)]
        interest_cap: Option<u32>,
    },

    /// Print the generated stage for a seed, round and army
    Stage {
        /// Run seed
        #[arg(short, long, default_value = "42")]
        seed: u32,

        /// Round number
        #[arg(short, long, default_value = "1")]
        round: u32,

        /// Army as piece letters, e.g. "PNQ"
        #[arg(short, long, default_value = "")]
        army: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Print the shop offered after winning a round
    Shop {
        /// Run seed
        #[arg(short, long, default_value = "42")]
        seed: u32,

        /// Round number
        #[arg(short, long, default_value = "1")]
        round: u32,

        /// Show the reroll shop instead of the victory shop
        #[arg(long)]
        reroll: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Generate many stages and aggregate budget statistics per round
    Sweep {
        /// Number of seeds (default: 1000)
        #[arg(short = 'n', long, default_value = "1000")]
        seeds: u32,

        /// First seed (increments for each sample)
        #[arg(short, long, default_value = "0")]
        seed: u32,

        /// Rounds per seed (default: 10)
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// Army as piece letters, e.g. "PNQ"
        #[arg(short, long, default_value = "")]
        army: String,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SweepFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "gambit=warn",
        1 => "gambit=debug",
        _ => "gambit=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Play {
            seed,
            config,
            slots,
            interest_cap,
        } => cli::play::execute(seed, config, slots, interest_cap),

        Commands::Stage {
            seed,
            round,
            army,
            format,
        } => cli::stage::execute(seed, round, &army, format),

        Commands::Shop {
            seed,
            round,
            reroll,
            format,
        } => cli::shop::execute(seed, round, reroll, format),

        Commands::Sweep {
            seeds,
            seed,
            rounds,
            army,
            threads,
            format,
            progress,
        } => cli::sweep::execute(seeds, seed, rounds, &army, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
