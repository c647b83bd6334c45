//! Randomize CLI - Seeded Draws from the Command Line
//!
//! This is the operational entry point for the infra_random randomizer. It
//! makes a configured run seed observable: every draw printed here is the
//! draw a heuristic seeded the same way would see.
//!
//! # Commands
//!
//! - `randomize coin` - Flip fair coins
//! - `randomize int --low <L> --high <H>` - Uniform integers in `[L, H]`
//! - `randomize float --low <L> --high <H>` - Uniform reals in `[L, H)`
//! - `randomize normal --mean <M> --std-dev <S>` - Normal samples
//! - `randomize seeds` - Fresh seeds for worker generators
//! - `randomize shuffle <ITEMS>...` - Shuffle a list in place
//!
//! # Configuration
//!
//! The seed is taken from `--seed`, then `RANDOMIZE_SEED`, then the `seed`
//! key of the configuration file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use infra_random::config::RandomizeConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Seeded random draws for reproducing randomised heuristics
#[derive(Parser)]
#[command(name = "randomize")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the generator (overrides configuration)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flip fair coins
    Coin {
        /// Number of flips
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Draw integers uniformly from [low, high]
    Int {
        /// Inclusive lower bound
        #[arg(long, allow_negative_numbers = true)]
        low: i32,

        /// Inclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        high: i32,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Draw reals uniformly from [low, high)
    Float {
        /// Inclusive lower bound
        #[arg(long, allow_negative_numbers = true)]
        low: f64,

        /// Exclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        high: f64,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Draw normally distributed reals
    Normal {
        /// Mean of the distribution
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation of the distribution
        #[arg(long, default_value = "1.0")]
        std_dev: f64,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Draw fresh seeds for worker generators
    Seeds {
        /// Number of seeds (defaults to the configured worker count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Shuffle a list of items
    Shuffle {
        /// Items to shuffle
        #[arg(required = true)]
        items: Vec<String>,

        /// First position of the shuffled range
        #[arg(long)]
        start: Option<usize>,

        /// One past the last position of the shuffled range
        #[arg(long)]
        end: Option<usize>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = RandomizeConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    info!(seed = ?config.seed, workers = config.workers, "Configuration loaded");

    let mut rng = config.build_randomizer();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Coin { count } => commands::draw::coin(&mut rng, count, &mut out)?,
        Commands::Int { low, high, count } => {
            commands::draw::int(&mut rng, low, high, count, &mut out)?
        }
        Commands::Float { low, high, count } => {
            commands::draw::float(&mut rng, low, high, count, &mut out)?
        }
        Commands::Normal {
            mean,
            std_dev,
            count,
        } => commands::draw::normal(&mut rng, mean, std_dev, count, &mut out)?,
        Commands::Seeds { count } => {
            commands::draw::seeds(&mut rng, count.unwrap_or(config.workers), &mut out)?
        }
        Commands::Shuffle { items, start, end } => {
            commands::shuffle::run(&mut rng, items, start, end, &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}
