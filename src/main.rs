//! Lottery simulator CLI.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                              # 10,000 players, 6 from 1..=49
//!   cargo run -- -p 1000000 --seed 42      # Reproducible million-player run
//!   cargo run -- --max 59 -n 5             # 5 runs of a 6/59 lottery
//!   cargo run -- --config lotto.json       # Parameters from a JSON file

use anyhow::Context;
use clap::Parser;
use lottery_sim::build_info;
use lottery_sim::simulator::{combined_text, format_thousands, run_simulations, SimConfig};
use lottery_sim::Rules;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lottery-sim")]
#[command(about = "Estimate lottery match probabilities by simulation")]
#[command(version)]
struct Cli {
    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lowest ball number
    #[arg(long)]
    min: Option<u32>,

    /// Highest ball number
    #[arg(long)]
    max: Option<u32>,

    /// Numbers per ticket and per draw
    #[arg(short = 'k', long)]
    pick: Option<u32>,

    /// Players per run
    #[arg(short, long)]
    players: Option<u64>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Independent runs, each with its own draw
    #[arg(short = 'n', long)]
    runs: Option<u32>,

    /// Per-run progress and debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SimConfig::from_json(&json)?
        }
        None => SimConfig::default(),
    };

    let base = config.rules;
    config.rules = Rules::new(
        cli.min.unwrap_or(base.min_number()),
        cli.max.unwrap_or(base.max_number()),
        cli.pick.unwrap_or(base.required_selection_count()),
    );
    if let Some(players) = cli.players {
        config.player_count = players;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(runs) = cli.runs {
        config.runs = runs;
    }
    if cli.verbose {
        config.verbosity = 2;
    } else if cli.quiet {
        config.verbosity = 0;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lottery_sim={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_banner(out: &mut impl Write, config: &SimConfig) -> io::Result<()> {
    writeln!(out, "Lottery Simulator {}", build_info::version_line())?;
    writeln!(out)?;
    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  Numbers:        {} from {}..={}",
        config.rules.required_selection_count(),
        config.rules.min_number(),
        config.rules.max_number()
    )?;
    writeln!(
        out,
        "  Players:        {}",
        format_thousands(config.player_count)
    )?;
    writeln!(out, "  Runs:           {}", config.runs)?;
    if let Some(seed) = config.seed {
        writeln!(out, "  Seed:           {}", seed)?;
    }
    writeln!(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(config.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.verbosity >= 1 {
        print_banner(&mut out, &config)?;
    }

    let results = run_simulations(&config)?;
    tracing::info!(runs = results.len(), "simulation finished");

    for (idx, result) in results.iter().enumerate() {
        if results.len() > 1 {
            writeln!(out, "── RUN {} ──", idx + 1)?;
        }
        result.write_summary(&mut out)?;
    }

    if results.len() > 1 {
        writeln!(out, "── COMBINED ──")?;
        out.write_all(combined_text(&results).as_bytes())?;
    }

    Ok(())
}
