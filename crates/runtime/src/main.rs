#![deny(clippy::all, clippy::pedantic)]
//! # Cart-pole Simulator Runtime
//!
//! Entry point for the `cartpole_sim` binary. Loads an optional JSON
//! configuration, then runs episodes of the cart-pole simulator against a
//! built-in policy and logs the results.

mod app;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Local policy used in place of a training platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Uniformly random commands.
    Random,
    /// Left and right on alternate steps.
    Alternate,
    /// Push toward the side the pole is falling.
    Balance,
}

#[derive(Parser, Debug)]
#[command(name = "cartpole_sim", about = "Run the cart-pole simulator locally")]
struct Cli {
    /// Number of episodes to run.
    #[arg(long, default_value_t = 10)]
    episodes: u64,

    /// Seed for resets and the random policy.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = PolicyKind::Balance)]
    policy: PolicyKind,

    /// JSON simulator configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every step outcome to stdout as a JSON line.
    #[arg(long)]
    emit_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let sim_config = match &cli.config {
        Some(path) => config::load(path)?,
        None => rl::SimulatorConfig::default(),
    };
    tracing::info!(max_iterations = sim_config.max_iterations, "configuration loaded");

    let options = app::RunOptions {
        episodes: cli.episodes,
        seed: cli.seed,
        policy: cli.policy,
        emit_json: cli.emit_json,
    };
    let stdout = std::io::stdout();
    app::run(sim_config, &options, &mut stdout.lock())?;
    Ok(())
}
