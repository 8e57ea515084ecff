//! # Simulator Application Logic
//!
//! Runs a fixed number of cart-pole episodes against a local policy, the way
//! the training platform would drive the simulator, and reports per-episode
//! summaries.

use std::io::Write;

use anyhow::Result;
use rl::{
    run_episode_with, AlternatePolicy, BalancePolicy, CartpoleSimulator, EpisodeEnd, Policy,
    RandomPolicy, SimulatorConfig,
};
use tracing::info_span;

use crate::PolicyKind;

/// Options for a local simulation run.
pub struct RunOptions {
    pub episodes: u64,
    pub seed: Option<u64>,
    pub policy: PolicyKind,
    pub emit_json: bool,
}

/// Totals over every episode of a run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub episodes: u64,
    pub capped: u64,
    pub mean_reward: f32,
    pub mean_steps: f32,
}

fn build_policy(kind: PolicyKind, seed: Option<u64>) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        PolicyKind::Alternate => Box::new(AlternatePolicy::default()),
        PolicyKind::Balance => Box::new(BalancePolicy::default()),
    }
}

/// Run the simulator loop.
///
/// With `emit_json` every step outcome is written to `out` as one JSON line.
///
/// # Errors
///
/// Returns any error produced by the simulator or by writing to `out`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn run(config: SimulatorConfig, options: &RunOptions, out: &mut impl Write) -> Result<RunReport> {
    let span = info_span!("simulator", name = "CartpoleSimulator", seed = ?options.seed);
    let mut sim = CartpoleSimulator::new(config, options.seed)?.with_span(span);
    let mut policy = build_policy(options.policy, options.seed);

    tracing::info!(
        "starting simulation for {} episodes with {:?} policy...",
        options.episodes,
        options.policy
    );

    let mut report = RunReport::default();
    let mut total_reward = 0.0_f64;
    let mut total_steps = 0_u64;
    let mut write_err = None;

    for _ in 0..options.episodes {
        let summary = run_episode_with(&mut sim, policy.as_mut(), |outcome| {
            if options.emit_json && write_err.is_none() {
                let line = serde_json::to_string(outcome).map_err(anyhow::Error::from);
                if let Err(e) = line.and_then(|l| writeln!(out, "{l}").map_err(Into::into)) {
                    write_err = Some(e);
                }
            }
        })?;
        if let Some(e) = write_err.take() {
            return Err(e);
        }

        report.episodes += 1;
        if summary.end == EpisodeEnd::IterationCap {
            report.capped += 1;
        }
        total_reward += f64::from(summary.total_reward);
        total_steps += u64::from(summary.steps);
    }

    if report.episodes > 0 {
        report.mean_reward = (total_reward / report.episodes as f64) as f32;
        report.mean_steps = (total_steps as f64 / report.episodes as f64) as f32;
    }

    tracing::info!(
        "Simulation finished: {} episodes, {} reached the iteration cap, mean reward {:.3}, mean steps {:.1}",
        report.episodes,
        report.capped,
        report.mean_reward,
        report.mean_steps
    );
    Ok(report)
}
