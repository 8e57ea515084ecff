//! Local run loop standing in for the platform's `run()` driver.

use serde::Serialize;
use tracing::info;

use crate::env::{EpisodeEnd, Simulator, StepOutcome};
use crate::error::SimError;
use crate::policy::Policy;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: u64,
    pub steps: u32,
    pub total_reward: f32,
    pub end: EpisodeEnd,
}

/// Run one episode of `sim` to completion, choosing actions with `policy`.
///
/// `on_step` sees every outcome in order, including the terminal one. A
/// simulator that reports a terminal step without an [`EpisodeEnd`] is
/// treated as having failed.
///
/// # Errors
///
/// Propagates any [`SimError`] raised by the simulator.
pub fn run_episode_with<S, P, F>(
    sim: &mut S,
    policy: &mut P,
    mut on_step: F,
) -> Result<EpisodeSummary, SimError>
where
    S: Simulator + ?Sized,
    P: Policy + ?Sized,
    F: FnMut(&StepOutcome),
{
    let mut state = sim.episode_start()?;
    let mut total_reward = 0.0;
    let mut steps = 0_u32;

    loop {
        let action = policy.act(&state);
        let outcome = sim.simulate(&action)?;
        steps += 1;
        on_step(&outcome);
        total_reward += outcome.reward;
        state = outcome.state;
        if outcome.terminal {
            break;
        }
    }

    let summary = EpisodeSummary {
        episode: sim.episode_count(),
        steps,
        total_reward,
        end: sim.episode_end().unwrap_or(EpisodeEnd::Failure),
    };
    info!(
        episode = summary.episode,
        steps = summary.steps,
        total_reward = summary.total_reward,
        end = ?summary.end,
        "Episode finished"
    );
    Ok(summary)
}

/// [`run_episode_with`] without a per-step observer.
///
/// # Errors
///
/// Propagates any [`SimError`] raised by the simulator.
pub fn run_episode<S, P>(sim: &mut S, policy: &mut P) -> Result<EpisodeSummary, SimError>
where
    S: Simulator + ?Sized,
    P: Policy + ?Sized,
{
    run_episode_with(sim, policy, |_| {})
}
