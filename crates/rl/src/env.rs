use crate::error::SimError;
use crate::transform::{BrainAction, BrainState};
use serde::Serialize;

/// Why an episode stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeEnd {
    /// The cart left the track or the pole fell past the angle limit.
    Failure,
    /// The episode reached the iteration cap while still in bounds.
    IterationCap,
}

/// Result of a single [`Simulator::simulate`] call.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct StepOutcome {
    pub state: BrainState,
    pub reward: f32,
    pub terminal: bool,
}

/// Simulator interface driven by the training platform's run loop.
///
/// The platform calls [`episode_start`] once per episode and then
/// [`simulate`] once per timestep until an outcome reports `terminal`.
///
/// [`episode_start`]: Simulator::episode_start
/// [`simulate`]: Simulator::simulate
pub trait Simulator {
    /// Reset the simulation and return the initial state record.
    ///
    /// # Errors
    ///
    /// Implementations may fail if the underlying model cannot be reset.
    fn episode_start(&mut self) -> Result<BrainState, SimError>;

    /// Apply one action and advance a single timestep.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NotStarted`] or [`SimError::EpisodeFinished`] when
    /// called outside a running episode, and [`SimError::Physics`] if the
    /// model rejects the step.
    fn simulate(&mut self, action: &BrainAction) -> Result<StepOutcome, SimError>;

    /// Number of episodes started so far.
    fn episode_count(&self) -> u64;

    /// How the current episode ended, or `None` while it is still running
    /// or before the first [`episode_start`](Simulator::episode_start).
    fn episode_end(&self) -> Option<EpisodeEnd>;
}
