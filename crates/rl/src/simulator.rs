//! # Cart-pole Simulator
//!
//! Binds a [`physics::CartPole`] to the platform's [`Simulator`] interface.
//! Each `simulate` call decodes the action, integrates one step, then
//! applies the iteration cap on top of the physical bounds check.

use physics::{CartPole, CartPoleConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn, Span};

use crate::env::{EpisodeEnd, Simulator, StepOutcome};
use crate::error::SimError;
use crate::transform::{decode_action, encode_state, is_terminal, reward, BrainAction, BrainState};

/// Default episode length cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Steps after which an episode is forced to end.
    pub max_iterations: u32,
    pub physics: CartPoleConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_ITERATIONS, physics: CartPoleConfig::default() }
    }
}

impl SimulatorConfig {
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for a zero iteration cap and
    /// [`SimError::Physics`] for bad physical constants.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.max_iterations == 0 {
            return Err(SimError::InvalidConfig("max_iterations must be at least 1"));
        }
        self.physics.validate()?;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Finished(EpisodeEnd),
}

/// Cart-pole simulator driven by an external run loop.
#[derive(Debug)]
pub struct CartpoleSimulator {
    model: CartPole,
    max_iterations: u32,
    episode_count: u64,
    iteration_count: u32,
    phase: Phase,
    span: Span,
}

impl CartpoleSimulator {
    /// Build a simulator from `config`. With `seed` the reset sequence is
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: SimulatorConfig, seed: Option<u64>) -> Result<Self, SimError> {
        config.validate()?;
        let model = match seed {
            Some(seed) => CartPole::with_seed(config.physics, seed)?,
            None => CartPole::new(config.physics)?,
        };
        Self::from_model(model, config.max_iterations)
    }

    /// Wrap an existing model.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if `max_iterations` is zero.
    pub fn from_model(model: CartPole, max_iterations: u32) -> Result<Self, SimError> {
        if max_iterations == 0 {
            return Err(SimError::InvalidConfig("max_iterations must be at least 1"));
        }
        Ok(Self {
            model,
            max_iterations,
            episode_count: 0,
            iteration_count: 0,
            phase: Phase::Idle,
            span: info_span!("simulator", name = "CartpoleSimulator"),
        })
    }

    /// Log every episode of this simulator under `span` instead of the
    /// default one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn model(&self) -> &CartPole {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut CartPole {
        &mut self.model
    }

    /// Number of `simulate` calls in the current episode.
    #[must_use]
    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Simulator for CartpoleSimulator {
    fn episode_start(&mut self) -> Result<BrainState, SimError> {
        let _enter = self.span.enter();
        self.episode_count += 1;
        info!("Episode {} Starting", self.episode_count);

        self.model.reset();
        self.iteration_count = 0;
        self.phase = Phase::Running;
        Ok(encode_state(&self.model.state()))
    }

    fn simulate(&mut self, action: &BrainAction) -> Result<StepOutcome, SimError> {
        let _enter = self.span.enter();
        match self.phase {
            Phase::Running => {}
            Phase::Idle => {
                warn!("simulate called before the first episode_start");
                return Err(SimError::NotStarted);
            }
            Phase::Finished(_) => {
                warn!(episode = self.episode_count, "simulate called on a finished episode");
                return Err(SimError::EpisodeFinished {
                    episode: self.episode_count,
                    iteration: self.iteration_count,
                });
            }
        }

        let direction = decode_action(action);
        self.model.step(direction)?;
        self.iteration_count += 1;

        let physical_state = self.model.state();
        // Leaving the bounds on the capped step still counts as a failure.
        let end = if is_terminal(&physical_state) {
            Some(EpisodeEnd::Failure)
        } else if self.iteration_count >= self.max_iterations {
            Some(EpisodeEnd::IterationCap)
        } else {
            None
        };
        let terminal = end.is_some();
        let outcome = StepOutcome {
            state: encode_state(&physical_state),
            reward: reward(&physical_state, terminal),
            terminal,
        };
        debug!(
            iteration = self.iteration_count,
            ?direction,
            reward = outcome.reward,
            terminal,
            "step"
        );

        if let Some(end) = end {
            self.phase = Phase::Finished(end);
        }
        Ok(outcome)
    }

    fn episode_count(&self) -> u64 {
        self.episode_count
    }

    fn episode_end(&self) -> Option<EpisodeEnd> {
        match self.phase {
            Phase::Finished(end) => Some(end),
            Phase::Idle | Phase::Running => None,
        }
    }
}
